/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests comparing [`PhoneForward`] with a naive model.
//!
//! The redirection index invariants are checked after every mutation
//! through the `unittest` feature.

#[cfg(not(miri))]
mod proptests {
    use std::collections::{BTreeMap, BTreeSet};

    use phone_forward::PhoneForward;

    /// Operations that can be performed on a [`PhoneForward`].
    ///
    /// Numbers use a reduced alphabet to make prefix collisions likely.
    #[derive(proptest_derive::Arbitrary, Debug)]
    enum Operation {
        Add(
            #[proptest(strategy = "\"[0-3]{1,4}\"")] String,
            #[proptest(strategy = "\"[0-3]{1,4}\"")] String,
        ),
        Remove(#[proptest(strategy = "\"[0-3]{1,3}\"")] String),
    }

    /// Redirections kept as a plain map from source prefix to target prefix.
    #[derive(Default)]
    struct Model {
        redirections: BTreeMap<String, String>,
    }

    impl Model {
        fn apply(&mut self, op: &Operation) {
            match op {
                Operation::Add(from, to) if from != to => {
                    self.redirections.insert(from.clone(), to.clone());
                }
                Operation::Add(..) => {}
                Operation::Remove(prefix) => {
                    self.redirections.retain(|from, _| !from.starts_with(prefix.as_str()));
                }
            }
        }

        fn get(&self, number: &str) -> String {
            self.redirections
                .iter()
                .filter(|(from, _)| number.starts_with(from.as_str()))
                .max_by_key(|(from, _)| from.len())
                .map_or_else(
                    || number.to_owned(),
                    |(from, to)| format!("{to}{}", &number[from.len()..]),
                )
        }

        fn reverse(&self, number: &str) -> Vec<String> {
            let mut found: BTreeSet<String> = self
                .redirections
                .iter()
                .filter(|(_, to)| number.starts_with(to.as_str()))
                .map(|(from, to)| format!("{from}{}", &number[to.len()..]))
                .collect();
            found.insert(number.to_owned());
            found.into_iter().collect()
        }

        fn non_trivial_count(&self, symbols: &[u8], length: usize) -> usize {
            let targets: BTreeSet<&str> = self.redirections.values().map(String::as_str).collect();
            let mut count = 0;
            let mut stack = vec![String::new()];
            while let Some(number) = stack.pop() {
                if number.len() == length {
                    let redirected = (1..=number.len()).any(|end| targets.contains(&number[..end]));
                    count += usize::from(redirected);
                    continue;
                }
                for &symbol in symbols {
                    stack.push(format!("{number}{}", symbol as char));
                }
            }
            count
        }
    }

    /// Apply `ops` to both an engine and the model.
    fn replay(ops: &[Operation]) -> (PhoneForward, Model) {
        let mut pf = PhoneForward::new();
        let mut model = Model::default();
        for op in ops {
            match op {
                Operation::Add(from, to) => {
                    let _ = pf.add(from, to);
                }
                Operation::Remove(prefix) => {
                    pf.remove(prefix);
                }
            }
            model.apply(op);
        }
        (pf, model)
    }

    fn dedup_symbols(symbols: &str) -> Vec<u8> {
        symbols
            .bytes()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    proptest::proptest! {
        #[test]
        fn prop_lookups_match_model(
            ops: Vec<Operation>,
            queries in proptest::collection::vec("[0-4]{1,6}", 1..20),
        ) {
            let (pf, model) = replay(&ops);
            assert_eq!(pf.n_redirections(), model.redirections.len());

            for query in &queries {
                assert_eq!(pf.get(query).unwrap(), [model.get(query)], "get({query:?})");
                assert_eq!(
                    pf.reverse(query).unwrap(),
                    model.reverse(query),
                    "reverse({query:?})"
                );
            }
        }

        #[test]
        fn prop_reverse_contains_number(
            ops: Vec<Operation>,
            number in "[0-3]{1,6}",
        ) {
            let (pf, _) = replay(&ops);
            let list = pf.reverse(&number).unwrap();
            assert!(list.iter().any(|candidate| candidate == number));
            assert!(list.iter().zip(list.iter().skip(1)).all(|(a, b)| a < b));
        }

        #[test]
        fn prop_non_trivial_count_matches_enumeration(
            ops: Vec<Operation>,
            symbols in "[0-4a]{0,5}",
            length in 0usize..5,
        ) {
            let (pf, model) = replay(&ops);

            let allowed: Vec<u8> = dedup_symbols(&symbols)
                .into_iter()
                .filter(u8::is_ascii_digit)
                .collect();
            let expected = if allowed.is_empty() || length == 0 {
                0
            } else {
                model.non_trivial_count(&allowed, length)
            };
            assert_eq!(pf.non_trivial_count(&symbols, length), expected);
        }
    }
}
