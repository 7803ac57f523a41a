/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Deterministic redirection sets to benchmark against.

use phone_forward::PhoneForward;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Longest prefix generated on either side of a redirection.
const MAX_PREFIX_LEN: usize = 8;

/// Length of the numbers used for lookups.
const QUERY_LEN: usize = 12;

/// A set of redirections along with numbers to look up.
///
/// The same seed always yields the same corpus, so runs can be compared.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub redirections: Vec<(String, String)>,
    pub queries: Vec<String>,
}

impl Corpus {
    /// Generate `n_redirections` redirections between random decimal
    /// prefixes, plus as many random numbers to query.
    pub fn generate(seed: u64, n_redirections: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut redirections = Vec::with_capacity(n_redirections);
        while redirections.len() < n_redirections {
            let from_len = rng.random_range(1..=MAX_PREFIX_LEN);
            let to_len = rng.random_range(1..=MAX_PREFIX_LEN);
            let from = random_number(&mut rng, from_len);
            let to = random_number(&mut rng, to_len);
            if from != to {
                redirections.push((from, to));
            }
        }

        let queries = (0..n_redirections)
            .map(|_| random_number(&mut rng, QUERY_LEN))
            .collect();

        Self {
            redirections,
            queries,
        }
    }

    /// Total number of bytes across all redirection prefixes.
    pub fn raw_size(&self) -> usize {
        self.redirections
            .iter()
            .map(|(from, to)| from.len() + to.len())
            .sum()
    }

    /// Build a [`PhoneForward`] holding every redirection of the corpus.
    ///
    /// Later redirections replace earlier ones sharing the same source.
    pub fn load(&self) -> PhoneForward {
        let mut pf = PhoneForward::new();
        for (from, to) in &self.redirections {
            pf.add(from, to)
                .expect("generated prefixes are valid and distinct");
        }
        pf
    }
}

fn random_number(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
