/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use phone_forward::PhoneForward;

/// Forwards to `insta::assert_debug_snapshot!`,
/// but is disabled in Miri, as snapshot testing
/// involves file I/O, which is not supported in Miri.
macro_rules! assert_debug_snapshot {
    ($($arg:tt)*) => {
        #[cfg(not(miri))]
        insta::assert_debug_snapshot!($($arg)*);
    };
}

#[test]
fn test_debug_empty() {
    let pf = PhoneForward::new();
    assert_debug_snapshot!(pf, @r###""""###);
}

#[test]
fn test_debug_redirections() {
    let mut pf = PhoneForward::new();
    pf.add("100", "200").unwrap();
    assert_debug_snapshot!(pf, @r###"
        ""
          ↳1–––"1"
                ↳0–––"10"
                      ↳0–––"100" → "200"
          ↳2–––"2"
                ↳0–––"20"
                      ↳0–––"200" ← ["100"]
        "###);

    pf.add("21", "2").unwrap();
    assert_debug_snapshot!(pf, @r###"
        ""
          ↳1–––"1"
                ↳0–––"10"
                      ↳0–––"100" → "200"
          ↳2–––"2" ← ["21"]
                ↳0–––"20"
                      ↳0–––"200" ← ["100"]
                ↳1–––"21" → "2"
        "###);

    pf.remove("1");
    assert_debug_snapshot!(pf, @r###"
        ""
          ↳1–––"1"
                ↳0–––"10"
                      ↳0–––"100"
          ↳2–––"2" ← ["21"]
                ↳0–––"20"
                      ↳0–––"200"
                ↳1–––"21" → "2"
        "###);
}

#[test]
fn test_debug_sorts_sources() {
    let mut pf = PhoneForward::new();
    pf.add(";", "0").unwrap();
    pf.add("1", "0").unwrap();
    assert_debug_snapshot!(pf, @r###"
        ""
          ↳0–––"0" ← ["1", ";"]
          ↳1–––"1" → "0"
          ↳;–––";" → "0"
        "###);
}
