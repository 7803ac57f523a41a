/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use phone_forward::PhoneForward;

const ALL_SYMBOLS: &str = "0123456789:;";

#[test]
fn test_no_redirections() {
    let pf = PhoneForward::new();
    assert_eq!(pf.non_trivial_count(ALL_SYMBOLS, 5), 0);
}

#[test]
fn test_degenerate_arguments() {
    let mut pf = PhoneForward::new();
    pf.add("1", "2").unwrap();

    assert_eq!(pf.non_trivial_count("12", 0), 0);
    assert_eq!(pf.non_trivial_count("", 3), 0);
    assert_eq!(pf.non_trivial_count("abc*#", 3), 0);
}

#[test]
fn test_counts_completions_of_targets() {
    let mut pf = PhoneForward::new();
    pf.add("1", "2").unwrap();

    // "2" followed by any two symbols out of {1, 2}.
    assert_eq!(pf.non_trivial_count("12", 3), 4);
    // Numbers starting with "1" are sources, not targets.
    assert_eq!(pf.non_trivial_count("1", 3), 0);
    assert_eq!(pf.non_trivial_count("2", 1), 1);
}

#[test]
fn test_ignores_foreign_and_repeated_symbols() {
    let mut pf = PhoneForward::new();
    pf.add("1", "2").unwrap();

    assert_eq!(
        pf.non_trivial_count("a2b2;;", 3),
        pf.non_trivial_count("2;", 3)
    );
    assert_eq!(pf.non_trivial_count("2;", 3), 4);
}

#[test]
fn test_target_deeper_than_length() {
    let mut pf = PhoneForward::new();
    pf.add("1", "234").unwrap();

    assert_eq!(pf.non_trivial_count("234", 2), 0);
    assert_eq!(pf.non_trivial_count("234", 3), 1);
    assert_eq!(pf.non_trivial_count("234", 4), 3);
}

#[test]
fn test_stops_at_shallowest_target() {
    let mut pf = PhoneForward::new();
    pf.add("5", "2").unwrap();
    pf.add("6", "23").unwrap();

    // Everything under "2" is counted once, "23" included.
    assert_eq!(pf.non_trivial_count("23", 3), 4);
}

#[test]
fn test_counts_every_completion_regardless_of_existing_nodes() {
    let mut pf = PhoneForward::new();
    pf.add("9", "1").unwrap();
    // Creates nodes below the target that carry no redirection.
    pf.add("1234", "8").unwrap();

    assert_eq!(pf.non_trivial_count("1234", 3), 16);
    // "1" and "8" are both targets.
    assert_eq!(pf.non_trivial_count(ALL_SYMBOLS, 2), 24);
}

#[test]
fn test_symbols_must_reach_the_target() {
    let mut pf = PhoneForward::new();
    pf.add("1", "23").unwrap();

    // "3" is not allowed, so the target "23" is never reached.
    assert_eq!(pf.non_trivial_count("12", 4), 0);
    assert_eq!(pf.non_trivial_count("123", 4), 9);
}

#[test]
fn test_removed_redirection_no_longer_counts() {
    let mut pf = PhoneForward::new();
    pf.add("1", "2").unwrap();
    pf.remove("1");

    assert_eq!(pf.non_trivial_count(ALL_SYMBOLS, 4), 0);
}

#[test]
fn test_count_wraps_around() {
    let mut pf = PhoneForward::new();
    pf.add("1", "2").unwrap();

    assert_eq!(
        pf.non_trivial_count(ALL_SYMBOLS, 100),
        12usize.wrapping_pow(99)
    );
}
