/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use phone_forward_bencher::Corpus;

fn main() {
    for n_redirections in [1_000, 10_000, 100_000] {
        compute_and_report_memory_usage(n_redirections);
    }
}

/// Build a trie from a generated corpus and report its memory usage to
/// stdout, alongside the size of the raw prefixes.
fn compute_and_report_memory_usage(n_redirections: usize) {
    let corpus = Corpus::generate(42, n_redirections);
    let pf = corpus.load();

    let raw_size = corpus.raw_size() as f64 / 1024. / 1024.;
    let mem_usage = pf.mem_usage() as f64 / 1024. / 1024.;

    println!("Statistics for {n_redirections} generated redirections:");
    println!("- Raw prefixes size: {raw_size:.3} MBs");
    println!("- Trie memory usage: {mem_usage:.3} MBs");
    println!("- Number of nodes: {}", pf.n_nodes());
    println!("- Number of redirections: {}", pf.n_redirections());
}
