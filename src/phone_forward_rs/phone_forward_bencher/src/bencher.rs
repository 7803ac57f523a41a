/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::{hint::black_box, time::Duration};

use criterion::{BatchSize, BenchmarkGroup, Criterion, measurement::Measurement};
use phone_forward::PhoneForward;

use crate::Corpus;

/// A helper struct for benchmarking operations on a [`PhoneForward`]
/// preloaded with a corpus.
pub struct OperationBencher {
    prefix: String,
    corpus: Corpus,
    pf: PhoneForward,
    measurement_times: Option<Duration>,
}

impl OperationBencher {
    /// Load `corpus` once; every group then runs against that state.
    ///
    /// `prefix` is prepended to each group label.
    pub fn new(prefix: String, corpus: Corpus, measurement_times: Option<Duration>) -> Self {
        let pf = corpus.load();
        Self {
            prefix,
            corpus,
            pf,
            measurement_times,
        }
    }

    fn benchmark_group<'c>(
        &self,
        c: &'c mut Criterion,
        label: &str,
    ) -> BenchmarkGroup<'c, criterion::measurement::WallTime> {
        let mut group = c.benchmark_group(format!("{}|{}", self.prefix, label));
        if let Some(duration) = self.measurement_times {
            group.measurement_time(duration);
        }
        group
    }

    /// Benchmark building the trie from scratch.
    pub fn load_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Load");
        load_benchmark(&mut group, &self.corpus);
        group.finish();
    }

    /// Benchmark adding `from > to` on top of the loaded corpus.
    pub fn add_group(&self, c: &mut Criterion, from: &str, to: &str, label: &str) {
        let mut group = self.benchmark_group(c, label);
        add_benchmark(&mut group, &self.pf, from, to);
        group.finish();
    }

    /// Benchmark removing every redirection under `prefix`.
    pub fn remove_group(&self, c: &mut Criterion, prefix: &str, label: &str) {
        let mut group = self.benchmark_group(c, label);
        remove_benchmark(&mut group, &self.pf, prefix);
        group.finish();
    }

    /// Benchmark forward lookups of every query number of the corpus.
    pub fn get_group(&self, c: &mut Criterion) {
        let mut group = self.benchmark_group(c, "Get");
        get_benchmark(&mut group, &self.pf, &self.corpus.queries);
        group.finish();
    }

    /// Benchmark reverse lookups of every target of the corpus.
    pub fn reverse_group(&self, c: &mut Criterion) {
        let targets: Vec<&str> = self
            .corpus
            .redirections
            .iter()
            .map(|(_, to)| to.as_str())
            .collect();
        let mut group = self.benchmark_group(c, "Reverse");
        reverse_benchmark(&mut group, &self.pf, &targets);
        group.finish();
    }

    /// Benchmark a reverse lookup of a target shared by `n_sources`
    /// redirections, independently of the loaded corpus.
    pub fn reverse_shared_target_group(&self, c: &mut Criterion, n_sources: usize) {
        let mut pf = PhoneForward::new();
        for i in 0..n_sources {
            pf.add(&format!("9{i:07}"), "0")
                .expect("generated prefixes are valid and distinct");
        }
        let mut group = self.benchmark_group(c, &format!("Reverse (shared target, {n_sources})"));
        reverse_benchmark(&mut group, &pf, &["01"]);
        group.finish();
    }

    /// Benchmark counting non-trivial numbers of length `length`.
    pub fn non_trivial_count_group(&self, c: &mut Criterion, symbols: &str, length: usize) {
        let mut group = self.benchmark_group(c, &format!("Non-trivial count (length {length})"));
        group.bench_function("Rust", |b| {
            b.iter(|| self.pf.non_trivial_count(black_box(symbols), black_box(length)))
        });
        group.finish();
    }
}

fn load_benchmark<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, corpus: &Corpus) {
    group.bench_function("Rust", |b| b.iter(|| black_box(corpus.load())));
}

fn add_benchmark<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    pf: &PhoneForward,
    from: &str,
    to: &str,
) {
    group.bench_function("Rust", |b| {
        b.iter_batched_ref(
            || pf.clone(),
            |data| data.add(black_box(from), black_box(to)).is_ok(),
            BatchSize::LargeInput,
        )
    });
}

fn remove_benchmark<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    pf: &PhoneForward,
    prefix: &str,
) {
    group.bench_function("Rust", |b| {
        b.iter_batched_ref(
            || pf.clone(),
            |data| data.remove(black_box(prefix)),
            BatchSize::LargeInput,
        )
    });
}

fn get_benchmark<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    pf: &PhoneForward,
    numbers: &[String],
) {
    group.bench_function("Rust", |b| {
        b.iter(|| {
            for number in numbers {
                let _ = black_box(pf.get(black_box(number)));
            }
        })
    });
}

fn reverse_benchmark<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    pf: &PhoneForward,
    numbers: &[&str],
) {
    group.bench_function("Rust", |b| {
        b.iter(|| {
            for number in numbers {
                let _ = black_box(pf.reverse(black_box(number)));
            }
        })
    });
}
