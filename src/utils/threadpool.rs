/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::SscError;

/// The number of threads of a worker pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Threads {
    /// As many threads as [`std::thread::available_parallelism`].
    #[default]
    Default,
    NumThreads(usize),
}

impl Threads {
    /// Returns the number of workers to use for `num_jobs` independent jobs.
    ///
    /// The result is never larger than `num_jobs`, as idle workers would only
    /// consume a sentinel, and never smaller than one.
    pub fn num_workers(self, num_jobs: usize) -> usize {
        let requested = match self {
            Self::Default => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            Self::NumThreads(num_threads) => num_threads,
        };
        requested.min(num_jobs).max(1)
    }

    /// Builds a [`rayon::ThreadPool`] with exactly `num_workers` threads.
    pub fn build(num_workers: usize) -> Result<rayon::ThreadPool, SscError> {
        Ok(rayon::ThreadPoolBuilder::new()
            .num_threads(num_workers)
            .thread_name(|index| format!("ssc-worker-{}", index))
            .build()?)
    }
}
