/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{ClosureReport, CostFormula, Thresholds, WorkerPool};
use crate::{
    algo::{adjacency::Adjacency, input::GraphInput},
    error::SscError,
    utils::Threads,
};
use dsi_progress_logger::ProgressLog;

/// Builder for [`Ssc12`].
///
/// Create a builder with [`Ssc12Builder::new`], edit parameters with its
/// methods, then call [`Ssc12Builder::build`] on it to create the [`Ssc12`]
/// as a [`Result`].
#[derive(Debug, Clone)]
pub struct Ssc12Builder<'a, G> {
    input: &'a GraphInput<G>,
    alpha: f64,
    beta: f64,
    threads: Threads,
    queue_capacity: Option<usize>,
    cost_formula: CostFormula,
}

impl<'a, G: Adjacency + Sync> Ssc12Builder<'a, G> {
    /// Creates a new builder with default parameters.
    pub fn new(input: &'a GraphInput<G>) -> Self {
        Self {
            input,
            alpha: Thresholds::DEFAULT_ALPHA,
            beta: Thresholds::DEFAULT_BETA,
            threads: Threads::Default,
            queue_capacity: None,
            cost_formula: CostFormula::default(),
        }
    }

    /// Sets α; the small-delta threshold is the number of vertices divided
    /// by α.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets β; the big-delta threshold is the number of vertices divided by
    /// β.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the number of workers. It will be reduced to the number of
    /// sources if larger.
    pub fn with_threads(mut self, threads: Threads) -> Self {
        self.threads = threads;
        self
    }

    /// Sets the capacity of the work queue. See
    /// [`WorkerPool::with_queue_capacity`].
    pub fn with_queue_capacity(mut self, queue_capacity: Option<usize>) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    pub fn with_cost_formula(mut self, cost_formula: CostFormula) -> Self {
        self.cost_formula = cost_formula;
        self
    }

    /// Builds the computation, checking the parameters.
    pub fn build(self) -> Result<Ssc12<'a, G>, SscError> {
        let thresholds = Thresholds::new(self.input.vertex_count(), self.alpha, self.beta)?;
        let pool = WorkerPool::new(self.input.graph(), thresholds)
            .with_cost_formula(self.cost_formula)
            .with_queue_capacity(self.queue_capacity);
        Ok(Ssc12 {
            pool,
            sources: self.input.sources(),
            num_workers: self.threads.num_workers(self.input.sources().len()),
        })
    }
}

/// The hybrid closure of all sources of a [`GraphInput`].
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use hybrid_ssc::prelude::*;
///
/// let graph = AdjacencyStore::from_arcs([(0, 1), (1, 2), (0, 3), (4, 5)]);
/// let input = GraphInput::from_graph(graph, no_logging![])?;
/// let ssc = Ssc12Builder::new(&input)
///     .with_threads(Threads::NumThreads(2))
///     .build()?;
/// let report = ssc.run(no_logging![])?;
/// assert_eq!(&*report.closure, &[0, 1, 2, 3, 4, 5]);
/// # Ok::<(), SscError>(())
/// ```
pub struct Ssc12<'a, G> {
    pool: WorkerPool<'a, G>,
    sources: &'a [usize],
    num_workers: usize,
}

impl<G: Adjacency + Sync> Ssc12<'_, G> {
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    pub fn thresholds(&self) -> Thresholds {
        self.pool.thresholds()
    }

    /// Computes the union of the closures of all sources.
    pub fn run(&self, pl: &mut impl ProgressLog) -> Result<ClosureReport, SscError> {
        self.pool.run(self.sources, self.num_workers, pl)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::adjacency::AdjacencyStore;
    use dsi_progress_logger::no_logging;

    #[test]
    fn test_build() -> anyhow::Result<()> {
        let graph = AdjacencyStore::from_arcs([(0, 1), (2, 3), (4, 5)]);
        let input = GraphInput::from_graph(graph, no_logging![])?;
        let ssc = Ssc12Builder::new(&input)
            .with_alpha(2.0)
            .with_beta(0.5)
            .with_threads(Threads::NumThreads(16))
            .build()?;
        assert_eq!(ssc.num_workers(), 3);
        assert_eq!(ssc.thresholds().alpha_threshold(), 3.0);
        assert_eq!(ssc.thresholds().beta_threshold(), 12.0);

        assert!(matches!(
            Ssc12Builder::new(&input).with_alpha(0.0).build(),
            Err(SscError::InvalidParameter { name: "alpha", .. })
        ));
        Ok(())
    }
}
