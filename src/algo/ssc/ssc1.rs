/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{Cost, CostFormula, Thresholds};
use crate::algo::adjacency::Adjacency;
use std::collections::HashSet;

/// The reason why [`Ssc1::compute`] gave up on a source.
///
/// This is not an error: the worker that receives it switches to
/// [`Ssc2`](super::Ssc2) and computes the same closure again from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdViolation {
    /// The source whose closure was being computed.
    pub source: usize,
    /// The number of expansion steps completed before the violation.
    pub step: usize,
    /// The estimated cost of the step that was refused.
    pub cost: Cost,
}

/// Single-source closure by frontier expansion on hash sets.
///
/// Each step replaces the frontier with the successors of the frontier that
/// are not already in the closure. Before each step the cost of the step is
/// estimated using a [`CostFormula`], and if it exceeds the [`Thresholds`]
/// the computation is abandoned. This algorithm is fast on small closures, as
/// its memory usage is proportional to the size of the closure rather than to
/// the number of vertices of the graph.
///
/// # Examples
///
/// ```
/// use hybrid_ssc::algo::adjacency::AdjacencyStore;
/// use hybrid_ssc::algo::ssc::*;
///
/// let graph = AdjacencyStore::from_arcs([(0, 1), (1, 2), (0, 3)]);
/// let ssc1 = Ssc1::new(&graph, Thresholds::unlimited());
/// assert_eq!(&*ssc1.compute(0).unwrap(), &[0, 1, 2, 3]);
///
/// // With tiny thresholds even the first step is refused
/// let ssc1 = Ssc1::new(&graph, Thresholds::from_limits(1.0, 1.0));
/// assert!(ssc1.compute(0).is_err());
/// ```
pub struct Ssc1<'a, G: ?Sized> {
    graph: &'a G,
    thresholds: Thresholds,
    cost_formula: CostFormula,
}

impl<'a, G: Adjacency + ?Sized> Ssc1<'a, G> {
    pub fn new(graph: &'a G, thresholds: Thresholds) -> Self {
        Self {
            graph,
            thresholds,
            cost_formula: CostFormula::default(),
        }
    }

    /// Sets the formula used to estimate the cost of a step.
    pub fn with_cost_formula(mut self, cost_formula: CostFormula) -> Self {
        self.cost_formula = cost_formula;
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Computes the sorted closure of `source`, or reports the step whose
    /// estimated cost exceeded the thresholds.
    ///
    /// No partial result is kept on failure.
    pub fn compute(&self, source: usize) -> Result<Box<[usize]>, ThresholdViolation> {
        let mut closure = HashSet::from([source]);
        let mut frontier = vec![source];
        let mut next_frontier = Vec::new();
        let mut step = 0;

        while !frontier.is_empty() {
            let cost = self
                .cost_formula
                .estimate(self.graph, &frontier, closure.len());
            if self.thresholds.exceeded_by(cost) {
                return Err(ThresholdViolation { source, step, cost });
            }

            for &vertex in &frontier {
                self.graph.for_each_neighbor(vertex, |succ| {
                    if closure.insert(succ) {
                        next_frontier.push(succ);
                    }
                });
            }

            std::mem::swap(&mut frontier, &mut next_frontier);
            next_frontier.clear();
            step += 1;
        }

        let mut closure = closure.into_iter().collect::<Vec<_>>();
        closure.sort_unstable();
        Ok(closure.into_boxed_slice())
    }
}
