/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{algo::adjacency::Adjacency, error::SscError};

/// The estimated cost of the next expansion step of [`Ssc1`](super::Ssc1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cost {
    /// Cost of computing the successors of the frontier and removing the
    /// vertices already in the closure.
    pub small_delta: usize,
    /// Size of the closure plus size of the frontier.
    pub big_delta: usize,
}

/// How the size of the closure found so far enters the small-delta cost.
///
/// The cost of an expansion step is the sum of the outdegrees of the
/// frontier plus a term accounting for the set difference with the closure
/// found so far. The two variants place that term inside or outside the
/// summation over the frontier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CostFormula {
    /// `Σ_{v ∈ frontier} outdeg(v) + |closure| · |frontier|`: the closure
    /// size is charged once per frontier vertex.
    #[default]
    PerFrontierVertex,
    /// `Σ_{v ∈ frontier} outdeg(v) + |closure|`: the closure size is charged
    /// once per step.
    OncePerStep,
}

impl CostFormula {
    /// Estimates the cost of expanding `frontier` when the closure found so
    /// far has `closure_len` vertices.
    pub fn estimate<G: Adjacency + ?Sized>(
        self,
        graph: &G,
        frontier: &[usize],
        closure_len: usize,
    ) -> Cost {
        let out_degrees: usize = frontier.iter().map(|&v| graph.out_degree(v)).sum();
        let closure_term = match self {
            Self::PerFrontierVertex => closure_len.saturating_mul(frontier.len()),
            Self::OncePerStep => closure_len,
        };
        Cost {
            small_delta: out_degrees.saturating_add(closure_term),
            big_delta: closure_len + frontier.len(),
        }
    }
}

/// Limits on the estimated cost of an expansion step of
/// [`Ssc1`](super::Ssc1).
///
/// Given a number of vertices `n` and two positive parameters α and β, the
/// limits are `n / α` for the small-delta cost and `n / β` for the big-delta
/// cost. Larger parameters give tighter limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    alpha_threshold: f64,
    beta_threshold: f64,
}

impl Thresholds {
    pub const DEFAULT_ALPHA: f64 = 1.0 / 8.0;
    pub const DEFAULT_BETA: f64 = 1.0 / 128.0;

    /// Computes the thresholds for a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize, alpha: f64, beta: f64) -> Result<Self, SscError> {
        check_positive("alpha", alpha)?;
        check_positive("beta", beta)?;
        Ok(Self {
            alpha_threshold: vertex_count as f64 / alpha,
            beta_threshold: vertex_count as f64 / beta,
        })
    }

    /// Uses the given limits directly.
    pub fn from_limits(alpha_threshold: f64, beta_threshold: f64) -> Self {
        Self {
            alpha_threshold,
            beta_threshold,
        }
    }

    /// Thresholds that are never exceeded.
    pub fn unlimited() -> Self {
        Self::from_limits(f64::INFINITY, f64::INFINITY)
    }

    pub fn alpha_threshold(&self) -> f64 {
        self.alpha_threshold
    }

    pub fn beta_threshold(&self) -> f64 {
        self.beta_threshold
    }

    /// Returns whether `cost` violates either limit.
    #[inline(always)]
    pub fn exceeded_by(&self, cost: Cost) -> bool {
        cost.small_delta as f64 > self.alpha_threshold
            || cost.big_delta as f64 > self.beta_threshold
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), SscError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SscError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algo::adjacency::AdjacencyStore;

    #[test]
    fn test_estimate() {
        let graph = AdjacencyStore::from_arcs([(0, 1), (1, 2), (0, 3)]);

        let cost = CostFormula::PerFrontierVertex.estimate(&graph, &[0], 1);
        assert_eq!(
            cost,
            Cost {
                small_delta: 3,
                big_delta: 2
            }
        );

        let cost = CostFormula::PerFrontierVertex.estimate(&graph, &[1, 3], 3);
        assert_eq!(cost.small_delta, 1 + 3 * 2);
        assert_eq!(cost.big_delta, 5);

        let cost = CostFormula::OncePerStep.estimate(&graph, &[1, 3], 3);
        assert_eq!(cost.small_delta, 1 + 3);
        assert_eq!(cost.big_delta, 5);
    }

    #[test]
    fn test_thresholds() -> anyhow::Result<()> {
        let thresholds = Thresholds::new(4, Thresholds::DEFAULT_ALPHA, Thresholds::DEFAULT_BETA)?;
        assert_eq!(thresholds.alpha_threshold(), 32.0);
        assert_eq!(thresholds.beta_threshold(), 512.0);

        assert!(!thresholds.exceeded_by(Cost {
            small_delta: 32,
            big_delta: 512
        }));
        assert!(thresholds.exceeded_by(Cost {
            small_delta: 33,
            big_delta: 0
        }));
        assert!(thresholds.exceeded_by(Cost {
            small_delta: 0,
            big_delta: 513
        }));
        assert!(!Thresholds::unlimited().exceeded_by(Cost {
            small_delta: usize::MAX,
            big_delta: usize::MAX
        }));
        Ok(())
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            Thresholds::new(10, 0.0, 1.0),
            Err(SscError::InvalidParameter { name: "alpha", .. })
        ));
        assert!(matches!(
            Thresholds::new(10, 1.0, -2.0),
            Err(SscError::InvalidParameter { name: "beta", .. })
        ));
        assert!(Thresholds::new(10, f64::NAN, 1.0).is_err());
    }
}
