/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fatal errors of a closure computation.
//!
//! Threshold violations inside a worker are not errors: they are handled
//! locally by switching algorithm (see
//! [`ThresholdViolation`](crate::algo::ssc::ThresholdViolation)).

use thiserror::Error;

/// An error that terminates the whole computation.
///
/// There is no partial result: when any of these is returned, no aggregate
/// closure has been produced.
#[derive(Debug, Error)]
pub enum SscError {
    /// The work queue could not accept every work item.
    #[error(
        "work queue exhausted: enqueued {enqueued} of {total} work items (capacity {capacity})"
    )]
    WorkQueueExhausted {
        enqueued: usize,
        total: usize,
        capacity: usize,
    },

    /// A line of a textual graph could not be parsed as an arc.
    #[error("malformed graph input at line {line}: {content:?}")]
    MalformedGraphInput { line: usize, content: String },

    /// The graph has no arcs.
    #[error("input graph is empty")]
    EmptyGraph,

    /// Every vertex of the graph has an incoming arc.
    #[error("input graph has no source vertices")]
    ZeroSourceVertices,

    /// A source is not a vertex of the graph.
    #[error("source {vertex} is not a vertex of a graph with {num_vertices} vertices")]
    InvalidSource { vertex: usize, num_vertices: usize },

    /// A configuration value is out of range.
    #[error("invalid value {value} for {name}: expected a positive finite number")]
    InvalidParameter { name: &'static str, value: f64 },

    /// All workers went away before every closure was delivered.
    #[error("workers disconnected after delivering {completed} of {total} closures")]
    WorkerDisconnected { completed: usize, total: usize },

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
