/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::SourceClosure;
use crate::error::SscError;
use crossbeam_channel::Receiver;
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;

/// Accumulates the union of single-source closures.
///
/// The accumulated set only grows.
pub struct ClosureAggregator {
    members: BitVec,
    num_vertices: usize,
    len: usize,
    expected: usize,
    completed: usize,
}

impl ClosureAggregator {
    /// Creates an aggregator for vertices smaller than `num_vertices` that
    /// will receive `expected` closures.
    pub fn new(num_vertices: usize, expected: usize) -> Self {
        Self {
            members: BitVec::new(num_vertices),
            num_vertices,
            len: 0,
            expected,
            completed: 0,
        }
    }

    /// Adds the vertices of `closure` to the accumulated set.
    pub fn add(&mut self, closure: &[usize]) {
        for &vertex in closure {
            if !self.members[vertex] {
                self.members.set(vertex, true);
                self.len += 1;
            }
        }
        self.completed += 1;
    }

    /// Receives closures from `results` until all expected closures have been
    /// added.
    ///
    /// If the queue disconnects first, nothing useful can be returned and
    /// [`SscError::WorkerDisconnected`] is reported.
    pub fn drain(
        &mut self,
        results: &Receiver<SourceClosure>,
        pl: &mut impl ProgressLog,
    ) -> Result<(), SscError> {
        pl.item_name("source");
        pl.expected_updates(Some(self.expected));
        pl.start("Aggregating single-source closures...");

        while self.completed < self.expected {
            let result = results.recv().map_err(|_| SscError::WorkerDisconnected {
                completed: self.completed,
                total: self.expected,
            })?;
            self.add(&result.closure);
            pl.light_update();
        }

        pl.done();
        Ok(())
    }

    /// Returns the number of closures added so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Returns the number of distinct vertices accumulated so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the accumulated vertices in increasing order.
    pub fn into_sorted(self) -> Box<[usize]> {
        (0..self.num_vertices)
            .filter(|&vertex| self.members[vertex])
            .collect()
    }
}
