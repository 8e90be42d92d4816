/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use webgraph::traits::RandomAccessGraph;

/// Read-only access to the successors of a vertex.
///
/// Implementations are never mutated during a closure computation, so a
/// shared reference can be read concurrently by all workers provided the
/// implementation is [`Sync`].
///
/// Every [`RandomAccessGraph`] is an [`Adjacency`], so compressed graphs
/// can be used directly.
pub trait Adjacency {
    /// Returns one plus the largest vertex id.
    ///
    /// All per-vertex buffers of the engines are sized with this value.
    fn num_vertices(&self) -> usize;

    /// Returns the number of successors of `vertex`.
    fn out_degree(&self, vertex: usize) -> usize;

    /// Calls `f` on every successor of `vertex`, each exactly once.
    fn for_each_neighbor(&self, vertex: usize, f: impl FnMut(usize));
}

impl<G: RandomAccessGraph> Adjacency for G {
    #[inline(always)]
    fn num_vertices(&self) -> usize {
        self.num_nodes()
    }

    #[inline(always)]
    fn out_degree(&self, vertex: usize) -> usize {
        if vertex < self.num_nodes() {
            self.outdegree(vertex)
        } else {
            0
        }
    }

    #[inline(always)]
    fn for_each_neighbor(&self, vertex: usize, mut f: impl FnMut(usize)) {
        if vertex < self.num_nodes() {
            for succ in self.successors(vertex) {
                f(succ);
            }
        }
    }
}

/// An immutable adjacency store in compressed sparse row format.
///
/// Successors of each vertex are sorted and unique. The store is built once
/// from an arc list and never modified afterwards.
///
/// # Examples
///
/// ```
/// use hybrid_ssc::algo::adjacency::*;
///
/// let graph = AdjacencyStore::from_arcs([(0, 1), (1, 2), (0, 3), (0, 1)]);
/// assert_eq!(graph.num_vertices(), 4);
/// assert_eq!(graph.num_arcs(), 3);
/// assert_eq!(graph.neighbors(0), &[1, 3]);
/// assert!(graph.neighbors(3).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacencyStore {
    /// `offsets[v]..offsets[v + 1]` is the range of successors of `v`.
    offsets: Box<[usize]>,
    successors: Box<[usize]>,
}

impl AdjacencyStore {
    /// Builds a store from a list of arcs `(tail, head)`.
    ///
    /// Arcs may come in any order and duplicates are collapsed. The number of
    /// vertices is one plus the largest id appearing in an arc.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut arcs = arcs.into_iter().collect::<Vec<_>>();
        arcs.sort_unstable();
        arcs.dedup();

        let num_vertices = arcs
            .iter()
            .map(|&(tail, head)| tail.max(head) + 1)
            .max()
            .unwrap_or(0);

        let mut offsets = vec![0; num_vertices + 1];
        for &(tail, _) in &arcs {
            offsets[tail + 1] += 1;
        }
        for vertex in 0..num_vertices {
            offsets[vertex + 1] += offsets[vertex];
        }

        Self {
            offsets: offsets.into_boxed_slice(),
            successors: arcs.into_iter().map(|(_, head)| head).collect(),
        }
    }

    /// Returns the number of distinct arcs.
    pub fn num_arcs(&self) -> usize {
        self.successors.len()
    }

    /// Returns the sorted successors of `vertex`, which is empty if the
    /// vertex has no outgoing arcs or is out of range.
    #[inline(always)]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        if vertex < self.offsets.len().saturating_sub(1) {
            &self.successors[self.offsets[vertex]..self.offsets[vertex + 1]]
        } else {
            &[]
        }
    }
}

impl Adjacency for AdjacencyStore {
    #[inline(always)]
    fn num_vertices(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    #[inline(always)]
    fn out_degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    #[inline(always)]
    fn for_each_neighbor(&self, vertex: usize, mut f: impl FnMut(usize)) {
        for &succ in self.neighbors(vertex) {
            f(succ);
        }
    }
}
