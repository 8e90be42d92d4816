/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::adjacency::Adjacency;
use sux::bits::BitVec;

/// Single-source closure by frontier expansion on preallocated buffers.
///
/// The two frontiers are stored in index arrays and membership in the
/// closure is recorded in a bit vector, all of them sized with the number of
/// vertices of the graph and allocated once. The same instance can then be
/// used for any number of sources without further allocations.
///
/// Every call clears the bit vector and scans it to collect the closure, so
/// its cost is linear in the number of vertices plus the number of arcs
/// reachable from the source. There is no abort condition.
///
/// # Examples
///
/// ```
/// use hybrid_ssc::algo::adjacency::AdjacencyStore;
/// use hybrid_ssc::algo::ssc::Ssc2;
///
/// let graph = AdjacencyStore::from_arcs([(0, 1), (2, 3)]);
/// let mut ssc2 = Ssc2::new(&graph);
/// assert_eq!(&*ssc2.compute(0), &[0, 1]);
/// assert_eq!(&*ssc2.compute(2), &[2, 3]);
/// ```
pub struct Ssc2<'a, G: ?Sized> {
    graph: &'a G,
    num_vertices: usize,
    /// The current frontier, in its first `len` positions.
    big_delta: Box<[usize]>,
    /// The next frontier being built.
    small_delta: Box<[usize]>,
    visited: BitVec,
}

impl<'a, G: Adjacency + ?Sized> Ssc2<'a, G> {
    /// Allocates the buffers for `graph`.
    pub fn new(graph: &'a G) -> Self {
        let num_vertices = graph.num_vertices();
        Self {
            graph,
            num_vertices,
            big_delta: vec![0; num_vertices].into_boxed_slice(),
            small_delta: vec![0; num_vertices].into_boxed_slice(),
            visited: BitVec::new(num_vertices),
        }
    }

    /// Computes the sorted closure of `source`.
    ///
    /// # Panics
    ///
    /// If `source` is not smaller than the number of vertices of the graph.
    pub fn compute(&mut self, source: usize) -> Box<[usize]> {
        let graph = self.graph;
        let num_vertices = self.num_vertices;
        let Self {
            big_delta,
            small_delta,
            visited,
            ..
        } = self;

        visited.fill(false);
        visited.set(source, true);
        big_delta[0] = source;
        let mut len = 1;

        while len != 0 {
            let mut next_len = 0;
            for &vertex in &big_delta[..len] {
                graph.for_each_neighbor(vertex, |succ| {
                    if !visited[succ] {
                        visited.set(succ, true);
                        // Each vertex is added at most once, so this never
                        // overflows the buffer
                        small_delta[next_len] = succ;
                        next_len += 1;
                    }
                });
            }
            std::mem::swap(big_delta, small_delta);
            len = next_len;
        }

        (0..num_vertices).filter(|&vertex| visited[vertex]).collect()
    }
}
