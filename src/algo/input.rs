/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{algo::adjacency::Adjacency, error::SscError};
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;

/// A graph together with the data needed to compute the closure of its
/// sources.
///
/// A vertex *appears* in the graph if it is the tail or the head of some arc;
/// a *source* is an appearing vertex with outgoing arcs and no incoming arcs.
/// Isolated vertex ids (for example, gaps in the numbering of a textual arc
/// list) are neither counted nor used as sources.
#[derive(Debug, Clone)]
pub struct GraphInput<G> {
    graph: G,
    sources: Box<[usize]>,
    vertex_count: usize,
    num_arcs: usize,
}

impl<G: Adjacency> GraphInput<G> {
    /// Scans `graph` looking for its sources.
    ///
    /// Fails with [`SscError::EmptyGraph`] if the graph has no arcs, and with
    /// [`SscError::ZeroSourceVertices`] if every vertex with outgoing arcs
    /// also has incoming arcs.
    pub fn from_graph(graph: G, pl: &mut impl ProgressLog) -> Result<Self, SscError> {
        let num_vertices = graph.num_vertices();
        pl.item_name("vertex");
        pl.expected_updates(Some(num_vertices));
        pl.start("Looking for source vertices...");

        let mut has_incoming = BitVec::new(num_vertices);
        let mut num_arcs = 0;
        for vertex in 0..num_vertices {
            graph.for_each_neighbor(vertex, |succ| {
                has_incoming.set(succ, true);
                num_arcs += 1;
            });
            pl.light_update();
        }
        pl.done();

        if num_arcs == 0 {
            return Err(SscError::EmptyGraph);
        }

        let mut vertex_count = 0;
        let mut sources = Vec::new();
        for vertex in 0..num_vertices {
            let has_outgoing = graph.out_degree(vertex) != 0;
            if has_outgoing || has_incoming[vertex] {
                vertex_count += 1;
            }
            if has_outgoing && !has_incoming[vertex] {
                sources.push(vertex);
            }
        }

        log::info!("Highest vertex id: {}", num_vertices);
        log::info!("Vertex count: {}", vertex_count);
        log::info!("Non-source vertices: {}", vertex_count - sources.len());
        log::info!("Source vertices: {}", sources.len());

        if sources.is_empty() {
            return Err(SscError::ZeroSourceVertices);
        }

        Ok(Self {
            graph,
            sources: sources.into_boxed_slice(),
            vertex_count,
            num_arcs,
        })
    }
}

impl<G> GraphInput<G> {
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Returns the sources, in increasing order.
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Returns the number of vertices appearing in some arc.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    pub fn into_graph(self) -> G {
        self.graph
    }
}

impl<G: Adjacency> GraphInput<G> {
    /// Returns one plus the largest vertex id, which is the size of all
    /// per-vertex buffers.
    pub fn max_vertex_id(&self) -> usize {
        self.graph.num_vertices()
    }
}
