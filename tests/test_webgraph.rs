/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use hybrid_ssc::prelude::*;
use webgraph::{graphs::vec_graph::LabeledVecGraph, labels::Left};

const ARCS: [(usize, usize); 9] = [
    (0, 1),
    (1, 2),
    (2, 1),
    (2, 3),
    (4, 3),
    (4, 5),
    (6, 7),
    (7, 8),
    (8, 6),
];

#[test]
fn test_same_as_store() -> Result<()> {
    let graph = Left(LabeledVecGraph::<()>::from_arcs(ARCS.map(|(u, v)| (u, v, ()))));
    let store = AdjacencyStore::from_arcs(ARCS);
    assert_eq!(graph.num_vertices(), store.num_vertices());
    for vertex in 0..store.num_vertices() {
        assert_eq!(graph.out_degree(vertex), store.out_degree(vertex));
        let mut succ = Vec::new();
        graph.for_each_neighbor(vertex, |w| succ.push(w));
        succ.sort_unstable();
        assert_eq!(succ.as_slice(), store.neighbors(vertex));
    }
    // Out of range
    assert_eq!(graph.out_degree(100), 0);
    Ok(())
}

#[test]
fn test_closure() -> Result<()> {
    let input = GraphInput::from_graph(Left(LabeledVecGraph::<()>::from_arcs(ARCS.map(|(u, v)| (u, v, ())))), no_logging![])?;
    // The cycle 6 -> 7 -> 8 -> 6 has no source
    assert_eq!(input.sources(), &[0, 4]);
    assert_eq!(input.vertex_count(), 9);
    assert_eq!(input.num_arcs(), ARCS.len());

    let mut ssc2 = Ssc2::new(input.graph());
    assert_eq!(&*ssc2.compute(0), &[0, 1, 2, 3]);
    assert_eq!(&*ssc2.compute(4), &[3, 4, 5]);

    let report = Ssc12Builder::new(&input)
        .with_threads(Threads::NumThreads(2))
        .build()?
        .run(no_logging![])?;
    assert_eq!(&*report.closure, &[0, 1, 2, 3, 4, 5]);
    Ok(())
}
