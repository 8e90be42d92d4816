/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use hybrid_ssc::io::{arc_list, create_output, write_closure, OutputPolicy};
use hybrid_ssc::prelude::*;
use std::{fs, io::BufWriter};

#[test]
fn test_load_and_write() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("graph.txt");
    fs::write(
        &input_path,
        "# Directed graph\n# FromNodeId\tToNodeId\n0\t1\n1\t2\n0\t3\n10\t11\n",
    )?;

    let input = arc_list::load(&input_path, no_logging![])?;
    assert_eq!(input.sources(), &[0, 10]);
    // Ids 4 to 9 never appear
    assert_eq!(input.vertex_count(), 6);
    assert_eq!(input.max_vertex_id(), 12);

    let report = Ssc12Builder::new(&input).build()?.run(no_logging![])?;
    assert_eq!(&*report.closure, &[0, 1, 2, 3, 10, 11]);

    let (file, output_path) =
        create_output(dir.path().join("closure.txt"), OutputPolicy::CreateNew)?;
    write_closure(BufWriter::new(file), "graph.txt", report.elapsed, &report.closure)?;

    let text = fs::read_to_string(&output_path)?;
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("# Run of SSC12 on input graph.txt"));
    assert!(lines
        .next()
        .is_some_and(|line| line.starts_with("# Elapsed time: ")));
    assert_eq!(lines.next(), Some("\"Vertex\""));
    assert_eq!(
        lines.collect::<Vec<_>>(),
        ["\"0\"", "\"1\"", "\"2\"", "\"3\"", "\"10\"", "\"11\""]
    );
    Ok(())
}

#[test]
fn test_cycle_has_no_sources() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cycle.txt");
    fs::write(&path, "0\t1\n1\t0\n")?;
    assert!(matches!(
        arc_list::load(&path, no_logging![]),
        Err(SscError::ZeroSourceVertices)
    ));
    Ok(())
}

#[test]
fn test_empty_and_malformed() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let empty = dir.path().join("empty.txt");
    fs::write(&empty, "# nothing here\n\n")?;
    assert!(matches!(
        arc_list::load(&empty, no_logging![]),
        Err(SscError::EmptyGraph)
    ));

    let malformed = dir.path().join("malformed.txt");
    fs::write(&malformed, "0\t1\n1\t2\t3\n")?;
    assert!(matches!(
        arc_list::load(&malformed, no_logging![]),
        Err(SscError::MalformedGraphInput { line: 2, .. })
    ));

    assert!(matches!(
        arc_list::load(dir.path().join("missing.txt"), no_logging![]),
        Err(SscError::Io(_))
    ));
    Ok(())
}
