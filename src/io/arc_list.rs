/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Textual arc lists.
//!
//! An arc list has one arc per line, written as the tail and the head
//! separated by whitespace (usually a tab). Empty lines and lines starting
//! with `#` are ignored:
//!
//! ```text
//! # FromNodeId	ToNodeId
//! 0	9
//! 0	40
//! ```

use crate::{
    algo::{adjacency::AdjacencyStore, input::GraphInput},
    error::SscError,
};
use dsi_progress_logger::ProgressLog;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Parses an arc list into an [`AdjacencyStore`].
pub fn parse(reader: impl BufRead) -> Result<AdjacencyStore, SscError> {
    let mut arcs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        arcs.push(parse_arc(trimmed).ok_or_else(|| SscError::MalformedGraphInput {
            line: index + 1,
            content: line.clone(),
        })?);
    }
    Ok(AdjacencyStore::from_arcs(arcs))
}

fn parse_arc(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(tail), Some(head), None) => Some((tail.parse().ok()?, head.parse().ok()?)),
        _ => None,
    }
}

/// Loads the arc list in `path` and looks for its sources.
pub fn load(
    path: impl AsRef<Path>,
    pl: &mut impl ProgressLog,
) -> Result<GraphInput<AdjacencyStore>, SscError> {
    let path = path.as_ref();
    pl.info(format_args!("Reading arc list {}", path.display()));
    let graph = parse(BufReader::new(File::open(path)?))?;
    GraphInput::from_graph(graph, pl)
}
