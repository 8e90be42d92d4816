/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod error;
pub mod io;
pub mod utils;

/// Use `use hybrid_ssc::prelude::*;` to import common types and traits.
pub mod prelude {
    use super::*;
    pub use algo::adjacency::{Adjacency, AdjacencyStore};
    pub use algo::input::GraphInput;
    pub use algo::ssc::*;
    pub use error::SscError;
    pub use utils::Threads;
}
