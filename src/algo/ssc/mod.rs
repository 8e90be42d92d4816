/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Hybrid single-source closures.
//!
//! The closure of a source can be computed by two algorithms: [`Ssc1`],
//! which uses hash sets and stops when the estimated cost of a step becomes
//! too high, and [`Ssc2`], which uses preallocated per-vertex buffers and
//! always completes. A [`WorkerPool`] distributes the sources of a graph
//! among parallel [`Worker`]s, each of which starts with [`Ssc1`] and
//! switches permanently to [`Ssc2`] the first time [`Ssc1`] gives up.
//! The closures are merged by a [`ClosureAggregator`].
//!
//! [`Ssc12Builder`] derives the thresholds and the number of workers from
//! a [`GraphInput`](crate::algo::input::GraphInput).

mod cost;
pub use cost::*;

mod ssc1;
pub use ssc1::*;

mod ssc2;
pub use ssc2::*;

mod pool;
pub use pool::*;

mod aggregate;
pub use aggregate::*;

mod builder;
pub use builder::*;
