// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generate per-class JUnit XML reports in Rust.
//!
//! The unit of output is a [`ClassReport`]: the aggregate of all test-method
//! results declared by a single test class, serialized as one `testsuite`
//! document.

mod errors;
mod report;
mod serialize;

pub use errors::*;
pub use report::*;
