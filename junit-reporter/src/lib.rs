// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-class JUnit XML report generation.
//!
//! This crate consumes test results collected by an external test-running
//! engine, groups them by the runtime identity of their declaring class, and
//! writes one JUnit-compatible XML document per class. The documents
//! themselves are modeled and serialized by [`junit_document`].
//!
//! Data flows one way: raw results are grouped by [`group_by_class`], each
//! group is summarized into a [`junit_document::ClassReport`], and the
//! finished document is handed to a [`ReportWriter`] keyed by a deterministic
//! file name.

mod aggregator;
mod errors;
mod reporter;
mod results;
mod writer;

pub use aggregator::group_by_class;
pub use errors::WriteReportError;
pub use reporter::{JunitReporter, ReportSummary};
pub use results::*;
pub use writer::{FsReportWriter, ReportWriter};
