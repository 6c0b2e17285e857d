// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error that occurs while producing one class's JUnit report.
///
/// Errors of this kind are isolated to the class group that produced them:
/// [`JunitReporter::generate_report`](crate::JunitReporter::generate_report)
/// logs them and continues with the remaining groups.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WriteReportError {
    /// An error occurred while rendering the XML document.
    #[error("error rendering JUnit report for {file}")]
    Render {
        /// The output file the report was destined for.
        file: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: junit_document::SerializeError,
    },

    /// An error occurred while writing the document through the report writer.
    #[error("error writing JUnit report to {file}")]
    Fs {
        /// The file being operated on.
        file: Utf8PathBuf,

        /// The underlying IO error.
        #[source]
        error: std::io::Error,
    },
}
