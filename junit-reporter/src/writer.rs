// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8Path;
use std::{fs, io};

/// The collaborator that persists a finished report document.
///
/// Implementations must be safe for concurrent use across distinct file
/// names; the one-file-per-class naming rule guarantees that concurrent
/// report generation never targets the same file twice.
pub trait ReportWriter {
    /// Writes `contents` to `file_name` under `directory`.
    fn write(&self, directory: &Utf8Path, file_name: &str, contents: &str) -> io::Result<()>;
}

/// A [`ReportWriter`] that writes reports to the local file system, creating
/// the target directory as needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsReportWriter;

impl ReportWriter for FsReportWriter {
    fn write(&self, directory: &Utf8Path, file_name: &str, contents: &str) -> io::Result<()> {
        fs::create_dir_all(directory)?;
        fs::write(directory.join(file_name), contents)
    }
}
