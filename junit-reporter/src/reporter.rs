// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drive report generation: one JUnit XML document per test class.

use crate::{
    aggregator::group_by_class,
    errors::WriteReportError,
    results::{ClassId, Suite, TestResult},
    writer::ReportWriter,
};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use indexmap::IndexSet;
use junit_document::{ClassReport, FailureDetail, TestCase};
use tracing::warn;

/// Subdirectory of the output root that report files are written into.
static JUNIT_REPORTS_DIR: &str = "junitreports";

/// The identifier written into each document's `Generated by` comment.
static GENERATOR: &str = concat!("junit-reporter ", env!("CARGO_PKG_VERSION"));

/// Generates one JUnit XML report file per test class.
///
/// Groups the supplied results by declaring class, computes per-class summary
/// statistics, and hands each finished document to a [`ReportWriter`] as
/// `TEST-<fully.qualified.ClassName>.xml` under
/// `<output-root>/junitreports/`.
#[derive(Clone, Debug)]
pub struct JunitReporter {
    output_dir: Utf8PathBuf,
}

impl JunitReporter {
    /// Creates a reporter writing under the given output root.
    pub fn new(output_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Returns the directory report files are written into.
    pub fn report_dir(&self) -> Utf8PathBuf {
        self.output_dir.join(JUNIT_REPORTS_DIR)
    }

    /// Generates all reports for the given suites.
    ///
    /// Class groups are processed independently: a render or write failure
    /// for one class is logged and counted in the summary, and processing
    /// continues with the remaining groups.
    pub fn generate_report(&self, suites: &[Suite], writer: &dyn ReportWriter) -> ReportSummary {
        let groups = group_by_class(suites);
        let report_dir = self.report_dir();
        let hostname = local_hostname();

        let mut summary = ReportSummary::default();
        for (class, results) in &groups {
            let file_name = report_file_name(class);
            match write_class_report(
                class,
                results,
                hostname.as_deref(),
                &report_dir,
                &file_name,
                writer,
            ) {
                Ok(()) => summary.files_written.push(file_name),
                Err(error) => {
                    warn!(class = %class, "skipping report: {error}");
                    summary.groups_failed += 1;
                }
            }
        }
        summary
    }
}

/// The outcome of one report-generation pass.
///
/// Generation as a whole never fails; per-class failures are reflected in
/// `groups_failed`.
#[derive(Clone, Debug, Default)]
pub struct ReportSummary {
    /// File names of the reports that were written, one per class.
    pub files_written: Vec<String>,

    /// The number of class groups whose report could not be produced.
    pub groups_failed: usize,
}

fn write_class_report(
    class: &ClassId,
    results: &IndexSet<TestResult>,
    hostname: Option<&str>,
    report_dir: &Utf8Path,
    file_name: &str,
    writer: &dyn ReportWriter,
) -> Result<(), WriteReportError> {
    let report = build_class_report(class, results, hostname);
    let content = report.to_string().map_err(|error| WriteReportError::Render {
        file: report_dir.join(file_name),
        error,
    })?;
    writer
        .write(report_dir, file_name, &content)
        .map_err(|error| WriteReportError::Fs {
            file: report_dir.join(file_name),
            error,
        })
}

pub(crate) fn build_class_report(
    class: &ClassId,
    results: &IndexSet<TestResult>,
    hostname: Option<&str>,
) -> ClassReport {
    let mut report = ClassReport::new(class.name());
    report.set_generator(GENERATOR).set_timestamp(Utc::now());
    if let Some(hostname) = hostname {
        report.set_hostname(hostname);
    }

    for result in results {
        let mut test_case = TestCase::new(result.class.name(), &result.method_name, result.status);
        test_case.set_time_ms(result.elapsed_ms());
        if let Some(throwable) = &result.throwable {
            let mut failure = FailureDetail::new(&throwable.stack_trace);
            if let Some(message) = &throwable.message {
                failure.set_message(message);
            }
            if let Some(ty) = &throwable.ty {
                failure.set_type(ty);
            }
            test_case.set_failure(failure);
        }
        report.add_test_case(test_case);
    }

    report
}

fn report_file_name(class: &ClassId) -> String {
    format!("TEST-{}.xml", class.name())
}

// Resolution failure is non-fatal: the attribute is omitted, silently.
fn local_hostname() -> Option<String> {
    whoami::fallible::hostname().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{TestStatus, ThrowableInfo};
    use pretty_assertions::assert_eq;

    fn group_of(results: impl IntoIterator<Item = TestResult>) -> IndexSet<TestResult> {
        results.into_iter().collect()
    }

    #[test]
    fn two_passing_methods() {
        let class = ClassId::new("com.example.TwoPasses");
        let mut first = TestResult::new(class.clone(), "first", TestStatus::Success);
        first.set_times(1_000, 1_010);
        let mut second = TestResult::new(class.clone(), "second", TestStatus::Success);
        second.set_times(2_000, 2_020);

        let report = build_class_report(&class, &group_of([first, second]), Some("build-host"));
        assert_eq!(report.name, "com.example.TwoPasses");
        assert_eq!((report.tests, report.failures, report.errors), (2, 0, 0));
        assert_eq!(report.time_ms, 30);
        assert_eq!(report.hostname.as_deref(), Some("build-host"));
        assert!(report.test_cases.iter().all(|case| case.failure.is_none()));
    }

    #[test]
    fn one_method_that_threw() {
        let class = ClassId::new("com.example.Boom");
        let mut throwable = ThrowableInfo::new(
            "java.lang.IllegalStateException: boom\n\tat com.example.Boom.explodes(Boom.java:7)",
        );
        throwable
            .set_message("boom")
            .set_type("java.lang.IllegalStateException");
        let mut result = TestResult::new(class.clone(), "explodes", TestStatus::Failure);
        result.set_times(0, 42).set_throwable(throwable);

        let report = build_class_report(&class, &group_of([result]), None);
        assert_eq!((report.tests, report.failures, report.errors), (1, 1, 1));
        assert_eq!(report.time_ms, 42);

        let failure = report.test_cases[0]
            .failure
            .as_ref()
            .expect("throwable is carried into the test case");
        assert_eq!(failure.message.as_deref(), Some("boom"));
        assert_eq!(failure.ty.as_deref(), Some("java.lang.IllegalStateException"));
        assert!(!failure.stack_trace.is_empty());
    }

    #[test]
    fn hostname_resolution_failure_omits_attribute() {
        let class = ClassId::new("com.example.NoHost");
        let result = TestResult::new(class.clone(), "runs", TestStatus::Success);

        let report = build_class_report(&class, &group_of([result]), None);
        assert_eq!(report.hostname, None);
        // Everything else is still present and correct.
        assert_eq!(report.tests, 1);
        assert!(report.timestamp.is_some());
    }

    #[test]
    fn file_name_is_derived_from_the_class_name() {
        let class = ClassId::new("com.example.Naming");
        assert_eq!(report_file_name(&class), "TEST-com.example.Naming.xml");
    }
}
