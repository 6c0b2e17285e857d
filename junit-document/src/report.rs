// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{errors::SerializeError, serialize::serialize_class_report};
use chrono::{DateTime, Utc};
use std::io;

/// The JUnit report for a single test class.
///
/// A `ClassReport` is serialized as one `testsuite` document with one
/// [`TestCase`] per executed test method. The `failures` and `errors`
/// counters are computed independently over the same set of test cases:
/// `failures` counts cases whose status is not [`TestStatus::Success`], while
/// `errors` counts cases that carry a [`FailureDetail`]. A failing case with
/// no captured throwable increments only `failures`; a case with a throwable
/// increments both.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct ClassReport {
    /// The fully-qualified name of the test class.
    pub name: String,

    /// The identifier written into the leading `Generated by` comment.
    pub generator: String,

    /// The wall-clock time at which this report was generated.
    ///
    /// Serialized as a human-readable GMT timestamp.
    pub timestamp: Option<DateTime<Utc>>,

    /// The local host name, if it could be resolved.
    ///
    /// The attribute is omitted from the document when absent.
    pub hostname: Option<String>,

    /// The total number of test cases in this report.
    pub tests: usize,

    /// The number of test cases whose status is not success.
    pub failures: usize,

    /// The number of test cases that captured a throwable.
    pub errors: usize,

    /// The total elapsed time in milliseconds, summed over all test cases.
    pub time_ms: u64,

    /// The test cases that form this report.
    pub test_cases: Vec<TestCase>,
}

impl ClassReport {
    /// Creates a new `ClassReport` for the given test class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generator: concat!("junit-document ", env!("CARGO_PKG_VERSION")).to_owned(),
            timestamp: None,
            hostname: None,
            tests: 0,
            failures: 0,
            errors: 0,
            time_ms: 0,
            test_cases: vec![],
        }
    }

    /// Sets the generator identifier for the leading comment.
    pub fn set_generator(&mut self, generator: impl Into<String>) -> &mut Self {
        self.generator = generator.into();
        self
    }

    /// Sets the generation timestamp for the report.
    pub fn set_timestamp(&mut self, timestamp: impl Into<DateTime<Utc>>) -> &mut Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Sets the host name for the report.
    pub fn set_hostname(&mut self, hostname: impl Into<String>) -> &mut Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Adds a test case and updates the `tests`, `failures`, `errors` and
    /// `time_ms` counters.
    ///
    /// When generating a new report, use of this method is recommended over
    /// adding to `self.test_cases` directly.
    pub fn add_test_case(&mut self, test_case: TestCase) -> &mut Self {
        self.tests += 1;
        if test_case.status != TestStatus::Success {
            self.failures += 1;
        }
        if test_case.failure.is_some() {
            self.errors += 1;
        }
        self.time_ms += test_case.time_ms;
        self.test_cases.push(test_case);
        self
    }

    /// Adds several test cases and updates the counts.
    pub fn add_test_cases(&mut self, test_cases: impl IntoIterator<Item = TestCase>) -> &mut Self {
        for test_case in test_cases {
            self.add_test_case(test_case);
        }
        self
    }

    /// Serialize this report to the given writer.
    pub fn serialize(&self, writer: impl io::Write) -> Result<(), SerializeError> {
        serialize_class_report(self, writer)
    }

    /// Serialize this report to a string.
    pub fn to_string(&self) -> Result<String, SerializeError> {
        let mut buf: Vec<u8> = vec![];
        self.serialize(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }
}

/// Represents a single test-method execution within a [`ClassReport`].
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct TestCase {
    /// The fully-qualified name of the class declaring the test method.
    pub classname: String,

    /// The name of the test method.
    pub name: String,

    /// The elapsed time of this test case in milliseconds.
    pub time_ms: u64,

    /// The execution status reported by the test engine.
    ///
    /// Not serialized directly; feeds the report's `failures` counter.
    pub status: TestStatus,

    /// The captured throwable, if the test threw one.
    ///
    /// Serialized as a nested `error` element.
    pub failure: Option<FailureDetail>,
}

impl TestCase {
    /// Creates a new test case.
    pub fn new(classname: impl Into<String>, name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            classname: classname.into(),
            name: name.into(),
            time_ms: 0,
            status,
            failure: None,
        }
    }

    /// Sets the elapsed time of this test case in milliseconds.
    pub fn set_time_ms(&mut self, time_ms: u64) -> &mut Self {
        self.time_ms = time_ms;
        self
    }

    /// Attaches the captured throwable to this test case.
    pub fn set_failure(&mut self, failure: FailureDetail) -> &mut Self {
        self.failure = Some(failure);
        self
    }
}

/// The status of a single test-method execution.
///
/// Skipped tests are folded into the same report as passed and failed tests
/// with no distinct XML marker; a non-success status only affects the
/// `failures` counter.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TestStatus {
    /// The test passed.
    Success,

    /// The test failed.
    Failure,

    /// The test was skipped.
    Skip,
}

/// A throwable captured at test failure time, pre-rendered into plain data.
///
/// Holding the rendered message, type name and stack-trace text rather than a
/// live error object keeps the capture immutable and trivially serializable.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FailureDetail {
    /// The throwable's message, if any.
    ///
    /// Serialized as an empty `message` attribute when absent.
    pub message: Option<String>,

    /// The throwable's type name, if any.
    ///
    /// Serialized as an empty `type` attribute when absent.
    pub ty: Option<String>,

    /// The full stack-trace text, emitted verbatim inside a CDATA section.
    pub stack_trace: String,
}

impl FailureDetail {
    /// Creates a new `FailureDetail` with the given stack-trace text.
    pub fn new(stack_trace: impl Into<String>) -> Self {
        Self {
            message: None,
            ty: None,
            stack_trace: stack_trace.into(),
        }
    }

    /// Sets the message.
    pub fn set_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the type name.
    pub fn set_type(&mut self, ty: impl Into<String>) -> &mut Self {
        self.ty = Some(ty.into());
        self
    }
}
