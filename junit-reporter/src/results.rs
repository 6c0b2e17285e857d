// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The input data model supplied by the test-running engine.
//!
//! These types mirror the engine's output contract: a list of [`Suite`]s,
//! each carrying [`SuiteRunResult`]s, each of which holds one [`TestContext`]
//! with three buckets of [`TestResult`]s (passed, failed, skipped).

use std::fmt;

pub use junit_document::TestStatus;

/// The runtime identity of a test class, used as the grouping key.
///
/// Two results belong to the same group iff their `ClassId`s are equal. The
/// optional loading context participates in equality and hashing so that two
/// classes sharing a fully-qualified name in different loading contexts form
/// distinct groups. Note that the report file name is derived from the name
/// alone, so such classes still collide on disk (a pre-existing ambiguity in
/// the source data model).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ClassId {
    name: String,
    context: Option<String>,
}

impl ClassId {
    /// Creates a `ClassId` from a fully-qualified class name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context: None,
        }
    }

    /// Creates a `ClassId` with an explicit loading-context discriminator.
    pub fn with_context(name: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context: Some(context.into()),
        }
    }

    /// Returns the fully-qualified class name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the loading-context discriminator, if any.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A throwable captured when a test method failed.
///
/// This is a plain immutable record rendered once at capture time; retaining
/// the pre-rendered stack-trace text rather than a live error object avoids
/// re-triggering stack-capture side effects downstream.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ThrowableInfo {
    /// The throwable's message, if it had one.
    pub message: Option<String>,

    /// The throwable's type name, if known.
    pub ty: Option<String>,

    /// The fully-rendered stack-trace text.
    pub stack_trace: String,
}

impl ThrowableInfo {
    /// Creates a new `ThrowableInfo` with the given stack-trace text.
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

/// One outcome of a single test-method invocation.
///
/// `class` is the *real* runtime class backing the test method as resolved by
/// the engine, honoring subclass resolution. Equality and hashing cover every
/// field so that duplicate identical results collapse to one entry when
/// grouped.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TestResult {
    /// The runtime identity of the declaring test class.
    pub class: ClassId,

    /// The name of the test method.
    pub method_name: String,

    /// The execution status reported by the engine.
    pub status: TestStatus,

    /// The start time, in milliseconds since the epoch.
    pub start_ms: u64,

    /// The end time, in milliseconds since the epoch.
    pub end_ms: u64,

    /// The captured throwable, if the test threw one.
    pub throwable: Option<ThrowableInfo>,
}

impl TestResult {
    /// Creates a new `TestResult` with zero start and end times.
    pub fn new(class: ClassId, method_name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            class,
            method_name: method_name.into(),
            status,
            start_ms: 0,
            end_ms: 0,
            throwable: None,
        }
    }

    /// Sets the start and end times, in milliseconds since the epoch.
    pub fn set_times(&mut self, start_ms: u64, end_ms: u64) -> &mut Self {
        self.start_ms = start_ms;
        self.end_ms = end_ms;
        self
    }

    /// Attaches the captured throwable.
    pub fn set_throwable(&mut self, throwable: ThrowableInfo) -> &mut Self {
        self.throwable = Some(throwable);
        self
    }

    /// Returns the elapsed time of this invocation in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

/// The results of one test context within a suite run.
///
/// The engine buckets results by outcome; any bucket may be empty.
#[derive(Clone, Debug, Default)]
pub struct TestContext {
    /// The name of the test context.
    pub name: String,

    /// Results of tests that passed.
    pub passed: Vec<TestResult>,

    /// Results of tests that failed.
    pub failed: Vec<TestResult>,

    /// Results of tests that were skipped.
    pub skipped: Vec<TestResult>,
}

impl TestContext {
    /// Creates a new, empty `TestContext`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: vec![],
            failed: vec![],
            skipped: vec![],
        }
    }

    /// Iterates over the union of all three result buckets.
    pub fn all_results(&self) -> impl Iterator<Item = &TestResult> {
        self.passed
            .iter()
            .chain(&self.failed)
            .chain(&self.skipped)
    }
}

/// One suite-result object yielded by a suite run.
#[derive(Clone, Debug)]
pub struct SuiteRunResult {
    /// The test context this result was produced under.
    pub context: TestContext,
}

impl SuiteRunResult {
    /// Creates a new `SuiteRunResult`.
    pub fn new(context: TestContext) -> Self {
        Self { context }
    }
}

/// A test suite as reported by the engine.
///
/// A suite may contribute zero results.
#[derive(Clone, Debug, Default)]
pub struct Suite {
    /// The name of the suite.
    pub name: String,

    /// The suite-result objects produced by running this suite.
    pub run_results: Vec<SuiteRunResult>,
}

impl Suite {
    /// Creates a new, empty `Suite`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            run_results: vec![],
        }
    }

    /// Adds a suite-result object to this suite.
    pub fn add_run_result(&mut self, run_result: SuiteRunResult) -> &mut Self {
        self.run_results.push(run_result);
        self
    }
}
