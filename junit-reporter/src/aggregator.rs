// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Group raw test results by their declaring class.

use crate::results::{ClassId, Suite, TestResult};
use indexmap::{IndexMap, IndexSet};

/// Groups every result from every suite by the runtime identity of its
/// declaring class.
///
/// All three buckets (passed, failed, skipped) of every test context
/// contribute, and membership has set semantics: duplicate identical results
/// collapse to one entry. The returned map is an explicit owned value with
/// one entry per distinct class encountered; iteration order over the groups
/// is unspecified and must not be relied upon by consumers.
///
/// This step performs no I/O and cannot fail.
pub fn group_by_class(suites: &[Suite]) -> IndexMap<ClassId, IndexSet<TestResult>> {
    let mut groups: IndexMap<ClassId, IndexSet<TestResult>> = IndexMap::new();
    for suite in suites {
        for run_result in &suite.run_results {
            add_results(run_result.context.all_results(), &mut groups);
        }
    }
    groups
}

fn add_results<'a>(
    results: impl Iterator<Item = &'a TestResult>,
    groups: &mut IndexMap<ClassId, IndexSet<TestResult>>,
) {
    for result in results {
        groups
            .entry(result.class.clone())
            .or_default()
            .insert(result.clone());
    }
}
