// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{TimeZone, Utc};
use goldenfile::Mint;
use junit_document::{ClassReport, FailureDetail, TestCase, TestStatus};

#[test]
fn fixtures() {
    let mut mint = Mint::new("tests/fixtures");

    let f = mint
        .new_goldenfile("per_class_report.xml")
        .expect("creating new goldenfile succeeds");
    passing_report()
        .serialize(f)
        .expect("serializing passing report succeeds");

    let f = mint
        .new_goldenfile("error_report.xml")
        .expect("creating new goldenfile succeeds");
    error_report()
        .serialize(f)
        .expect("serializing error report succeeds");
}

fn passing_report() -> ClassReport {
    let mut report = ClassReport::new("org.example.CalculatorTest");
    report
        .set_timestamp(
            Utc.with_ymd_and_hms(2021, 8, 12, 17, 12, 0)
                .single()
                .expect("valid timestamp"),
        )
        .set_hostname("build-host");

    let mut test_case = TestCase::new("org.example.CalculatorTest", "adds", TestStatus::Success);
    test_case.set_time_ms(10);
    report.add_test_case(test_case);

    let mut test_case = TestCase::new(
        "org.example.CalculatorTest",
        "subtracts",
        TestStatus::Success,
    );
    test_case.set_time_ms(20);
    report.add_test_case(test_case);

    report
}

fn error_report() -> ClassReport {
    // No hostname, as if host-name resolution failed.
    let mut report = ClassReport::new("org.example.FailingTest");
    report.set_timestamp(
        Utc.with_ymd_and_hms(2021, 8, 12, 17, 12, 0)
            .single()
            .expect("valid timestamp"),
    );

    let mut failure = FailureDetail::new(
        "java.lang.IllegalStateException: boom\n\
         \tat org.example.FailingTest.throws(FailingTest.java:12)\n\
         \tat org.example.Runner.run(Runner.java:40)",
    );
    failure
        .set_message("boom")
        .set_type("java.lang.IllegalStateException");

    let mut test_case = TestCase::new("org.example.FailingTest", "throws", TestStatus::Failure);
    test_case.set_time_ms(42).set_failure(failure);
    report.add_test_case(test_case);

    report
}
