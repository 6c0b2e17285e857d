// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Serialize a `ClassReport`.

use crate::{errors::SerializeError, ClassReport, FailureDetail, TestCase};
use quick_xml::{
    events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Writer,
};
use std::{borrow::Cow, io};

static TESTSUITE_TAG: &str = "testsuite";
static TESTCASE_TAG: &str = "testcase";
static ERROR_TAG: &str = "error";

pub(crate) fn serialize_class_report(
    report: &ClassReport,
    writer: impl io::Write,
) -> Result<(), SerializeError> {
    let mut writer = Writer::new_with_indent(writer, b' ', 4);

    let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
    writer.write_event(Event::Decl(decl))?;

    serialize_report_impl(report, &mut writer)?;

    // Add a trailing newline.
    writer.write_indent()?;
    Ok(())
}

fn serialize_report_impl(
    report: &ClassReport,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    // Use the destructuring syntax to ensure that all fields are handled.
    let ClassReport {
        name,
        generator,
        timestamp,
        hostname,
        tests,
        failures,
        errors,
        time_ms,
        test_cases,
    } = report;

    let comment = format!("Generated by {generator}");
    writer.write_event(Event::Comment(BytesText::from_escaped(comment.as_str())))?;

    let mut testsuite_tag = BytesStart::new(TESTSUITE_TAG);
    testsuite_tag.extend_attributes([
        ("name", name.as_str()),
        ("tests", tests.to_string().as_str()),
        ("failures", failures.to_string().as_str()),
        ("errors", errors.to_string().as_str()),
        ("time", time_ms.to_string().as_str()),
    ]);
    if let Some(timestamp) = timestamp {
        let formatted = timestamp.format("%-d %b %Y %H:%M:%S GMT").to_string();
        testsuite_tag.push_attribute(("timestamp", formatted.as_str()));
    }
    if let Some(hostname) = hostname {
        testsuite_tag.push_attribute(("hostname", hostname.as_str()));
    }
    writer.write_event(Event::Start(testsuite_tag))?;

    for test_case in test_cases {
        serialize_test_case(test_case, writer)?;
    }

    serialize_end_tag(TESTSUITE_TAG, writer)?;
    writer.write_event(Event::Eof)?;

    Ok(())
}

fn serialize_test_case(
    test_case: &TestCase,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    let mut testcase_tag = BytesStart::new(TESTCASE_TAG);
    testcase_tag.extend_attributes([
        ("classname", test_case.classname.as_str()),
        ("name", test_case.name.as_str()),
        ("time", test_case.time_ms.to_string().as_str()),
    ]);

    match &test_case.failure {
        None => {
            writer.write_event(Event::Empty(testcase_tag))?;
        }
        Some(failure) => {
            writer.write_event(Event::Start(testcase_tag))?;
            serialize_failure(failure, writer)?;
            serialize_end_tag(TESTCASE_TAG, writer)?;
        }
    }

    Ok(())
}

fn serialize_failure(
    failure: &FailureDetail,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    let mut error_tag = BytesStart::new(ERROR_TAG);
    // An unset message or type is rendered as an empty attribute value.
    error_tag.push_attribute(("message", failure.message.as_deref().unwrap_or("")));
    error_tag.push_attribute(("type", failure.ty.as_deref().unwrap_or("")));

    writer.write_event(Event::Start(error_tag))?;
    let cdata = BytesCData::new(split_cdata_end(&failure.stack_trace));
    writer.write_event(Event::CData(cdata))?;
    serialize_end_tag(ERROR_TAG, writer)?;

    Ok(())
}

fn serialize_end_tag(
    tag_name: &'static str,
    writer: &mut Writer<impl io::Write>,
) -> Result<(), SerializeError> {
    let end_tag = BytesEnd::new(tag_name);
    writer.write_event(Event::End(end_tag))?;
    Ok(())
}

// A literal "]]>" inside a CDATA section would terminate it early; split the
// sequence across two adjacent sections.
fn split_cdata_end(text: &str) -> Cow<'_, str> {
    if text.contains("]]>") {
        Cow::Owned(text.replace("]]>", "]]]]><![CDATA[>"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestStatus;

    #[test]
    fn cdata_end_sequence_is_split() {
        assert_eq!(split_cdata_end("no marker here"), "no marker here");
        assert_eq!(
            split_cdata_end("before ]]> after"),
            "before ]]]]><![CDATA[> after"
        );
    }

    #[test]
    fn hostname_attribute_is_omitted_when_absent() {
        let report = ClassReport::new("com.example.NoHost");
        let content = report.to_string().expect("serialization succeeds");
        assert!(
            !content.contains("hostname="),
            "no hostname attribute in {content}"
        );
    }

    #[test]
    fn absent_message_and_type_render_as_empty_attributes() {
        let mut report = ClassReport::new("com.example.NullThrowable");
        let mut test_case = TestCase::new(
            "com.example.NullThrowable",
            "throws_without_message",
            TestStatus::Failure,
        );
        test_case.set_failure(FailureDetail::new("trace text"));
        report.add_test_case(test_case);

        let content = report.to_string().expect("serialization succeeds");
        assert!(
            content.contains(r#"<error message="" type=""><![CDATA[trace text]]></error>"#),
            "empty message/type attributes in {content}"
        );
    }
}
