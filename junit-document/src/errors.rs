// Copyright (c) The junit-reports Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while serializing a [`ClassReport`](crate::ClassReport).
///
/// Returned by [`ClassReport::serialize`](crate::ClassReport::serialize) and
/// [`ClassReport::to_string`](crate::ClassReport::to_string).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializeError {
    /// An error occurred while writing XML events.
    #[error("error serializing JUnit report")]
    Xml(#[from] quick_xml::Error),

    /// The serialized document was not valid UTF-8.
    #[error("serialized JUnit report is invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}
