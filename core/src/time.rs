// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.

use std::fmt::Debug;

use chrono::SecondsFormat;
use chrono::Utc;

use crate::{Error, Result};

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 basic format: `20240101T000000Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Format time into http date: `Mon, 01 Jan 2024 00:00:00 GMT`
///
/// # Note
///
/// HTTP date is slightly different from RFC2822.
///
/// - Timezone is fixed to GMT.
/// - Day must be 2 digit.
pub fn format_http_date(t: DateTime) -> String {
    t.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Format time into RFC 3339: `2024-01-01T00:00:00Z`
pub fn format_rfc3339(t: DateTime) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// TimestampFormat is the numeric selector handed to a [`TimestampSource`].
///
/// Callers treat the code as opaque; only the source decides what it means.
/// The associated constants name the codes understood by the sources in
/// this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimestampFormat(u32);

impl TimestampFormat {
    /// Unix timestamp in seconds: `1704067200`
    pub const UNIX_SECONDS: Self = Self(0);
    /// ISO 8601 basic format: `20240101T000000Z`
    pub const ISO8601: Self = Self(1);
    /// HTTP date: `Mon, 01 Jan 2024 00:00:00 GMT`
    pub const HTTP_DATE: Self = Self(2);
    /// RFC 3339: `2024-01-01T00:00:00Z`
    pub const RFC3339: Self = Self(3);

    /// Create a format selector from its numeric code.
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// The numeric code of this selector.
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Render `t` in this format.
    ///
    /// Returns [`crate::ErrorKind::TimestampUnavailable`] for unknown codes.
    pub fn format(self, t: DateTime) -> Result<String> {
        match self {
            Self::UNIX_SECONDS => Ok(t.timestamp().to_string()),
            Self::ISO8601 => Ok(format_iso8601(t)),
            Self::HTTP_DATE => Ok(format_http_date(t)),
            Self::RFC3339 => Ok(format_rfc3339(t)),
            Self(code) => Err(Error::timestamp_unavailable(format!(
                "unknown timestamp format code: {code}"
            ))),
        }
    }
}

/// TimestampSource produces the textual "now" used in signatures.
pub trait TimestampSource: Debug + Send + Sync + 'static {
    /// Generate a timestamp rendered with the given format.
    fn generate_timestamp(&self, format: TimestampFormat) -> Result<String>;
}

/// TimestampSource that reads the system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimestamp;

impl TimestampSource for SystemTimestamp {
    fn generate_timestamp(&self, format: TimestampFormat) -> Result<String> {
        format.format(now())
    }
}

/// TimestampSource that always reports the same instant.
///
/// # Note
///
/// Signatures must always be taken with the current time. Only use this
/// for testing or for reproducing a signature captured earlier.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestamp(DateTime);

impl FixedTimestamp {
    /// Create a source pinned at `time`.
    pub fn new(time: DateTime) -> Self {
        Self(time)
    }
}

impl TimestampSource for FixedTimestamp {
    fn generate_timestamp(&self, format: TimestampFormat) -> Result<String> {
        format.format(self.0)
    }
}
