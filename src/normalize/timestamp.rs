// Copyright 2024 OctoFHIR Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Precision-aware HL7 timestamps (DTM)
//!
//! HL7 sends `YYYY[MM[DD[HH[MM[SS[.S[S[S[S]]]]]]]]][+/-ZZZZ]`. Missing parts
//! default to the start of the period and the canonical rendering always
//! carries second precision.

use crate::error::{Result, SiuError};
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static DTM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<digits>[0-9]+)(?P<fraction>\.[0-9]{1,4})?(?P<offset>[+-][0-9]{4})?$")
        .expect("DTM pattern is valid")
});

/// Precision levels of an HL7 timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub enum TemporalPrecision {
    /// YYYY
    Year,
    /// YYYYMM
    Month,
    /// YYYYMMDD
    Day,
    /// YYYYMMDDHH
    Hour,
    /// YYYYMMDDHHMM
    Minute,
    /// YYYYMMDDHHMMSS
    Second,
}

impl TemporalPrecision {
    /// Number of digits this precision consumes
    pub fn precision_digits(&self) -> usize {
        match self {
            Self::Year => 4,
            Self::Month => 6,
            Self::Day => 8,
            Self::Hour => 10,
            Self::Minute => 12,
            Self::Second => 14,
        }
    }

    /// Highest precision a digit count supports
    pub fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            14.. => Some(Self::Second),
            12.. => Some(Self::Minute),
            10.. => Some(Self::Hour),
            8.. => Some(Self::Day),
            6.. => Some(Self::Month),
            4.. => Some(Self::Year),
            _ => None,
        }
    }
}

impl fmt::Display for TemporalPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => write!(f, "year"),
            Self::Month => write!(f, "month"),
            Self::Day => write!(f, "day"),
            Self::Hour => write!(f, "hour"),
            Self::Minute => write!(f, "minute"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// A parsed HL7 timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hl7Timestamp {
    /// Local date and time, defaults filled in
    pub datetime: NaiveDateTime,
    /// Zone offset, when the source carried one
    pub offset: Option<FixedOffset>,
    /// Precision of the source value
    pub precision: TemporalPrecision,
}

impl Hl7Timestamp {
    /// Parse an HL7 DTM value
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let invalid = |message: &str| SiuError::field_parse("DTM", format!("{message}: '{value}'"));

        let captures = DTM_PATTERN
            .captures(value)
            .ok_or_else(|| invalid("not an HL7 timestamp"))?;
        let digits = &captures["digits"];

        let precision = TemporalPrecision::from_digit_count(digits.len())
            .ok_or_else(|| invalid("fewer than 4 digits"))?;
        if captures.name("fraction").is_some() && precision != TemporalPrecision::Second {
            return Err(invalid("fractional seconds without seconds"));
        }

        let part = |index: usize, default: u32| -> u32 {
            let start = 4 + (index - 1) * 2;
            if start + 2 <= precision.precision_digits() {
                digits[start..start + 2].parse().unwrap_or(u32::MAX)
            } else {
                default
            }
        };

        let year: i32 = digits[..4].parse().map_err(|_| invalid("invalid year"))?;
        let date = NaiveDate::from_ymd_opt(year, part(1, 1), part(2, 1))
            .ok_or_else(|| invalid("invalid calendar date"))?;
        let time = NaiveTime::from_hms_opt(part(3, 0), part(4, 0), part(5, 0))
            .ok_or_else(|| invalid("invalid time of day"))?;

        let offset = captures
            .name("offset")
            .map(|offset| {
                parse_offset(offset.as_str()).ok_or_else(|| invalid("invalid zone offset"))
            })
            .transpose()?;

        Ok(Self {
            datetime: NaiveDateTime::new(date, time),
            offset,
            precision,
        })
    }
}

/// Parse `+HHMM` / `-HHMM`
fn parse_offset(offset: &str) -> Option<FixedOffset> {
    let (sign, rest) = offset.split_at(1);
    let hours: i32 = rest.get(..2)?.parse().ok()?;
    let minutes: i32 = rest.get(2..4)?.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    let seconds = (hours * 3600 + minutes * 60) * if sign == "-" { -1 } else { 1 };
    FixedOffset::east_opt(seconds)
}

impl FromStr for Hl7Timestamp {
    type Err = SiuError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Hl7Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S"))?;
        if let Some(offset) = self.offset {
            let seconds = offset.local_minus_utc();
            let sign = if seconds < 0 { '-' } else { '+' };
            let seconds = seconds.abs();
            write!(f, "{sign}{:02}:{:02}", seconds / 3600, seconds % 3600 / 60)?;
        }
        Ok(())
    }
}

/// Normalize an HL7 timestamp to `YYYY-MM-DDTHH:MM:SS[±HH:MM]`.
///
/// Returns `None` for anything that is not a valid timestamp.
pub fn normalize_timestamp(value: &str) -> Option<String> {
    match Hl7Timestamp::parse(value) {
        Ok(timestamp) => Some(timestamp.to_string()),
        Err(err) => {
            log::debug!("Ignoring timestamp: {err}");
            None
        }
    }
}
