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

//! Segment tokenizer
//!
//! Splits raw message text into segments and fields:
//! - `\r`, `\n` and `\r\n` all terminate a segment
//! - blank lines are dropped
//! - the first three characters of a line are its segment type
//! - the line is split on the field separator, keeping the tag at index 0

use super::delimiters::{DelimiterSet, HEADER_SEGMENT};
use crate::error::{Result, SiuError};
use crate::model::{ParsedMessage, Segment};

/// Iterate over the non-blank segment lines of a text, whatever its line endings
pub fn segment_lines(text: &str) -> impl Iterator<Item = &str> + Clone {
    text.split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
}

/// The 3-character type prefix of a segment line
pub fn segment_type(line: &str) -> &str {
    match line.char_indices().nth(3) {
        Some((end, _)) => &line[..end],
        None => line,
    }
}

/// Tokenize a raw HL7 message.
///
/// Fails with a structural error when the text is blank or does not start
/// with a well-formed MSH segment.
pub fn parse_message(raw: &str) -> Result<ParsedMessage> {
    let mut lines = segment_lines(raw.trim()).peekable();

    let header = lines
        .peek()
        .copied()
        .ok_or_else(|| SiuError::structural("Empty message"))?;

    if segment_type(header) != HEADER_SEGMENT {
        return Err(SiuError::structural(format!(
            "Message must start with {HEADER_SEGMENT} segment"
        )));
    }

    let delimiters = DelimiterSet::from_header(header)?;
    let mut message = ParsedMessage::new(raw, delimiters);

    for line in lines {
        let fields = line
            .split(delimiters.field)
            .map(str::to_string)
            .collect::<Vec<_>>();
        message.push_segment(segment_type(line), Segment::new(fields));
    }

    log::debug!(
        "Tokenized message with segments: {:?}",
        message.segment_types().collect::<Vec<_>>()
    );

    Ok(message)
}
