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

//! Message delimiter discovery from the MSH header

use crate::error::{Result, SiuError};
use serde::{Deserialize, Serialize};

/// Segment type of the message header
pub const HEADER_SEGMENT: &str = "MSH";

/// The five HL7 encoding characters of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterSet {
    /// Field separator (MSH-1)
    pub field: char,
    /// Component separator
    pub component: char,
    /// Subcomponent separator
    pub subcomponent: char,
    /// Repetition separator
    pub repetition: char,
    /// Escape character
    pub escape: char,
}

impl Default for DelimiterSet {
    fn default() -> Self {
        Self {
            field: '|',
            component: '^',
            subcomponent: '&',
            repetition: '~',
            escape: '\\',
        }
    }
}

impl DelimiterSet {
    /// Resolve the delimiters declared by a header segment.
    ///
    /// The character after the 3-character tag is the field separator. When
    /// MSH-2 follows, its first four characters override component,
    /// repetition, escape and subcomponent in that order. Fewer than four
    /// encoding characters keep all defaults.
    pub fn from_header(header: &str) -> Result<Self> {
        let mut chars = header.chars();
        let tag: String = chars.by_ref().take(3).collect();
        if tag != HEADER_SEGMENT {
            return Err(SiuError::structural(format!(
                "Header segment must start with {HEADER_SEGMENT}"
            )));
        }

        let field = chars
            .next()
            .ok_or_else(|| SiuError::structural("Invalid MSH segment: missing field separator"))?;

        let mut delimiters = Self {
            field,
            ..Self::default()
        };

        let encoding: Vec<char> = chars.take_while(|c| *c != field).take(4).collect();
        if let [component, repetition, escape, subcomponent] = encoding[..] {
            delimiters.component = component;
            delimiters.repetition = repetition;
            delimiters.escape = escape;
            delimiters.subcomponent = subcomponent;
        }

        Ok(delimiters)
    }

    /// MSH-2 rendering of the encoding characters
    pub fn encoding_characters(&self) -> String {
        [
            self.component,
            self.repetition,
            self.escape,
            self.subcomponent,
        ]
        .iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_header() {
        let delimiters = DelimiterSet::from_header("MSH|^~\\&|SYS|FAC").unwrap();
        assert_eq!(delimiters, DelimiterSet::default());
        assert_eq!(delimiters.encoding_characters(), "^~\\&");
    }

    #[test]
    fn test_custom_delimiters() {
        let delimiters = DelimiterSet::from_header("MSH#*@!%#SYS").unwrap();
        assert_eq!(delimiters.field, '#');
        assert_eq!(delimiters.component, '*');
        assert_eq!(delimiters.repetition, '@');
        assert_eq!(delimiters.escape, '!');
        assert_eq!(delimiters.subcomponent, '%');
    }

    #[test]
    fn test_partial_encoding_keeps_defaults() {
        let delimiters = DelimiterSet::from_header("MSH|*@|SYS").unwrap();
        assert_eq!(delimiters.field, '|');
        assert_eq!(delimiters.component, '^');
        assert_eq!(delimiters.repetition, '~');

        let delimiters = DelimiterSet::from_header("MSH|").unwrap();
        assert_eq!(delimiters, DelimiterSet::default());
    }

    #[test]
    fn test_short_header_is_structural_error() {
        assert!(matches!(
            DelimiterSet::from_header("MSH"),
            Err(SiuError::Structural { .. })
        ));
        assert!(matches!(
            DelimiterSet::from_header("MS"),
            Err(SiuError::Structural { .. })
        ));
    }
}
