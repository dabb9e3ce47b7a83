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

//! Typed field locations and the "first present wins" resolver
//!
//! A logical attribute is described by an ordered slice of [`FieldLocation`]s.
//! [`first_present`] walks the slice and returns the first non-empty value,
//! so a priority table stays a plain constant.

use crate::model::{ParsedMessage, Provider};
use crate::normalize::PersonName;
use std::fmt;

/// Minimum length of a component that can hold a date (`YYYYMMDD`)
pub const MIN_DATE_TOKEN_LEN: usize = 8;

/// What to take from a located field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// The whole field
    Field,
    /// A 1-based component
    Component(usize),
    /// The first component that looks like a date token
    FirstDateLike,
}

/// A candidate position of a value inside a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLocation {
    /// Segment type
    pub segment: &'static str,
    /// 1-based field number
    pub field: usize,
    /// Part of the field to take
    pub selector: Selector,
}

impl FieldLocation {
    /// A whole field
    pub const fn field(segment: &'static str, field: usize) -> Self {
        Self {
            segment,
            field,
            selector: Selector::Field,
        }
    }

    /// A 1-based component of a field
    pub const fn component(segment: &'static str, field: usize, component: usize) -> Self {
        Self {
            segment,
            field,
            selector: Selector::Component(component),
        }
    }

    /// The first date-like component of a field
    pub const fn first_date_like(segment: &'static str, field: usize) -> Self {
        Self {
            segment,
            field,
            selector: Selector::FirstDateLike,
        }
    }

    /// Value at this location, `None` when absent or empty
    pub fn resolve<'m>(&self, message: &'m ParsedMessage) -> Option<&'m str> {
        match self.selector {
            Selector::Field => message.get_field(self.segment, self.field, None),
            Selector::Component(component) => {
                message.get_field(self.segment, self.field, Some(component))
            }
            Selector::FirstDateLike => message
                .components(self.segment, self.field)
                .into_iter()
                .find(|component| looks_like_date(component)),
        }
    }
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.selector {
            Selector::Field => write!(f, "{}-{}", self.segment, self.field),
            Selector::Component(component) => {
                write!(f, "{}-{}.{}", self.segment, self.field, component)
            }
            Selector::FirstDateLike => write!(f, "{}-{}.*", self.segment, self.field),
        }
    }
}

/// Whether a component starts with a full `YYYYMMDD` date
pub fn looks_like_date(value: &str) -> bool {
    value.len() >= MIN_DATE_TOKEN_LEN
        && value.as_bytes()[..MIN_DATE_TOKEN_LEN]
            .iter()
            .all(u8::is_ascii_digit)
}

/// First non-empty value along a priority chain
pub fn first_present<'m>(message: &'m ParsedMessage, chain: &[FieldLocation]) -> Option<&'m str> {
    chain.iter().find_map(|location| location.resolve(message))
}

/// First value along a priority chain that `convert` accepts.
///
/// A present but unconvertible value falls through to the next candidate.
pub fn first_converted<'m, T>(
    message: &'m ParsedMessage,
    chain: &[FieldLocation],
    mut convert: impl FnMut(&'m str) -> Option<T>,
) -> Option<T> {
    chain.iter().find_map(|location| {
        let value = location.resolve(message)?;
        let converted = convert(value);
        if converted.is_none() {
            log::debug!("Value '{value}' at {location} rejected, trying next candidate");
        }
        converted
    })
}

/// Component layout of a person reference (XCN-like) inside one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonLayout {
    /// Segment type
    pub segment: &'static str,
    /// 1-based field number
    pub field: usize,
    /// Component holding the family name
    pub last: usize,
    /// Component holding the given name
    pub first: usize,
    /// Component holding the middle name
    pub middle: Option<usize>,
    /// Component holding the suffix or title
    pub suffix: Option<usize>,
    /// Components that may hold the identifier, in priority order
    pub id: &'static [usize],
}

impl PersonLayout {
    fn component<'m>(&self, message: &'m ParsedMessage, component: usize) -> Option<&'m str> {
        message.get_field(self.segment, self.field, Some(component))
    }

    /// Display name assembled from the layout's components
    pub fn name(&self, message: &ParsedMessage) -> PersonName {
        PersonName::from_parts(
            self.component(message, self.last),
            self.component(message, self.first),
            self.middle.and_then(|c| self.component(message, c)),
            self.suffix.and_then(|c| self.component(message, c)),
            None,
        )
    }

    /// Provider read through this layout, `None` when nothing is present
    pub fn resolve(&self, message: &ParsedMessage) -> Option<Provider> {
        let provider = Provider {
            id: self
                .id
                .iter()
                .find_map(|c| self.component(message, *c))
                .map(str::to_string),
            name: self.name(message).display_name(),
        };
        (!provider.is_empty()).then_some(provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_message;

    fn message() -> ParsedMessage {
        parse_message(
            "MSH|^~\\&|A|B|C|D|20250502090000||SIU^S12|1|P|2.5\r\
SCH|123|foo^2025^20250502130000^20250503|||^Smith^Jane^MD^D67890\r\
PV1|1|O|OPD^203",
        )
        .unwrap()
    }

    #[test]
    fn test_first_present_order() {
        let message = message();
        let chain = [
            FieldLocation::field("PID", 3),
            FieldLocation::component("SCH", 2, 9),
            FieldLocation::field("SCH", 1),
            FieldLocation::component("PV1", 3, 1),
        ];
        assert_eq!(first_present(&message, &chain), Some("123"));
        assert_eq!(first_present(&message, &chain[..2]), None);
    }

    #[test]
    fn test_first_date_like_component() {
        let message = message();
        let location = FieldLocation::first_date_like("SCH", 2);
        assert_eq!(location.resolve(&message), Some("20250502130000"));
        assert_eq!(location.to_string(), "SCH-2.*");
    }

    #[test]
    fn test_first_converted_falls_through() {
        let message = message();
        let chain = [
            FieldLocation::component("SCH", 2, 1),
            FieldLocation::component("SCH", 2, 4),
        ];
        let value = first_converted(&message, &chain, |v| v.parse::<u64>().ok());
        assert_eq!(value, Some(20250503));
    }

    #[test]
    fn test_looks_like_date() {
        assert!(looks_like_date("20250502"));
        assert!(looks_like_date("20250502130000+0500"));
        assert!(!looks_like_date("2025050"));
        assert!(!looks_like_date("2025-05-02"));
        assert!(!looks_like_date("ROUTINE-VISIT"));
    }

    #[test]
    fn test_person_layout() {
        let message = message();
        let layout = PersonLayout {
            segment: "SCH",
            field: 5,
            last: 2,
            first: 3,
            middle: None,
            suffix: Some(4),
            id: &[5],
        };
        let provider = layout.resolve(&message).unwrap();
        assert_eq!(provider.id.as_deref(), Some("D67890"));
        assert_eq!(provider.name.as_deref(), Some("Jane Smith MD"));

        let missing = PersonLayout {
            field: 9,
            ..layout
        };
        assert_eq!(missing.resolve(&message), None);
    }

    #[test]
    fn test_location_display() {
        assert_eq!(FieldLocation::field("SCH", 7).to_string(), "SCH-7");
        assert_eq!(FieldLocation::component("PV1", 3, 1).to_string(), "PV1-3.1");
    }
}
