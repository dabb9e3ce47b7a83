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

//! Tokenized HL7 message and bounds-checked field access
//!
//! Every accessor returns `None` for anything that is not there: unknown
//! segment, short segment, empty field, missing component. Real feeds omit
//! trailing fields freely, so absence is the normal case rather than an error.

use crate::parser::delimiters::DelimiterSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One physical segment occurrence.
///
/// `fields[0]` is the segment tag, so HL7 field N lives at index N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Fields split on the field separator, tag included
    pub fields: Vec<String>,
}

impl Segment {
    /// Create a segment from its field list
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Segment tag (`MSH`, `SCH`, ...)
    pub fn segment_type(&self) -> &str {
        self.fields.first().map(String::as_str).unwrap_or_default()
    }

    /// Number of fields after the tag
    pub fn len(&self) -> usize {
        self.fields.len().saturating_sub(1)
    }

    /// Whether the segment carries no fields after the tag
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw field value; empty fields are absent
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// 1-based component of a field; empty components are absent
    pub fn component(&self, index: usize, component: usize, delimiter: char) -> Option<&str> {
        let position = component.checked_sub(1)?;
        self.field(index)?
            .split(delimiter)
            .nth(position)
            .filter(|value| !value.is_empty())
    }

    /// All components of a field, empty ones included to preserve positions
    pub fn components(&self, index: usize, delimiter: char) -> Vec<&str> {
        self.field(index)
            .map(|value| value.split(delimiter).collect())
            .unwrap_or_default()
    }
}

/// A message split into segments, grouped by type in arrival order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedMessage {
    /// Original message text
    pub raw: String,
    /// Segment occurrences keyed by 3-character type, first-seen order
    pub segments: IndexMap<String, Vec<Segment>>,
    /// Delimiters resolved from the header
    pub delimiters: DelimiterSet,
}

impl ParsedMessage {
    /// Create an empty message for the given source and delimiters
    pub fn new(raw: impl Into<String>, delimiters: DelimiterSet) -> Self {
        Self {
            raw: raw.into(),
            segments: IndexMap::new(),
            delimiters,
        }
    }

    /// Append a segment occurrence under its type
    pub fn push_segment(&mut self, segment_type: impl Into<String>, segment: Segment) {
        self.segments
            .entry(segment_type.into())
            .or_default()
            .push(segment);
    }

    /// Whether at least one segment of the type is present
    pub fn has_segment(&self, segment_type: &str) -> bool {
        self.segment(segment_type).is_some()
    }

    /// First occurrence of a segment type, the authoritative one for single-valued data
    pub fn segment(&self, segment_type: &str) -> Option<&Segment> {
        self.segments.get(segment_type)?.first()
    }

    /// Every occurrence of a segment type
    pub fn segments_of(&self, segment_type: &str) -> &[Segment] {
        self.segments
            .get(segment_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Segment types in first-seen order
    pub fn segment_types(&self) -> impl Iterator<Item = &str> {
        self.segments.keys().map(String::as_str)
    }

    /// Look up a field, or a 1-based component of it, in the first segment of a type
    pub fn get_field(
        &self,
        segment_type: &str,
        field: usize,
        component: Option<usize>,
    ) -> Option<&str> {
        let segment = self.segment(segment_type)?;
        match component {
            Some(component) => segment.component(field, component, self.delimiters.component),
            None => segment.field(field),
        }
    }

    /// Look up a 1-based subcomponent of a component
    pub fn get_subcomponent(
        &self,
        segment_type: &str,
        field: usize,
        component: usize,
        subcomponent: usize,
    ) -> Option<&str> {
        let position = subcomponent.checked_sub(1)?;
        self.get_field(segment_type, field, Some(component))?
            .split(self.delimiters.subcomponent)
            .nth(position)
            .filter(|value| !value.is_empty())
    }

    /// All components of a field in the first segment of a type
    pub fn components(&self, segment_type: &str, field: usize) -> Vec<&str> {
        self.segment(segment_type)
            .map(|segment| segment.components(field, self.delimiters.component))
            .unwrap_or_default()
    }
}
