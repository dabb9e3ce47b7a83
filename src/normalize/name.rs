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

//! Person name (XPN) decomposition

use serde::{Deserialize, Serialize};

/// A decomposed person name. Empty components are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    /// Family name
    pub last: Option<String>,
    /// Given name
    pub first: Option<String>,
    /// Middle name or initial
    pub middle: Option<String>,
    /// Suffix or degree, e.g. `Jr.`, `MD`
    pub suffix: Option<String>,
    /// Prefix, e.g. `Mr.`, `Dr.`
    pub prefix: Option<String>,
}

fn present(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

impl PersonName {
    /// Decompose an XPN field: family, given, middle, suffix, prefix
    pub fn parse(field: &str, component_delimiter: char) -> Self {
        let mut components = field.split(component_delimiter);
        Self {
            last: present(components.next()),
            first: present(components.next()),
            middle: present(components.next()),
            suffix: present(components.next()),
            prefix: present(components.next()),
        }
    }

    /// Build a name from individually located components
    pub fn from_parts(
        last: Option<&str>,
        first: Option<&str>,
        middle: Option<&str>,
        suffix: Option<&str>,
        prefix: Option<&str>,
    ) -> Self {
        Self {
            last: present(last),
            first: present(first),
            middle: present(middle),
            suffix: present(suffix),
            prefix: present(prefix),
        }
    }

    /// Whether no component is present
    pub fn is_empty(&self) -> bool {
        self.display_name().is_none()
    }

    /// Display form: prefix, first, middle, last, suffix joined by single spaces
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [
            &self.prefix,
            &self.first,
            &self.middle,
            &self.last,
            &self.suffix,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .collect();

        (!parts.is_empty()).then(|| parts.join(" "))
    }
}
