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

//! Appointment, patient and provider entities produced by extraction
//!
//! `None` means the value was not present in the source message.

use serde::{Deserialize, Serialize};

/// Patient demographics from PID
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Patient identifier (PID-3)
    pub id: Option<String>,
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Normalized date of birth
    pub dob: Option<String>,
    /// Administrative gender code
    pub gender: Option<String>,
}

/// Scheduled provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Provider identifier
    pub id: Option<String>,
    /// Display name
    pub name: Option<String>,
}

impl Provider {
    /// Whether neither identifier nor name is known
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// Overlay present sub-fields of `other` onto this provider
    pub fn merge(&mut self, other: Provider) {
        if other.id.is_some() {
            self.id = other.id;
        }
        if other.name.is_some() {
            self.name = other.name;
        }
    }
}

/// Appointment extracted from one SIU message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Placer appointment identifier
    pub appointment_id: Option<String>,
    /// Normalized start datetime
    pub appointment_datetime: Option<String>,
    /// Patient, when a PID segment is present
    pub patient: Option<Patient>,
    /// Provider, when any provider source yields a value
    pub provider: Option<Provider>,
    /// Location text
    pub location: Option<String>,
    /// Reason text
    pub reason: Option<String>,
}

impl Appointment {
    /// Serialize to JSON
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
