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

//! Appointment extraction from parsed SIU messages
//!
//! Extraction never fails: every attribute is resolved through its priority
//! table in [`rules`] and left `None` when no candidate yields a value.

pub mod location;
pub mod rules;
pub mod validate;

pub use location::{FieldLocation, PersonLayout, Selector, first_converted, first_present};
pub use validate::{MessageType, validate_type, validate_type_with};

use crate::model::{Appointment, ParsedMessage, Patient, Provider};
use crate::normalize::{PersonName, normalize_timestamp};

fn text(message: &ParsedMessage, chain: &[FieldLocation]) -> Option<String> {
    first_present(message, chain).map(str::to_string)
}

/// Build the appointment described by a parsed message
pub fn extract_appointment(message: &ParsedMessage) -> Appointment {
    let mut appointment = Appointment {
        appointment_id: text(message, rules::APPOINTMENT_ID),
        appointment_datetime: first_converted(
            message,
            rules::APPOINTMENT_DATETIME,
            normalize_timestamp,
        ),
        patient: extract_patient(message),
        provider: rules::PROVIDER
            .iter()
            .find_map(|layout| layout.resolve(message)),
        location: text(message, rules::LOCATION),
        reason: text(message, rules::REASON),
    };

    // PV1 is applied whether or not SCH was present
    if let Some(location) = text(message, rules::LOCATION_OVERRIDE) {
        appointment.location = Some(location);
    }
    if let Some(attending) = rules::PROVIDER_OVERRIDE.resolve(message) {
        appointment
            .provider
            .get_or_insert_with(Provider::default)
            .merge(attending);
    }

    log::debug!(
        "Extracted appointment {:?} at {:?}",
        appointment.appointment_id,
        appointment.appointment_datetime
    );

    appointment
}

/// Build the patient from PID, `None` only when the message has no PID
pub fn extract_patient(message: &ParsedMessage) -> Option<Patient> {
    if !message.has_segment(rules::PID) {
        return None;
    }

    let name = first_present(message, rules::PATIENT_NAME)
        .map(|field| PersonName::parse(field, message.delimiters.component))
        .unwrap_or_default();

    Some(Patient {
        id: text(message, rules::PATIENT_ID),
        first_name: name.first,
        last_name: name.last,
        dob: first_converted(message, rules::PATIENT_DOB, normalize_timestamp),
        gender: text(message, rules::PATIENT_GENDER),
    })
}
