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

//! Extraction priority tables
//!
//! Senders populate SCH inconsistently, so each attribute lists its candidate
//! positions in priority order. PV1 values are applied afterwards and replace
//! what SCH produced.

use super::location::{FieldLocation, PersonLayout};

/// Schedule activity information
pub const SCH: &str = "SCH";
/// Patient identification
pub const PID: &str = "PID";
/// Patient visit
pub const PV1: &str = "PV1";

/// MSH-9 list index. MSH-1 is the field separator itself, so MSH field N
/// sits at index N - 1.
pub const MESSAGE_TYPE_INDEX: usize = 8;

pub const APPOINTMENT_ID: &[FieldLocation] = &[FieldLocation::field(SCH, 1)];

pub const APPOINTMENT_DATETIME: &[FieldLocation] = &[
    FieldLocation::component(SCH, 11, 4),
    FieldLocation::component(SCH, 2, 4),
    FieldLocation::first_date_like(SCH, 2),
];

pub const REASON: &[FieldLocation] = &[FieldLocation::field(SCH, 7), FieldLocation::field(SCH, 3)];

pub const LOCATION: &[FieldLocation] = &[
    FieldLocation::component(SCH, 11, 3),
    FieldLocation::component(SCH, 4, 3),
];

pub const LOCATION_OVERRIDE: &[FieldLocation] = &[FieldLocation::component(PV1, 3, 1)];

/// Provider sources tried in order; the first yielding an id or a name wins
pub const PROVIDER: &[PersonLayout] = &[
    // SCH-16 filler contact person: last^first^middle^suffix^id
    PersonLayout {
        segment: SCH,
        field: 16,
        last: 1,
        first: 2,
        middle: Some(3),
        suffix: Some(4),
        id: &[5],
    },
    // SCH-5: ^last^first^title^id
    PersonLayout {
        segment: SCH,
        field: 5,
        last: 2,
        first: 3,
        middle: None,
        suffix: Some(4),
        id: &[5],
    },
];

/// PV1-7 attending doctor, merged per sub-field over [`PROVIDER`]
pub const PROVIDER_OVERRIDE: PersonLayout = PersonLayout {
    segment: PV1,
    field: 7,
    last: 2,
    first: 3,
    middle: None,
    suffix: Some(4),
    id: &[5, 7],
};

pub const PATIENT_ID: &[FieldLocation] = &[FieldLocation::field(PID, 3)];

pub const PATIENT_NAME: &[FieldLocation] = &[FieldLocation::field(PID, 5)];

pub const PATIENT_DOB: &[FieldLocation] = &[FieldLocation::field(PID, 7)];

pub const PATIENT_GENDER: &[FieldLocation] = &[FieldLocation::field(PID, 8)];
