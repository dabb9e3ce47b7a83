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

//! Error types for SIU message parsing
//!
//! Header-level problems are errors; field-level problems (bad timestamps,
//! short segments) are reported as absent values by the extraction layer.

use thiserror::Error;

/// Result type alias for SIU parsing operations
pub type Result<T> = std::result::Result<T, SiuError>;

/// Error taxonomy for HL7 SIU parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiuError {
    /// The message is not structurally HL7: empty, or the MSH header is missing,
    /// too short, or not the first segment
    #[error("Structural error: {message}")]
    Structural {
        /// Human-readable error message
        message: String,
    },

    /// The header is well-formed but the message type is not the expected one
    #[error("Wrong message type: expected {expected}, got '{actual}'")]
    WrongType {
        /// Expected message type code
        expected: String,
        /// Message type code found in MSH-9
        actual: String,
    },

    /// The trigger event differs from the expected one and the trigger policy rejects it
    #[error("Unexpected trigger event: expected {expected}, got '{actual}'")]
    UnexpectedTrigger {
        /// Expected trigger event code
        expected: String,
        /// Trigger event code found in MSH-9
        actual: String,
    },

    /// Malformed field content
    #[error("Field parse error at {location}: {message}")]
    FieldParse {
        /// Segment/field location, e.g. `SCH-11.4`
        location: String,
        /// Human-readable error message
        message: String,
    },

    /// Input file could not be read
    #[error("Could not read file {path}: {message}")]
    Io {
        /// Path of the file
        path: String,
        /// Underlying I/O error message
        message: String,
    },
}

impl SiuError {
    /// Create a structural error
    pub fn structural(message: impl Into<String>) -> Self {
        Self::Structural {
            message: message.into(),
        }
    }

    /// Create a wrong message type error
    pub fn wrong_type(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::WrongType {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an unexpected trigger event error
    pub fn unexpected_trigger(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::UnexpectedTrigger {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a field parse error
    pub fn field_parse(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FieldParse {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error for the given path
    pub fn io(path: impl Into<String>, error: &std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Whether a batch should skip this message without reporting it
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::WrongType { .. } | Self::UnexpectedTrigger { .. })
    }

    /// Whether this error must abort a whole batch rather than a single message
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
