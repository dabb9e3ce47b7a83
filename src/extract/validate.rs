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

//! Message type validation (MSH-9)

use super::rules::MESSAGE_TYPE_INDEX;
use crate::config::{TriggerPolicy, ValidationConfig};
use crate::error::{Result, SiuError};
use crate::model::ParsedMessage;
use crate::parser::HEADER_SEGMENT;

/// Message type and trigger event read from MSH-9
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageType {
    /// Message type code, e.g. `SIU`
    pub code: String,
    /// Trigger event, e.g. `S12`, when the sender included one
    pub trigger: Option<String>,
}

impl MessageType {
    /// Read MSH-9 from a parsed message
    pub fn from_message(message: &ParsedMessage) -> Result<Self> {
        let header = message
            .segment(HEADER_SEGMENT)
            .ok_or_else(|| SiuError::structural("MSH segment missing"))?;

        let value = header
            .fields
            .get(MESSAGE_TYPE_INDEX)
            .ok_or_else(|| SiuError::structural("MSH segment missing message type field"))?;

        let mut parts = value.split(message.delimiters.component);
        let code = parts.next().unwrap_or_default().to_string();
        let trigger = parts
            .next()
            .filter(|trigger| !trigger.is_empty())
            .map(str::to_string);

        Ok(Self { code, trigger })
    }
}

/// Check that a message is an SIU message using the default configuration
pub fn validate_type(message: &ParsedMessage) -> Result<MessageType> {
    validate_type_with(message, &ValidationConfig::default())
}

/// Check the message type, applying the configured trigger policy
pub fn validate_type_with(
    message: &ParsedMessage,
    config: &ValidationConfig,
) -> Result<MessageType> {
    let message_type = MessageType::from_message(message)?;

    if message_type.code != config.expected_message_type {
        return Err(SiuError::wrong_type(
            &config.expected_message_type,
            &message_type.code,
        ));
    }

    if let Some(trigger) = message_type
        .trigger
        .as_deref()
        .filter(|trigger| *trigger != config.expected_trigger)
    {
        match config.trigger_policy {
            TriggerPolicy::Accept => {}
            TriggerPolicy::Warn => log::warn!(
                "Unexpected trigger event {trigger} (expected {}), extracting anyway",
                config.expected_trigger
            ),
            TriggerPolicy::Reject => {
                return Err(SiuError::unexpected_trigger(&config.expected_trigger, trigger));
            }
        }
    }

    Ok(message_type)
}
