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

//! Configuration for validation and batch processing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do with a trigger event other than the expected one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TriggerPolicy {
    /// Extract silently
    Accept,
    /// Extract and log a warning
    #[default]
    Warn,
    /// Reject the message as an unexpected trigger
    Reject,
}

/// What a batch does with a message that fails to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Drop the message silently
    Skip,
    /// Drop the message and log a warning
    #[default]
    Warn,
    /// Drop the message and mark the batch as failed
    Fail,
}

/// Message type validation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Required MSH-9.1 message type
    pub expected_message_type: String,
    /// Expected MSH-9.2 trigger event
    pub expected_trigger: String,
    /// Handling of other trigger events
    pub trigger_policy: TriggerPolicy,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            expected_message_type: "SIU".to_string(),
            expected_trigger: "S12".to_string(),
            trigger_policy: TriggerPolicy::default(),
        }
    }
}

impl ValidationConfig {
    /// Use a different trigger policy
    pub fn with_trigger_policy(mut self, trigger_policy: TriggerPolicy) -> Self {
        self.trigger_policy = trigger_policy;
        self
    }
}

/// Batch processing options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Validation applied to each message
    pub validation: ValidationConfig,
    /// Handling of failing messages
    pub error_policy: ErrorPolicy,
    /// Parse messages on the rayon pool (requires the `parallel` feature)
    pub parallel: bool,
}
