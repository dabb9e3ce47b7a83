//! Batch processing of multi-message HL7 content
//!
//! Every message is parsed on its own. Wrong-type messages are skipped,
//! other failures are handled per [`ErrorPolicy`], and nothing a single
//! message does can abort the batch.

use super::input::read_hl7_file;
use super::parse_siu_message_with;
use crate::config::{BatchConfig, ErrorPolicy, ValidationConfig};
use crate::error::Result;
use crate::model::Appointment;
use crate::parser::split_messages;
use serde::Serialize;
use std::path::Path;

/// A message that could not be processed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageFailure {
    /// 0-based position of the message in the input
    pub index: usize,
    /// Error description
    pub error: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// Extracted appointments in input order
    pub appointments: Vec<Appointment>,
    /// Messages skipped as not applicable (wrong type or rejected trigger)
    pub skipped: usize,
    /// Messages that failed to parse
    pub failures: Vec<MessageFailure>,
    /// Policy the batch ran with
    #[serde(skip)]
    pub error_policy: ErrorPolicy,
}

impl BatchReport {
    /// Number of messages seen
    pub fn total(&self) -> usize {
        self.appointments.len() + self.skipped + self.failures.len()
    }

    /// False only when the error policy is `Fail` and a message failed
    pub fn is_success(&self) -> bool {
        self.error_policy != ErrorPolicy::Fail || self.failures.is_empty()
    }

    fn record(&mut self, index: usize, outcome: Result<Appointment>) {
        match outcome {
            Ok(appointment) => self.appointments.push(appointment),
            Err(err) if err.is_skippable() => {
                log::debug!("Skipping message {}: {err}", index + 1);
                self.skipped += 1;
            }
            Err(err) => {
                match self.error_policy {
                    ErrorPolicy::Skip => {}
                    ErrorPolicy::Warn | ErrorPolicy::Fail => {
                        log::warn!("Error parsing message {}: {err}", index + 1)
                    }
                }
                self.failures.push(MessageFailure {
                    index,
                    error: err.to_string(),
                });
            }
        }
    }
}

fn parse_all(
    messages: &[String],
    validation: &ValidationConfig,
    parallel: bool,
) -> Vec<Result<Appointment>> {
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return messages
            .par_iter()
            .map(|raw| parse_siu_message_with(raw, validation))
            .collect();
    }

    #[cfg(not(feature = "parallel"))]
    if parallel {
        log::debug!("Built without the `parallel` feature, parsing sequentially");
    }

    messages
        .iter()
        .map(|raw| parse_siu_message_with(raw, validation))
        .collect()
}

/// Process every message in a file's content
pub fn process_batch(content: &str, config: &BatchConfig) -> BatchReport {
    let messages = split_messages(content);
    log::debug!("Found {} message(s)", messages.len());

    let mut report = BatchReport {
        error_policy: config.error_policy,
        ..BatchReport::default()
    };
    for (index, outcome) in parse_all(&messages, &config.validation, config.parallel)
        .into_iter()
        .enumerate()
    {
        report.record(index, outcome);
    }

    log::info!(
        "Processed {} message(s): {} appointment(s), {} skipped, {} failed",
        report.total(),
        report.appointments.len(),
        report.skipped,
        report.failures.len()
    );
    report
}

/// Read and process an HL7 file. An unreadable file fails the whole call.
pub fn parse_file(path: impl AsRef<Path>, config: &BatchConfig) -> Result<BatchReport> {
    let content = read_hl7_file(path)?;
    Ok(process_batch(&content, config))
}

/// Convenience wrapper returning only the appointments
pub fn parse_appointments(content: &str) -> Vec<Appointment> {
    process_batch(content, &BatchConfig::default()).appointments
}
