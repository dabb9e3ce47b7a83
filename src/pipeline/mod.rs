//! SIU processing pipeline
//!
//! Ties the parser, validation and extraction together for single messages,
//! whole files and multi-message batches.

pub mod batch;
pub mod input;

pub use batch::{BatchReport, MessageFailure, parse_appointments, parse_file, process_batch};
pub use input::{decode_hl7_bytes, read_hl7_file};

use crate::config::ValidationConfig;
use crate::error::Result;
use crate::extract::{extract_appointment, validate_type_with};
use crate::model::Appointment;
use crate::parser::parse_message;

/// Parse, validate and extract one SIU message with the default configuration
pub fn parse_siu_message(raw: &str) -> Result<Appointment> {
    parse_siu_message_with(raw, &ValidationConfig::default())
}

/// Parse, validate and extract one SIU message
pub fn parse_siu_message_with(raw: &str, config: &ValidationConfig) -> Result<Appointment> {
    let message = parse_message(raw)?;
    validate_type_with(&message, config)?;
    Ok(extract_appointment(&message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TriggerPolicy;
    use crate::error::SiuError;

    #[test]
    fn test_parse_siu_message() {
        let appointment = parse_siu_message(
            "MSH|^~\\&|SYS|FAC|SYS|FAC|20250502090000||SIU^S12|MSG005|P|2.5\n\
             PID|||P001||Test^Patient||19850210|M\n\
             SCH|001|^^^20250502130000+0500^^60",
        )
        .unwrap();
        assert_eq!(appointment.appointment_id.as_deref(), Some("001"));
        assert_eq!(
            appointment.appointment_datetime.as_deref(),
            Some("2025-05-02T13:00:00+05:00")
        );
    }

    #[test]
    fn test_error_kinds() {
        assert!(matches!(
            parse_siu_message("Not an HL7 message"),
            Err(SiuError::Structural { .. })
        ));
        assert!(matches!(
            parse_siu_message("MSH|^~\\&|SYS|FAC|SYS|FAC|20250502090000||ADT^A01|MSG003|P|2.5"),
            Err(SiuError::WrongType { .. })
        ));

        let reject = ValidationConfig::default().with_trigger_policy(TriggerPolicy::Reject);
        assert!(matches!(
            parse_siu_message_with("MSH|^~\\&|A|B|C|D|E||SIU^S15", &reject),
            Err(SiuError::UnexpectedTrigger { .. })
        ));
    }
}
