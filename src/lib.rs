//! HL7 v2 SIU^S12 appointment parser
//!
//! Extracts appointment, patient and provider information from pipe-delimited
//! scheduling messages:
//!
//! - **Tokenization**: per-message delimiter discovery and segment splitting
//! - **Field access**: bounds-checked field/component/subcomponent lookup
//! - **Extraction**: declarative priority tables over SCH, PID and PV1
//! - **Batches**: multi-message files where one bad message never aborts the rest
//!
//! ```rust
//! use octofhir_siu::{extract_appointment, parse_message, validate_type};
//!
//! let raw = "MSH|^~\\&|SCHED|CLINIC|EHR|HOSP|20250502090000||SIU^S12|MSG001|P|2.5\r\
//!            SCH|123456|^^^20250502130000^^60|ROUTINE";
//! let message = parse_message(raw).unwrap();
//! validate_type(&message).unwrap();
//! let appointment = extract_appointment(&message);
//! assert_eq!(appointment.appointment_datetime.as_deref(), Some("2025-05-02T13:00:00"));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod pipeline;

// Re-export main types
pub use config::{BatchConfig, ErrorPolicy, TriggerPolicy, ValidationConfig};
pub use error::{Result, SiuError};
pub use extract::{MessageType, extract_appointment, validate_type, validate_type_with};
pub use model::{Appointment, ParsedMessage, Patient, Provider, Segment};
pub use normalize::{Hl7Timestamp, PersonName, normalize_timestamp};
pub use parser::{DelimiterSet, MessageSplitter, parse_message, split_messages};
pub use pipeline::{
    BatchReport, MessageFailure, parse_appointments, parse_file, parse_siu_message,
    parse_siu_message_with, process_batch, read_hl7_file,
};
