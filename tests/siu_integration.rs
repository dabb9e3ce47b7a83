//! Integration tests for single-message SIU parsing through the public API

use octofhir_siu::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

const FULL_MESSAGE: &str = "MSH|^~\\&|SCHED_SYS|CLINIC_A|EHR_SYS|HOSPITAL|20250502090000||SIU^S12|MSG001|P|2.5
PID|1||P12345||Doe^John^^^Mr.||19850210|M|||123 Main St^^Springfield^IL^62701
SCH|123456|^^^20250502130000^^60|ROUTINE|^^Clinic A Room 203|^Smith^Jane^MD^D67890
PV1|1|O|OPD^203||||^Smith^Jane^MD|||REF123";

#[test]
fn test_full_message_with_pv1_overrides() {
    let appointment = parse_siu_message(FULL_MESSAGE).unwrap();

    assert_eq!(appointment.appointment_id.as_deref(), Some("123456"));
    assert_eq!(
        appointment.appointment_datetime.as_deref(),
        Some("2025-05-02T13:00:00")
    );
    assert_eq!(appointment.reason.as_deref(), Some("ROUTINE"));
    // PV1-3.1 replaces the SCH location
    assert_eq!(appointment.location.as_deref(), Some("OPD"));

    let patient = appointment.patient.as_ref().unwrap();
    assert_eq!(patient.id.as_deref(), Some("P12345"));
    assert_eq!(patient.first_name.as_deref(), Some("John"));
    assert_eq!(patient.last_name.as_deref(), Some("Doe"));
    assert_eq!(patient.dob.as_deref(), Some("1985-02-10T00:00:00"));
    assert_eq!(patient.gender.as_deref(), Some("M"));

    // PV1-7 has no id, so the SCH-5 id survives the merge
    assert_eq!(
        appointment.provider,
        Some(Provider {
            id: Some("D67890".to_string()),
            name: Some("Jane Smith MD".to_string()),
        })
    );
}

#[test]
fn test_step_by_step_api() {
    let message = parse_message(FULL_MESSAGE).unwrap();
    assert_eq!(message.delimiters, DelimiterSet::default());
    assert_eq!(message.get_field("PID", 5, Some(5)), Some("Mr."));

    let message_type = validate_type(&message).unwrap();
    assert_eq!(message_type.code, "SIU");

    let name = PersonName::parse(message.get_field("PID", 5, None).unwrap(), '^');
    assert_eq!(name.display_name().as_deref(), Some("Mr. John Doe"));

    assert_eq!(
        extract_appointment(&message),
        parse_siu_message(FULL_MESSAGE).unwrap()
    );
}

#[rstest]
#[case("")]
#[case("Not an HL7 message")]
#[case("MS")]
#[case("PID|||P1\nMSH|^~\\&|A|B|C|D|E||SIU^S12")]
fn test_structural_errors(#[case] raw: &str) {
    assert!(matches!(
        parse_siu_message(raw),
        Err(SiuError::Structural { .. })
    ));
}

#[rstest]
#[case("ADT^A01", "ADT")]
#[case("ORU^R01", "ORU")]
#[case("ADT", "ADT")]
fn test_wrong_type(#[case] message_type: &str, #[case] actual: &str) {
    let raw = format!("MSH|^~\\&|SYS|FAC|SYS|FAC|20250502090000||{message_type}|MSG003|P|2.5");
    assert_eq!(
        parse_siu_message(&raw).unwrap_err(),
        SiuError::wrong_type("SIU", actual)
    );
}

#[test]
fn test_timestamp_variants() {
    let raw = "MSH|^~\\&|SYS|FAC|SYS|FAC|20250502090000||SIU^S12|MSG005|P|2.5
PID|||P002||Test^Patient||1985|M
SCH|002|^^^20250502^^60";
    let appointment = parse_siu_message(raw).unwrap();
    assert_eq!(
        appointment.appointment_datetime.as_deref(),
        Some("2025-05-02T00:00:00")
    );
    assert_eq!(
        appointment.patient.unwrap().dob.as_deref(),
        Some("1985-01-01T00:00:00")
    );
}

#[test]
fn test_non_ascii_digits_are_not_timestamps() {
    let raw = "MSH|^~\\&|A|B|C|D|E||SIU^S12|1\rPID|||P1||Doe^John||१९८५|M\rSCH|1|^^^२०२५०५०२";
    let appointment = parse_siu_message(raw).unwrap();
    assert_eq!(appointment.appointment_datetime, None);
    let patient = appointment.patient.unwrap();
    assert_eq!(patient.dob, None);
    assert_eq!(patient.id.as_deref(), Some("P1"));
}

#[test]
fn test_pid_without_content_still_attaches_patient() {
    let appointment = parse_siu_message("MSH|^~\\&|A|B|C|D|E||SIU^S12|1\rPID|1\rSCH|1").unwrap();
    assert_eq!(appointment.patient, Some(Patient::default()));

    let without_pid = parse_siu_message("MSH|^~\\&|A|B|C|D|E||SIU^S12|1\rSCH|1").unwrap();
    assert_eq!(without_pid.patient, None);
}

#[test]
fn test_custom_delimiters_end_to_end() {
    let raw = "MSH#*~\\&#SYS#FAC#SYS#FAC#20250502090000##SIU*S12#MSG006#P#2.5\r\
PID###P77##Roe*Richard\r\
SCH#77#***20250502143000+0100";
    let appointment = parse_siu_message(raw).unwrap();
    assert_eq!(appointment.appointment_id.as_deref(), Some("77"));
    assert_eq!(
        appointment.appointment_datetime.as_deref(),
        Some("2025-05-02T14:30:00+01:00")
    );
    let patient = appointment.patient.unwrap();
    assert_eq!(patient.last_name.as_deref(), Some("Roe"));
    assert_eq!(patient.first_name.as_deref(), Some("Richard"));
}

#[test]
fn test_parsing_twice_is_identical() {
    let first = parse_siu_message(FULL_MESSAGE).unwrap();
    let second = parse_siu_message(FULL_MESSAGE).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.to_json(false).unwrap(),
        second.to_json(false).unwrap()
    );
}

#[test]
fn test_concurrent_parsing() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| parse_siu_message(FULL_MESSAGE).unwrap()))
        .collect();
    let expected = parse_siu_message(FULL_MESSAGE).unwrap();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
