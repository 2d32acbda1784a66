use super::*;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  officer@base.mil ", " secret "),
        Ok(LoginRequest { email: "officer@base.mil".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_login_input("a@b.mil", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn failure_messages_are_errors() {
    assert_eq!(message_tone("Login failed"), MessageTone::Error);
    assert_eq!(message_tone("Error logging in"), MessageTone::Error);
}

#[test]
fn other_messages_are_informational() {
    assert_eq!(message_tone("Invalid credentials"), MessageTone::Info);
    assert_eq!(message_tone(MISSING_FIELDS_MESSAGE), MessageTone::Info);
}

#[test]
fn tone_classes_differ() {
    assert_ne!(MessageTone::Error.class(), MessageTone::Info.class());
}
