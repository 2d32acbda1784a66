use super::*;

fn filled() -> RegisterForm {
    RegisterForm {
        name: " Asha Rao ".to_owned(),
        email: " asha@base.mil ".to_owned(),
        password: "pw".to_owned(),
        role: Some(Role::BaseCommander),
        base: " Base A ".to_owned(),
    }
}

#[test]
fn validate_register_input_trims_text_fields() {
    assert_eq!(
        validate_register_input(&filled()),
        Ok(RegisterRequest {
            name: "Asha Rao".to_owned(),
            email: "asha@base.mil".to_owned(),
            password: "pw".to_owned(),
            role: Role::BaseCommander,
            base: "Base A".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_role() {
    let form = RegisterForm { role: None, ..filled() };
    assert_eq!(validate_register_input(&form), Err(INCOMPLETE_FORM_MESSAGE));
}

#[test]
fn validate_register_input_rejects_blank_fields() {
    for form in [
        RegisterForm { name: "  ".to_owned(), ..filled() },
        RegisterForm { email: String::new(), ..filled() },
        RegisterForm { password: String::new(), ..filled() },
        RegisterForm { base: "\t".to_owned(), ..filled() },
    ] {
        assert_eq!(validate_register_input(&form), Err(INCOMPLETE_FORM_MESSAGE), "{form:?}");
    }
}

#[test]
fn validate_register_input_accepts_every_listed_base() {
    for base in BASE_OPTIONS {
        let form = RegisterForm { base: base.to_owned(), ..filled() };
        assert_eq!(validate_register_input(&form).map(|req| req.base), Ok(base.to_owned()));
    }
}

#[test]
fn validate_register_input_rejects_unlisted_base() {
    let form = RegisterForm { base: "Forward Post".to_owned(), ..filled() };
    assert_eq!(validate_register_input(&form), Err(INCOMPLETE_FORM_MESSAGE));
}

#[test]
fn registration_error_text_is_styled_as_error() {
    assert_eq!(message_tone("Error during registration"), crate::pages::login::MessageTone::Error);
    assert_eq!(message_tone("Registration successful!"), crate::pages::login::MessageTone::Info);
}
