use crate::core::validator::{MemberValidator, ValidationError};

#[test]
fn test_valid_member_input() {
    let validator = MemberValidator::new();

    assert!(validator
        .validate("أحمد علي", "01001234567", None)
        .is_ok());
    assert!(validator
        .validate("Sara", "+201001234567", Some("sara@example.com"))
        .is_ok());
}

#[test]
fn test_empty_name_rejected() {
    let validator = MemberValidator::new();

    assert_eq!(
        validator.validate_name("   "),
        Err(ValidationError::EmptyName)
    );
}

#[test]
fn test_overlong_name_rejected() {
    let validator = MemberValidator::new();
    let name = "م".repeat(101);

    assert_eq!(
        validator.validate_name(&name),
        Err(ValidationError::NameTooLong(101))
    );
}

#[test]
fn test_phone_shapes() {
    let validator = MemberValidator::new();

    assert!(validator.validate_phone("01001234567").is_ok());
    assert!(validator.validate_phone("+9665012345").is_ok());
    // Whitespace around the number is tolerated
    assert!(validator.validate_phone(" 01001234567 ").is_ok());

    assert!(validator.validate_phone("12345").is_err(), "too short");
    assert!(validator.validate_phone("01-123-4567").is_err(), "separators");
    assert!(validator.validate_phone("phone").is_err());
}

#[test]
fn test_email_shapes() {
    let validator = MemberValidator::new();

    assert!(validator.validate_email("a@b.co").is_ok());
    assert!(validator.validate_email("front.desk@gym.example").is_ok());
    assert!(validator.validate_email("not-an-email").is_err());
    assert!(validator.validate_email("two@@signs.com").is_err());
}

#[test]
fn test_missing_email_is_fine() {
    let validator = MemberValidator::new();
    assert!(validator.validate("Omar", "01234567890", None).is_ok());
}
