use crate::{AuthError, DefaultPasswordPolicy, PasswordPolicy};

use th_core::UserIdentity;

use googletest::prelude::*;

fn identity() -> UserIdentity {
    let mut identity =
        UserIdentity::new("mariana.costa", Some("mcosta@example.org".to_string())).unwrap();
    identity.first_name = "Mariana".to_string();
    identity.last_name = "Costa".to_string();
    identity
}

fn violations(password: &str) -> Vec<String> {
    match DefaultPasswordPolicy::default().validate(password, &identity()) {
        Ok(()) => Vec::new(),
        Err(e) => e.messages(),
    }
}

#[test]
fn given_strong_password_when_validated_then_ok() {
    let result = DefaultPasswordPolicy::default().validate("tundra-Violet-42", &identity());

    assert_that!(result, ok(anything()));
}

#[test]
fn given_short_password_when_validated_then_too_short() {
    let messages = violations("x9!k");

    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("at least 8 characters"));
}

#[test]
fn given_common_password_when_validated_then_too_common() {
    let messages = violations("Password123");

    assert!(messages.iter().any(|m| m == "This password is too common."));
}

#[test]
fn given_numeric_password_when_validated_then_all_violations_reported() {
    let messages = violations("12345678");

    assert!(messages.iter().any(|m| m == "This password is too common."));
    assert!(messages.iter().any(|m| m == "This password is entirely numeric."));
}

#[test]
fn given_password_close_to_username_when_validated_then_too_similar() {
    let messages = violations("marianacosta1");

    assert_eq!(
        messages,
        vec!["The password is too similar to the username.".to_string()]
    );
}

#[test]
fn given_password_close_to_email_when_validated_then_too_similar() {
    let mut identity = identity();
    identity.core.username = "zz-unrelated".to_string();
    identity.first_name = String::new();
    identity.last_name = String::new();

    let result = DefaultPasswordPolicy::default().validate("mcosta12", &identity);

    let messages = match result {
        Err(AuthError::PasswordPolicy { messages, .. }) => messages,
        other => panic!("expected policy violation, got {other:?}"),
    };
    assert_eq!(
        messages,
        vec!["The password is too similar to the email address.".to_string()]
    );
}

#[test]
fn given_custom_min_length_when_validated_then_applied() {
    let policy = DefaultPasswordPolicy::new(20, 0.7);

    let result = policy.validate("tundra-Violet-42", &identity());

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("20 characters"));
}
