use crate::{ContainerOwner, CredentialUpdate, IdentityError};

use th_auth::AuthError;
use th_core::AuthToken;

use std::panic::Location;

use error_location::ErrorLocation;
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_password_policy_error_when_converted_then_becomes_credential_policy() {
    // Given
    let auth_error = AuthError::PasswordPolicy {
        messages: vec!["This password is too common.".to_string()],
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let error = IdentityError::from(auth_error);

    // Then
    assert_eq!(
        error.policy_messages(),
        Some(&["This password is too common.".to_string()][..])
    );
    assert_that!(error.to_string(), contains_substring("too common"));
}

#[test]
fn given_unknown_group_error_when_converted_then_stays_an_auth_error() {
    // Given
    let auth_error = AuthError::InvalidGroup {
        name: "root".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let error = IdentityError::from(auth_error);

    // Then
    assert!(matches!(error, IdentityError::Auth { .. }));
    assert_that!(error.policy_messages(), none());
}

#[test]
fn given_changed_update_when_inspected_then_exposes_token() {
    // Given
    let token = AuthToken::new(Uuid::new_v4(), "k1".to_string());

    // When
    let update = CredentialUpdate::Changed {
        token: Some(token.clone()),
    };

    // Then
    assert!(update.is_changed());
    assert_eq!(update.token(), Some(&token));
    assert!(!CredentialUpdate::Unchanged.is_changed());
    assert_eq!(CredentialUpdate::Unchanged.token(), None);
}

#[test]
fn given_change_on_inactive_account_when_inspected_then_changed_without_token() {
    let update = CredentialUpdate::Changed { token: None };

    assert!(update.is_changed());
    assert_eq!(update.token(), None);
}

#[test]
fn given_inactive_user_error_when_displayed_then_names_the_account() {
    let error = IdentityError::inactive_user("bob");

    assert!(matches!(error, IdentityError::InactiveUser { .. }));
    assert_that!(error.to_string(), contains_substring("deactivated: bob"));
    assert_that!(error.policy_messages(), none());
}

#[test]
fn given_container_owner_when_asking_id_then_returns_wrapped_id() {
    let id = Uuid::new_v4();
    assert_that!(ContainerOwner::User(id).id(), eq(id));
    assert_that!(ContainerOwner::Organization(id).id(), eq(id));
}
