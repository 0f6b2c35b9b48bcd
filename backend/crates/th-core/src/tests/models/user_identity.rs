use crate::{
    HasFingerprint, HasLogo, HasSourceContainer, UserIdentity, UserStatus, VerificationOutcome,
    clock,
};

use chrono::Utc;
use googletest::prelude::*;
use serde_json::json;

fn pending_identity(username: &str, token: &str) -> UserIdentity {
    let mut identity = UserIdentity::new(username, None).unwrap();
    identity.verification_token = Some(token.to_string());
    identity
}

#[test]
fn given_new_identity_then_active_unverified_with_pending_token() {
    let identity = UserIdentity::new("ana", Some("ana@example.org".to_string())).unwrap();

    assert_that!(identity.is_active(), eq(true));
    assert_that!(identity.is_verified, eq(false));
    assert_that!(identity.verification_token, some(anything()));
    assert_that!(identity.deactivated_at, none());
    assert_that!(identity.status(), eq(UserStatus::VerificationPending));
}

#[test]
fn given_username_with_slash_when_created_then_validation_error() {
    let result = UserIdentity::new("ana/admin", None);

    assert_that!(result, err(anything()));
}

#[test]
fn given_new_verified_identity_then_no_token_and_verified() {
    let identity = UserIdentity::new_verified("ana", None).unwrap();

    assert_that!(identity.verification_token, none());
    assert_that!(identity.status(), eq(UserStatus::Verified));
}

#[test]
fn given_inactive_but_verified_identity_then_status_is_deactivated() {
    let mut identity = UserIdentity::new_verified("ana", None).unwrap();
    identity.core.is_active = false;

    assert_that!(identity.status(), eq(UserStatus::Deactivated));
}

#[test]
fn given_pending_token_when_marked_with_correct_token_then_verified_and_cleared() {
    let mut identity = pending_identity("ana", "T1");

    let outcome = identity.mark_verified("T1", false);

    assert_that!(outcome, eq(VerificationOutcome::Verified));
    assert_that!(outcome.is_verified(), eq(true));
    assert_that!(identity.is_verified, eq(true));
    assert_that!(identity.verification_token, none());
    assert_that!(identity.deactivated_at, none());
}

#[test]
fn given_verified_identity_when_marked_again_then_already_verified() {
    let mut identity = pending_identity("ana", "T1");
    identity.mark_verified("T1", false);

    let outcome = identity.mark_verified("T1", false);

    assert_that!(outcome, eq(VerificationOutcome::AlreadyVerified));
    assert_that!(outcome.is_verified(), eq(true));
    assert_that!(outcome.changed(), eq(false));
}

#[test]
fn given_pending_token_when_marked_with_wrong_token_then_rejected_and_unchanged() {
    let mut identity = pending_identity("ana", "T1");
    let before = identity.clone();

    let outcome = identity.mark_verified("T2", false);

    assert_that!(outcome, eq(VerificationOutcome::Rejected));
    assert_that!(outcome.is_verified(), eq(false));
    assert_that!(identity, eq(&before));
}

#[test]
fn given_wrong_token_when_forced_then_verified() {
    let mut identity = pending_identity("ana", "T1");

    let outcome = identity.mark_verified("nope", true);

    assert_that!(outcome, eq(VerificationOutcome::Verified));
    assert_that!(identity.status(), eq(UserStatus::Verified));
}

#[test]
fn given_no_pending_token_when_marked_then_rejected() {
    let mut identity = UserIdentity::new("ana", None).unwrap();
    identity.verification_token = None;

    let outcome = identity.mark_verified("", false);

    assert_that!(outcome, eq(VerificationOutcome::Rejected));
    assert_that!(identity.status(), eq(UserStatus::Unverified));
}

#[test]
fn given_deactivated_identity_when_verification_begins_then_active_with_new_token() {
    let mut identity = UserIdentity::new_verified("ana", None).unwrap();
    identity.deactivate(Utc::now());

    let token = identity.begin_verification().to_string();

    assert_that!(identity.is_active(), eq(true));
    assert_that!(identity.is_verified, eq(false));
    assert_that!(identity.deactivated_at, none());
    assert_eq!(identity.verification_token, Some(token));
    assert_that!(identity.status(), eq(UserStatus::VerificationPending));
}

#[test]
fn given_pending_verification_when_begun_again_then_token_changes() {
    let mut identity = UserIdentity::new("ana", None).unwrap();
    let first = identity.verification_token.clone().unwrap();

    let second = identity.begin_verification().to_string();

    assert_ne!(second, first);
}

#[test]
fn given_active_identity_when_deactivated_then_soft_deleted_with_checksums() {
    let mut identity = pending_identity("ana", "T1");
    let now = clock::now();

    identity.deactivate(now);

    assert_that!(identity.is_active(), eq(false));
    assert_that!(identity.is_verified, eq(false));
    assert_that!(identity.verification_token, none());
    assert_eq!(identity.deactivated_at, Some(now));
    assert_that!(identity.status(), eq(UserStatus::Deactivated));
    assert_that!(identity.checksums_current(), eq(true));
}

#[test]
fn given_deactivated_identity_when_reactivated_then_verified_and_cleared() {
    let mut identity = pending_identity("ana", "T1");
    identity.deactivate(Utc::now());

    identity.reactivate();

    assert_that!(identity.is_active(), eq(true));
    assert_that!(identity.is_verified, eq(true));
    assert_that!(identity.deactivated_at, none());
    assert_that!(identity.verification_token, none());
    assert_that!(identity.checksums_current(), eq(true));
}

#[test]
fn given_pending_token_when_credential_set_then_token_cleared() {
    let mut identity = pending_identity("ana", "T1");

    identity.set_credential("$argon2id$stub".to_string());

    assert_that!(identity.verification_token, none());
    assert_that!(identity.core.has_usable_credential(), eq(true));
    assert_that!(identity.status(), eq(UserStatus::Unverified));
}

#[test]
fn given_names_then_display_name_joins_with_space() {
    let mut identity = UserIdentity::new("ana", None).unwrap();
    identity.first_name = "Ana".to_string();
    identity.last_name = "Silva".to_string();

    assert_eq!(identity.display_name(), "Ana Silva");
    assert_eq!(identity.full_name(), "Ana Silva");
}

#[test]
fn given_identity_then_uris_derive_from_username() {
    let identity = UserIdentity::new("ana", None).unwrap();

    assert_eq!(identity.uri(), "/users/ana/");
    assert_eq!(identity.organizations_uri(), "/users/ana/orgs/");
    assert_eq!(identity.sources_uri(), "/users/ana/sources/");
    assert_eq!(identity.collections_uri(), "/users/ana/collections/");
    assert_eq!(identity.repos_uri(), "/users/ana/repos/");
    assert_eq!(identity.mnemonic(), "ana");
    assert_eq!(UserIdentity::url_kwarg(), "user");
}

#[test]
fn given_pending_token_then_email_links_embed_it() {
    let identity = pending_identity("ana", "T1");

    assert_eq!(
        identity.email_verification_url("https://app.example.org/"),
        Some("https://app.example.org/#/accounts/ana/verify/T1/".to_string())
    );
    assert_eq!(
        identity.reset_password_url("https://app.example.org"),
        Some("https://app.example.org/#/accounts/ana/password/reset/T1/".to_string())
    );
}

#[test]
fn given_no_pending_token_then_no_email_links() {
    let identity = UserIdentity::new_verified("ana", None).unwrap();

    assert_that!(identity.email_verification_url("https://x"), none());
}

#[test]
fn given_logo_path_then_logo_url_joins_media_base() {
    let mut identity = UserIdentity::new("ana", None).unwrap();
    assert_eq!(identity.logo_url("https://media"), None);

    identity.logo_path = Some("/users/ana/logo.png".to_string());

    assert!(identity.has_logo());
    assert_eq!(
        identity.logo_url("https://media/"),
        Some("https://media/users/ana/logo.png".to_string())
    );
    let key = identity.logo_upload_key(".png");
    assert!(key.starts_with("users/ana/logo-"));
    assert!(key.ends_with(".png"));
}

#[test]
fn given_owner_id_then_owns_only_for_own_id() {
    let identity = UserIdentity::new("ana", None).unwrap();

    assert_that!(identity.owns(identity.id()), eq(true));
    assert_that!(identity.owns(uuid::Uuid::new_v4()), eq(false));
}

#[test]
fn given_identity_then_search_document_has_sort_keys() {
    let mut identity = UserIdentity::new("Ana", None).unwrap();
    identity.first_name = "Ana".to_string();
    identity.last_name = "Silva".to_string();
    identity.company = Some("Acme".to_string());

    let document = identity.search_document();

    assert_eq!(document["username"], json!("Ana"));
    assert_eq!(document["_username"], json!("ana"));
    assert_eq!(document["_name"], json!("ana silva"));
    assert_eq!(document["company"], json!("Acme"));
    assert_eq!(document["status"], json!("verification_pending"));
}

#[test]
fn given_identity_when_serialized_then_credential_is_omitted() {
    let mut identity = UserIdentity::new("ana", None).unwrap();
    identity.set_credential("secret-handle".to_string());

    let serialized = serde_json::to_string(&identity).unwrap();

    assert!(!serialized.contains("secret-handle"));
}

#[test]
fn given_fields_changed_then_stored_checksums_go_stale() {
    let mut identity = UserIdentity::new("ana", None).unwrap();
    identity.refresh_checksums();
    assert_that!(identity.checksums_current(), eq(true));

    identity.company = Some("Acme".to_string());

    assert_that!(identity.checksums_current(), eq(false));
    assert_ne!(
        identity.checksums.standard.as_deref(),
        Some(identity.standard_fingerprint().as_str())
    );
}
