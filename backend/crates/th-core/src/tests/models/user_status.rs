use crate::UserStatus;

use std::str::FromStr;

#[test]
fn test_user_status_as_str() {
    assert_eq!(UserStatus::Deactivated.as_str(), "deactivated");
    assert_eq!(
        UserStatus::VerificationPending.as_str(),
        "verification_pending"
    );
    assert_eq!(UserStatus::Unverified.as_str(), "unverified");
    assert_eq!(UserStatus::Verified.as_str(), "verified");
}

#[test]
fn test_user_status_from_str() {
    assert_eq!(
        UserStatus::from_str("verification_pending").unwrap(),
        UserStatus::VerificationPending
    );
    assert_eq!(
        UserStatus::from_str("deactivated").unwrap(),
        UserStatus::Deactivated
    );
    assert!(UserStatus::from_str("pending").is_err());
}

#[test]
fn test_inactive_wins_over_verification_state() {
    assert_eq!(UserStatus::derive(false, true, false), UserStatus::Deactivated);
    assert_eq!(UserStatus::derive(false, false, true), UserStatus::Deactivated);
    assert_eq!(UserStatus::derive(false, false, false), UserStatus::Deactivated);
}

#[test]
fn test_active_statuses() {
    assert_eq!(
        UserStatus::derive(true, false, true),
        UserStatus::VerificationPending
    );
    assert_eq!(UserStatus::derive(true, false, false), UserStatus::Unverified);
    assert_eq!(UserStatus::derive(true, true, false), UserStatus::Verified);
}
