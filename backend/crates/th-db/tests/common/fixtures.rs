use th_core::{Organization, UserIdentity};

use serde_json::json;
use uuid::Uuid;

/// Creates an unverified user with a pending verification token
pub fn create_test_user(username: &str) -> UserIdentity {
    let mut identity = UserIdentity::new(username, Some(format!("{username}@example.com")))
        .expect("valid test username");
    identity.first_name = "Test".to_string();
    identity.last_name = "User".to_string();
    identity.company = Some("Acme Terminology".to_string());
    identity.extras.insert("orcid".to_string(), json!("0000-0002-1825-0097"));
    identity
}

/// Creates an organization created by `created_by`
pub fn create_test_organization(mnemonic: &str, created_by: Uuid) -> Organization {
    Organization::new(mnemonic.to_string(), format!("{mnemonic} Org"), created_by)
}
