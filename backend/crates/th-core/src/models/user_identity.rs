//! User identity - an account plus its profile and verification state.

use crate::routes::USERS_PREFIX;
use crate::{
    ChecksumFields, Checksums, CoreError, HasFingerprint, HasLogo, HasSourceContainer,
    IdentityCore, Result as CoreErrorResult, UserResource, UserStatus, VerificationOutcome,
    clock, is_valid_namespace,
};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use uuid::Uuid;

/// A registered account.
///
/// State changes go through the transition methods below so the
/// verification and deactivation invariants hold:
/// - `verification_token` is only set while `is_verified` is false
/// - `deactivated_at` is only set while the account is inactive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub core: IdentityCore,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub preferred_locale: Option<String>,
    #[serde(default)]
    pub extras: Map<String, Value>,
    pub is_verified: bool,
    pub verification_token: Option<String>,
    pub deactivated_at: Option<DateTime<Utc>>,
    pub logo_path: Option<String>,
    /// Names of the auth groups the account belongs to
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub checksums: Checksums,
    pub updated_at: DateTime<Utc>,
}

impl UserIdentity {
    /// Create a freshly registered, unverified account with a pending
    /// verification token.
    #[track_caller]
    pub fn new(username: impl Into<String>, email: Option<String>) -> CoreErrorResult<Self> {
        let username = username.into();
        if !is_valid_namespace(&username) {
            return Err(CoreError::Validation {
                message: format!(
                    "username '{username}' may only contain letters, digits, '-', '.', '_' and '@'"
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            core: IdentityCore::new(username),
            email,
            first_name: String::new(),
            last_name: String::new(),
            company: None,
            location: None,
            website: None,
            preferred_locale: None,
            extras: Map::new(),
            is_verified: false,
            verification_token: Some(new_verification_token()),
            deactivated_at: None,
            logo_path: None,
            groups: Vec::new(),
            checksums: Checksums::default(),
            updated_at: clock::now(),
        })
    }

    /// Create an account whose email ownership is already established
    /// (imports, admin-created accounts).
    #[track_caller]
    pub fn new_verified(username: impl Into<String>, email: Option<String>) -> CoreErrorResult<Self> {
        let mut identity = Self::new(username, email)?;
        identity.is_verified = true;
        identity.verification_token = None;
        Ok(identity)
    }

    pub fn id(&self) -> Uuid {
        self.core.id
    }

    pub fn username(&self) -> &str {
        &self.core.username
    }

    pub fn is_active(&self) -> bool {
        self.core.is_active
    }

    pub fn status(&self) -> UserStatus {
        UserStatus::derive(
            self.core.is_active,
            self.is_verified,
            self.verification_token.is_some(),
        )
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn full_name(&self) -> String {
        self.display_name()
    }

    pub fn organizations_uri(&self) -> String {
        UserResource::Orgs.path(self.username())
    }

    /// Web-client link that completes email verification. `None` when no
    /// verification is pending.
    pub fn email_verification_url(&self, web_url: &str) -> Option<String> {
        self.verification_token.as_ref().map(|token| {
            format!(
                "{}/#/accounts/{}/verify/{}/",
                web_url.trim_end_matches('/'),
                self.username(),
                token
            )
        })
    }

    /// Web-client link that completes a password reset. `None` when no
    /// token is pending.
    pub fn reset_password_url(&self, web_url: &str) -> Option<String> {
        self.verification_token.as_ref().map(|token| {
            format!(
                "{}/#/accounts/{}/password/reset/{}/",
                web_url.trim_end_matches('/'),
                self.username(),
                token
            )
        })
    }

    /// Whether the identity itself owns a container whose parent is `owner_id`.
    pub fn owns(&self, owner_id: Uuid) -> bool {
        self.core.id == owner_id
    }

    /// Present a verification token.
    ///
    /// A wrong token is not an error: the caller checks the outcome.
    pub fn mark_verified(&mut self, supplied_token: &str, force: bool) -> VerificationOutcome {
        if self.is_verified {
            return VerificationOutcome::AlreadyVerified;
        }

        let matches = self.verification_token.as_deref() == Some(supplied_token);
        if !matches && !force {
            return VerificationOutcome::Rejected;
        }

        self.is_verified = true;
        self.verification_token = None;
        self.deactivated_at = None;
        self.touch();
        VerificationOutcome::Verified
    }

    /// Restart email verification. Returns the new verification token.
    pub fn begin_verification(&mut self) -> &str {
        self.core.is_active = true;
        self.is_verified = false;
        self.deactivated_at = None;
        self.touch();
        self.verification_token.insert(new_verification_token())
    }

    /// Store a new credential handle. Any pending verification token is
    /// dropped along with the old credential.
    pub fn set_credential(&mut self, credential: String) {
        self.core.password_credential = Some(credential);
        self.verification_token = None;
        self.touch();
    }

    /// Soft delete. Stored checksums are refreshed.
    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.core.is_active = false;
        self.is_verified = false;
        self.verification_token = None;
        self.deactivated_at = Some(clock::truncate(now));
        self.refresh_checksums();
        self.touch();
    }

    /// Undo a soft delete. The account comes back verified; auth tokens
    /// revoked by the deactivation stay revoked.
    pub fn reactivate(&mut self) {
        self.is_verified = true;
        self.verification_token = None;
        self.deactivated_at = None;
        self.core.is_active = true;
        self.refresh_checksums();
        self.touch();
    }

    pub fn refresh_checksums(&mut self) {
        self.checksums = self.checksums();
    }

    /// Whether the stored checksums still describe the current field values.
    pub fn checksums_current(&self) -> bool {
        self.checksums == self.checksums()
    }

    /// Document handed to the search indexer; see [`crate::USER_SEARCH_FIELDS`].
    pub fn search_document(&self) -> Value {
        let name = self.display_name();
        json!({
            "id": self.id(),
            "username": self.username(),
            "_username": self.username().to_lowercase(),
            "name": name,
            "_name": name.trim().to_lowercase(),
            "date_joined": self.core.date_joined,
            "company": self.company,
            "location": self.location,
            "is_superuser": self.core.is_superuser,
            "is_staff": self.core.is_staff,
            "is_admin": self.core.is_superuser,
            "status": self.status(),
        })
    }

    fn touch(&mut self) {
        self.updated_at = clock::now();
    }
}

impl HasFingerprint for UserIdentity {
    fn standard_checksum_fields(&self) -> ChecksumFields {
        ChecksumFields::new()
            .with("first_name", self.first_name.as_str())
            .with("last_name", self.last_name.as_str())
            .with("username", self.username())
            .with_opt("company", self.company.as_deref())
            .with_opt("location", self.location.as_deref())
            .with_opt("website", self.website.as_deref())
            .with_opt("preferred_locale", self.preferred_locale.as_deref())
            .with("extras", self.extras.clone())
    }

    fn smart_checksum_fields(&self) -> ChecksumFields {
        ChecksumFields::new()
            .with("first_name", self.first_name.as_str())
            .with("last_name", self.last_name.as_str())
            .with("username", self.username())
            .with_opt("company", self.company.as_deref())
            .with_opt("location", self.location.as_deref())
            .with("is_active", self.core.is_active)
    }
}

impl HasLogo for UserIdentity {
    fn logo_path(&self) -> Option<&str> {
        self.logo_path.as_deref()
    }

    fn logo_upload_key(&self, extension: &str) -> String {
        format!(
            "{}/logo-{}.{}",
            self.uri().trim_matches('/'),
            Utc::now().timestamp(),
            extension.trim_start_matches('.')
        )
    }
}

impl HasSourceContainer for UserIdentity {
    fn url_kwarg() -> &'static str {
        "user"
    }

    fn mnemonic(&self) -> &str {
        self.username()
    }

    fn uri(&self) -> String {
        format!("{USERS_PREFIX}{}/", self.username())
    }
}

fn new_verification_token() -> String {
    Uuid::new_v4().to_string()
}
