//! Identity lifecycle service.
//!
//! Every state-changing operation works on a copy of the identity, persists
//! the copy, and only then writes it back through the `&mut` reference. A
//! failed operation leaves the caller's value exactly as it was. Operations
//! that write both the account row and its bearer token do so in a single
//! transaction, so a failure leaves the stored state untouched too.

use crate::{
    ContainerOwner, CredentialUpdate, IdentityError, IdentityMetrics,
    Result as IdentityErrorResult,
};

use th_auth::{
    Argon2CredentialHasher, AuthGroups, CredentialHasher, DefaultPasswordPolicy, PasswordPolicy,
    TokenGenerator,
};
use th_core::{
    AuthToken, HasFingerprint, NotificationKind, UserIdentity, UserStatus, VerificationOutcome,
};
use th_db::{DbError, OrganizationRepository, TokenRepository, UserRepository};
use th_notify::NotificationQueue;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use log::{debug, info, warn};
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use uuid::Uuid;

pub struct IdentityLifecycle {
    pool: SqlitePool,
    users: UserRepository,
    tokens: TokenRepository,
    organizations: OrganizationRepository,
    hasher: Arc<dyn CredentialHasher>,
    policy: Arc<dyn PasswordPolicy>,
    token_generator: TokenGenerator,
    groups: AuthGroups,
    notifications: NotificationQueue,
    metrics: IdentityMetrics,
}

impl IdentityLifecycle {
    /// Service with the default password policy, argon2 hashing and
    /// 20-byte token keys. `groups` is the deployment's auth group set.
    pub fn new(pool: SqlitePool, notifications: NotificationQueue, groups: AuthGroups) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            tokens: TokenRepository::new(pool.clone()),
            organizations: OrganizationRepository::new(pool.clone()),
            pool,
            hasher: Arc::new(Argon2CredentialHasher::default()),
            policy: Arc::new(DefaultPasswordPolicy::default()),
            token_generator: TokenGenerator::default(),
            groups,
            notifications,
            metrics: IdentityMetrics::new(),
        }
    }

    pub fn with_hasher(mut self, hasher: Arc<dyn CredentialHasher>) -> Self {
        self.hasher = hasher;
        self
    }

    pub fn with_policy(mut self, policy: Arc<dyn PasswordPolicy>) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_token_generator(mut self, token_generator: TokenGenerator) -> Self {
        self.token_generator = token_generator;
        self
    }

    pub fn groups(&self) -> &AuthGroups {
        &self.groups
    }

    /// Persist a newly constructed identity. Group names must belong to
    /// the configured set.
    pub async fn register(&self, identity: &UserIdentity) -> IdentityErrorResult<()> {
        self.groups.validate(&identity.groups)?;
        self.users.create(identity).await?;
        info!("Registered user {} ({})", identity.username(), identity.id());
        Ok(())
    }

    pub async fn find_by_username(&self, username: &str) -> IdentityErrorResult<UserIdentity> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| IdentityError::user_not_found(username))
    }

    pub async fn find_by_id(&self, id: Uuid) -> IdentityErrorResult<UserIdentity> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| IdentityError::user_not_found(id.to_string()))
    }

    pub async fn list(&self, include_inactive: bool) -> IdentityErrorResult<Vec<UserIdentity>> {
        Ok(self.users.list(include_inactive).await?)
    }

    /// Resolve a bearer token key to its account. Deactivated accounts
    /// never authenticate.
    pub async fn find_by_token(&self, key: &str) -> IdentityErrorResult<Option<UserIdentity>> {
        let Some(user_id) = self.tokens.find_user_id_by_key(key).await? else {
            return Ok(None);
        };

        let identity = self.users.find_by_id(user_id).await?;
        if let Some(inactive) = identity.as_ref().filter(|identity| !identity.is_active()) {
            debug!("Rejected token for deactivated user {}", inactive.username());
            return Ok(None);
        }
        Ok(identity)
    }

    pub fn status(&self, identity: &UserIdentity) -> UserStatus {
        identity.status()
    }

    /// Replace the account's credential.
    ///
    /// `plaintext` is checked against the password policy and hashed;
    /// `hashed` is stored verbatim. Empty strings count as not supplied, and
    /// when both are given `plaintext` wins. A rejected password changes
    /// nothing and reports the policy messages. Any change clears a pending
    /// verification token and rotates the bearer token, or revokes it when
    /// the account is deactivated.
    pub async fn update_credential(
        &self,
        identity: &mut UserIdentity,
        plaintext: Option<&str>,
        hashed: Option<String>,
    ) -> IdentityErrorResult<CredentialUpdate> {
        let plaintext = plaintext.filter(|password| !password.is_empty());
        let hashed = hashed.filter(|credential| !credential.is_empty());

        let credential = match (plaintext, hashed) {
            (Some(password), _) => {
                if let Err(e) = self.policy.validate(password, identity) {
                    self.metrics.credential_update("rejected");
                    debug!("Password rejected for user {}", identity.username());
                    return Err(e.into());
                }
                self.hasher.hash(password)?
            }
            (None, Some(hashed)) => hashed,
            (None, None) => {
                self.metrics.credential_update("unchanged");
                return Ok(CredentialUpdate::Unchanged);
            }
        };

        let mut updated = identity.clone();
        updated.set_credential(credential);

        let mut tx = self.begin().await?;
        Self::persist_in(&mut tx, &updated).await?;
        let token = if updated.is_active() {
            let token = self.new_token(&updated);
            TokenRepository::rotate_in(&mut tx, &token).await?;
            Some(token)
        } else {
            TokenRepository::revoke_in(&mut tx, updated.id()).await?;
            None
        };
        tx.commit().await.map_err(DbError::from)?;
        *identity = updated;

        if token.is_some() {
            self.metrics.token_rotated();
        }
        self.metrics.credential_update("changed");
        info!("Credential updated for user {}", identity.username());
        Ok(CredentialUpdate::Changed { token })
    }

    /// Check a plaintext password against the stored credential.
    pub fn verify_credential(&self, identity: &UserIdentity, plaintext: &str) -> bool {
        identity
            .core
            .password_credential
            .as_deref()
            .is_some_and(|credential| self.hasher.verify(plaintext, credential))
    }

    /// Revoke the live bearer token (if any) and issue a new one.
    pub async fn rotate_token(&self, identity: &UserIdentity) -> IdentityErrorResult<AuthToken> {
        Self::ensure_active(identity)?;
        let token = self.new_token(identity);
        self.tokens.rotate(&token).await?;
        self.metrics.token_rotated();
        debug!("Rotated auth token for user {}", identity.username());
        Ok(token)
    }

    /// The live bearer token, issuing one if the account has none.
    pub async fn get_or_issue_token(
        &self,
        identity: &UserIdentity,
    ) -> IdentityErrorResult<AuthToken> {
        Self::ensure_active(identity)?;
        let candidate = self.new_token(identity);
        let live = self.tokens.issue_if_absent(&candidate).await?;
        if live.key == candidate.key {
            self.metrics.token_issued();
            debug!("Issued auth token for user {}", identity.username());
        }
        Ok(live)
    }

    /// Bind an externally supplied key, replacing any live token.
    pub async fn set_token(
        &self,
        identity: &UserIdentity,
        key: &str,
    ) -> IdentityErrorResult<AuthToken> {
        Self::ensure_active(identity)?;
        let token = self.tokens.set(identity.id(), key).await?;
        info!("Auth token set explicitly for user {}", identity.username());
        Ok(token)
    }

    /// `Authorization` header for requests made on the account's behalf.
    pub async fn auth_headers(
        &self,
        identity: &UserIdentity,
    ) -> IdentityErrorResult<BTreeMap<String, String>> {
        Ok(self.get_or_issue_token(identity).await?.auth_headers())
    }

    /// Present a verification token. Returns whether the account ends up
    /// verified; a wrong token is `Ok(false)`, not an error.
    pub async fn mark_verified(
        &self,
        identity: &mut UserIdentity,
        supplied_token: &str,
        force: bool,
    ) -> IdentityErrorResult<bool> {
        let mut updated = identity.clone();
        let outcome = updated.mark_verified(supplied_token, force);

        if outcome.changed() {
            self.persist(&updated).await?;
            *identity = updated;
            info!("User {} verified", identity.username());
        }

        self.metrics.verification(match outcome {
            VerificationOutcome::AlreadyVerified => "already_verified",
            VerificationOutcome::Verified => "verified",
            VerificationOutcome::Rejected => "rejected",
        });
        Ok(outcome.is_verified())
    }

    /// Restart email verification: the account becomes active and
    /// unverified with a fresh verification token, gets a bearer token if
    /// it has none, and a verification notification is queued.
    pub async fn begin_verification(
        &self,
        identity: &mut UserIdentity,
    ) -> IdentityErrorResult<String> {
        let mut updated = identity.clone();
        let verification_token = updated.begin_verification().to_string();
        let candidate = self.new_token(&updated);

        let mut tx = self.begin().await?;
        Self::persist_in(&mut tx, &updated).await?;
        let live = TokenRepository::issue_if_absent_in(&mut tx, &candidate).await?;
        tx.commit().await.map_err(DbError::from)?;
        *identity = updated;

        if live.key == candidate.key {
            self.metrics.token_issued();
        }

        self.metrics.verification_started();
        self.notify(NotificationKind::Verification, identity).await?;
        Ok(verification_token)
    }

    /// Queue a password reset notification.
    pub async fn send_reset_password(&self, identity: &UserIdentity) -> IdentityErrorResult<()> {
        self.notify(NotificationKind::PasswordReset, identity).await
    }

    /// Soft delete. Revokes the bearer token and stores fresh checksums.
    pub async fn deactivate(&self, identity: &mut UserIdentity) -> IdentityErrorResult<()> {
        let mut updated = identity.clone();
        updated.deactivate(Utc::now());

        let mut tx = self.begin().await?;
        Self::persist_in(&mut tx, &updated).await?;
        TokenRepository::revoke_in(&mut tx, updated.id()).await?;
        tx.commit().await.map_err(DbError::from)?;
        *identity = updated;

        self.metrics.deactivated();
        info!("User {} deactivated", identity.username());
        Ok(())
    }

    pub async fn soft_delete(&self, identity: &mut UserIdentity) -> IdentityErrorResult<()> {
        self.deactivate(identity).await
    }

    /// Undo a soft delete. The account comes back verified without a
    /// bearer token.
    pub async fn reactivate(&self, identity: &mut UserIdentity) -> IdentityErrorResult<()> {
        let mut updated = identity.clone();
        updated.reactivate();
        self.persist(&updated).await?;
        *identity = updated;

        self.metrics.reactivated();
        info!("User {} reactivated", identity.username());
        Ok(())
    }

    pub async fn undelete(&self, identity: &mut UserIdentity) -> IdentityErrorResult<()> {
        self.reactivate(identity).await
    }

    /// Recompute and store both fingerprints.
    pub async fn set_checksums(&self, identity: &mut UserIdentity) -> IdentityErrorResult<()> {
        let checksums = identity.checksums();
        if !self.users.update_checksums(identity.id(), &checksums).await? {
            return Err(IdentityError::user_not_found(identity.username()));
        }
        identity.checksums = checksums;
        Ok(())
    }

    pub fn is_valid_auth_group<S: AsRef<str>>(&self, names: &[S]) -> bool {
        self.groups.is_valid(names)
    }

    /// Replace the account's auth groups. Unknown names are rejected.
    pub async fn set_groups(
        &self,
        identity: &mut UserIdentity,
        groups: Vec<String>,
    ) -> IdentityErrorResult<()> {
        self.groups.validate(&groups)?;
        self.users.set_groups(identity.id(), &groups).await?;
        identity.groups = groups;
        Ok(())
    }

    /// Whether the account may administer a container with the given owner:
    /// it is the owner, or a member of the owning organization.
    pub async fn is_admin_for(
        &self,
        identity: &UserIdentity,
        owner: ContainerOwner,
    ) -> IdentityErrorResult<bool> {
        match owner {
            ContainerOwner::User(owner_id) => Ok(identity.owns(owner_id)),
            ContainerOwner::Organization(organization_id) => Ok(self
                .organizations
                .is_member(organization_id, identity.id())
                .await?),
        }
    }

    pub async fn organizations_count(&self, identity: &UserIdentity) -> IdentityErrorResult<i64> {
        Ok(self.organizations.count_for_user(identity.id()).await?)
    }

    pub async fn owned_organizations_count(
        &self,
        identity: &UserIdentity,
    ) -> IdentityErrorResult<i64> {
        Ok(self.organizations.count_owned_by_user(identity.id()).await?)
    }

    async fn persist(&self, identity: &UserIdentity) -> IdentityErrorResult<()> {
        if !self.users.update(identity).await? {
            return Err(IdentityError::user_not_found(identity.username()));
        }
        Ok(())
    }

    async fn persist_in(
        conn: &mut SqliteConnection,
        identity: &UserIdentity,
    ) -> IdentityErrorResult<()> {
        if !UserRepository::update_in(conn, identity).await? {
            return Err(IdentityError::user_not_found(identity.username()));
        }
        Ok(())
    }

    async fn begin(&self) -> IdentityErrorResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await.map_err(DbError::from)?)
    }

    fn new_token(&self, identity: &UserIdentity) -> AuthToken {
        AuthToken::new(identity.id(), self.token_generator.generate())
    }

    #[track_caller]
    fn ensure_active(identity: &UserIdentity) -> IdentityErrorResult<()> {
        if !identity.is_active() {
            return Err(IdentityError::inactive_user(identity.username()));
        }
        Ok(())
    }

    async fn notify(
        &self,
        kind: NotificationKind,
        identity: &UserIdentity,
    ) -> IdentityErrorResult<()> {
        if let Err(e) = self.notifications.enqueue(kind, identity.id()).await {
            warn!("Could not queue {} for user {}: {}", kind, identity.username(), e);
            return Err(e.into());
        }
        self.metrics.notification_enqueued(kind.as_str());
        Ok(())
    }
}
