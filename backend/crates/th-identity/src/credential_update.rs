use th_core::AuthToken;

/// Result of [`crate::IdentityLifecycle::update_credential`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialUpdate {
    /// Neither a password nor a pre-hashed credential was supplied.
    Unchanged,
    /// The credential was replaced. An active account gets a rotated
    /// bearer token; an inactive one loses its token.
    Changed { token: Option<AuthToken> },
}

impl CredentialUpdate {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    pub fn token(&self) -> Option<&AuthToken> {
        match self {
            Self::Changed { token } => token.as_ref(),
            Self::Unchanged => None,
        }
    }
}
