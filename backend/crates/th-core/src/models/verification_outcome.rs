/// Result of presenting a verification token to an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Identity was verified before the call; nothing changed
    AlreadyVerified,
    /// Token matched (or was forced) and the identity is now verified
    Verified,
    /// Token did not match; nothing changed
    Rejected,
}

impl VerificationOutcome {
    /// Whether the identity is verified after the call.
    pub fn is_verified(&self) -> bool {
        !matches!(self, Self::Rejected)
    }

    /// Whether the call changed state that has to be persisted.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Verified)
    }
}
