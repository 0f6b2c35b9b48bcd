use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Account status derived from the active/verified flags and the pending
/// verification token. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Account is deactivated (soft deleted)
    Deactivated,
    /// Active, not verified, verification email outstanding
    VerificationPending,
    /// Active, not verified, no verification outstanding
    Unverified,
    /// Active and verified
    Verified,
}

impl UserStatus {
    /// Derive the status from raw flags. Inactive wins over any verification state.
    pub fn derive(is_active: bool, is_verified: bool, has_verification_token: bool) -> Self {
        match (is_active, is_verified, has_verification_token) {
            (false, _, _) => Self::Deactivated,
            (true, false, true) => Self::VerificationPending,
            (true, false, false) => Self::Unverified,
            (true, true, _) => Self::Verified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deactivated => "deactivated",
            Self::VerificationPending => "verification_pending",
            Self::Unverified => "unverified",
            Self::Verified => "verified",
        }
    }
}

impl FromStr for UserStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "deactivated" => Ok(Self::Deactivated),
            "verification_pending" => Ok(Self::VerificationPending),
            "unverified" => Ok(Self::Unverified),
            "verified" => Ok(Self::Verified),
            _ => Err(CoreError::InvalidUserStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
