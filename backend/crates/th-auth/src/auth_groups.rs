use crate::{AuthError, Result as AuthErrorResult};

use std::collections::BTreeSet;
use std::panic::Location;

use error_location::ErrorLocation;

/// The closed set of auth group names accepted by this deployment.
///
/// Built once at startup from configuration and passed to whatever needs to
/// check group names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGroups {
    names: BTreeSet<String>,
}

impl AuthGroups {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// True when every name is a known group.
    pub fn is_valid<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.iter().all(|name| self.contains(name.as_ref()))
    }

    /// Fails on the first unknown name.
    #[track_caller]
    pub fn validate<S: AsRef<str>>(&self, names: &[S]) -> AuthErrorResult<()> {
        match names.iter().find(|name| !self.contains(name.as_ref())) {
            Some(unknown) => Err(AuthError::InvalidGroup {
                name: unknown.as_ref().to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
