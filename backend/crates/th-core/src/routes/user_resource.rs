use super::USERS_PREFIX;

/// Endpoints scoped to a single user, `/users/{username}/...`.
///
/// Variants without fields are leaf endpoints. The mounted variants
/// (`Repos` through `Pins`) are prefixes: the owning subsystem routes
/// everything below them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserResource {
    Detail,
    SsoMigrate,
    Verify { token: String },
    Logo,
    Reactivate,
    Staff,
    Orgs,
    Extras,
    Extra { key: String },
    OrgSources,
    OrgCollections,
    OrgRepos,
    OrgUrlRegistry,
    Repos,
    UrlRegistry,
    Sources,
    CodeSystems,
    ValueSets,
    ConceptMaps,
    Collections,
    Pins,
}

/// Mounted prefixes in match order.
pub(crate) const MOUNTS: [(&str, UserResource); 8] = [
    ("repos/", UserResource::Repos),
    ("url-registry/", UserResource::UrlRegistry),
    ("sources/", UserResource::Sources),
    ("CodeSystem/", UserResource::CodeSystems),
    ("ValueSet/", UserResource::ValueSets),
    ("ConceptMap/", UserResource::ConceptMaps),
    ("collections/", UserResource::Collections),
    ("pins/", UserResource::Pins),
];

/// Fixed leaf endpoints in match order.
pub(crate) const LEAVES: [(&str, UserResource); 11] = [
    ("", UserResource::Detail),
    ("sso-migrate/", UserResource::SsoMigrate),
    ("logo/", UserResource::Logo),
    ("reactivate/", UserResource::Reactivate),
    ("staff/", UserResource::Staff),
    ("orgs/", UserResource::Orgs),
    ("extras/", UserResource::Extras),
    ("orgs/sources/", UserResource::OrgSources),
    ("orgs/collections/", UserResource::OrgCollections),
    ("orgs/repos/", UserResource::OrgRepos),
    ("orgs/url-registry/", UserResource::OrgUrlRegistry),
];

impl UserResource {
    /// Path below `/users/{username}/`.
    pub fn suffix(&self) -> String {
        match self {
            Self::Verify { token } => format!("verify/{token}/"),
            Self::Extra { key } => format!("extras/{key}/"),
            other => LEAVES
                .iter()
                .chain(MOUNTS.iter())
                .find(|(_, resource)| resource == other)
                .map(|(suffix, _)| (*suffix).to_string())
                .unwrap_or_default(),
        }
    }

    pub fn path(&self, username: &str) -> String {
        format!("{USERS_PREFIX}{username}/{}", self.suffix())
    }

    /// Whether the resource is a mount point owned by another subsystem.
    pub fn is_mount(&self) -> bool {
        MOUNTS.iter().any(|(_, resource)| resource == self)
    }
}
