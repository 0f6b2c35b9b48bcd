//! JSON renderings printed by the `th` binary.

use th_core::{AuthToken, HasFingerprint, HasSourceContainer, RouteMatch, UserIdentity};

use serde_json::{Value, json};

pub fn user_json(identity: &UserIdentity, web_url: &str) -> Value {
    json!({
        "id": identity.id(),
        "username": identity.username(),
        "email": identity.email,
        "name": identity.display_name(),
        "status": identity.status(),
        "is_active": identity.is_active(),
        "is_verified": identity.is_verified,
        "is_staff": identity.core.is_staff,
        "is_superuser": identity.core.is_superuser,
        "groups": identity.groups,
        "company": identity.company,
        "location": identity.location,
        "uri": identity.uri(),
        "organizations_uri": identity.organizations_uri(),
        "email_verification_url": identity.email_verification_url(web_url),
        "date_joined": identity.core.date_joined,
        "deactivated_at": identity.deactivated_at,
    })
}

pub fn status_json(identity: &UserIdentity) -> Value {
    json!({
        "username": identity.username(),
        "status": identity.status(),
    })
}

pub fn checksums_json(identity: &UserIdentity) -> Value {
    json!({
        "username": identity.username(),
        "standard": identity.standard_fingerprint().as_str(),
        "smart": identity.smart_fingerprint().as_str(),
        "stored": identity.checksums,
        "current": identity.checksums_current(),
    })
}

pub fn token_json(identity: &UserIdentity, token: &AuthToken) -> Value {
    json!({
        "username": identity.username(),
        "token": token.key,
        "created_at": token.created_at,
        "headers": token.auth_headers(),
    })
}

pub fn route_json(path: &str, route: Option<&RouteMatch>) -> Value {
    match route {
        Some(RouteMatch::Account(route)) => json!({
            "path": path,
            "kind": "account",
            "name": route.name(),
        }),
        Some(RouteMatch::User {
            username,
            resource,
            remainder,
        }) => json!({
            "path": path,
            "kind": "user",
            "username": username,
            "resource": resource.suffix(),
            "mount": resource.is_mount(),
            "remainder": remainder,
        }),
        None => json!({
            "path": path,
            "kind": "unmatched",
        }),
    }
}
