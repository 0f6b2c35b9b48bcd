use super::USERS_PREFIX;
use super::user_resource::{LEAVES, MOUNTS};
use crate::{AccountRoute, UserResource};

/// Outcome of matching a request path against the user routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Account(AccountRoute),
    User {
        username: String,
        resource: UserResource,
        /// Unmatched tail below a mounted prefix, empty for leaf endpoints
        remainder: String,
    },
}

/// Namespace segments (usernames, extra keys) allow `[A-Za-z0-9-._@]+`.
pub fn is_valid_namespace(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '@'))
}

/// Match `path` against the routes mounted at `/users/`.
///
/// Paths must carry the trailing slash. Account routes are tried first, then
/// user leaves, then mounted prefixes.
pub fn resolve(path: &str) -> Option<RouteMatch> {
    let rest = path.strip_prefix(USERS_PREFIX)?;

    if let Some(route) = AccountRoute::ALL
        .iter()
        .find(|route| route.suffix() == rest)
    {
        return Some(RouteMatch::Account(*route));
    }

    let (username, tail) = rest.split_once('/')?;
    if !is_valid_namespace(username) {
        return None;
    }

    let user = |resource: UserResource, remainder: &str| RouteMatch::User {
        username: username.to_string(),
        resource,
        remainder: remainder.to_string(),
    };

    if let Some((_, resource)) = LEAVES.iter().find(|(suffix, _)| *suffix == tail) {
        return Some(user(resource.clone(), ""));
    }

    if let Some(token) = single_segment(tail, "verify/") {
        return Some(user(
            UserResource::Verify {
                token: token.to_string(),
            },
            "",
        ));
    }

    if let Some(key) = single_segment(tail, "extras/")
        && is_valid_namespace(key)
    {
        return Some(user(
            UserResource::Extra {
                key: key.to_string(),
            },
            "",
        ));
    }

    MOUNTS.iter().find_map(|(prefix, resource)| {
        tail.strip_prefix(prefix)
            .map(|remainder| user(resource.clone(), remainder))
    })
}

/// `{prefix}{segment}/` with a non-empty segment free of slashes.
fn single_segment<'a>(tail: &'a str, prefix: &str) -> Option<&'a str> {
    let segment = tail.strip_prefix(prefix)?.strip_suffix('/')?;
    (!segment.is_empty() && !segment.contains('/')).then_some(segment)
}
