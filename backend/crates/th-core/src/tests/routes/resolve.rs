use crate::{AccountRoute, RouteMatch, UserResource, is_valid_namespace, resolve};

use googletest::prelude::*;

fn user_route(username: &str, resource: UserResource, remainder: &str) -> RouteMatch {
    RouteMatch::User {
        username: username.to_string(),
        resource,
        remainder: remainder.to_string(),
    }
}

#[test]
fn given_account_paths_when_resolved_then_account_routes() {
    for route in AccountRoute::ALL {
        assert_eq!(resolve(&route.path()), Some(RouteMatch::Account(route)));
    }
}

#[test]
fn given_login_path_when_resolved_then_not_treated_as_username() {
    assert_eq!(
        resolve("/users/login/"),
        Some(RouteMatch::Account(AccountRoute::Login))
    );
}

#[test]
fn given_user_detail_path_when_resolved_then_detail() {
    assert_eq!(
        resolve("/users/ana.silva@acme/"),
        Some(user_route("ana.silva@acme", UserResource::Detail, ""))
    );
}

#[test]
fn given_nested_org_path_when_resolved_then_org_listing() {
    assert_eq!(
        resolve("/users/ana/orgs/collections/"),
        Some(user_route("ana", UserResource::OrgCollections, ""))
    );
}

#[test]
fn given_verify_path_when_resolved_then_token_captured() {
    assert_eq!(
        resolve("/users/ana/verify/abc-123/"),
        Some(user_route(
            "ana",
            UserResource::Verify {
                token: "abc-123".to_string()
            },
            ""
        ))
    );
}

#[test]
fn given_extra_path_when_resolved_then_key_captured() {
    assert_eq!(
        resolve("/users/ana/extras/orcid/"),
        Some(user_route(
            "ana",
            UserResource::Extra {
                key: "orcid".to_string()
            },
            ""
        ))
    );
}

#[test]
fn given_mounted_path_when_resolved_then_remainder_kept() {
    assert_eq!(
        resolve("/users/ana/sources/SNOMED/concepts/"),
        Some(user_route("ana", UserResource::Sources, "SNOMED/concepts/"))
    );
    assert_eq!(
        resolve("/users/ana/CodeSystem/"),
        Some(user_route("ana", UserResource::CodeSystems, ""))
    );
}

#[test]
fn given_paths_built_from_resources_when_resolved_then_round_trip() {
    let resources = [
        UserResource::Detail,
        UserResource::SsoMigrate,
        UserResource::Logo,
        UserResource::Staff,
        UserResource::Extras,
        UserResource::OrgRepos,
        UserResource::UrlRegistry,
        UserResource::Collections,
    ];

    for resource in resources {
        let path = resource.path("ana");
        assert_eq!(resolve(&path), Some(user_route("ana", resource, "")));
    }
}

#[test]
fn given_malformed_paths_when_resolved_then_none() {
    assert_that!(resolve("/orgs/acme/"), none());
    assert_that!(resolve("/users/ana"), none());
    assert_that!(resolve("/users/ana/unknown/"), none());
    assert_that!(resolve("/users/ana/verify//"), none());
    assert_that!(resolve("/users/ana/verify/a/b/"), none());
    assert_that!(resolve("/users/an a/"), none());
    assert_that!(resolve("/users/ana/extras/bad key/"), none());
}

#[test]
fn test_is_valid_namespace() {
    assert!(is_valid_namespace("ana-silva_2.0@acme"));
    assert!(!is_valid_namespace(""));
    assert!(!is_valid_namespace("ana/silva"));
    assert!(!is_valid_namespace("ana silva"));
}
