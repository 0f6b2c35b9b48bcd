use crate::UserResource;

#[test]
fn test_leaf_paths() {
    assert_eq!(UserResource::Detail.path("ana"), "/users/ana/");
    assert_eq!(UserResource::Orgs.path("ana"), "/users/ana/orgs/");
    assert_eq!(
        UserResource::OrgUrlRegistry.path("ana"),
        "/users/ana/orgs/url-registry/"
    );
    assert_eq!(UserResource::Reactivate.path("ana"), "/users/ana/reactivate/");
}

#[test]
fn test_parameterised_paths() {
    let verify = UserResource::Verify {
        token: "T1".to_string(),
    };
    let extra = UserResource::Extra {
        key: "orcid".to_string(),
    };

    assert_eq!(verify.path("ana"), "/users/ana/verify/T1/");
    assert_eq!(extra.path("ana"), "/users/ana/extras/orcid/");
}

#[test]
fn test_fhir_mount_paths_keep_resource_casing() {
    assert_eq!(UserResource::CodeSystems.path("ana"), "/users/ana/CodeSystem/");
    assert_eq!(UserResource::ValueSets.path("ana"), "/users/ana/ValueSet/");
    assert_eq!(UserResource::ConceptMaps.path("ana"), "/users/ana/ConceptMap/");
}

#[test]
fn test_is_mount() {
    assert!(UserResource::Sources.is_mount());
    assert!(UserResource::Pins.is_mount());
    assert!(!UserResource::OrgSources.is_mount());
    assert!(!UserResource::Detail.is_mount());
}
