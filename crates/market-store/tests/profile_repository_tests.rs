// Integration tests for the profile repository

mod common;

use common::{seed_profile, setup_test_db};
use market_core::errors::ExErrorKind;
use market_core::model::{NewProfile, ProfileFilter, ProfilePatch};
use market_store::mapper::ProfileMapper;
use market_store::Repository;

#[test]
fn test_create_and_find_profile() {
    let conn = setup_test_db();
    let repo = Repository::new(ProfileMapper::new(&conn));

    let profile = repo
        .create(&NewProfile {
            name: "DEFAULT-PROFILE".to_string(),
            address: Some("pAddress".to_string()),
        })
        .unwrap();

    assert_eq!(repo.find_one(profile.id, false).unwrap(), profile);
    assert_eq!(profile.address.as_deref(), Some("pAddress"));
}

#[test]
fn test_duplicate_name_is_database_error() {
    let conn = setup_test_db();
    seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(ProfileMapper::new(&conn));

    let err = repo
        .create(&NewProfile {
            name: "DEFAULT-PROFILE".to_string(),
            address: None,
        })
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Database);
    assert_eq!(err.op(), Some("create"));
}

#[test]
fn test_search_by_name() {
    let conn = setup_test_db();
    seed_profile(&conn, "ALICE");
    let bob = seed_profile(&conn, "BOB");
    let repo = Repository::new(ProfileMapper::new(&conn));

    let found = repo
        .search(
            &ProfileFilter {
                name: Some("BOB".to_string()),
            },
            false,
        )
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, bob);
    assert_eq!(repo.find_all(false).unwrap().len(), 2);
}

#[test]
fn test_update_sets_address() {
    let conn = setup_test_db();
    let id = seed_profile(&conn, "ALICE");
    let repo = Repository::new(ProfileMapper::new(&conn));

    let updated = repo
        .update(
            id,
            &ProfilePatch {
                address: Some("pNew".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "ALICE");
    assert_eq!(updated.address.as_deref(), Some("pNew"));
}
