// Integration tests for the market repository

mod common;

use common::{new_market, seed_profile, setup_test_db};
use market_core::errors::ExErrorKind;
use market_core::model::{MarketFilter, MarketPatch};
use market_core_types::Sensitive;
use market_store::mapper::MarketMapper;
use market_store::Repository;

#[test]
fn test_create_market_returns_stored_fields() {
    let conn = setup_test_db();
    let profile_id = seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(MarketMapper::new(&conn));

    let market = repo
        .create(&new_market(profile_id, "TEST-MARKET", false))
        .unwrap();

    assert_eq!(market.name, "TEST-MARKET");
    assert_eq!(market.private_key.expose(), "TEST-PRIVATE-KEY");
    assert_eq!(market.address, "TEST-MARKET-ADDRESS");
    assert_eq!(market.profile_id, profile_id);
    assert!(!market.is_default);

    let found = repo.find_one(market.id, true).unwrap();
    assert_eq!(found, market);
}

#[test]
fn test_private_key_is_redacted_in_debug() {
    let conn = setup_test_db();
    let profile_id = seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(MarketMapper::new(&conn));

    let market = repo
        .create(&new_market(profile_id, "TEST-MARKET", false))
        .unwrap();

    let rendered = format!("{:?}", market);
    assert!(!rendered.contains("TEST-PRIVATE-KEY"));
    assert!(rendered.contains("***REDACTED***"));
}

#[test]
fn test_partial_update_keeps_untouched_fields() {
    let conn = setup_test_db();
    let profile_id = seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(MarketMapper::new(&conn));
    let market = repo
        .create(&new_market(profile_id, "TEST-MARKET", false))
        .unwrap();

    let updated = repo
        .update(
            market.id,
            &MarketPatch {
                name: Some("RENAMED-MARKET".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "RENAMED-MARKET");
    assert_eq!(updated.private_key, market.private_key);
    assert_eq!(updated.address, market.address);
    assert_eq!(updated.is_default, market.is_default);
}

#[test]
fn test_update_rotates_private_key() {
    let conn = setup_test_db();
    let profile_id = seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(MarketMapper::new(&conn));
    let market = repo
        .create(&new_market(profile_id, "TEST-MARKET", false))
        .unwrap();

    let updated = repo
        .update(
            market.id,
            &MarketPatch {
                private_key: Some(Sensitive::new("ROTATED-KEY".to_string())),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.private_key.expose(), "ROTATED-KEY");
    assert_eq!(updated.name, "TEST-MARKET");
}

#[test]
fn test_update_missing_market_is_not_found() {
    let conn = setup_test_db();
    let repo = Repository::new(MarketMapper::new(&conn));

    let err = repo.update(404, &MarketPatch::default()).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("404"));
}

#[test]
fn test_destroy_missing_market_is_not_found() {
    let conn = setup_test_db();
    let repo = Repository::new(MarketMapper::new(&conn));

    let err = repo.destroy(9999).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity(), Some("Market"));
    assert_eq!(err.entity_id(), Some("9999"));
    assert_eq!(err.message(), "Entity with identifier 9999 does not exist");
}

#[test]
fn test_destroy_removes_market() {
    let conn = setup_test_db();
    let profile_id = seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(MarketMapper::new(&conn));
    let market = repo
        .create(&new_market(profile_id, "TEST-MARKET", false))
        .unwrap();

    repo.destroy(market.id).unwrap();

    let err = repo.find_one(market.id, false).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert!(repo.find_all(false).unwrap().is_empty());
}

#[test]
fn test_create_for_unknown_profile_is_database_error() {
    let conn = setup_test_db();
    let repo = Repository::new(MarketMapper::new(&conn));

    let err = repo.create(&new_market(777, "ORPHAN", false)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Database);
    assert_eq!(err.message(), "Could not create the Market!");
    let cause = err.source_error().expect("cause is kept");
    assert_eq!(cause.kind(), ExErrorKind::Persistence);
    assert!(cause.message().contains("FOREIGN KEY"));
}

#[test]
fn test_second_default_market_is_rejected_by_schema() {
    let conn = setup_test_db();
    let profile_id = seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(MarketMapper::new(&conn));

    repo.create(&new_market(profile_id, "FIRST", true)).unwrap();
    let err = repo
        .create(&new_market(profile_id, "SECOND", true))
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Database);
}

#[test]
fn test_promoting_second_default_is_update_database_error() {
    let conn = setup_test_db();
    let profile_id = seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(MarketMapper::new(&conn));

    repo.create(&new_market(profile_id, "FIRST", true)).unwrap();
    let second = repo.create(&new_market(profile_id, "SECOND", false)).unwrap();

    let err = repo
        .update(
            second.id,
            &MarketPatch {
                is_default: Some(true),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Database);
    assert_eq!(err.op(), Some("update"));
    assert_eq!(err.message(), "Could not update the Market!");
    let cause = err.source_error().expect("cause is kept");
    assert_eq!(cause.kind(), ExErrorKind::Persistence);
    assert!(cause.message().contains("UNIQUE"));

    assert!(!repo.find_one(second.id, false).unwrap().is_default);
}

#[test]
fn test_rejected_delete_is_database_error() {
    let conn = setup_test_db();
    let profile_id = seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(MarketMapper::new(&conn));
    let market = repo.create(&new_market(profile_id, "PINNED", false)).unwrap();

    conn.execute_batch(
        "CREATE TEMP TRIGGER pin_markets BEFORE DELETE ON markets
         BEGIN SELECT RAISE(ABORT, 'market is pinned'); END;",
    )
    .unwrap();

    let err = repo.destroy(market.id).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Database);
    assert_eq!(err.op(), Some("delete"));
    assert_eq!(err.message(), "Could not delete the Market!");
    let cause = err.source_error().expect("cause is kept");
    assert!(cause.message().contains("market is pinned"));

    assert_eq!(repo.find_one(market.id, false).unwrap().id, market.id);
}

#[test]
fn test_clear_default_then_create_new_default() {
    let conn = setup_test_db();
    let profile_id = seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(MarketMapper::new(&conn));

    let first = repo.create(&new_market(profile_id, "FIRST", true)).unwrap();
    assert_eq!(repo.mapper().clear_default(profile_id).unwrap(), 1);
    let second = repo.create(&new_market(profile_id, "SECOND", true)).unwrap();

    let defaults = repo
        .search(
            &MarketFilter {
                profile_id: Some(profile_id),
                is_default: Some(true),
                ..Default::default()
            },
            false,
        )
        .unwrap();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].id, second.id);
    assert!(!repo.find_one(first.id, false).unwrap().is_default);
}

#[test]
fn test_search_by_profile() {
    let conn = setup_test_db();
    let alice = seed_profile(&conn, "ALICE");
    let bob = seed_profile(&conn, "BOB");
    let repo = Repository::new(MarketMapper::new(&conn));

    repo.create(&new_market(alice, "A1", false)).unwrap();
    repo.create(&new_market(alice, "A2", false)).unwrap();
    repo.create(&new_market(bob, "B1", false)).unwrap();

    let markets = repo
        .search(
            &MarketFilter {
                profile_id: Some(alice),
                ..Default::default()
            },
            false,
        )
        .unwrap();
    let names: Vec<_> = markets.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["A1", "A2"]);
}

#[test]
fn test_deleting_profile_cascades_to_markets() {
    let conn = setup_test_db();
    let profile_id = seed_profile(&conn, "DEFAULT-PROFILE");
    let repo = Repository::new(MarketMapper::new(&conn));
    repo.create(&new_market(profile_id, "TEST-MARKET", false))
        .unwrap();

    market_store::ProfileRepository::new(market_store::mapper::ProfileMapper::new(&conn))
        .destroy(profile_id)
        .unwrap();

    assert!(repo.find_all(false).unwrap().is_empty());
}
