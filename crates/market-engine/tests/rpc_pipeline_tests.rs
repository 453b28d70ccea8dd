// End-to-end tests: RPC request through command, service, repository and store

mod common;

use common::{call, call_err, call_ok, setup_test_db};
use market_engine::rpc::{DATABASE_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND, NOT_FOUND};
use serde_json::json;

fn add_profile(conn: &rusqlite::Connection, name: &str) -> i64 {
    call_ok(conn, "profile add", vec![json!(name)])["id"]
        .as_i64()
        .unwrap()
}

fn template_params(profile_id: i64, title: &str) -> Vec<serde_json::Value> {
    vec![
        json!(profile_id),
        json!(title),
        json!("short"),
        json!("long"),
        json!(1),
        json!("SALE"),
        json!("BITCOIN"),
        json!("0.1"),
        json!("0.01"),
        json!("0.05"),
    ]
}

#[test]
fn test_market_round_trip() {
    let conn = setup_test_db();
    let profile_id = add_profile(&conn, "DEFAULT-PROFILE");

    let created = call_ok(
        &conn,
        "market add",
        vec![
            json!(profile_id),
            json!("TEST-MARKET"),
            json!("TEST-PRIVATE-KEY"),
            json!("TEST-MARKET-ADDRESS"),
        ],
    );
    assert_eq!(created["name"], "TEST-MARKET");
    assert_eq!(created["private_key"], "TEST-PRIVATE-KEY");
    assert_eq!(created["address"], "TEST-MARKET-ADDRESS");

    let listed = call_ok(&conn, "market list", vec![json!(profile_id)]);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0], created);
}

#[test]
fn test_template_add_with_five_params_is_invalid_params() {
    let conn = setup_test_db();
    let profile_id = add_profile(&conn, "DEFAULT-PROFILE");

    let response = call(
        &conn,
        "template add",
        template_params(profile_id, "Bicycle")[..5].to_vec(),
    );
    let error = response.error.expect("arity error");
    assert_eq!(error.code, INVALID_PARAMS);
    assert_eq!(error.message, "Not enough params.");
    assert_eq!(error.data["kind_code"], "ERR_NOT_ENOUGH_PARAMS");

    let templates = call_ok(&conn, "template search", vec![json!(profile_id)]);
    assert!(templates.as_array().unwrap().is_empty());
}

#[test]
fn test_template_add_stores_tagged_address() {
    let conn = setup_test_db();
    let profile_id = add_profile(&conn, "DEFAULT-PROFILE");
    let mut params = template_params(profile_id, "Bicycle");
    params.push(json!("pmZpGbH2j2dDYU6LvTryHbEsM3iQzxpnj1"));

    let created = call_ok(&conn, "template add", params);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["hash"].as_str().unwrap().len(), 64);

    let fetched = call_ok(&conn, "template get", vec![json!(id)]);
    let address = &fetched["payment_information"]["item_price"]["cryptocurrency_address"];
    assert_eq!(address["address_type"], "NORMAL");
    assert_eq!(address["address"], "pmZpGbH2j2dDYU6LvTryHbEsM3iQzxpnj1");
    assert_eq!(fetched["item_information"]["title"], "Bicycle");
}

#[test]
fn test_template_for_unknown_profile_is_not_found() {
    let conn = setup_test_db();
    let response = call(&conn, "template add", template_params(404, "Bicycle"));
    let error = response.error.expect("missing profile");
    assert_eq!(error.code, NOT_FOUND);
    assert_eq!(error.data["entity_id"], "404");
}

#[test]
fn test_negative_price_is_invalid_params() {
    let conn = setup_test_db();
    let profile_id = add_profile(&conn, "DEFAULT-PROFILE");
    let mut params = template_params(profile_id, "Bicycle");
    params[7] = json!("-1");

    assert_eq!(call_err(&conn, "template add", params), INVALID_PARAMS);
}

#[test]
fn test_template_search_and_remove() {
    let conn = setup_test_db();
    let profile_id = add_profile(&conn, "DEFAULT-PROFILE");
    call_ok(&conn, "template add", template_params(profile_id, "Red Bicycle"));
    let lamp = call_ok(&conn, "template add", template_params(profile_id, "Desk Lamp"));

    let found = call_ok(
        &conn,
        "template search",
        vec![json!(profile_id), json!("Lamp")],
    );
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["id"], lamp["id"]);

    call_ok(&conn, "template remove", vec![lamp["id"].clone()]);
    assert_eq!(
        call_err(&conn, "template get", vec![lamp["id"].clone()]),
        NOT_FOUND
    );
    assert_eq!(
        call_err(&conn, "template remove", vec![lamp["id"].clone()]),
        NOT_FOUND
    );
}

#[test]
fn test_proposal_get_by_id_and_hash() {
    let conn = setup_test_db();
    let created = call_ok(
        &conn,
        "proposal add",
        vec![
            json!("pSubmitter"),
            json!(100),
            json!(200),
            json!("Raise fees"),
            json!("Raise listing fees"),
            json!("PUBLIC_VOTE"),
            json!("YES"),
            json!("NO"),
        ],
    );

    let by_id = call_ok(&conn, "proposal get", vec![created["id"].clone()]);
    let by_hash = call_ok(&conn, "proposal get", vec![created["hash"].clone()]);
    assert_eq!(by_id, by_hash);
    assert_eq!(by_id["options"].as_array().unwrap().len(), 2);
    assert_eq!(by_id["kind"], "PUBLIC_VOTE");
}

#[test]
fn test_duplicate_proposal_is_already_exists() {
    let conn = setup_test_db();
    let params = vec![
        json!("pSubmitter"),
        json!(100),
        json!(200),
        json!("Raise fees"),
        json!("Raise listing fees"),
        json!("ITEM_VOTE"),
    ];
    call_ok(&conn, "proposal add", params.clone());

    assert_eq!(
        call_err(&conn, "proposal add", params),
        market_engine::rpc::ALREADY_EXISTS
    );
}

#[test]
fn test_unknown_method() {
    let conn = setup_test_db();
    assert_eq!(call_err(&conn, "market fly", vec![]), METHOD_NOT_FOUND);
}

#[test]
fn test_duplicate_profile_name_is_database_error() {
    let conn = setup_test_db();
    add_profile(&conn, "DEFAULT-PROFILE");

    let response = call(&conn, "profile add", vec![json!("DEFAULT-PROFILE")]);
    let error = response.error.expect("unique name");
    assert_eq!(error.code, DATABASE_ERROR);
    assert_eq!(error.message, "Could not create the Profile!");
}

#[test]
fn test_string_request_id_is_echoed_and_correlated() {
    let conn = setup_test_db();
    let services = market_engine::Services::new(&conn);
    let registry = market_engine::CommandRegistry::with_services(&services);

    let request = market_engine::RpcRequest::new("profile get", vec![json!(99)])
        .with_id(json!("req-42"));
    let response = market_engine::handle(&registry, &request);

    assert_eq!(response.id, json!("req-42"));
    assert_eq!(response.error.unwrap().data["request_id"], "req-42");
}
