// Shared setup for market-store integration tests

#![allow(dead_code)]

use market_core::model::{
    Currency, EntityId, ItemInformation, ItemPrice, NewListingItemTemplate, NewMarket,
    NewProfile, PaymentInformation, PaymentType, ShippingPrice,
};
use market_core_types::Sensitive;
use market_store::mapper::ProfileMapper;
use market_store::Repository;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn setup_test_db() -> Connection {
    let mut conn = market_store::db::open_in_memory().expect("open in-memory db");
    market_store::migrations::apply_migrations(&mut conn).expect("apply migrations");
    conn
}

pub fn seed_profile(conn: &Connection, name: &str) -> EntityId {
    Repository::new(ProfileMapper::new(conn))
        .create(&NewProfile {
            name: name.to_string(),
            address: None,
        })
        .expect("seed profile")
        .id
}

pub fn new_market(profile_id: EntityId, name: &str, is_default: bool) -> NewMarket {
    NewMarket {
        profile_id,
        name: name.to_string(),
        private_key: Sensitive::new("TEST-PRIVATE-KEY".to_string()),
        address: "TEST-MARKET-ADDRESS".to_string(),
        is_default,
    }
}

pub fn item_information(title: &str) -> ItemInformation {
    ItemInformation {
        title: title.to_string(),
        short_description: "short".to_string(),
        long_description: "long".to_string(),
        item_category_id: 1,
    }
}

pub fn payment_information(base_price: Decimal) -> PaymentInformation {
    PaymentInformation {
        payment_type: PaymentType::Sale,
        item_price: ItemPrice {
            currency: Currency::Bitcoin,
            base_price,
            shipping_price: ShippingPrice {
                domestic: Decimal::new(5, 1),
                international: Decimal::new(125, 2),
            },
            cryptocurrency_address: None,
        },
    }
}

pub fn new_template(profile_id: EntityId, title: &str) -> NewListingItemTemplate {
    NewListingItemTemplate {
        hash: format!("hash-{}", title),
        profile_id,
        item_information: item_information(title),
        payment_information: payment_information(Decimal::new(1000, 2)),
    }
}
