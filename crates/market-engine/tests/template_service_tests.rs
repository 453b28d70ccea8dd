// Tests for listing item template updates through the service

mod common;

use common::setup_test_db;
use market_core::errors::ExErrorKind;
use market_core::hash::template_hash;
use market_core::model::{CryptocurrencyAddress, ShippingPrice};
use market_core::requests::{
    ItemInformationCreateRequest, ItemPriceCreateRequest, ListingItemTemplateCreateRequest,
    ListingItemTemplateUpdateRequest, PaymentInformationCreateRequest, ProfileCreateRequest,
};
use market_engine::services::{ListingItemTemplateService, ProfileService};
use market_engine::Services;
use rust_decimal::Decimal;

fn item(title: &str) -> ItemInformationCreateRequest {
    ItemInformationCreateRequest {
        title: title.to_string(),
        short_description: "Short description".to_string(),
        long_description: "Long description".to_string(),
        item_category_id: 1,
    }
}

fn payment(payment_type: &str, base_price: Decimal) -> PaymentInformationCreateRequest {
    PaymentInformationCreateRequest {
        payment_type: payment_type.to_string(),
        item_price: ItemPriceCreateRequest {
            currency: "BITCOIN".to_string(),
            base_price,
            shipping_price: ShippingPrice {
                domestic: Decimal::new(1, 2),
                international: Decimal::new(5, 2),
            },
            cryptocurrency_address: Some(CryptocurrencyAddress::normal(
                "pmZpGbH2j2dDYU6LvTryHbEsM3iQzxpnj1",
            )),
        },
    }
}

fn create_profile(services: &Services<'_>) -> i64 {
    services
        .profiles
        .create(ProfileCreateRequest {
            name: "DEFAULT-PROFILE".to_string(),
            address: None,
        })
        .unwrap()
        .id
}

#[test]
fn test_payment_only_update_rehashes_and_keeps_item() {
    let conn = setup_test_db();
    let services = Services::new(&conn);
    let profile_id = create_profile(&services);

    let created = services
        .templates
        .create(ListingItemTemplateCreateRequest {
            profile_id,
            item_information: item("The Communist Manifesto"),
            payment_information: payment("SALE", Decimal::new(10, 2)),
        })
        .unwrap();

    let updated = services
        .templates
        .update(
            created.id,
            ListingItemTemplateUpdateRequest {
                item_information: None,
                payment_information: Some(payment("RENT", Decimal::new(25, 2))),
            },
        )
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_ne!(updated.hash, created.hash);
    assert_eq!(updated.item_information, created.item_information);

    let payment_information = updated.payment_information.clone().unwrap();
    assert_eq!(payment_information.payment_type.as_str(), "RENT");
    assert_eq!(payment_information.item_price.base_price, Decimal::new(25, 2));

    // hash covers the stored item plus the replaced payment block
    let expected = template_hash(
        profile_id,
        created.item_information.as_ref().unwrap(),
        &payment_information,
    );
    assert_eq!(updated.hash, expected);

    assert_eq!(services.templates.find_one(created.id).unwrap(), updated);
}

#[test]
fn test_item_only_update_keeps_payment() {
    let conn = setup_test_db();
    let services = Services::new(&conn);
    let profile_id = create_profile(&services);

    let created = services
        .templates
        .create(ListingItemTemplateCreateRequest {
            profile_id,
            item_information: item("Bicycle"),
            payment_information: payment("SALE", Decimal::ONE),
        })
        .unwrap();

    let updated = services
        .templates
        .update(
            created.id,
            ListingItemTemplateUpdateRequest {
                item_information: Some(item("Red Bicycle")),
                payment_information: None,
            },
        )
        .unwrap();

    assert_ne!(updated.hash, created.hash);
    assert_eq!(updated.payment_information, created.payment_information);
    assert_eq!(
        updated.item_information.map(|i| i.title),
        Some("Red Bicycle".to_string())
    );
}

#[test]
fn test_update_unknown_template_is_not_found() {
    let conn = setup_test_db();
    let services = Services::new(&conn);

    let err = services
        .templates
        .update(
            404,
            ListingItemTemplateUpdateRequest {
                item_information: None,
                payment_information: Some(payment("SALE", Decimal::ONE)),
            },
        )
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity_id(), Some("404"));
}

#[test]
fn test_invalid_update_is_rejected_before_store() {
    let conn = setup_test_db();
    let services = Services::new(&conn);
    let profile_id = create_profile(&services);

    let created = services
        .templates
        .create(ListingItemTemplateCreateRequest {
            profile_id,
            item_information: item("Bicycle"),
            payment_information: payment("SALE", Decimal::ONE),
        })
        .unwrap();

    let err = services
        .templates
        .update(
            created.id,
            ListingItemTemplateUpdateRequest {
                item_information: None,
                payment_information: Some(payment("SALE", Decimal::NEGATIVE_ONE)),
            },
        )
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert_eq!(services.templates.find_one(created.id).unwrap(), created);
}
