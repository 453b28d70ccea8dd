// Property tests for the template add positional mapping

use market_core::errors::ExErrorKind;
use market_core::model::CryptocurrencyAddressType;
use market_engine::commands::ListingItemTemplateAddCommand;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,20}"
}

fn price() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000, 0u32..8).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

proptest! {
    #[test]
    fn full_params_map_index_to_field(
        profile_id in 1i64..100_000,
        title in text(),
        short_description in text(),
        long_description in text(),
        category_id in 1i64..1_000,
        payment_type in prop::sample::select(vec!["SALE", "RENT", "FREE"]),
        currency in prop::sample::select(vec!["BITCOIN", "PARTICL"]),
        base in price(),
        domestic in price(),
        international in price(),
        address in proptest::option::of("p[a-zA-Z0-9]{20,33}"),
    ) {
        let mut params: Vec<Value> = vec![
            json!(profile_id),
            json!(title),
            json!(short_description),
            json!(long_description),
            json!(category_id),
            json!(payment_type),
            json!(currency),
            json!(base.to_string()),
            json!(domestic.to_string()),
            json!(international.to_string()),
        ];
        if let Some(address) = &address {
            params.push(json!(address));
        }

        let request = ListingItemTemplateAddCommand::parse_request(&params).unwrap();

        prop_assert_eq!(request.profile_id, profile_id);
        prop_assert_eq!(&request.item_information.title, &title);
        prop_assert_eq!(&request.item_information.short_description, &short_description);
        prop_assert_eq!(&request.item_information.long_description, &long_description);
        prop_assert_eq!(request.item_information.item_category_id, category_id);
        prop_assert_eq!(request.payment_information.payment_type.as_str(), payment_type);

        let item_price = &request.payment_information.item_price;
        prop_assert_eq!(item_price.currency.as_str(), currency);
        prop_assert_eq!(item_price.base_price, base);
        prop_assert_eq!(item_price.shipping_price.domestic, domestic);
        prop_assert_eq!(item_price.shipping_price.international, international);

        match (&address, &item_price.cryptocurrency_address) {
            (Some(expected), Some(actual)) => {
                prop_assert_eq!(&actual.address, expected);
                prop_assert_eq!(actual.address_type, CryptocurrencyAddressType::Normal);
            }
            (None, None) => {}
            (expected, actual) => {
                prop_assert!(false, "address mismatch: {:?} vs {:?}", expected, actual);
            }
        }
    }

    #[test]
    fn short_params_are_not_enough(len in 0usize..10) {
        let params: Vec<Value> = (0..len).map(|i| json!(i.to_string())).collect();

        let err = ListingItemTemplateAddCommand::parse_request(&params).unwrap_err();

        prop_assert_eq!(err.kind(), ExErrorKind::NotEnoughParams);
        prop_assert_eq!(err.message(), "Not enough params.");
    }
}
