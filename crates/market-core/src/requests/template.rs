use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::MarketError;
use crate::model::{
    CryptocurrencyAddress, Currency, EntityId, ItemInformation, ItemPrice, PaymentInformation,
    PaymentType, ShippingPrice,
};
use crate::rules::validation::{validate_non_empty, validate_price, validate_title, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInformationCreateRequest {
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub item_category_id: EntityId,
}

impl Validate for ItemInformationCreateRequest {
    fn validate(&self) -> Result<(), MarketError> {
        validate_title(&self.title)
    }
}

impl ItemInformationCreateRequest {
    pub fn to_model(&self) -> Result<ItemInformation, MarketError> {
        self.validate()?;
        Ok(ItemInformation {
            title: self.title.clone(),
            short_description: self.short_description.clone(),
            long_description: self.long_description.clone(),
            item_category_id: self.item_category_id,
        })
    }
}

/// Price block as received; the currency is still free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPriceCreateRequest {
    pub currency: String,
    pub base_price: Decimal,
    pub shipping_price: ShippingPrice,
    pub cryptocurrency_address: Option<CryptocurrencyAddress>,
}

/// Payment block as received; the payment type is still free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInformationCreateRequest {
    pub payment_type: String,
    pub item_price: ItemPriceCreateRequest,
}

impl Validate for PaymentInformationCreateRequest {
    fn validate(&self) -> Result<(), MarketError> {
        self.payment_type.parse::<PaymentType>()?;
        self.item_price.currency.parse::<Currency>()?;
        validate_price("base_price", self.item_price.base_price)?;
        validate_price("domestic", self.item_price.shipping_price.domestic)?;
        validate_price("international", self.item_price.shipping_price.international)?;
        if let Some(address) = &self.item_price.cryptocurrency_address {
            validate_non_empty("cryptocurrency_address", &address.address)?;
        }
        Ok(())
    }
}

impl PaymentInformationCreateRequest {
    pub fn to_model(&self) -> Result<PaymentInformation, MarketError> {
        self.validate()?;
        let price = &self.item_price;
        Ok(PaymentInformation {
            payment_type: self.payment_type.parse()?,
            item_price: ItemPrice {
                currency: price.currency.parse()?,
                base_price: price.base_price,
                shipping_price: price.shipping_price.clone(),
                cryptocurrency_address: price.cryptocurrency_address.clone(),
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingItemTemplateCreateRequest {
    pub profile_id: EntityId,
    pub item_information: ItemInformationCreateRequest,
    pub payment_information: PaymentInformationCreateRequest,
}

impl Validate for ListingItemTemplateCreateRequest {
    fn validate(&self) -> Result<(), MarketError> {
        self.item_information.validate()?;
        self.payment_information.validate()
    }
}

/// Replaces whichever sub-objects are present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingItemTemplateUpdateRequest {
    pub item_information: Option<ItemInformationCreateRequest>,
    pub payment_information: Option<PaymentInformationCreateRequest>,
}

impl Validate for ListingItemTemplateUpdateRequest {
    fn validate(&self) -> Result<(), MarketError> {
        if let Some(item) = &self.item_information {
            item.validate()?;
        }
        if let Some(payment) = &self.payment_information {
            payment.validate()?;
        }
        Ok(())
    }
}
