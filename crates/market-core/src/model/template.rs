use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::EntityId;
use crate::errors::MarketError;

/// How a listing is paid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Sale,
    Rent,
    Free,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Sale => "SALE",
            PaymentType::Rent => "RENT",
            PaymentType::Free => "FREE",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentType {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SALE" => Ok(PaymentType::Sale),
            "RENT" => Ok(PaymentType::Rent),
            "FREE" => Ok(PaymentType::Free),
            _ => Err(MarketError::UnknownVariant {
                field: "payment type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    Bitcoin,
    Particl,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Bitcoin => "BITCOIN",
            Currency::Particl => "PARTICL",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BITCOIN" | "BTC" => Ok(Currency::Bitcoin),
            "PARTICL" | "PART" => Ok(Currency::Particl),
            _ => Err(MarketError::UnknownVariant {
                field: "currency".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Address type tag for a payment address
///
/// Only normal (non-stealth) addresses are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CryptocurrencyAddressType {
    #[default]
    Normal,
}

impl CryptocurrencyAddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CryptocurrencyAddressType::Normal => "NORMAL",
        }
    }
}

impl FromStr for CryptocurrencyAddressType {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NORMAL" => Ok(CryptocurrencyAddressType::Normal),
            _ => Err(MarketError::UnknownVariant {
                field: "cryptocurrency address type".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptocurrencyAddress {
    pub address_type: CryptocurrencyAddressType,
    pub address: String,
}

impl CryptocurrencyAddress {
    /// Tag an address with the supported address type
    pub fn normal(address: impl Into<String>) -> Self {
        Self {
            address_type: CryptocurrencyAddressType::Normal,
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPrice {
    pub domestic: Decimal,
    pub international: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPrice {
    pub currency: Currency,
    pub base_price: Decimal,
    pub shipping_price: ShippingPrice,
    pub cryptocurrency_address: Option<CryptocurrencyAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInformation {
    pub payment_type: PaymentType,
    pub item_price: ItemPrice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInformation {
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub item_category_id: EntityId,
}

/// Reusable draft of a listing, owned by a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingItemTemplate {
    pub id: EntityId,
    pub hash: String,
    pub profile_id: EntityId,
    /// `None` unless fetched with related records
    pub item_information: Option<ItemInformation>,
    /// `None` unless fetched with related records
    pub payment_information: Option<PaymentInformation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewListingItemTemplate {
    pub hash: String,
    pub profile_id: EntityId,
    pub item_information: ItemInformation,
    pub payment_information: PaymentInformation,
}

/// Partial update; sub-objects are replaced as a whole when present
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingItemTemplatePatch {
    pub hash: Option<String>,
    pub item_information: Option<ItemInformation>,
    pub payment_information: Option<PaymentInformation>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingItemTemplateFilter {
    pub profile_id: Option<EntityId>,
    /// Literal, case-sensitive substring of the item title
    pub title_contains: Option<String>,
}
