use chrono::{DateTime, Utc};
use market_core_types::Sensitive;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// A marketplace context owned by a profile
///
/// The private key is wrapped so it never shows up in `Debug` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub id: EntityId,
    pub profile_id: EntityId,
    pub name: String,
    pub private_key: Sensitive<String>,
    pub address: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMarket {
    pub profile_id: EntityId,
    pub name: String,
    pub private_key: Sensitive<String>,
    pub address: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketPatch {
    pub name: Option<String>,
    pub private_key: Option<Sensitive<String>>,
    pub address: Option<String>,
    pub is_default: Option<bool>,
}

impl MarketPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.private_key.is_none()
            && self.address.is_none()
            && self.is_default.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketFilter {
    pub profile_id: Option<EntityId>,
    pub name: Option<String>,
    pub is_default: Option<bool>,
}
