use market_core_types::Sensitive;
use serde::{Deserialize, Serialize};

use crate::errors::MarketError;
use crate::model::{EntityId, MarketPatch, NewMarket};
use crate::rules::validation::{validate_non_empty, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCreateRequest {
    pub profile_id: EntityId,
    pub name: String,
    pub private_key: Sensitive<String>,
    pub address: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Validate for MarketCreateRequest {
    fn validate(&self) -> Result<(), MarketError> {
        validate_non_empty("name", &self.name)?;
        validate_non_empty("private_key", self.private_key.expose())?;
        validate_non_empty("address", &self.address)
    }
}

impl MarketCreateRequest {
    pub fn into_new(self) -> Result<NewMarket, MarketError> {
        self.validate()?;
        Ok(NewMarket {
            profile_id: self.profile_id,
            name: self.name,
            private_key: self.private_key,
            address: self.address,
            is_default: self.is_default,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketUpdateRequest {
    pub name: Option<String>,
    pub private_key: Option<Sensitive<String>>,
    pub address: Option<String>,
    pub is_default: Option<bool>,
}

impl Validate for MarketUpdateRequest {
    fn validate(&self) -> Result<(), MarketError> {
        if let Some(name) = &self.name {
            validate_non_empty("name", name)?;
        }
        if let Some(key) = &self.private_key {
            validate_non_empty("private_key", key.expose())?;
        }
        if let Some(address) = &self.address {
            validate_non_empty("address", address)?;
        }
        Ok(())
    }
}

impl MarketUpdateRequest {
    pub fn into_patch(self) -> Result<MarketPatch, MarketError> {
        self.validate()?;
        Ok(MarketPatch {
            name: self.name,
            private_key: self.private_key,
            address: self.address,
            is_default: self.is_default,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_private_key_rejected() {
        let request = MarketCreateRequest {
            profile_id: 1,
            name: "TEST-MARKET".to_string(),
            private_key: Sensitive::new("  ".to_string()),
            address: "TEST-MARKET-ADDRESS".to_string(),
            is_default: false,
        };
        assert_eq!(
            request.validate(),
            Err(MarketError::EmptyField {
                field: "private_key".to_string()
            })
        );
    }

    #[test]
    fn test_empty_update_is_valid() {
        let patch = MarketUpdateRequest::default().into_patch().unwrap();
        assert!(patch.is_empty());
    }
}
