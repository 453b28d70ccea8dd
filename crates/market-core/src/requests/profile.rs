use serde::{Deserialize, Serialize};

use crate::errors::MarketError;
use crate::model::{NewProfile, ProfilePatch};
use crate::rules::validation::{validate_non_empty, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileCreateRequest {
    pub name: String,
    pub address: Option<String>,
}

impl Validate for ProfileCreateRequest {
    fn validate(&self) -> Result<(), MarketError> {
        validate_non_empty("name", &self.name)
    }
}

impl ProfileCreateRequest {
    pub fn into_new(self) -> Result<NewProfile, MarketError> {
        self.validate()?;
        Ok(NewProfile {
            name: self.name.trim().to_string(),
            address: self.address.filter(|a| !a.trim().is_empty()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl Validate for ProfileUpdateRequest {
    fn validate(&self) -> Result<(), MarketError> {
        if let Some(name) = &self.name {
            validate_non_empty("name", name)?;
        }
        Ok(())
    }
}

impl ProfileUpdateRequest {
    pub fn into_patch(self) -> Result<ProfilePatch, MarketError> {
        self.validate()?;
        Ok(ProfilePatch {
            name: self.name.map(|n| n.trim().to_string()),
            address: self.address,
        })
    }
}
