//! Marketplace Core - domain model, request objects and error facility
//!
//! This crate provides:
//! - Entity models (Profile, Market, Proposal, ListingItemTemplate) and
//!   their nested value objects
//! - Create/update request objects with a validator that turns them into
//!   plain insert/patch records
//! - Content hashing for proposals and templates
//! - The structured error facility (`ExError`) and domain error taxonomy
//! - The structured logging facility

pub mod errors;
pub mod hash;
pub mod logging_facility;
pub mod model;
pub mod requests;
pub mod rules;

pub use market_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, MarketError, Result};
pub use model::{
    CryptocurrencyAddress, CryptocurrencyAddressType, Currency, ItemInformation, ItemPrice,
    ListingItemTemplate, Market, PaymentInformation, PaymentType, Profile, Proposal, ProposalKind,
    ProposalOption, ShippingPrice,
};
pub use rules::validation::Validate;
