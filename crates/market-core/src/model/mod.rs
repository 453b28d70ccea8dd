//! Entity models
//!
//! Each entity comes with the plain records the store works with: a `New*`
//! record for inserts, a `*Patch` for partial updates (a `None` field is left
//! untouched) and a `*Filter` for searches.

pub mod market;
pub mod profile;
pub mod proposal;
pub mod template;

pub use market::{Market, MarketFilter, MarketPatch, NewMarket};
pub use profile::{NewProfile, Profile, ProfileFilter, ProfilePatch};
pub use proposal::{
    NewProposal, NewProposalOption, Proposal, ProposalFilter, ProposalKind, ProposalOption,
    ProposalPatch,
};
pub use template::{
    CryptocurrencyAddress, CryptocurrencyAddressType, Currency, ItemInformation, ItemPrice,
    ListingItemTemplate, ListingItemTemplateFilter, ListingItemTemplatePatch,
    NewListingItemTemplate, PaymentInformation, PaymentType, ShippingPrice,
};

/// Numeric primary key assigned by the store
pub type EntityId = i64;
