//! Create/update request objects
//!
//! Commands assemble these from positional params; services validate them
//! and convert them into the plain records the store writes.

pub mod market;
pub mod profile;
pub mod proposal;
pub mod template;

pub use market::{MarketCreateRequest, MarketUpdateRequest};
pub use profile::{ProfileCreateRequest, ProfileUpdateRequest};
pub use proposal::ProposalCreateRequest;
pub use template::{
    ItemInformationCreateRequest, ItemPriceCreateRequest, ListingItemTemplateCreateRequest,
    ListingItemTemplateUpdateRequest, PaymentInformationCreateRequest,
};
