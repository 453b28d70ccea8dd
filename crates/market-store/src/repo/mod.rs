//! Repositories
//!
//! One generic `Repository` over any data mapper, plus per-entity aliases.

mod repository;

pub use repository::Repository;

use crate::mapper::{ListingItemTemplateMapper, MarketMapper, ProfileMapper, ProposalMapper};

pub type ProfileRepository<'a> = Repository<ProfileMapper<'a>>;
pub type MarketRepository<'a> = Repository<MarketMapper<'a>>;
pub type ListingItemTemplateRepository<'a> = Repository<ListingItemTemplateMapper<'a>>;
pub type ProposalRepository<'a> = Repository<ProposalMapper<'a>>;
