//! Services
//!
//! One trait per entity with a SQLite-backed implementation. Commands
//! depend on the traits so they can be exercised against stubs.

mod market;
mod profile;
mod proposal;
mod template;

pub use market::SqliteMarketService;
pub use profile::SqliteProfileService;
pub use proposal::SqliteProposalService;
pub use template::SqliteListingItemTemplateService;

use std::time::Instant;

use market_core::model::{
    EntityId, ListingItemTemplate, ListingItemTemplateFilter, Market, Profile, Proposal,
    ProposalFilter,
};
use market_core::requests::{
    ListingItemTemplateCreateRequest, ListingItemTemplateUpdateRequest, MarketCreateRequest,
    MarketUpdateRequest, ProfileCreateRequest, ProposalCreateRequest,
};
use market_core::{log_op_end, log_op_error, log_op_start, Result};
use rusqlite::Connection;

pub trait ProfileService {
    fn create(&self, request: ProfileCreateRequest) -> Result<Profile>;
    fn find_one(&self, id: EntityId) -> Result<Profile>;
    fn find_all(&self) -> Result<Vec<Profile>>;
}

pub trait MarketService {
    /// Create a market; a default market replaces the profile's previous default
    fn create(&self, request: MarketCreateRequest) -> Result<Market>;
    fn find_by_profile(&self, profile_id: EntityId) -> Result<Vec<Market>>;
    fn find_one(&self, id: EntityId) -> Result<Market>;
    fn update(&self, id: EntityId, request: MarketUpdateRequest) -> Result<Market>;
    fn destroy(&self, id: EntityId) -> Result<()>;
}

pub trait ListingItemTemplateService {
    fn create(&self, request: ListingItemTemplateCreateRequest) -> Result<ListingItemTemplate>;
    fn find_one(&self, id: EntityId) -> Result<ListingItemTemplate>;
    fn search(&self, filter: ListingItemTemplateFilter) -> Result<Vec<ListingItemTemplate>>;
    fn update(
        &self,
        id: EntityId,
        request: ListingItemTemplateUpdateRequest,
    ) -> Result<ListingItemTemplate>;
    fn destroy(&self, id: EntityId) -> Result<()>;
}

pub trait ProposalService {
    fn create(&self, request: ProposalCreateRequest) -> Result<Proposal>;
    fn find_one(&self, id: EntityId) -> Result<Proposal>;
    fn find_one_by_hash(&self, hash: &str) -> Result<Proposal>;
    fn search(&self, filter: ProposalFilter) -> Result<Vec<Proposal>>;
}

/// The SQLite-backed services over one connection
pub struct Services<'a> {
    pub profiles: SqliteProfileService<'a>,
    pub markets: SqliteMarketService<'a>,
    pub templates: SqliteListingItemTemplateService<'a>,
    pub proposals: SqliteProposalService<'a>,
}

impl<'a> Services<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            profiles: SqliteProfileService::new(conn),
            markets: SqliteMarketService::new(conn),
            templates: SqliteListingItemTemplateService::new(conn),
            proposals: SqliteProposalService::new(conn),
        }
    }
}

/// Run one service operation between start and end/end_error log events
fn observed<T>(op: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let started = Instant::now();
    log_op_start!(op);
    let result = f();
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!(op, *err, duration_ms = duration_ms);
        }
    }
    result
}
