//! Data mappers
//!
//! A mapper is the plain function set the repository builds on. It speaks
//! raw `rusqlite` results: a missing row is `Ok(None)` (or zero rows
//! affected), and every driver failure is handed back untranslated so the
//! repository can decide how to classify it.

mod columns;
pub mod market;
pub mod profile;
pub mod proposal;
pub mod template;

pub use market::MarketMapper;
pub use profile::ProfileMapper;
pub use proposal::ProposalMapper;
pub use template::ListingItemTemplateMapper;

use market_core::model::EntityId;

/// Per-entity persistence functions over plain value structs
pub trait DataMapper {
    type Entity;
    type New;
    type Patch;
    type Filter: Default;

    /// Entity name used in error messages
    const ENTITY: &'static str;

    fn get(&self, id: EntityId, with_related: bool) -> rusqlite::Result<Option<Self::Entity>>;

    /// Rows matching the filter, in id order
    fn list(
        &self,
        filter: &Self::Filter,
        with_related: bool,
    ) -> rusqlite::Result<Vec<Self::Entity>>;

    /// Insert and return the generated id
    fn insert(&self, new: &Self::New) -> rusqlite::Result<EntityId>;

    /// Write only the fields present in the patch; returns rows touched
    fn update_partial(&self, id: EntityId, patch: &Self::Patch) -> rusqlite::Result<usize>;

    /// Returns rows deleted
    fn delete(&self, id: EntityId) -> rusqlite::Result<usize>;
}

/// Mappers for entities addressable by content hash
pub trait HashedMapper: DataMapper {
    fn get_by_hash(&self, hash: &str, with_related: bool)
        -> rusqlite::Result<Option<Self::Entity>>;
}
