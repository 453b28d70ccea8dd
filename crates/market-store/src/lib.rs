//! Marketplace Store - SQLite persistence
//!
//! Provides:
//! - Connection management
//! - Embedded, checksummed schema migrations
//! - Data mappers: one plain `{get, list, insert, update_partial, delete}`
//!   function set per entity
//! - The generic `Repository` that wraps a mapper with lookup semantics and
//!   error translation

pub mod db;
pub mod errors;
pub mod mapper;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{
    ListingItemTemplateRepository, MarketRepository, ProfileRepository, ProposalRepository,
    Repository,
};
