//! Generic repository over a data mapper
//!
//! Lookup semantics and error translation live here once instead of per
//! entity:
//! - reads hand driver failures back as `Persistence` errors
//! - `find_one` turns a missing row into `NotFound` carrying the key
//! - writes wrap driver failures as `Database` errors naming the operation

use market_core::errors::ExError;
use market_core::model::EntityId;

use crate::errors::{from_rusqlite, Result};
use crate::mapper::{DataMapper, HashedMapper};

pub struct Repository<M> {
    mapper: M,
}

impl<M: DataMapper> Repository<M> {
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }

    /// Borrow the underlying mapper for entity-specific queries
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Entities matching the filter, in id order
    pub fn search(&self, filter: &M::Filter, with_related: bool) -> Result<Vec<M::Entity>> {
        self.mapper.list(filter, with_related).map_err(from_rusqlite)
    }

    pub fn find_all(&self, with_related: bool) -> Result<Vec<M::Entity>> {
        self.search(&M::Filter::default(), with_related)
    }

    /// # Errors
    /// `NotFound` with the id as entity id when no row matches.
    pub fn find_one(&self, id: EntityId, with_related: bool) -> Result<M::Entity> {
        self.mapper
            .get(id, with_related)
            .map_err(from_rusqlite)?
            .ok_or_else(|| ExError::not_found(M::ENTITY, id))
    }

    /// Insert and return the stored entity with relations loaded
    ///
    /// # Errors
    /// `Database` wrapping the driver error when the insert fails. A failure
    /// re-reading the new row is returned as is.
    pub fn create(&self, new: &M::New) -> Result<M::Entity> {
        let id = self
            .mapper
            .insert(new)
            .map_err(|e| ExError::database("create", M::ENTITY, from_rusqlite(e)))?;
        tracing::debug!(entity = M::ENTITY, id, "created");
        self.find_one(id, true)
    }

    /// Apply a partial update and return the refreshed entity
    ///
    /// # Errors
    /// `NotFound` when the id does not exist, `Database` when the write fails.
    pub fn update(&self, id: EntityId, patch: &M::Patch) -> Result<M::Entity> {
        self.find_one(id, false)?;
        self.mapper
            .update_partial(id, patch)
            .map_err(|e| ExError::database("update", M::ENTITY, from_rusqlite(e)))?;
        self.find_one(id, true)
    }

    /// # Errors
    /// `NotFound` when the id does not exist, `Database` when the delete fails.
    pub fn destroy(&self, id: EntityId) -> Result<()> {
        self.find_one(id, false)?;
        self.mapper
            .delete(id)
            .map_err(|e| ExError::database("delete", M::ENTITY, from_rusqlite(e)))?;
        tracing::debug!(entity = M::ENTITY, id, "deleted");
        Ok(())
    }
}

impl<M: HashedMapper> Repository<M> {
    /// # Errors
    /// `NotFound` with the hash as entity id when no row matches.
    pub fn find_one_by_hash(&self, hash: &str, with_related: bool) -> Result<M::Entity> {
        self.mapper
            .get_by_hash(hash, with_related)
            .map_err(from_rusqlite)?
            .ok_or_else(|| ExError::not_found(M::ENTITY, hash))
    }
}
