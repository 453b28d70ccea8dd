use market_core::model::{EntityId, Market, MarketFilter};
use market_core::requests::{MarketCreateRequest, MarketUpdateRequest};
use market_core::{ExError, ExErrorKind, MarketError, Result};
use market_store::errors::from_rusqlite;
use market_store::mapper::{MarketMapper, ProfileMapper};
use market_store::{MarketRepository, ProfileRepository};
use rusqlite::Connection;

use super::{observed, MarketService};

pub struct SqliteMarketService<'a> {
    conn: &'a Connection,
    markets: MarketRepository<'a>,
    profiles: ProfileRepository<'a>,
}

impl<'a> SqliteMarketService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            markets: MarketRepository::new(MarketMapper::new(conn)),
            profiles: ProfileRepository::new(ProfileMapper::new(conn)),
        }
    }

    fn require_profile(&self, profile_id: EntityId) -> Result<()> {
        self.profiles
            .find_one(profile_id, false)
            .map(|_| ())
            .map_err(|err| match err.kind() {
                ExErrorKind::NotFound => {
                    MarketError::ProfileNotFound { profile_id }.into()
                }
                _ => err,
            })
    }

    fn clear_default(&self, profile_id: EntityId, op: &str) -> Result<()> {
        self.markets
            .mapper()
            .clear_default(profile_id)
            .map_err(|e| ExError::database(op, "Market", from_rusqlite(e)))?;
        Ok(())
    }

    /// Run a default switch and its write as one unit; dropping the
    /// uncommitted transaction on error restores the previous default
    fn in_transaction<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let tx = self.conn.unchecked_transaction().map_err(from_rusqlite)?;
        let value = f()?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(value)
    }
}

impl MarketService for SqliteMarketService<'_> {
    fn create(&self, request: MarketCreateRequest) -> Result<Market> {
        observed("market_create", || {
            let new = request.into_new()?;
            self.require_profile(new.profile_id)?;
            self.in_transaction(|| {
                if new.is_default {
                    self.clear_default(new.profile_id, "create")?;
                }
                self.markets.create(&new)
            })
        })
    }

    fn find_by_profile(&self, profile_id: EntityId) -> Result<Vec<Market>> {
        observed("market_find_by_profile", || {
            self.require_profile(profile_id)?;
            self.markets.search(
                &MarketFilter {
                    profile_id: Some(profile_id),
                    ..Default::default()
                },
                true,
            )
        })
    }

    fn find_one(&self, id: EntityId) -> Result<Market> {
        observed("market_find_one", || self.markets.find_one(id, true))
    }

    fn update(&self, id: EntityId, request: MarketUpdateRequest) -> Result<Market> {
        observed("market_update", || {
            let patch = request.into_patch()?;
            let current = self.markets.find_one(id, false)?;
            self.in_transaction(|| {
                if patch.is_default == Some(true) && !current.is_default {
                    self.clear_default(current.profile_id, "update")?;
                }
                self.markets.update(id, &patch)
            })
        })
    }

    fn destroy(&self, id: EntityId) -> Result<()> {
        observed("market_destroy", || self.markets.destroy(id))
    }
}
