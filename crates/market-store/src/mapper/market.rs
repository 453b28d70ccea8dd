use market_core::model::{EntityId, Market, MarketFilter, MarketPatch, NewMarket};
use market_core_types::Sensitive;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use super::columns::{now_millis, to_datetime};
use super::DataMapper;

const COLUMNS: &str =
    "id, profile_id, name, private_key, address, is_default, created_at, updated_at";

pub struct MarketMapper<'a> {
    conn: &'a Connection,
}

impl<'a> MarketMapper<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Clear the default flag on every market of a profile
    ///
    /// Returns the number of markets that lost the flag.
    pub fn clear_default(&self, profile_id: EntityId) -> rusqlite::Result<usize> {
        self.conn.execute(
            "UPDATE markets SET is_default = 0, updated_at = ?1
             WHERE profile_id = ?2 AND is_default = 1",
            params![now_millis(), profile_id],
        )
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Market> {
        let private_key: String = row.get(3)?;
        let is_default: i64 = row.get(5)?;
        Ok(Market {
            id: row.get(0)?,
            profile_id: row.get(1)?,
            name: row.get(2)?,
            private_key: Sensitive::new(private_key),
            address: row.get(4)?,
            is_default: is_default != 0,
            created_at: to_datetime(row.get(6)?),
            updated_at: to_datetime(row.get(7)?),
        })
    }
}

impl DataMapper for MarketMapper<'_> {
    type Entity = Market;
    type New = NewMarket;
    type Patch = MarketPatch;
    type Filter = MarketFilter;

    const ENTITY: &'static str = "Market";

    fn get(&self, id: EntityId, _with_related: bool) -> rusqlite::Result<Option<Market>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM markets WHERE id = ?1", COLUMNS),
                [id],
                Self::from_row,
            )
            .optional()
    }

    fn list(&self, filter: &MarketFilter, _with_related: bool) -> rusqlite::Result<Vec<Market>> {
        let mut sql = format!("SELECT {} FROM markets WHERE 1 = 1", COLUMNS);
        let mut args: Vec<Value> = Vec::new();
        if let Some(profile_id) = filter.profile_id {
            args.push(Value::Integer(profile_id));
            sql.push_str(&format!(" AND profile_id = ?{}", args.len()));
        }
        if let Some(name) = &filter.name {
            args.push(Value::Text(name.clone()));
            sql.push_str(&format!(" AND name = ?{}", args.len()));
        }
        if let Some(is_default) = filter.is_default {
            args.push(Value::Integer(i64::from(is_default)));
            sql.push_str(&format!(" AND is_default = ?{}", args.len()));
        }
        sql.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args), Self::from_row)?;
        rows.collect()
    }

    fn insert(&self, new: &NewMarket) -> rusqlite::Result<EntityId> {
        let now = now_millis();
        self.conn.execute(
            "INSERT INTO markets (profile_id, name, private_key, address, is_default, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                new.profile_id,
                new.name,
                new.private_key.expose(),
                new.address,
                i64::from(new.is_default),
                now,
                now,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_partial(&self, id: EntityId, patch: &MarketPatch) -> rusqlite::Result<usize> {
        self.conn.execute(
            "UPDATE markets SET
                name = COALESCE(?1, name),
                private_key = COALESCE(?2, private_key),
                address = COALESCE(?3, address),
                is_default = COALESCE(?4, is_default),
                updated_at = ?5
             WHERE id = ?6",
            params![
                patch.name,
                patch.private_key.as_ref().map(|k| k.expose()),
                patch.address,
                patch.is_default.map(i64::from),
                now_millis(),
                id,
            ],
        )
    }

    fn delete(&self, id: EntityId) -> rusqlite::Result<usize> {
        self.conn.execute("DELETE FROM markets WHERE id = ?1", [id])
    }
}
