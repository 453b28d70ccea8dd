use market_core::model::{EntityId, NewProfile, Profile, ProfileFilter, ProfilePatch};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use super::columns::{now_millis, to_datetime};
use super::DataMapper;

const COLUMNS: &str = "id, name, address, created_at, updated_at";

pub struct ProfileMapper<'a> {
    conn: &'a Connection,
}

impl<'a> ProfileMapper<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Profile> {
        Ok(Profile {
            id: row.get(0)?,
            name: row.get(1)?,
            address: row.get(2)?,
            created_at: to_datetime(row.get(3)?),
            updated_at: to_datetime(row.get(4)?),
        })
    }
}

impl DataMapper for ProfileMapper<'_> {
    type Entity = Profile;
    type New = NewProfile;
    type Patch = ProfilePatch;
    type Filter = ProfileFilter;

    const ENTITY: &'static str = "Profile";

    fn get(&self, id: EntityId, _with_related: bool) -> rusqlite::Result<Option<Profile>> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM profiles WHERE id = ?1", COLUMNS),
                [id],
                Self::from_row,
            )
            .optional()
    }

    fn list(&self, filter: &ProfileFilter, _with_related: bool) -> rusqlite::Result<Vec<Profile>> {
        let mut sql = format!("SELECT {} FROM profiles WHERE 1 = 1", COLUMNS);
        let mut args: Vec<Value> = Vec::new();
        if let Some(name) = &filter.name {
            args.push(Value::Text(name.clone()));
            sql.push_str(&format!(" AND name = ?{}", args.len()));
        }
        sql.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(args), Self::from_row)?;
        rows.collect()
    }

    fn insert(&self, new: &NewProfile) -> rusqlite::Result<EntityId> {
        let now = now_millis();
        self.conn.execute(
            "INSERT INTO profiles (name, address, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![new.name, new.address, now, now],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_partial(&self, id: EntityId, patch: &ProfilePatch) -> rusqlite::Result<usize> {
        self.conn.execute(
            "UPDATE profiles SET
                name = COALESCE(?1, name),
                address = COALESCE(?2, address),
                updated_at = ?3
             WHERE id = ?4",
            params![patch.name, patch.address, now_millis(), id],
        )
    }

    fn delete(&self, id: EntityId) -> rusqlite::Result<usize> {
        self.conn.execute("DELETE FROM profiles WHERE id = ?1", [id])
    }
}
