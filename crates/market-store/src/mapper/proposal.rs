use market_core::model::{
    EntityId, NewProposal, Proposal, ProposalFilter, ProposalKind, ProposalOption, ProposalPatch,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use super::columns::{now_millis, parse_enum, to_datetime};
use super::{DataMapper, HashedMapper};

const COLUMNS: &str =
    "id, hash, submitter, block_start, block_end, title, description, kind, created_at, updated_at";

pub struct ProposalMapper<'a> {
    conn: &'a Connection,
}

impl<'a> ProposalMapper<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Proposal> {
        let kind: String = row.get(7)?;
        Ok(Proposal {
            id: row.get(0)?,
            hash: row.get(1)?,
            submitter: row.get(2)?,
            block_start: row.get(3)?,
            block_end: row.get(4)?,
            title: row.get(5)?,
            description: row.get(6)?,
            kind: parse_enum::<ProposalKind>("kind", &kind)?,
            options: None,
            created_at: to_datetime(row.get(8)?),
            updated_at: to_datetime(row.get(9)?),
        })
    }

    fn load_options(&self, proposal_id: EntityId) -> rusqlite::Result<Vec<ProposalOption>> {
        let mut stmt = self.conn.prepare(
            "SELECT option_id, description, hash FROM proposal_options
             WHERE proposal_id = ?1 ORDER BY option_id",
        )?;
        let rows = stmt.query_map([proposal_id], |row| {
            Ok(ProposalOption {
                option_id: row.get(0)?,
                description: row.get(1)?,
                hash: row.get(2)?,
            })
        })?;
        rows.collect()
    }

    fn with_options(
        &self,
        proposal: Option<Proposal>,
        with_related: bool,
    ) -> rusqlite::Result<Option<Proposal>> {
        match proposal {
            Some(mut proposal) if with_related => {
                proposal.options = Some(self.load_options(proposal.id)?);
                Ok(Some(proposal))
            }
            other => Ok(other),
        }
    }
}

impl DataMapper for ProposalMapper<'_> {
    type Entity = Proposal;
    type New = NewProposal;
    type Patch = ProposalPatch;
    type Filter = ProposalFilter;

    const ENTITY: &'static str = "Proposal";

    fn get(&self, id: EntityId, with_related: bool) -> rusqlite::Result<Option<Proposal>> {
        let proposal = self
            .conn
            .query_row(
                &format!("SELECT {} FROM proposals WHERE id = ?1", COLUMNS),
                [id],
                Self::from_row,
            )
            .optional()?;
        self.with_options(proposal, with_related)
    }

    fn list(&self, filter: &ProposalFilter, with_related: bool) -> rusqlite::Result<Vec<Proposal>> {
        let mut sql = format!("SELECT {} FROM proposals WHERE 1 = 1", COLUMNS);
        let mut args: Vec<Value> = Vec::new();
        if let Some(kind) = filter.kind {
            args.push(Value::Text(kind.as_str().to_string()));
            sql.push_str(&format!(" AND kind = ?{}", args.len()));
        }
        if let Some(submitter) = &filter.submitter {
            args.push(Value::Text(submitter.clone()));
            sql.push_str(&format!(" AND submitter = ?{}", args.len()));
        }
        sql.push_str(" ORDER BY id");

        let mut stmt = self.conn.prepare(&sql)?;
        let proposals = stmt
            .query_map(params_from_iter(args), Self::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        if !with_related {
            return Ok(proposals);
        }
        proposals
            .into_iter()
            .map(|mut proposal| {
                proposal.options = Some(self.load_options(proposal.id)?);
                Ok(proposal)
            })
            .collect()
    }

    /// Proposal and options are written in one transaction
    fn insert(&self, new: &NewProposal) -> rusqlite::Result<EntityId> {
        let tx = self.conn.unchecked_transaction()?;
        let now = now_millis();
        tx.execute(
            "INSERT INTO proposals
                (hash, submitter, block_start, block_end, title, description, kind, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                new.hash,
                new.submitter,
                new.block_start,
                new.block_end,
                new.title,
                new.description,
                new.kind.as_str(),
                now,
                now,
            ],
        )?;
        let id = tx.last_insert_rowid();

        for option in &new.options {
            tx.execute(
                "INSERT INTO proposal_options (proposal_id, option_id, description, hash)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id, option.option_id, option.description, option.hash],
            )?;
        }

        tx.commit()?;
        Ok(id)
    }

    fn update_partial(&self, id: EntityId, patch: &ProposalPatch) -> rusqlite::Result<usize> {
        self.conn.execute(
            "UPDATE proposals SET
                title = COALESCE(?1, title),
                description = COALESCE(?2, description),
                block_end = COALESCE(?3, block_end),
                updated_at = ?4
             WHERE id = ?5",
            params![patch.title, patch.description, patch.block_end, now_millis(), id],
        )
    }

    fn delete(&self, id: EntityId) -> rusqlite::Result<usize> {
        self.conn.execute("DELETE FROM proposals WHERE id = ?1", [id])
    }
}

impl HashedMapper for ProposalMapper<'_> {
    fn get_by_hash(&self, hash: &str, with_related: bool) -> rusqlite::Result<Option<Proposal>> {
        let proposal = self
            .conn
            .query_row(
                &format!("SELECT {} FROM proposals WHERE hash = ?1", COLUMNS),
                [hash],
                Self::from_row,
            )
            .optional()?;
        self.with_options(proposal, with_related)
    }
}
