use market_core::model::{EntityId, Proposal, ProposalFilter};
use market_core::requests::ProposalCreateRequest;
use market_core::{ExError, ExErrorKind, Result};
use market_store::errors::from_rusqlite;
use market_store::mapper::{HashedMapper, ProposalMapper};
use market_store::ProposalRepository;
use rusqlite::Connection;

use super::{observed, ProposalService};

pub struct SqliteProposalService<'a> {
    proposals: ProposalRepository<'a>,
}

impl<'a> SqliteProposalService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            proposals: ProposalRepository::new(ProposalMapper::new(conn)),
        }
    }
}

impl ProposalService for SqliteProposalService<'_> {
    fn create(&self, request: ProposalCreateRequest) -> Result<Proposal> {
        observed("proposal_create", || {
            let new = request.into_new()?;
            let existing = self
                .proposals
                .mapper()
                .get_by_hash(&new.hash, false)
                .map_err(from_rusqlite)?;
            if existing.is_some() {
                return Err(ExError::new(ExErrorKind::AlreadyExists)
                    .with_op("create")
                    .with_entity("Proposal")
                    .with_entity_id(new.hash.clone())
                    .with_message(format!("Proposal with hash {} already exists", new.hash)));
            }
            self.proposals.create(&new)
        })
    }

    fn find_one(&self, id: EntityId) -> Result<Proposal> {
        observed("proposal_find_one", || self.proposals.find_one(id, true))
    }

    fn find_one_by_hash(&self, hash: &str) -> Result<Proposal> {
        observed("proposal_find_one_by_hash", || {
            self.proposals.find_one_by_hash(hash, true)
        })
    }

    fn search(&self, filter: ProposalFilter) -> Result<Vec<Proposal>> {
        observed("proposal_search", || self.proposals.search(&filter, true))
    }
}
