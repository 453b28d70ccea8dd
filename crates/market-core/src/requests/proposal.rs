use serde::{Deserialize, Serialize};

use crate::errors::MarketError;
use crate::hash::{proposal_hash, proposal_option_hash};
use crate::model::{NewProposal, NewProposalOption, ProposalKind};
use crate::rules::validation::{validate_block_range, validate_non_empty, validate_title, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalCreateRequest {
    pub submitter: String,
    pub block_start: i64,
    pub block_end: i64,
    pub title: String,
    pub description: String,
    pub kind: ProposalKind,
    /// Option descriptions; option ids are assigned by position
    pub options: Vec<String>,
}

impl Validate for ProposalCreateRequest {
    fn validate(&self) -> Result<(), MarketError> {
        validate_non_empty("submitter", &self.submitter)?;
        validate_title(&self.title)?;
        validate_block_range(self.block_start, self.block_end)?;
        for option in &self.options {
            validate_non_empty("option", option)?;
        }
        Ok(())
    }
}

impl ProposalCreateRequest {
    /// Validate and hash into an insert record
    pub fn into_new(self) -> Result<NewProposal, MarketError> {
        self.validate()?;

        let hash = proposal_hash(
            &self.submitter,
            self.block_start,
            self.block_end,
            &self.title,
            &self.description,
            self.kind,
            &self.options,
        );

        let options = self
            .options
            .into_iter()
            .enumerate()
            .map(|(index, description)| {
                let option_id = index as u32;
                NewProposalOption {
                    option_id,
                    hash: proposal_option_hash(&hash, option_id, &description),
                    description,
                }
            })
            .collect();

        Ok(NewProposal {
            hash,
            submitter: self.submitter,
            block_start: self.block_start,
            block_end: self.block_end,
            title: self.title,
            description: self.description,
            kind: self.kind,
            options,
        })
    }
}
