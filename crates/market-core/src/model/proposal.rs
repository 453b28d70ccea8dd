use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::EntityId;
use crate::errors::MarketError;

/// What a proposal asks voters to decide on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProposalKind {
    PublicVote,
    ItemVote,
}

impl ProposalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalKind::PublicVote => "PUBLIC_VOTE",
            ProposalKind::ItemVote => "ITEM_VOTE",
        }
    }
}

impl fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProposalKind {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PUBLIC_VOTE" => Ok(ProposalKind::PublicVote),
            "ITEM_VOTE" => Ok(ProposalKind::ItemVote),
            _ => Err(MarketError::UnknownVariant {
                field: "proposal kind".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Governance record identified by id and by content hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: EntityId,
    pub hash: String,
    pub submitter: String,
    pub block_start: i64,
    pub block_end: i64,
    pub title: String,
    pub description: String,
    pub kind: ProposalKind,
    /// `None` unless fetched with related records
    pub options: Option<Vec<ProposalOption>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalOption {
    pub option_id: u32,
    pub description: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProposal {
    pub hash: String,
    pub submitter: String,
    pub block_start: i64,
    pub block_end: i64,
    pub title: String,
    pub description: String,
    pub kind: ProposalKind,
    pub options: Vec<NewProposalOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProposalOption {
    pub option_id: u32,
    pub description: String,
    pub hash: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProposalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub block_end: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProposalFilter {
    pub kind: Option<ProposalKind>,
    pub submitter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parses_case_insensitively() {
        assert_eq!(
            "public_vote".parse::<ProposalKind>().unwrap(),
            ProposalKind::PublicVote
        );
        assert_eq!(
            " ITEM_VOTE ".parse::<ProposalKind>().unwrap(),
            ProposalKind::ItemVote
        );
    }

    #[test]
    fn test_unknown_kind_names_value() {
        let err = "MARKET_VOTE".parse::<ProposalKind>().unwrap_err();
        assert_eq!(
            err,
            MarketError::UnknownVariant {
                field: "proposal kind".to_string(),
                value: "MARKET_VOTE".to_string(),
            }
        );
    }
}
