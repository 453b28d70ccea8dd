use market_core::model::{Proposal, ProposalFilter, ProposalKind};
use market_core::requests::ProposalCreateRequest;
use market_core::{MarketError, Result};
use serde_json::Value;

use super::params::{optional_string, param_i64, param_string, require_arity};
use super::{Command, RpcRequest};
use crate::services::ProposalService;

pub struct ProposalAddCommand<'a> {
    service: &'a dyn ProposalService,
}

impl<'a> ProposalAddCommand<'a> {
    pub fn new(service: &'a dyn ProposalService) -> Self {
        Self { service }
    }

    /// Map positional params onto a create request; params past the kind
    /// are option descriptions in order
    pub fn parse_request(params: &[Value]) -> Result<ProposalCreateRequest> {
        require_arity(params, Self::MIN_PARAMS)?;
        let kind: ProposalKind = param_string(params, 5, "kind")?.parse()?;
        let options = (6..params.len())
            .map(|index| param_string(params, index, "option"))
            .collect::<std::result::Result<Vec<_>, MarketError>>()?;
        Ok(ProposalCreateRequest {
            submitter: param_string(params, 0, "submitter")?,
            block_start: param_i64(params, 1, "block_start")?,
            block_end: param_i64(params, 2, "block_end")?,
            title: param_string(params, 3, "title")?,
            description: param_string(params, 4, "description")?,
            kind,
            options,
        })
    }
}

impl Command for ProposalAddCommand<'_> {
    type Output = Proposal;
    const METHOD: &'static str = "proposal add";
    const MIN_PARAMS: usize = 6;

    fn execute(&self, request: &RpcRequest) -> Result<Proposal> {
        let request = Self::parse_request(&request.params)?;
        self.service.create(request)
    }

    fn usage(&self) -> &'static str {
        "proposal add <submitter> <block_start> <block_end> <title> <description> <kind> \
         [<option>...]"
    }

    fn help(&self) -> &'static str {
        "    <submitter>    - String - Address of the submitter.\n\
         \x20   <block_start>  - Numeric - First block of the voting window.\n\
         \x20   <block_end>    - Numeric - Last block of the voting window.\n\
         \x20   <title>        - String - The title of the proposal.\n\
         \x20   <description>  - String - The description of the proposal.\n\
         \x20   <kind>         - PUBLIC_VOTE or ITEM_VOTE.\n\
         \x20   <option>       - [optional] String - Voting option, repeatable."
    }

    fn description(&self) -> &'static str {
        "Submit a new proposal with its voting options."
    }

    fn example(&self) -> &'static str {
        "proposal add pmZpGbH2j2dDYU6LvTryHbEsM3iQzxpnj1 1000 2000 \"Raise fees\" \
         \"Raise listing fees\" PUBLIC_VOTE YES NO"
    }
}

pub struct ProposalGetCommand<'a> {
    service: &'a dyn ProposalService,
}

impl<'a> ProposalGetCommand<'a> {
    pub fn new(service: &'a dyn ProposalService) -> Self {
        Self { service }
    }
}

impl Command for ProposalGetCommand<'_> {
    type Output = Proposal;
    const METHOD: &'static str = "proposal get";
    const MIN_PARAMS: usize = 1;

    /// A numeric param is an id; anything else is a hash
    fn execute(&self, request: &RpcRequest) -> Result<Proposal> {
        let params = &request.params;
        require_arity(params, Self::MIN_PARAMS)?;
        match param_i64(params, 0, "proposal") {
            Ok(id) => self.service.find_one(id),
            Err(_) => self.service.find_one_by_hash(&param_string(params, 0, "proposal")?),
        }
    }

    fn usage(&self) -> &'static str {
        "proposal get <proposal_id|hash>"
    }

    fn help(&self) -> &'static str {
        "    <proposal_id|hash>  - Numeric ID or String hash of the proposal."
    }

    fn description(&self) -> &'static str {
        "Get a proposal with its options by ID or hash."
    }

    fn example(&self) -> &'static str {
        "proposal get 1"
    }
}

pub struct ProposalListCommand<'a> {
    service: &'a dyn ProposalService,
}

impl<'a> ProposalListCommand<'a> {
    pub fn new(service: &'a dyn ProposalService) -> Self {
        Self { service }
    }
}

impl Command for ProposalListCommand<'_> {
    type Output = Vec<Proposal>;
    const METHOD: &'static str = "proposal list";
    const MIN_PARAMS: usize = 0;

    fn execute(&self, request: &RpcRequest) -> Result<Vec<Proposal>> {
        let params = &request.params;
        let kind = match optional_string(params, 0, "kind")? {
            Some(text) => Some(text.parse::<ProposalKind>()?),
            None => None,
        };
        self.service.search(ProposalFilter {
            kind,
            submitter: optional_string(params, 1, "submitter")?,
        })
    }

    fn usage(&self) -> &'static str {
        "proposal list [<kind>] [<submitter>]"
    }

    fn help(&self) -> &'static str {
        "    <kind>       - [optional] PUBLIC_VOTE or ITEM_VOTE.\n\
         \x20   <submitter>  - [optional] String - Only proposals from this address."
    }

    fn description(&self) -> &'static str {
        "List proposals, optionally filtered by kind and submitter."
    }

    fn example(&self) -> &'static str {
        "proposal list ITEM_VOTE"
    }
}
