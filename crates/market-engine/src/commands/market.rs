use market_core::model::Market;
use market_core::requests::MarketCreateRequest;
use market_core::Result;
use market_core_types::Sensitive;

use super::params::{param_bool, param_i64, param_string, require_arity};
use super::{Command, RpcRequest};
use crate::services::MarketService;

pub struct MarketAddCommand<'a> {
    service: &'a dyn MarketService,
}

impl<'a> MarketAddCommand<'a> {
    pub fn new(service: &'a dyn MarketService) -> Self {
        Self { service }
    }

    /// Map positional params onto a create request
    pub fn parse_request(params: &[serde_json::Value]) -> Result<MarketCreateRequest> {
        require_arity(params, Self::MIN_PARAMS)?;
        Ok(MarketCreateRequest {
            profile_id: param_i64(params, 0, "profile_id")?,
            name: param_string(params, 1, "name")?,
            private_key: Sensitive::new(param_string(params, 2, "private_key")?),
            address: param_string(params, 3, "address")?,
            is_default: param_bool(params, 4, "is_default")?,
        })
    }
}

impl Command for MarketAddCommand<'_> {
    type Output = Market;
    const METHOD: &'static str = "market add";
    const MIN_PARAMS: usize = 4;

    fn execute(&self, request: &RpcRequest) -> Result<Market> {
        let request = Self::parse_request(&request.params)?;
        self.service.create(request)
    }

    fn usage(&self) -> &'static str {
        "market add <profile_id> <name> <private_key> <address> [<is_default>]"
    }

    fn help(&self) -> &'static str {
        "    <profile_id>   - Numeric - The ID of the profile that owns the market.\n\
         \x20   <name>         - String - The name of the market.\n\
         \x20   <private_key>  - String - The private key of the market.\n\
         \x20   <address>      - String - The address of the market.\n\
         \x20   <is_default>   - [optional] Boolean - Make this the profile's default market."
    }

    fn description(&self) -> &'static str {
        "Add a new market to a profile."
    }

    fn example(&self) -> &'static str {
        "market add 1 TEST-MARKET TEST-PRIVATE-KEY TEST-MARKET-ADDRESS true"
    }
}

pub struct MarketListCommand<'a> {
    service: &'a dyn MarketService,
}

impl<'a> MarketListCommand<'a> {
    pub fn new(service: &'a dyn MarketService) -> Self {
        Self { service }
    }
}

impl Command for MarketListCommand<'_> {
    type Output = Vec<Market>;
    const METHOD: &'static str = "market list";
    const MIN_PARAMS: usize = 1;

    fn execute(&self, request: &RpcRequest) -> Result<Vec<Market>> {
        require_arity(&request.params, Self::MIN_PARAMS)?;
        self.service
            .find_by_profile(param_i64(&request.params, 0, "profile_id")?)
    }

    fn usage(&self) -> &'static str {
        "market list <profile_id>"
    }

    fn help(&self) -> &'static str {
        "    <profile_id>  - Numeric - The ID of the profile whose markets to list."
    }

    fn description(&self) -> &'static str {
        "List the markets of a profile."
    }

    fn example(&self) -> &'static str {
        "market list 1"
    }
}

pub struct MarketRemoveCommand<'a> {
    service: &'a dyn MarketService,
}

impl<'a> MarketRemoveCommand<'a> {
    pub fn new(service: &'a dyn MarketService) -> Self {
        Self { service }
    }
}

impl Command for MarketRemoveCommand<'_> {
    type Output = ();
    const METHOD: &'static str = "market remove";
    const MIN_PARAMS: usize = 1;

    fn execute(&self, request: &RpcRequest) -> Result<()> {
        require_arity(&request.params, Self::MIN_PARAMS)?;
        self.service
            .destroy(param_i64(&request.params, 0, "market_id")?)
    }

    fn usage(&self) -> &'static str {
        "market remove <market_id>"
    }

    fn help(&self) -> &'static str {
        "    <market_id>  - Numeric - The ID of the market to remove."
    }

    fn description(&self) -> &'static str {
        "Remove a market."
    }

    fn example(&self) -> &'static str {
        "market remove 1"
    }
}
