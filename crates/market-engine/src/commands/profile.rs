use market_core::model::Profile;
use market_core::requests::ProfileCreateRequest;
use market_core::Result;

use super::params::{optional_string, param_i64, param_string, require_arity};
use super::{Command, RpcRequest};
use crate::services::ProfileService;

pub struct ProfileAddCommand<'a> {
    service: &'a dyn ProfileService,
}

impl<'a> ProfileAddCommand<'a> {
    pub fn new(service: &'a dyn ProfileService) -> Self {
        Self { service }
    }
}

impl Command for ProfileAddCommand<'_> {
    type Output = Profile;
    const METHOD: &'static str = "profile add";
    const MIN_PARAMS: usize = 1;

    fn execute(&self, request: &RpcRequest) -> Result<Profile> {
        let params = &request.params;
        require_arity(params, Self::MIN_PARAMS)?;
        self.service.create(ProfileCreateRequest {
            name: param_string(params, 0, "name")?,
            address: optional_string(params, 1, "address")?,
        })
    }

    fn usage(&self) -> &'static str {
        "profile add <name> [<address>]"
    }

    fn help(&self) -> &'static str {
        "    <name>     - String - The unique name of the profile.\n\
         \x20   <address>  - [optional] String - The profile's receive address."
    }

    fn description(&self) -> &'static str {
        "Create a new profile."
    }

    fn example(&self) -> &'static str {
        "profile add myprofile pmZpGbH2j2dDYU6LvTryHbEsM3iQzxpnj1"
    }
}

pub struct ProfileGetCommand<'a> {
    service: &'a dyn ProfileService,
}

impl<'a> ProfileGetCommand<'a> {
    pub fn new(service: &'a dyn ProfileService) -> Self {
        Self { service }
    }
}

impl Command for ProfileGetCommand<'_> {
    type Output = Profile;
    const METHOD: &'static str = "profile get";
    const MIN_PARAMS: usize = 1;

    fn execute(&self, request: &RpcRequest) -> Result<Profile> {
        require_arity(&request.params, Self::MIN_PARAMS)?;
        self.service
            .find_one(param_i64(&request.params, 0, "profile_id")?)
    }

    fn usage(&self) -> &'static str {
        "profile get <profile_id>"
    }

    fn help(&self) -> &'static str {
        "    <profile_id>  - Numeric - The ID of the profile to fetch."
    }

    fn description(&self) -> &'static str {
        "Get a profile by its ID."
    }

    fn example(&self) -> &'static str {
        "profile get 1"
    }
}

pub struct ProfileListCommand<'a> {
    service: &'a dyn ProfileService,
}

impl<'a> ProfileListCommand<'a> {
    pub fn new(service: &'a dyn ProfileService) -> Self {
        Self { service }
    }
}

impl Command for ProfileListCommand<'_> {
    type Output = Vec<Profile>;
    const METHOD: &'static str = "profile list";
    const MIN_PARAMS: usize = 0;

    fn execute(&self, _request: &RpcRequest) -> Result<Vec<Profile>> {
        self.service.find_all()
    }

    fn usage(&self) -> &'static str {
        "profile list"
    }

    fn help(&self) -> &'static str {
        "    (no arguments)"
    }

    fn description(&self) -> &'static str {
        "List all profiles."
    }

    fn example(&self) -> &'static str {
        "profile list"
    }
}
