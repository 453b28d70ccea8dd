use market_core::model::{
    CryptocurrencyAddress, ListingItemTemplate, ListingItemTemplateFilter, ShippingPrice,
};
use market_core::requests::{
    ItemInformationCreateRequest, ItemPriceCreateRequest, ListingItemTemplateCreateRequest,
    PaymentInformationCreateRequest,
};
use market_core::Result;
use serde_json::Value;

use super::params::{optional_string, param_decimal, param_i64, param_string, require_arity};
use super::{Command, RpcRequest};
use crate::services::ListingItemTemplateService;

/// Create a listing item template from eleven positional params
///
/// | index | field |
/// |---|---|
/// | 0 | profile id |
/// | 1 | title |
/// | 2 | short description |
/// | 3 | long description |
/// | 4 | category id |
/// | 5 | payment type |
/// | 6 | currency |
/// | 7 | base price |
/// | 8 | domestic shipping price |
/// | 9 | international shipping price |
/// | 10 | payment address, optional |
pub struct ListingItemTemplateAddCommand<'a> {
    service: &'a dyn ListingItemTemplateService,
}

impl<'a> ListingItemTemplateAddCommand<'a> {
    pub fn new(service: &'a dyn ListingItemTemplateService) -> Self {
        Self { service }
    }

    /// Map positional params onto a create request
    ///
    /// The payment address is only set when slot 10 holds non-empty text;
    /// it is always tagged as a normal address.
    pub fn parse_request(params: &[Value]) -> Result<ListingItemTemplateCreateRequest> {
        require_arity(params, Self::MIN_PARAMS)?;
        Ok(ListingItemTemplateCreateRequest {
            profile_id: param_i64(params, 0, "profile_id")?,
            item_information: ItemInformationCreateRequest {
                title: param_string(params, 1, "title")?,
                short_description: param_string(params, 2, "short_description")?,
                long_description: param_string(params, 3, "long_description")?,
                item_category_id: param_i64(params, 4, "item_category_id")?,
            },
            payment_information: PaymentInformationCreateRequest {
                payment_type: param_string(params, 5, "payment_type")?,
                item_price: ItemPriceCreateRequest {
                    currency: param_string(params, 6, "currency")?,
                    base_price: param_decimal(params, 7, "base_price")?,
                    shipping_price: ShippingPrice {
                        domestic: param_decimal(params, 8, "domestic_shipping_price")?,
                        international: param_decimal(params, 9, "international_shipping_price")?,
                    },
                    cryptocurrency_address: optional_string(params, 10, "payment_address")?
                        .map(CryptocurrencyAddress::normal),
                },
            },
        })
    }
}

impl Command for ListingItemTemplateAddCommand<'_> {
    type Output = ListingItemTemplate;
    const METHOD: &'static str = "template add";
    const MIN_PARAMS: usize = 10;

    fn execute(&self, request: &RpcRequest) -> Result<ListingItemTemplate> {
        let request = Self::parse_request(&request.params)?;
        self.service.create(request)
    }

    fn usage(&self) -> &'static str {
        "template add <profile_id> <title> <short_description> <long_description> \
         <category_id> <payment_type> <currency> <base_price> <domestic_shipping_price> \
         <international_shipping_price> [<payment_address>]"
    }

    fn help(&self) -> &'static str {
        "    <profile_id>                    - Numeric - The ID of the profile to associate this\n\
         \x20                                     item template with.\n\
         \x20   <title>                         - String - The default title of the item.\n\
         \x20   <short_description>             - String - A short description of the item.\n\
         \x20   <long_description>              - String - A longer description of the item.\n\
         \x20   <category_id>                   - Numeric - The ID of the item category.\n\
         \x20   <payment_type>                  - SALE, RENT or FREE.\n\
         \x20   <currency>                      - BITCOIN or PARTICL.\n\
         \x20   <base_price>                    - Decimal - The base price of the item.\n\
         \x20   <domestic_shipping_price>       - Decimal - Domestic shipping price.\n\
         \x20   <international_shipping_price>  - Decimal - International shipping price.\n\
         \x20   <payment_address>               - [optional] String - Address to receive payment."
    }

    fn description(&self) -> &'static str {
        "Add a new listing item template associated with a profile."
    }

    fn example(&self) -> &'static str {
        "template add 1 \"The Communist Manifesto\" \"Short description\" \
         \"Long description\" 1 SALE BITCOIN 0.1 0.01 0.05 pmZpGbH2j2dDYU6LvTryHbEsM3iQzxpnj1"
    }
}

pub struct ListingItemTemplateGetCommand<'a> {
    service: &'a dyn ListingItemTemplateService,
}

impl<'a> ListingItemTemplateGetCommand<'a> {
    pub fn new(service: &'a dyn ListingItemTemplateService) -> Self {
        Self { service }
    }
}

impl Command for ListingItemTemplateGetCommand<'_> {
    type Output = ListingItemTemplate;
    const METHOD: &'static str = "template get";
    const MIN_PARAMS: usize = 1;

    fn execute(&self, request: &RpcRequest) -> Result<ListingItemTemplate> {
        require_arity(&request.params, Self::MIN_PARAMS)?;
        self.service
            .find_one(param_i64(&request.params, 0, "template_id")?)
    }

    fn usage(&self) -> &'static str {
        "template get <template_id>"
    }

    fn help(&self) -> &'static str {
        "    <template_id>  - Numeric - The ID of the listing item template to fetch."
    }

    fn description(&self) -> &'static str {
        "Get a listing item template with its item and payment information."
    }

    fn example(&self) -> &'static str {
        "template get 1"
    }
}

pub struct ListingItemTemplateSearchCommand<'a> {
    service: &'a dyn ListingItemTemplateService,
}

impl<'a> ListingItemTemplateSearchCommand<'a> {
    pub fn new(service: &'a dyn ListingItemTemplateService) -> Self {
        Self { service }
    }
}

impl Command for ListingItemTemplateSearchCommand<'_> {
    type Output = Vec<ListingItemTemplate>;
    const METHOD: &'static str = "template search";
    const MIN_PARAMS: usize = 1;

    fn execute(&self, request: &RpcRequest) -> Result<Vec<ListingItemTemplate>> {
        let params = &request.params;
        require_arity(params, Self::MIN_PARAMS)?;
        self.service.search(ListingItemTemplateFilter {
            profile_id: Some(param_i64(params, 0, "profile_id")?),
            title_contains: optional_string(params, 1, "title")?,
        })
    }

    fn usage(&self) -> &'static str {
        "template search <profile_id> [<title>]"
    }

    fn help(&self) -> &'static str {
        "    <profile_id>  - Numeric - The ID of the profile whose templates to search.\n\
         \x20   <title>       - [optional] String - Text the item title must contain."
    }

    fn description(&self) -> &'static str {
        "Search the listing item templates of a profile."
    }

    fn example(&self) -> &'static str {
        "template search 1 manifesto"
    }
}

pub struct ListingItemTemplateRemoveCommand<'a> {
    service: &'a dyn ListingItemTemplateService,
}

impl<'a> ListingItemTemplateRemoveCommand<'a> {
    pub fn new(service: &'a dyn ListingItemTemplateService) -> Self {
        Self { service }
    }
}

impl Command for ListingItemTemplateRemoveCommand<'_> {
    type Output = ();
    const METHOD: &'static str = "template remove";
    const MIN_PARAMS: usize = 1;

    fn execute(&self, request: &RpcRequest) -> Result<()> {
        require_arity(&request.params, Self::MIN_PARAMS)?;
        self.service
            .destroy(param_i64(&request.params, 0, "template_id")?)
    }

    fn usage(&self) -> &'static str {
        "template remove <template_id>"
    }

    fn help(&self) -> &'static str {
        "    <template_id>  - Numeric - The ID of the listing item template to remove."
    }

    fn description(&self) -> &'static str {
        "Remove a listing item template along with its item and payment information."
    }

    fn example(&self) -> &'static str {
        "template remove 1"
    }
}
