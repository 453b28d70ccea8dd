use market_core::hash::template_hash;
use market_core::model::{
    EntityId, ListingItemTemplate, ListingItemTemplateFilter, ListingItemTemplatePatch,
    NewListingItemTemplate,
};
use market_core::requests::{ListingItemTemplateCreateRequest, ListingItemTemplateUpdateRequest};
use market_core::{ExErrorKind, MarketError, Result, Validate};
use market_store::mapper::{ListingItemTemplateMapper, ProfileMapper};
use market_store::{ListingItemTemplateRepository, ProfileRepository};
use rusqlite::Connection;

use super::{observed, ListingItemTemplateService};

pub struct SqliteListingItemTemplateService<'a> {
    templates: ListingItemTemplateRepository<'a>,
    profiles: ProfileRepository<'a>,
}

impl<'a> SqliteListingItemTemplateService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            templates: ListingItemTemplateRepository::new(ListingItemTemplateMapper::new(conn)),
            profiles: ProfileRepository::new(ProfileMapper::new(conn)),
        }
    }

    fn require_profile(&self, profile_id: EntityId) -> Result<()> {
        self.profiles
            .find_one(profile_id, false)
            .map(|_| ())
            .map_err(|err| match err.kind() {
                ExErrorKind::NotFound => MarketError::ProfileNotFound { profile_id }.into(),
                _ => err,
            })
    }
}

impl ListingItemTemplateService for SqliteListingItemTemplateService<'_> {
    fn create(&self, request: ListingItemTemplateCreateRequest) -> Result<ListingItemTemplate> {
        observed("template_create", || {
            request.validate()?;
            let item_information = request.item_information.to_model()?;
            let payment_information = request.payment_information.to_model()?;
            self.require_profile(request.profile_id)?;

            let new = NewListingItemTemplate {
                hash: template_hash(request.profile_id, &item_information, &payment_information),
                profile_id: request.profile_id,
                item_information,
                payment_information,
            };
            self.templates.create(&new)
        })
    }

    fn find_one(&self, id: EntityId) -> Result<ListingItemTemplate> {
        observed("template_find_one", || self.templates.find_one(id, true))
    }

    fn search(&self, filter: ListingItemTemplateFilter) -> Result<Vec<ListingItemTemplate>> {
        observed("template_search", || {
            if let Some(profile_id) = filter.profile_id {
                self.require_profile(profile_id)?;
            }
            self.templates.search(&filter, true)
        })
    }

    /// Replaced sub-objects change the content hash
    fn update(
        &self,
        id: EntityId,
        request: ListingItemTemplateUpdateRequest,
    ) -> Result<ListingItemTemplate> {
        observed("template_update", || {
            request.validate()?;
            let current = self.templates.find_one(id, true)?;

            let item_information = match &request.item_information {
                Some(item) => Some(item.to_model()?),
                None => None,
            };
            let payment_information = match &request.payment_information {
                Some(payment) => Some(payment.to_model()?),
                None => None,
            };

            let hash = match (
                item_information.as_ref().or(current.item_information.as_ref()),
                payment_information
                    .as_ref()
                    .or(current.payment_information.as_ref()),
            ) {
                (Some(item), Some(payment)) => {
                    Some(template_hash(current.profile_id, item, payment))
                }
                _ => None,
            };

            self.templates.update(
                id,
                &ListingItemTemplatePatch {
                    hash,
                    item_information,
                    payment_information,
                },
            )
        })
    }

    fn destroy(&self, id: EntityId) -> Result<()> {
        observed("template_destroy", || self.templates.destroy(id))
    }
}
