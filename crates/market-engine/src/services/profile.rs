use market_core::model::{EntityId, Profile};
use market_core::requests::ProfileCreateRequest;
use market_core::Result;
use market_store::mapper::ProfileMapper;
use market_store::ProfileRepository;
use rusqlite::Connection;

use super::{observed, ProfileService};

pub struct SqliteProfileService<'a> {
    profiles: ProfileRepository<'a>,
}

impl<'a> SqliteProfileService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            profiles: ProfileRepository::new(ProfileMapper::new(conn)),
        }
    }
}

impl ProfileService for SqliteProfileService<'_> {
    fn create(&self, request: ProfileCreateRequest) -> Result<Profile> {
        observed("profile_create", || {
            let new = request.into_new()?;
            self.profiles.create(&new)
        })
    }

    fn find_one(&self, id: EntityId) -> Result<Profile> {
        observed("profile_find_one", || self.profiles.find_one(id, true))
    }

    fn find_all(&self) -> Result<Vec<Profile>> {
        observed("profile_find_all", || self.profiles.find_all(true))
    }
}
