//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::domain::types::OwnerId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{OwnerReader, OwnerSearchQuery, OwnerWriter, Page};

mock! {
    pub Repository {}

    impl OwnerReader for Repository {
        fn get_owner_by_id(&self, id: OwnerId) -> RepositoryResult<Option<Owner>>;
        fn search_owners(&self, query: OwnerSearchQuery) -> RepositoryResult<Page<Owner>>;
    }

    impl OwnerWriter for Repository {
        fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner>;
        fn update_owner(&self, id: OwnerId, updates: &UpdateOwner) -> RepositoryResult<Owner>;
    }
}
