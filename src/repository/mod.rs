use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        owner::{NewOwner, Owner, UpdateOwner},
        types::OwnerId,
    },
    repository::errors::RepositoryResult,
};

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod owner;

/// Zero-based window into an ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub index: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows skipped before the window starts, or `None` when it
    /// does not fit in a `usize`.
    pub fn offset(&self) -> Option<usize> {
        self.index.checked_mul(self.per_page)
    }
}

/// One window of results together with the totals of the full result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Builds a page, deriving the page count from `per_page`.
    pub fn new(items: Vec<T>, total_elements: usize, per_page: usize) -> Self {
        let total_pages = if per_page == 0 {
            usize::from(total_elements > 0)
        } else {
            total_elements.div_ceil(per_page)
        };
        Self {
            items,
            total_elements,
            total_pages,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSearchQuery {
    /// Case-insensitive last name prefix; empty matches every owner.
    pub last_name: String,
    pub pagination: Option<Pagination>,
}

impl OwnerSearchQuery {
    pub fn new(last_name: impl Into<String>) -> Self {
        Self {
            last_name: last_name.into(),
            pagination: None,
        }
    }

    /// Restricts the query to the zero-based page `index`.
    pub fn paginate(mut self, index: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { index, per_page });
        self
    }
}

pub trait OwnerReader {
    fn get_owner_by_id(&self, id: OwnerId) -> RepositoryResult<Option<Owner>>;
    fn search_owners(&self, query: OwnerSearchQuery) -> RepositoryResult<Page<Owner>>;
}

pub trait OwnerWriter {
    fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner>;
    fn update_owner(&self, id: OwnerId, updates: &UpdateOwner) -> RepositoryResult<Owner>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}
