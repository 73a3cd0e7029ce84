//! Repository implementation for clinic owners.

use diesel::prelude::*;
use log::debug;

use crate::{
    domain::{
        owner::{NewOwner, Owner, UpdateOwner},
        types::OwnerId,
    },
    models::owner::{
        NewOwner as DbNewOwner, Owner as DbOwner, UpdateOwner as DbUpdateOwner,
    },
    repository::{
        DieselRepository, OwnerReader, OwnerSearchQuery, OwnerWriter, Page,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Builds a `LIKE` prefix pattern, escaping the wildcards of the input.
fn prefix_pattern(last_name: &str) -> String {
    let mut pattern = String::with_capacity(last_name.len() + 1);
    for c in last_name.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn into_domain(rows: Vec<DbOwner>) -> RepositoryResult<Vec<Owner>> {
    rows.into_iter()
        .map(|row| Owner::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl OwnerReader for DieselRepository {
    fn get_owner_by_id(&self, id: OwnerId) -> RepositoryResult<Option<Owner>> {
        use crate::schema::owners;

        let mut conn = self.conn()?;
        let owner = owners::table
            .find(id.get())
            .select(DbOwner::as_select())
            .first(&mut conn)
            .optional()?;

        owner
            .map(|owner| Owner::try_from(owner).map_err(RepositoryError::from))
            .transpose()
    }

    fn search_owners(&self, query: OwnerSearchQuery) -> RepositoryResult<Page<Owner>> {
        use crate::schema::owners;

        let mut conn = self.conn()?;
        let pattern = prefix_pattern(&query.last_name);

        let total: i64 = owners::table
            .filter(owners::last_name.like(&pattern).escape('\\'))
            .count()
            .get_result(&mut conn)?;

        let mut items = owners::table
            .filter(owners::last_name.like(&pattern).escape('\\'))
            .order(owners::id.asc())
            .select(DbOwner::as_select())
            .into_boxed();

        let total = total as usize;

        let per_page = match query.pagination {
            Some(pagination) => {
                let window = pagination.offset().and_then(|offset| {
                    Some((
                        i64::try_from(offset).ok()?,
                        i64::try_from(pagination.per_page).ok()?,
                    ))
                });
                let Some((offset, limit)) = window else {
                    // Unrepresentable offsets lie past every stored row.
                    debug!(
                        "Owner search by '{}' starts beyond any row (page index {})",
                        query.last_name, pagination.index
                    );
                    return Ok(Page::new(Vec::new(), total, pagination.per_page));
                };
                debug!(
                    "Searching owners by '{}' at offset {offset} (limit {limit})",
                    query.last_name
                );
                items = items.limit(limit).offset(offset);
                pagination.per_page
            }
            None => total,
        };

        let items = into_domain(items.load(&mut conn)?)?;

        Ok(Page::new(items, total, per_page))
    }
}

impl OwnerWriter for DieselRepository {
    fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner> {
        use crate::schema::owners;

        let mut conn = self.conn()?;
        let insertable: DbNewOwner = new_owner.into();

        let created = diesel::insert_into(owners::table)
            .values(&insertable)
            .returning(DbOwner::as_returning())
            .get_result(&mut conn)?;

        Owner::try_from(created).map_err(RepositoryError::from)
    }

    fn update_owner(&self, id: OwnerId, updates: &UpdateOwner) -> RepositoryResult<Owner> {
        use crate::schema::owners;

        let mut conn = self.conn()?;
        let changeset: DbUpdateOwner = updates.into();

        let updated = diesel::update(owners::table.find(id.get()))
            .set(&changeset)
            .returning(DbOwner::as_returning())
            .get_result(&mut conn)?;

        Owner::try_from(updated).map_err(RepositoryError::from)
    }
}
