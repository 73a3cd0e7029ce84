use crate::dto::api::OwnersResponse;
use crate::forms::owner::{FindOwnersQuery, OwnerSearch};
use crate::repository::{OwnerReader, OwnerSearchQuery};
use crate::services::ServiceResult;
use crate::services::owner::OWNERS_PER_PAGE;

/// Returns one page of owners matching the last name prefix as plain data,
/// without the redirect/not-found decisions of the HTML search.
pub fn list_owners<R>(repo: &R, params: FindOwnersQuery) -> ServiceResult<OwnersResponse>
where
    R: OwnerReader + ?Sized,
{
    let search = OwnerSearch::try_from(params)?;

    let page = repo.search_owners(
        OwnerSearchQuery::new(search.last_name).paginate(search.page.index(), OWNERS_PER_PAGE),
    )?;

    Ok(OwnersResponse {
        total: page.total_elements,
        total_pages: page.total_pages,
        page: search.page.get(),
        owners: page.items,
    })
}
