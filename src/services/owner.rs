//! Owner search and maintenance workflows.

use crate::domain::owner::Owner;
use crate::domain::types::{OwnerId, PageNumber};
use crate::dto::owner::{
    FieldError, Notice, OwnerFormPage, OwnerOperationOutcome, SaveOutcome, SearchOutcome,
};
use crate::forms::owner::{FindOwnersQuery, OwnerForm, OwnerPayload, OwnerSearch};
use crate::forms::{FormError, field_messages};
use crate::pagination::Paginated;
use crate::repository::{OwnerReader, OwnerSearchQuery, OwnerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Number of owners shown per page of search results.
pub const OWNERS_PER_PAGE: usize = 5;

const CREATE_FAILED: &str = "There was an error in creating the owner.";
const UPDATE_FAILED: &str = "There was an error in updating the owner.";
const CREATED: &str = "New Owner Created";
const UPDATED: &str = "Owner Values Updated";

/// Validates the raw query string and runs [`search_owners`].
pub fn find_owners<R>(repo: &R, query: FindOwnersQuery) -> ServiceResult<SearchOutcome>
where
    R: OwnerReader + ?Sized,
{
    let search = OwnerSearch::try_from(query)?;
    search_owners(repo, &search)
}

/// Searches owners by last name prefix and decides how the result is shown.
///
/// The decision is based on the total number of matches, never on the
/// content of the requested page: a page past the end of a multi-owner result
/// is still a [`SearchOutcome::MultiMatch`] with an empty item list.
pub fn search_owners<R>(repo: &R, search: &OwnerSearch) -> ServiceResult<SearchOutcome>
where
    R: OwnerReader + ?Sized,
{
    let query = OwnerSearchQuery::new(search.last_name.as_str())
        .paginate(search.page.index(), OWNERS_PER_PAGE);
    let results = repo.search_owners(query)?;

    match results.total_elements {
        0 => {
            log::info!("No owners found for last name: '{}'", search.last_name);
            Ok(SearchOutcome::NotFound {
                last_name: search.last_name.clone(),
                error: FieldError::last_name_not_found(),
            })
        }
        1 => {
            let owner = match results.items.into_iter().next() {
                Some(owner) => owner,
                None => first_match(repo, &search.last_name)?,
            };
            log::info!(
                "An owner was found for last name '{}': id {}",
                owner.last_name,
                owner.id
            );
            Ok(SearchOutcome::SingleMatch { owner_id: owner.id })
        }
        total => {
            log::info!(
                "{total} owners found for last name '{}'. Showing page {} of results",
                search.last_name,
                search.page
            );
            Ok(SearchOutcome::MultiMatch {
                last_name: search.last_name.clone(),
                owners: Paginated::from_page(results, search.page),
            })
        }
    }
}

/// Re-reads the first page when the requested page skipped the only match.
fn first_match<R>(repo: &R, last_name: &str) -> ServiceResult<Owner>
where
    R: OwnerReader + ?Sized,
{
    let query =
        OwnerSearchQuery::new(last_name).paginate(PageNumber::FIRST.index(), OWNERS_PER_PAGE);
    repo.search_owners(query)?
        .items
        .into_iter()
        .next()
        .ok_or(ServiceError::NotFound)
}

fn parse_owner_id(owner_id: i32) -> ServiceResult<OwnerId> {
    OwnerId::new(owner_id).map_err(|_| ServiceError::NotFound)
}

/// Loads a single owner for the details page.
pub fn load_owner<R>(repo: &R, owner_id: i32) -> ServiceResult<Owner>
where
    R: OwnerReader + ?Sized,
{
    log::info!("Showing details of owner with ID: {owner_id}");
    repo.get_owner_by_id(parse_owner_id(owner_id)?)?
        .ok_or(ServiceError::NotFound)
}

/// Empty form used to create an owner.
pub fn new_owner_form() -> OwnerFormPage {
    log::info!("Starting creation form for a new owner");
    OwnerFormPage::default()
}

/// Loads the edit form pre-filled with the stored owner.
pub fn load_owner_form<R>(repo: &R, owner_id: i32) -> ServiceResult<OwnerFormPage>
where
    R: OwnerReader + ?Sized,
{
    let owner = load_owner(repo, owner_id)?;
    log::info!("Starting update form for owner with ID: {owner_id}");
    Ok(OwnerFormPage {
        owner_id: Some(owner.id),
        form: OwnerForm::from(&owner),
        ..OwnerFormPage::default()
    })
}

/// Converts the form or returns the page to redisplay with field errors.
fn validate(
    owner_id: Option<OwnerId>,
    form: OwnerForm,
    failure: &str,
) -> ServiceResult<Result<OwnerPayload, OwnerFormPage>> {
    match OwnerPayload::try_from(&form) {
        Ok(payload) => Ok(Ok(payload)),
        Err(FormError::Validation(errors)) => Ok(Err(OwnerFormPage {
            owner_id,
            errors: field_messages(&errors),
            form,
            notice: Some(Notice::error(failure)),
        })),
        Err(err) => Err(err.into()),
    }
}

/// Validates the creation form and persists a new owner.
pub fn create_owner<R>(repo: &R, form: OwnerForm) -> ServiceResult<SaveOutcome>
where
    R: OwnerWriter + ?Sized,
{
    let payload = match validate(None, form, CREATE_FAILED)? {
        Ok(payload) => payload,
        Err(page) => {
            log::warn!("Rejected owner creation form: {:?}", page.errors);
            return Ok(SaveOutcome::Invalid(page));
        }
    };

    let owner = repo
        .create_owner(&payload.into_new_owner())
        .inspect_err(|err| log::error!("Failed to create owner: {err}"))?;
    log::info!("An owner was created with ID: {}", owner.id);

    Ok(SaveOutcome::Saved(OwnerOperationOutcome {
        owner_id: owner.id,
        notice: Notice::success(CREATED),
    }))
}

/// Validates the edit form and overwrites the owner identified by the path.
pub fn update_owner<R>(repo: &R, owner_id: i32, form: OwnerForm) -> ServiceResult<SaveOutcome>
where
    R: OwnerWriter + ?Sized,
{
    log::info!("Starting update of owner with ID: {owner_id}");
    let id = parse_owner_id(owner_id)?;

    let payload = match validate(Some(id), form, UPDATE_FAILED)? {
        Ok(payload) => payload,
        Err(page) => {
            log::warn!("Rejected update form for owner with ID {id}: {:?}", page.errors);
            return Ok(SaveOutcome::Invalid(page));
        }
    };

    let owner = repo.update_owner(id, &payload.into_update())?;
    log::info!("Owner with ID {} updated", owner.id);

    Ok(SaveOutcome::Saved(OwnerOperationOutcome {
        owner_id: owner.id,
        notice: Notice::success(UPDATED),
    }))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::{Address, City, FirstName, LastName, Telephone};
    use crate::dto::owner::NoticeLevel;
    use crate::repository::Page;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn owner(id: i32, last_name: &str) -> Owner {
        let now = Utc::now().naive_utc();
        Owner {
            id: OwnerId::new(id).unwrap(),
            first_name: FirstName::new(format!("First{id}")).unwrap(),
            last_name: LastName::new(last_name).unwrap(),
            address: Address::new("110 W. Liberty St.").unwrap(),
            city: City::new("Madison").unwrap(),
            telephone: Telephone::new("6085551023").unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Storage double holding `total` owners named like `last_name`.
    fn repo_with_owners(last_name: &'static str, total: usize) -> MockRepository {
        let mut repo = MockRepository::new();
        repo.expect_search_owners().returning(move |query| {
            let matches: Vec<Owner> = if last_name.starts_with(query.last_name.as_str()) {
                (1..=total as i32).map(|id| owner(id, last_name)).collect()
            } else {
                Vec::new()
            };
            let total_elements = matches.len();
            let pagination = query.pagination.expect("search is always paginated");
            let items = matches
                .into_iter()
                .skip(pagination.offset().unwrap_or(usize::MAX))
                .take(pagination.per_page)
                .collect();
            Ok(Page::new(items, total_elements, pagination.per_page))
        });
        repo
    }

    fn search(page: usize, last_name: &str) -> OwnerSearch {
        OwnerSearch::new(PageNumber::new(page).unwrap(), last_name)
    }

    fn valid_form() -> OwnerForm {
        OwnerForm {
            first_name: "George".to_string(),
            last_name: "Franklin".to_string(),
            address: "110 W. Liberty St.".to_string(),
            city: "Madison".to_string(),
            telephone: "6085551023".to_string(),
        }
    }

    #[test]
    fn zero_matches_reports_not_found_on_last_name() {
        let repo = repo_with_owners("Smith", 12);

        let outcome = search_owners(&repo, &search(1, "Zzyzx")).unwrap();

        match outcome {
            SearchOutcome::NotFound { last_name, error } => {
                assert_eq!(last_name, "Zzyzx");
                assert_eq!(error.field, "lastName");
                assert_eq!(error.code, "notFound");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn single_match_redirects_to_owner() {
        let repo = repo_with_owners("Franklin", 1);

        let outcome = search_owners(&repo, &search(1, "Franklin")).unwrap();

        assert!(matches!(
            outcome,
            SearchOutcome::SingleMatch { owner_id } if owner_id.get() == 1
        ));
    }

    #[test]
    fn single_match_ignores_requested_page() {
        let repo = repo_with_owners("Franklin", 1);

        let outcome = search_owners(&repo, &search(4, "Fra")).unwrap();

        assert!(matches!(
            outcome,
            SearchOutcome::SingleMatch { owner_id } if owner_id.get() == 1
        ));
    }

    #[test]
    fn multiple_matches_return_first_page() {
        let repo = repo_with_owners("Smith", 12);

        let SearchOutcome::MultiMatch { owners: page, .. } =
            search_owners(&repo, &search(1, "Smith")).unwrap()
        else {
            panic!("expected a listing");
        };

        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 12);
        let ids: Vec<i32> = page.items.iter().map(|o| o.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn last_page_holds_remainder() {
        let repo = repo_with_owners("Smith", 12);

        let SearchOutcome::MultiMatch { owners: page, .. } =
            search_owners(&repo, &search(3, "Smith")).unwrap()
        else {
            panic!("expected a listing");
        };

        assert_eq!(page.total_pages, 3);
        let ids: Vec<i32> = page.items.iter().map(|o| o.id.get()).collect();
        assert_eq!(ids, vec![11, 12]);
    }

    #[test]
    fn page_past_the_end_is_an_empty_listing() {
        let repo = repo_with_owners("Smith", 12);

        let SearchOutcome::MultiMatch { owners: page, .. } =
            search_owners(&repo, &search(9, "Smith")).unwrap()
        else {
            panic!("expected a listing");
        };

        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn listing_carries_trimmed_filter() {
        let repo = repo_with_owners("Smith", 7);
        let query = FindOwnersQuery {
            page: Some(2),
            last_name: Some("  Smi ".to_string()),
        };

        let SearchOutcome::MultiMatch { last_name, owners } = find_owners(&repo, query).unwrap()
        else {
            panic!("expected a listing");
        };

        assert_eq!(last_name, "Smi");
        assert_eq!(owners.page, 2);
    }

    #[test]
    fn huge_page_is_an_empty_listing() {
        let repo = repo_with_owners("Smith", 7);
        let query = FindOwnersQuery {
            page: Some(i64::MAX),
            last_name: Some("Smith".to_string()),
        };

        let SearchOutcome::MultiMatch { owners, .. } = find_owners(&repo, query).unwrap() else {
            panic!("expected a listing");
        };

        assert!(owners.items.is_empty());
        assert_eq!(owners.total_items, 7);
        assert_eq!(owners.pages, vec![Some(1), Some(2)]);
    }

    #[test]
    fn empty_filter_matches_everyone() {
        let repo = repo_with_owners("Smith", 7);

        let SearchOutcome::MultiMatch { owners: page, .. } =
            search_owners(&repo, &search(2, "")).unwrap()
        else {
            panic!("expected a listing");
        };

        assert_eq!(page.total_items, 7);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn page_number_is_translated_to_zero_based_index() {
        let mut repo = MockRepository::new();
        repo.expect_search_owners()
            .times(1)
            .withf(|query| {
                query.last_name == "Smith"
                    && query.pagination.map(|p| (p.index, p.per_page)) == Some((2, 5))
            })
            .returning(|_| Ok(Page::new(Vec::new(), 12, OWNERS_PER_PAGE)));

        let outcome = search_owners(&repo, &search(3, "Smith")).unwrap();

        assert!(matches!(outcome, SearchOutcome::MultiMatch { .. }));
    }

    #[test]
    fn storage_failure_propagates() {
        let mut repo = MockRepository::new();
        repo.expect_search_owners()
            .returning(|_| Err(RepositoryError::ConnectionError("pool exhausted".into())));

        let result = search_owners(&repo, &search(1, "Smith"));

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }

    #[test]
    fn invalid_page_in_query_is_a_form_error() {
        let repo = MockRepository::new();

        let result = find_owners(
            &repo,
            FindOwnersQuery {
                page: Some(0),
                last_name: None,
            },
        );

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn missing_owner_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_owner_by_id().returning(|_| Ok(None));

        assert!(matches!(load_owner(&repo, 42), Err(ServiceError::NotFound)));
        assert!(matches!(load_owner(&repo, -1), Err(ServiceError::NotFound)));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let mut repo = MockRepository::new();
        repo.expect_get_owner_by_id()
            .returning(|id| Ok(Some(owner(id.get(), "Davis"))));

        let page = load_owner_form(&repo, 3).unwrap();

        assert!(!page.is_new());
        assert_eq!(page.form.last_name, "Davis");
        assert!(page.errors.is_empty());
    }

    #[test]
    fn create_persists_valid_form() {
        let mut repo = MockRepository::new();
        repo.expect_create_owner()
            .times(1)
            .withf(|new_owner| new_owner.last_name.as_str() == "Franklin")
            .returning(|new_owner| Ok(owner(11, new_owner.last_name.as_str())));

        let SaveOutcome::Saved(outcome) = create_owner(&repo, valid_form()).unwrap() else {
            panic!("expected the owner to be saved");
        };

        assert_eq!(outcome.owner_id.get(), 11);
        assert_eq!(outcome.notice, Notice::success("New Owner Created"));
    }

    #[test]
    fn create_redisplays_invalid_form() {
        let mut repo = MockRepository::new();
        repo.expect_create_owner().never();

        let form = OwnerForm {
            telephone: "not a number".to_string(),
            ..valid_form()
        };
        let SaveOutcome::Invalid(page) = create_owner(&repo, form).unwrap() else {
            panic!("expected the form to be redisplayed");
        };

        assert!(page.is_new());
        assert!(page.errors.contains_key("telephone"));
        assert_eq!(page.form.telephone, "not a number");
        let notice = page.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "There was an error in creating the owner.");
    }

    #[test]
    fn update_uses_path_id() {
        let mut repo = MockRepository::new();
        repo.expect_update_owner()
            .times(1)
            .withf(|id, updates| id.get() == 7 && updates.city.as_str() == "Madison")
            .returning(|id, updates| Ok(owner(id.get(), updates.last_name.as_str())));

        let SaveOutcome::Saved(outcome) = update_owner(&repo, 7, valid_form()).unwrap() else {
            panic!("expected the owner to be saved");
        };

        assert_eq!(outcome.owner_id.get(), 7);
        assert_eq!(outcome.notice.message, "Owner Values Updated");
    }

    #[test]
    fn update_redisplays_invalid_form() {
        let mut repo = MockRepository::new();
        repo.expect_update_owner().never();

        let form = OwnerForm {
            first_name: String::new(),
            ..valid_form()
        };
        let SaveOutcome::Invalid(page) = update_owner(&repo, 7, form).unwrap() else {
            panic!("expected the form to be redisplayed");
        };

        assert_eq!(page.owner_id.map(OwnerId::get), Some(7));
        assert_eq!(page.errors["first_name"], vec!["must not be blank"]);
        assert_eq!(
            page.notice.map(|n| n.message).as_deref(),
            Some("There was an error in updating the owner.")
        );
    }

    #[test]
    fn update_of_unknown_owner_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_update_owner()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let result = update_owner(&repo, 99, valid_form());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
