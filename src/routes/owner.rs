use std::collections::BTreeMap;

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::owner::{OwnerFormPage, SaveOutcome, SearchOutcome};
use crate::forms::owner::{FindOwnersQuery, OwnerForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template, send_notice};
use crate::services::{ServiceError, ServiceResult, owner as owner_service};

const FIND_OWNERS_VIEW: &str = "owners/find_owners.html";
const OWNERS_LIST_VIEW: &str = "owners/owners_list.html";
const OWNER_FORM_VIEW: &str = "owners/create_or_update_owner_form.html";
const OWNER_DETAILS_VIEW: &str = "owners/owner_details.html";

const OWNER_FORM_FIELDS: [&str; 5] = ["first_name", "last_name", "address", "city", "telephone"];

fn owner_not_found() -> HttpResponse {
    FlashMessage::error("Owner not found.").send();
    redirect("/owners/find")
}

fn render_owner_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    page: &OwnerFormPage,
) -> HttpResponse {
    // Templates index the map by field name, so every field gets an entry.
    let mut errors = page.errors.clone();
    for field in OWNER_FORM_FIELDS {
        errors.entry(field.to_string()).or_default();
    }

    let mut context = base_context(flash_messages, page.notice.as_ref(), "owners");
    context.insert("form", &page.form);
    context.insert("errors", &errors);
    context.insert("owner_id", &page.owner_id);
    context.insert("is_new", &page.is_new());
    render_template(tera, OWNER_FORM_VIEW, &context)
}

/// Shared handling of the create/update submissions.
fn finish_save(
    result: ServiceResult<SaveOutcome>,
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
) -> HttpResponse {
    match result {
        Ok(SaveOutcome::Saved(outcome)) => {
            send_notice(outcome.notice);
            redirect(&format!("/owners/{}", outcome.owner_id))
        }
        Ok(SaveOutcome::Invalid(page)) => render_owner_form(tera, flash_messages, &page),
        Err(ServiceError::NotFound) => owner_not_found(),
        Err(err) => {
            log::error!("Failed to save owner: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/owners/find")]
pub async fn init_find_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, None, "owners");
    context.insert("last_name", "");
    context.insert("field_errors", &BTreeMap::from([("lastName", Vec::<&str>::new())]));
    render_template(&tera, FIND_OWNERS_VIEW, &context)
}

#[get("/owners")]
pub async fn process_find_form(
    params: web::Query<FindOwnersQuery>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match owner_service::find_owners(repo.get_ref(), params.into_inner()) {
        Ok(SearchOutcome::NotFound { last_name, error }) => {
            let mut context = base_context(&flash_messages, None, "owners");
            let field_errors = BTreeMap::from([(error.field, vec![error.message])]);
            context.insert("last_name", &last_name);
            context.insert("field_errors", &field_errors);
            render_template(&tera, FIND_OWNERS_VIEW, &context)
        }
        Ok(SearchOutcome::SingleMatch { owner_id }) => redirect(&format!("/owners/{owner_id}")),
        Ok(SearchOutcome::MultiMatch { last_name, owners }) => {
            let mut context = base_context(&flash_messages, None, "owners");
            context.insert("owners", &owners);
            context.insert("last_name", &last_name);
            render_template(&tera, OWNERS_LIST_VIEW, &context)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/owners/find")
        }
        Err(err) => {
            log::error!("Failed to search owners: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/owners/new")]
pub async fn init_creation_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_owner_form(&tera, &flash_messages, &owner_service::new_owner_form())
}

#[post("/owners/new")]
pub async fn process_creation_form(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<OwnerForm>,
) -> impl Responder {
    let result = owner_service::create_owner(repo.get_ref(), form);
    finish_save(result, &tera, &flash_messages)
}

#[get("/owners/{owner_id}")]
pub async fn show_owner(
    owner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match owner_service::load_owner(repo.get_ref(), owner_id.into_inner()) {
        Ok(owner) => {
            let mut context = base_context(&flash_messages, None, "owners");
            context.insert("owner", &owner);
            render_template(&tera, OWNER_DETAILS_VIEW, &context)
        }
        Err(ServiceError::NotFound) => owner_not_found(),
        Err(err) => {
            log::error!("Failed to load owner: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/owners/{owner_id}/edit")]
pub async fn init_update_owner_form(
    owner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match owner_service::load_owner_form(repo.get_ref(), owner_id.into_inner()) {
        Ok(page) => render_owner_form(&tera, &flash_messages, &page),
        Err(ServiceError::NotFound) => owner_not_found(),
        Err(err) => {
            log::error!("Failed to load owner form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/owners/{owner_id}/edit")]
pub async fn process_update_owner_form(
    owner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<OwnerForm>,
) -> impl Responder {
    let result = owner_service::update_owner(repo.get_ref(), owner_id.into_inner(), form);
    finish_save(result, &tera, &flash_messages)
}
