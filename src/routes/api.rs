use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::forms::owner::FindOwnersQuery;
use crate::repository::DieselRepository;
use crate::services::{ServiceError, api as api_service};

#[get("/v1/owners")]
pub async fn api_v1_owners(
    params: web::Query<FindOwnersQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match api_service::list_owners(repo.get_ref(), params.into_inner()) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to list owners: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
