use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::api::{BandsQuery, VersionResponse};
use crate::refresh::RefreshCounter;
use crate::repository::rest::RestRepository;
use crate::services::api as api_service;

#[get("/v1/bands")]
pub async fn api_v1_bands(
    params: web::Query<BandsQuery>,
    repo: web::Data<RestRepository>,
) -> impl Responder {
    match api_service::list_bands(repo.get_ref(), params.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::error!("Failed to list bands: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Polled by open pages to find out whether band data changed since they
/// were rendered.
#[get("/v1/bands/version")]
pub async fn api_v1_bands_version(refresh: web::Data<RefreshCounter>) -> impl Responder {
    HttpResponse::Ok().json(VersionResponse {
        version: refresh.version(),
    })
}
