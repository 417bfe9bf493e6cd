use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::band::Genre;
use crate::domain::types::BandId;
use crate::dto::band::{BandFormValues, EditBandQuery};
use crate::forms::band::SaveBandForm;
use crate::refresh::RefreshCounter;
use crate::repository::rest::RestRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::band as band_service;

#[get("/band/{band_id}")]
pub async fn show_band(
    band_id: web::Path<i32>,
    query: web::Query<EditBandQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let band_id = match BandId::new(band_id.into_inner()) {
        Ok(id) => id,
        Err(_) => {
            FlashMessage::error("Band not found.").send();
            return redirect("/");
        }
    };

    let band = match band_service::get_band(repo.get_ref(), band_id).await {
        Ok(band) => band,
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Band not found.").send();
            return redirect("/");
        }
        Err(err) => {
            log::error!("Failed to get band: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    // The preset flag discards the saved values in favour of the canned
    // record, mirroring the "Apply preset" action on the add form.
    let form = if query.preset.unwrap_or(false) {
        BandFormValues::preset()
    } else {
        BandFormValues::from_band(&band)
    };

    let mut context = base_context(&flash_messages, "band");
    context.insert("band_id", &band.id);
    context.insert("form", &form);
    context.insert("genres", &Genre::ALL.map(Genre::as_str));
    render_template(&tera, "band/index.html", &context)
}

#[post("/band/save")]
pub async fn save_band(
    web::Form(form): web::Form<SaveBandForm>,
    repo: web::Data<RestRepository>,
    refresh: web::Data<RefreshCounter>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let message = match band_service::update_band(repo.get_ref(), refresh.get_ref(), &form).await {
        Ok(band) => {
            FlashMessage::success(format!("Band \"{}\" updated.", band.name)).send();
            return redirect(&format!("/band/{}", band.id));
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Band not found.").send();
            return redirect("/");
        }
        Err(ServiceError::Form(message)) => message,
        Err(err) => {
            log::error!("Failed to update band: {err}");
            "Failed to update the band.".to_string()
        }
    };

    // Render the edit page again with the rejected submission still in the
    // form.
    let mut context = base_context(&flash_messages, "band");
    context.insert("alerts", &[(message.as_str(), "danger")]);
    context.insert("band_id", &form.id);
    context.insert("form", &BandFormValues::from_save_form(&form));
    context.insert("genres", &Genre::ALL.map(Genre::as_str));
    render_template(&tera, "band/index.html", &context)
}

#[post("/band/{band_id}/delete")]
pub async fn delete_band(
    band_id: web::Path<i32>,
    repo: web::Data<RestRepository>,
    refresh: web::Data<RefreshCounter>,
) -> impl Responder {
    let band_id = match BandId::new(band_id.into_inner()) {
        Ok(id) => id,
        Err(_) => {
            FlashMessage::error("Band not found.").send();
            return redirect("/");
        }
    };

    match band_service::delete_band(repo.get_ref(), refresh.get_ref(), band_id).await {
        Ok(()) => {
            FlashMessage::success("Band deleted.").send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Band not found.").send();
        }
        Err(err) => {
            log::error!("Failed to delete band: {err}");
            FlashMessage::error("Failed to delete the band.").send();
        }
    }

    redirect("/")
}
