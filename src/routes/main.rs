use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::domain::band::Genre;
use crate::dto::band::BandFormValues;
use crate::dto::main::{IndexPageData, IndexQuery};
use crate::forms::main::AddBandForm;
use crate::refresh::RefreshCounter;
use crate::repository::rest::RestRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::band as band_service;
use crate::services::main as main_service;

fn index_context(flash_messages: &IncomingFlashMessages, data: &IndexPageData) -> Context {
    let mut context = base_context(flash_messages, "index");
    context.insert("bands", &data.bands);
    context.insert("form", &data.form);
    context.insert("sort_headers", &data.sort_headers);
    if let Some(q) = &data.search_query {
        context.insert("search_query", q);
    }
    context.insert("page_size", &data.page_size);
    context.insert("sort_param", &data.sort_param);
    context.insert("data_version", &data.data_version);
    context.insert("genres", &Genre::ALL.map(Genre::as_str));
    context
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQuery>,
    repo: web::Data<RestRepository>,
    refresh: web::Data<RefreshCounter>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_index_page(
        repo.get_ref(),
        refresh.get_ref(),
        params.into_inner(),
        None,
    )
    .await
    {
        Ok(data) => {
            let context = index_context(&flash_messages, &data);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load bands: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/band/add")]
pub async fn add_band(
    web::Form(form): web::Form<AddBandForm>,
    repo: web::Data<RestRepository>,
    refresh: web::Data<RefreshCounter>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let message = match band_service::create_band(repo.get_ref(), refresh.get_ref(), &form).await {
        Ok(band) => {
            FlashMessage::success(format!("Band \"{}\" created.", band.name)).send();
            return redirect("/");
        }
        Err(ServiceError::Form(message)) => message,
        Err(err) => {
            log::error!("Failed to add a band: {err}");
            "Failed to create the band.".to_string()
        }
    };

    // Render the index again with the rejected submission still in the form.
    let echo = BandFormValues::from_add_form(&form);
    match main_service::load_index_page(
        repo.get_ref(),
        refresh.get_ref(),
        IndexQuery::default(),
        Some(echo),
    )
    .await
    {
        Ok(data) => {
            let mut context = index_context(&flash_messages, &data);
            context.insert("alerts", &[(message.as_str(), "danger")]);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load bands: {err}");
            FlashMessage::error(message).send();
            redirect("/")
        }
    }
}
