use actix_cors::Cors;
use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::refresh::RefreshCounter;
use crate::repository::rest::RestRepository;
use crate::routes::api::{api_v1_bands, api_v1_bands_version};
use crate::routes::band::{delete_band, save_band, show_band};
use crate::routes::main::{add_band, show_index};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod refresh;
pub mod repository;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // REST client for the band directory service.
    let repo = RestRepository::new(&server_config.bands_api_url);

    // Shared across workers so every mutation is visible to every poller.
    let refresh = web::Data::new(RefreshCounter::new());

    // Key and store for flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .service(api_v1_bands)
                    .service(api_v1_bands_version),
            )
            .service(show_index)
            .service(add_band)
            .service(show_band)
            .service(save_band)
            .service(delete_band)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(refresh.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
