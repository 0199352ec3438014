pub mod handlers;

use crate::{
    assets::AssetService,
    config::Config,
    error::AssetError,
    models::ErrorResponse,
    provider::ImageProvider,
};
use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    middleware, web, App, HttpRequest, HttpResponse, HttpServer, ResponseError,
};
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// `None` when no API key was configured at startup.
    pub assets: Option<AssetService>,
}

impl AppState {
    pub fn new(config: Config, provider: Option<Arc<dyn ImageProvider>>) -> Self {
        Self {
            config: Arc::new(config),
            assets: provider.map(AssetService::new),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::resource("/api/generate-assets")
                .route(web::get().to(handlers::asset_status))
                .route(web::post().to(handlers::generate_assets)),
        )
        .route("/api/health", web::get().to(handlers::health))
        .route("/api/contact", web::post().to(handlers::contact));
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorResponse::new(format!("Invalid request body: {}", err));
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

pub async fn run(config: Config, provider: Option<Arc<dyn ImageProvider>>) -> std::io::Result<()> {
    let host = config.bind_host().to_string();
    let port = config.bind_port();
    let state = web::Data::new(AppState::new(config, provider));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

impl ResponseError for AssetError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AssetError::InvalidRequest(msg) => ErrorResponse::new(msg.clone()),
            AssetError::ValidationError(fields) => {
                ErrorResponse::new("Validation failed").with_details(fields.clone())
            }
            AssetError::Unavailable(_) => {
                log::error!("Generation blocked: {}", self);
                ErrorResponse::new("DALL-E API not available")
            }
            AssetError::ConfigError(_) => {
                log::error!("Generation not configured: {}", self);
                ErrorResponse::new("Image generation is not configured")
            }
            _ => {
                log::error!("Unhandled error: {}", self);
                ErrorResponse::new("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
