use super::AppState;
use crate::{
    assets::{default_batch_estimate, GenerationPlan},
    contact,
    error::{AssetError, Result},
    models::{
        AssetStatusResponse, ContactSubmission, DeploymentSummary, GenerateAssetsBody,
        HealthResponse,
    },
};
use actix_web::{web, HttpResponse};
use chrono::Utc;

/// `GET /api/generate-assets`: connectivity check plus the default quote.
pub async fn asset_status(state: web::Data<AppState>) -> HttpResponse {
    let Some(assets) = state.assets.as_ref() else {
        log::error!("Status requested but no image provider is configured");
        return HttpResponse::InternalServerError().json(AssetStatusResponse {
            status: "error",
            dalle_available: false,
            reachable: Some(false),
            estimated_cost: None,
            message: None,
            error: Some("Image generation is not configured".to_string()),
        });
    };

    let status = assets.status().await;
    if status.is_ready() {
        HttpResponse::Ok().json(AssetStatusResponse {
            status: "connected",
            dalle_available: true,
            reachable: None,
            estimated_cost: Some(default_batch_estimate().total_cost.as_dollars()),
            message: Some("Ready to generate marketing assets".to_string()),
            error: None,
        })
    } else {
        HttpResponse::InternalServerError().json(AssetStatusResponse {
            status: "error",
            dalle_available: status.capability_available,
            reachable: Some(status.reachable),
            estimated_cost: None,
            message: None,
            error: Some("DALL-E API not available".to_string()),
        })
    }
}

/// `POST /api/generate-assets`.
pub async fn generate_assets(
    state: web::Data<AppState>,
    body: web::Json<GenerateAssetsBody>,
) -> Result<HttpResponse> {
    let plan = GenerationPlan::try_from(body.into_inner())?;

    let assets = state.assets.as_ref().ok_or_else(|| {
        AssetError::ConfigError("OPENAI_API_KEY environment variable is not set".into())
    })?;

    let batch = assets.generate(&plan).await?;
    Ok(HttpResponse::Ok().json(batch.into_response()))
}

/// `GET /api/health`. Reads configuration only.
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let config = &state.config;
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        environment: config.environment.clone(),
        has_openai_key: config.openai.has_api_key(),
        deployment: DeploymentSummary {
            region: config.deployment.region.clone(),
            commit: config.deployment.commit.clone(),
            url: config.deployment.url.clone(),
        },
    })
}

/// `POST /api/contact`.
pub async fn contact(body: web::Json<ContactSubmission>) -> Result<HttpResponse> {
    let ack = contact::submit(&body)?;
    Ok(HttpResponse::Ok().json(ack))
}
