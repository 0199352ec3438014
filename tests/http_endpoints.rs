mod common;

use actix_web::{http::StatusCode, test, web, App};
use common::FakeProvider;
use portfolio_assets::{
    config::{Config, DeploymentInfo, OpenAIConfig},
    server::{configure, AppState},
    ImageProvider,
};
use serde_json::{json, Value};
use std::sync::Arc;

fn state_with(provider: &Arc<FakeProvider>) -> AppState {
    let provider: Arc<dyn ImageProvider> = provider.clone();
    AppState::new(
        Config::new().with_openai(OpenAIConfig::new().with_api_key("sk-test")),
        Some(provider),
    )
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .configure(configure),
        )
        .await
    };
}

async fn post_assets(state: AppState, body: Value) -> (StatusCode, Value) {
    let app = app!(state);
    let req = test::TestRequest::post()
        .uri("/api/generate-assets")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn status_reports_connected_with_estimate() {
    let provider = Arc::new(FakeProvider::healthy());
    let app = app!(state_with(&provider));

    let req = test::TestRequest::get()
        .uri("/api/generate-assets")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "connected");
    assert_eq!(body["dalleAvailable"], true);
    assert_eq!(body["estimatedCost"], 0.96);
    assert_eq!(provider.list_calls(), 1);
    assert_eq!(provider.generate_calls(), 0);
}

#[actix_web::test]
async fn status_blocked_when_model_missing() {
    let provider = Arc::new(FakeProvider::without_image_model());
    let app = app!(state_with(&provider));

    let req = test::TestRequest::get()
        .uri("/api/generate-assets")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["dalleAvailable"], false);
    assert_eq!(body["reachable"], true);
}

#[actix_web::test]
async fn status_reports_unreachable_provider() {
    let provider = Arc::new(FakeProvider::unreachable());
    let app = app!(state_with(&provider));

    let req = test::TestRequest::get()
        .uri("/api/generate-assets")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["dalleAvailable"], false);
    assert_eq!(body["reachable"], false);
    assert_eq!(provider.list_calls(), 1);
    assert_eq!(provider.generate_calls(), 0);
}

#[actix_web::test]
async fn all_with_defaults_generates_full_batch() {
    let provider = Arc::new(FakeProvider::healthy());
    let (status, body) = post_assets(state_with(&provider), json!({ "type": "all" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["type"], "all");
    assert_eq!(body["results"]["headshots"].as_array().unwrap().len(), 4);
    assert_eq!(body["results"]["logos"].as_array().unwrap().len(), 8);
    assert_eq!(
        body["results"]["serviceGraphics"]
            .as_object()
            .unwrap()
            .len(),
        12
    );
    assert_eq!(body["generations"].as_array().unwrap().len(), 24);
    assert_eq!(body["cost"], "0.96");
    assert_eq!(body["actualCost"], "0.96");
    assert_eq!(body["failedCount"], 0);
    assert!(body["timestamp"].is_string());
    assert_eq!(provider.generate_calls(), 24);
}

#[actix_web::test]
async fn headshot_count_override() {
    let provider = Arc::new(FakeProvider::healthy());
    let (status, body) = post_assets(
        state_with(&provider),
        json!({ "type": "headshots", "count": 10, "name": "Jordan Lee" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"]["headshots"].as_array().unwrap().len(), 10);
    assert!(body["results"].get("logos").is_none());
    assert_eq!(body["cost"], "0.40");
    assert_eq!(provider.generate_calls(), 10);
}

#[actix_web::test]
async fn logos_carry_brand_name() {
    let provider = Arc::new(FakeProvider::healthy());
    let (status, body) = post_assets(
        state_with(&provider),
        json!({ "type": "logos", "brandName": "Acme" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let generations = body["generations"].as_array().unwrap();
    assert_eq!(generations.len(), 8);
    for generation in generations {
        assert!(generation["request"]["prompt"]
            .as_str()
            .unwrap()
            .contains("Acme"));
    }
}

#[actix_web::test]
async fn services_map_keys_match_labels() {
    let provider = Arc::new(FakeProvider::healthy());
    let (status, body) = post_assets(
        state_with(&provider),
        json!({ "type": "services", "services": ["SEO", "PPC"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let graphics = body["results"]["serviceGraphics"].as_object().unwrap();
    let mut keys: Vec<&str> = graphics.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, ["PPC", "SEO"]);
    assert_eq!(graphics["SEO"].as_array().unwrap().len(), 1);
    assert_eq!(provider.generate_calls(), 2);
}

#[actix_web::test]
async fn partial_failure_keeps_the_rest() {
    let provider = Arc::new(FakeProvider::healthy().failing_calls(&[3]));
    let (status, body) = post_assets(
        state_with(&provider),
        json!({ "type": "logos", "count": 5 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let generations = body["generations"].as_array().unwrap();
    assert_eq!(generations.len(), 5);
    assert_eq!(
        generations
            .iter()
            .filter(|g| g["status"] == "failed" && g["error"].is_string())
            .count(),
        1
    );
    assert_eq!(
        generations
            .iter()
            .filter(|g| g["status"] == "generated" && g["url"].is_string())
            .count(),
        4
    );
    assert_eq!(body["results"]["logos"].as_array().unwrap().len(), 4);
    assert_eq!(body["failedCount"], 1);
    assert_eq!(body["cost"], "0.20");
    assert_eq!(body["actualCost"], "0.16");
}

#[actix_web::test]
async fn unreachable_provider_blocks_generation() {
    let provider = Arc::new(FakeProvider::unreachable());
    let (status, body) = post_assets(state_with(&provider), json!({ "type": "all" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(provider.list_calls(), 1);
    assert_eq!(provider.generate_calls(), 0);
}

#[actix_web::test]
async fn missing_model_blocks_generation() {
    let provider = Arc::new(FakeProvider::without_image_model());
    let (status, body) = post_assets(state_with(&provider), json!({ "type": "all" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(provider.list_calls(), 1);
    assert_eq!(provider.generate_calls(), 0);
}

#[actix_web::test]
async fn oversized_count_is_rejected_without_provider_calls() {
    let provider = Arc::new(FakeProvider::healthy());
    let (status, body) = post_assets(
        state_with(&provider),
        json!({ "type": "headshots", "count": 4294967295u64 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("count"));
    assert_eq!(provider.list_calls(), 0);
    assert_eq!(provider.generate_calls(), 0);
}

#[actix_web::test]
async fn whole_float_count_is_accepted() {
    let provider = Arc::new(FakeProvider::healthy());
    let (status, body) = post_assets(
        state_with(&provider),
        json!({ "type": "logos", "count": 3.0 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"]["logos"].as_array().unwrap().len(), 3);
    assert_eq!(provider.generate_calls(), 3);
}

#[actix_web::test]
async fn unknown_type_is_rejected_without_provider_calls() {
    let provider = Arc::new(FakeProvider::healthy());
    let (status, body) =
        post_assets(state_with(&provider), json!({ "type": "bogus-type" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("bogus-type"));
    assert_eq!(provider.list_calls(), 0);
    assert_eq!(provider.generate_calls(), 0);
}

#[actix_web::test]
async fn malformed_json_is_a_client_error() {
    let provider = Arc::new(FakeProvider::healthy());
    let app = app!(state_with(&provider));

    let req = test::TestRequest::post()
        .uri("/api/generate-assets")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"type\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(provider.list_calls(), 0);
}

#[actix_web::test]
async fn missing_api_key_surfaces_config_error() {
    let state = AppState::new(Config::new(), None);
    let (status, body) = post_assets(state, json!({ "type": "logos" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Image generation is not configured");
}

#[actix_web::test]
async fn health_reads_configuration_only() {
    let provider = Arc::new(FakeProvider::healthy());
    let state = AppState::new(
        Config::new()
            .with_environment("production")
            .with_openai(OpenAIConfig::new().with_api_key("sk-test"))
            .with_deployment(DeploymentInfo {
                region: Some("fra1".into()),
                commit: Some("abc123".into()),
                url: None,
            }),
        Some(provider.clone() as Arc<dyn ImageProvider>),
    );
    let app = app!(state);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["hasOpenAIKey"], true);
    assert_eq!(body["environment"], "production");
    assert_eq!(body["deployment"]["region"], "fra1");
    assert_eq!(provider.list_calls(), 0);
}

#[actix_web::test]
async fn contact_accepts_valid_submission() {
    let app = app!(AppState::new(Config::new(), None));

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Jordan Lee",
            "email": "jordan@example.com",
            "company": "Acme",
            "service": "SEO",
            "budget": "$1k-$5k",
            "message": "Looking for help with a product launch.",
            "consent": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["reference"].is_string());
}

#[actix_web::test]
async fn contact_rejects_missing_consent() {
    let app = app!(AppState::new(Config::new(), None));

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(json!({
            "name": "Jordan Lee",
            "email": "jordan@example.com",
            "service": "SEO",
            "budget": "$1k-$5k",
            "message": "Looking for help with a product launch."
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["details"][0]["field"], "consent");
}
