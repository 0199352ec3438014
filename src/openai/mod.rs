pub mod image_client;
pub mod models_client;

use crate::{
    config::OpenAIConfig,
    error::{AssetError, Result},
    models::{GeneratedImage, GenerationRequest, ModelInfo, ProviderErrorBody},
    provider::ImageProvider,
};
use async_trait::async_trait;
use reqwest::Client;

pub use image_client::ImageClient;
pub use models_client::ModelsClient;

/// Handle on the OpenAI API. Built once at startup and shared read-only.
#[derive(Clone)]
pub struct OpenAIClient {
    image_client: ImageClient,
    models_client: ModelsClient,
}

impl OpenAIClient {
    pub fn new(config: &OpenAIConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AssetError::ConfigError("OPENAI_API_KEY environment variable is not set".into())
            })?
            .to_string();

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssetError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            image_client: ImageClient::new(
                http.clone(),
                base_url.clone(),
                api_key.clone(),
                config.image_model.clone(),
            ),
            models_client: ModelsClient::new(http, base_url, api_key),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }

    pub fn models(&self) -> &ModelsClient {
        &self.models_client
    }
}

#[async_trait]
impl ImageProvider for OpenAIClient {
    async fn generate_image(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        self.image_client.generate(request).await
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        self.models_client.list().await
    }

    fn required_model(&self) -> &str {
        self.image_client.model()
    }
}

/// Turns a non-2xx response into a [`AssetError::ProviderError`], using the
/// provider's error envelope when it parses.
pub(crate) async fn error_from_response(response: reqwest::Response) -> AssetError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ProviderErrorBody>(&body) {
        Ok(parsed) => match parsed.error.kind {
            Some(kind) => format!("{} ({})", parsed.error.message, kind),
            None => parsed.error.message,
        },
        Err(_) if body.trim().is_empty() => "empty error body".to_string(),
        Err(_) => body,
    };

    AssetError::ProviderError { status, message }
}
