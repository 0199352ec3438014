use crate::{
    error::{AssetError, Result},
    models::{GeneratedImage, GenerationRequest, OpenAIImageRequest, OpenAIImageResponse},
};
use reqwest::Client;

#[derive(Clone)]
pub struct ImageClient {
    http: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl ImageClient {
    pub fn new(http: Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Requests a single image. Batches are issued as repeated calls because
    /// the model does not reliably honour `n > 1`.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        let payload = OpenAIImageRequest {
            model: &self.model,
            prompt: &request.prompt,
            n: 1,
            size: request.size.as_str(),
            quality: request.quality.as_str(),
            response_format: "url",
        };

        log::info!(
            "Generating {} image for '{}' with model: {}",
            request.category,
            request.subject,
            self.model
        );
        log::debug!("Image prompt: {}", request.prompt);

        let response = self
            .http
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AssetError::RequestError(format!("OpenAI request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(super::error_from_response(response).await);
        }

        let body: OpenAIImageResponse = response
            .json()
            .await
            .map_err(|e| AssetError::ResponseError(e.to_string()))?;

        let image = body
            .data
            .into_iter()
            .next()
            .ok_or_else(|| AssetError::ResponseError("No images generated".into()))?;

        let url = image
            .url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| AssetError::ResponseError("No image URL in response".into()))?;

        Ok(GeneratedImage {
            url,
            revised_prompt: image.revised_prompt,
        })
    }
}
