use crate::{
    error::{AssetError, Result},
    models::{ModelInfo, ModelList},
};
use reqwest::Client;

#[derive(Clone)]
pub struct ModelsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ModelsClient {
    pub fn new(http: Client, base_url: String, api_key: String) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }

    pub async fn list(&self) -> Result<Vec<ModelInfo>> {
        let response = self
            .http
            .get(format!("{}/models", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AssetError::RequestError(format!("OpenAI request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(super::error_from_response(response).await);
        }

        let list: ModelList = response
            .json()
            .await
            .map_err(|e| AssetError::ResponseError(e.to_string()))?;

        log::debug!("Provider lists {} models", list.data.len());
        Ok(list.data)
    }
}
