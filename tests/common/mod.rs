use async_trait::async_trait;
use portfolio_assets::{
    AssetError, GeneratedImage, GenerationRequest, ImageProvider, ModelInfo, Result,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scripted provider that counts every call it receives.
pub struct FakeProvider {
    reachable: bool,
    models: Vec<&'static str>,
    fail_calls: Vec<usize>,
    generate_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn healthy() -> Self {
        Self {
            reachable: true,
            models: vec!["gpt-4o", "dall-e-3"],
            fail_calls: Vec::new(),
            generate_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::healthy()
        }
    }

    pub fn without_image_model() -> Self {
        Self {
            models: vec!["gpt-4o"],
            ..Self::healthy()
        }
    }

    /// Zero-based indices of generation calls that should fail.
    pub fn failing_calls(mut self, calls: &[usize]) -> Self {
        self.fail_calls = calls.to_vec();
        self
    }

    pub fn generate_calls(&self) -> usize {
        self.generate_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageProvider for FakeProvider {
    async fn generate_image(&self, request: &GenerationRequest) -> Result<GeneratedImage> {
        let n = self.generate_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_calls.contains(&n) {
            return Err(AssetError::ProviderError {
                status: 500,
                message: "simulated provider error".into(),
            });
        }
        Ok(GeneratedImage {
            url: format!("https://images.test/{}/{}.png", request.category, n),
            revised_prompt: Some(request.prompt.clone()),
        })
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if !self.reachable {
            return Err(AssetError::RequestError("connection refused".into()));
        }
        Ok(self
            .models
            .iter()
            .map(|id| ModelInfo {
                id: id.to_string(),
                owned_by: Some("system".into()),
            })
            .collect())
    }

    fn required_model(&self) -> &str {
        "dall-e-3"
    }
}
