use crate::{
    models::{GenerationRequest, GenerationResult},
    provider::ImageProvider,
};
use std::sync::Arc;

/// Runs requests against the provider one at a time, in order.
///
/// A failed call becomes a `Failed` result and the loop moves on; nothing is
/// retried and nothing aborts the batch.
#[derive(Clone)]
pub struct AssetGenerator {
    provider: Arc<dyn ImageProvider>,
}

impl AssetGenerator {
    pub fn new(provider: Arc<dyn ImageProvider>) -> Self {
        Self { provider }
    }

    pub async fn generate(&self, requests: Vec<GenerationRequest>) -> Vec<GenerationResult> {
        let total = requests.len();
        let mut results = Vec::with_capacity(total);

        for (index, request) in requests.into_iter().enumerate() {
            match self.provider.generate_image(&request).await {
                Ok(image) => {
                    log::debug!(
                        "Generated {} {}/{} for '{}'",
                        request.category,
                        index + 1,
                        total,
                        request.subject
                    );
                    results.push(GenerationResult::generated(request, image));
                }
                Err(e) => {
                    log::warn!(
                        "Failed to generate {} {}/{} for '{}': {}",
                        request.category,
                        index + 1,
                        total,
                        request.subject,
                        e
                    );
                    results.push(GenerationResult::failed(request, e.to_string()));
                }
            }
        }

        let failed = results.iter().filter(|r| !r.is_success()).count();
        if failed > 0 {
            log::warn!("{} of {} image calls failed", failed, total);
        }

        results
    }
}
