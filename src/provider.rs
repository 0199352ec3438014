use crate::{
    error::Result,
    models::{GeneratedImage, GenerationRequest, ModelInfo},
};
use async_trait::async_trait;

/// External image-generation backend.
///
/// One call to [`ImageProvider::generate_image`] produces exactly one image.
/// Implementations must not retry internally; the caller decides what a
/// failure means for the batch.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn generate_image(&self, request: &GenerationRequest) -> Result<GeneratedImage>;

    async fn list_models(&self) -> Result<Vec<ModelInfo>>;

    /// Model id that must be listed before generation is allowed.
    fn required_model(&self) -> &str;
}
