use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    #[serde(rename = "headshot")]
    Headshot,
    #[serde(rename = "logo")]
    Logo,
    #[serde(rename = "service-icon")]
    ServiceIcon,
}

impl AssetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Headshot => "headshot",
            AssetCategory::Logo => "logo",
            AssetCategory::ServiceIcon => "service-icon",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dimensions sent to the image model. Only the square size is priced at
/// the flat per-tier rate, so it is the only one offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "1024x1024")]
    Square,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Square => "1024x1024",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    #[default]
    Standard,
    Hd,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Standard => "standard",
            ImageQuality::Hd => "hd",
        }
    }

    /// Lenient tier lookup. Anything unrecognised prices as `Standard`
    /// instead of failing the request.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "hd" | "high" => ImageQuality::Hd,
            "standard" => ImageQuality::Standard,
            other => {
                log::debug!("Unknown quality tier '{}', using standard", other);
                ImageQuality::Standard
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub category: AssetCategory,
    pub subject: String,
    pub prompt: String,
    pub size: ImageSize,
    pub quality: ImageQuality,
}

/// What the provider returned for a single successful call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub url: String,
    pub revised_prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerationOutcome {
    #[serde(rename_all = "camelCase")]
    Generated {
        url: String,
        revised_prompt: Option<String>,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationResult {
    pub request: GenerationRequest,
    #[serde(flatten)]
    pub outcome: GenerationOutcome,
}

impl GenerationResult {
    pub fn generated(request: GenerationRequest, image: GeneratedImage) -> Self {
        Self {
            request,
            outcome: GenerationOutcome::Generated {
                url: image.url,
                revised_prompt: image.revised_prompt,
            },
        }
    }

    pub fn failed(request: GenerationRequest, error: impl Into<String>) -> Self {
        Self {
            request,
            outcome: GenerationOutcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.outcome {
            GenerationOutcome::Generated { url, .. } => Some(url),
            GenerationOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            GenerationOutcome::Failed { error } => Some(error),
            GenerationOutcome::Generated { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, GenerationOutcome::Generated { .. })
    }
}

// OpenAI Images wire format

#[derive(Debug, Serialize)]
pub struct OpenAIImageRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub n: u32,
    pub size: &'static str,
    pub quality: &'static str,
    pub response_format: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIImageResponse {
    #[serde(default)]
    pub data: Vec<OpenAIImageData>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIImageData {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub revised_prompt: Option<String>,
}
