use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::AssetError;
use crate::models::GenerationResult;

/// Body of `POST /api/generate-assets`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAssetsBody {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "whole_count")]
    pub count: Option<u32>,
    pub brand_name: Option<String>,
    pub name: Option<String>,
    pub services: Option<Vec<String>>,
    pub quality: Option<String>,
}

/// JSON has one number type, so `4.0` is accepted as `4`. Fractions and
/// negatives are rejected.
fn whole_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<serde_json::Number>::deserialize(deserializer)? {
        Some(number) => number,
        None => return Ok(None),
    };

    if let Some(n) = number.as_u64() {
        return u32::try_from(n)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("count {} is out of range", n)));
    }

    match number.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => Ok(Some(f as u32)),
        _ => Err(de::Error::custom(format!(
            "count must be a whole non-negative number, got {}",
            number
        ))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetSelector {
    Headshots,
    Logos,
    Services,
    All,
}

impl AssetSelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetSelector::Headshots => "headshots",
            AssetSelector::Logos => "logos",
            AssetSelector::Services => "services",
            AssetSelector::All => "all",
        }
    }

    pub fn includes_headshots(&self) -> bool {
        matches!(self, AssetSelector::Headshots | AssetSelector::All)
    }

    pub fn includes_logos(&self) -> bool {
        matches!(self, AssetSelector::Logos | AssetSelector::All)
    }

    pub fn includes_services(&self) -> bool {
        matches!(self, AssetSelector::Services | AssetSelector::All)
    }
}

impl FromStr for AssetSelector {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "headshots" => Ok(AssetSelector::Headshots),
            "logos" => Ok(AssetSelector::Logos),
            "services" => Ok(AssetSelector::Services),
            "all" => Ok(AssetSelector::All),
            other => Err(AssetError::InvalidRequest(format!(
                "Invalid asset type '{}'. Use: headshots, logos, services, or all",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headshots: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_graphics: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAssetsResponse {
    pub success: bool,
    #[serde(rename = "type")]
    pub kind: AssetSelector,
    pub results: AssetResults,
    pub generations: Vec<GenerationResult>,
    pub failed_count: usize,
    pub cost: String,
    pub actual_cost: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `GET /api/generate-assets`, both when connected and when blocked.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetStatusResponse {
    pub status: &'static str,
    pub dalle_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reachable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub environment: String,
    #[serde(rename = "hasOpenAIKey")]
    pub has_openai_key: bool,
    pub deployment: DeploymentSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeploymentSummary {
    pub region: Option<String>,
    pub commit: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}
