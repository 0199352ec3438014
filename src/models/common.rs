use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub data: Vec<ModelInfo>,
}

/// Error envelope returned by the provider on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorBody {
    pub error: ProviderErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorDetail {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityStatus {
    pub reachable: bool,
    pub capability_available: bool,
}

impl ConnectivityStatus {
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            capability_available: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.reachable && self.capability_available
    }
}
