use serde::{Deserialize, Serialize};

/// Fields are defaulted so a missing field reports as a validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: String,
    pub budget: String,
    pub message: String,
    pub consent: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
    pub reference: String,
}
