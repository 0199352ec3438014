use crate::{models::ConnectivityStatus, provider::ImageProvider};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Gate run before any paid call: the provider must answer and must list
/// the image model. Never cached.
#[derive(Clone)]
pub struct ConnectivityValidator {
    provider: Arc<dyn ImageProvider>,
    timeout: Duration,
}

impl ConnectivityValidator {
    pub fn new(provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            provider,
            timeout: DEFAULT_CHECK_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn check(&self) -> ConnectivityStatus {
        let required = self.provider.required_model();

        let models = match tokio::time::timeout(self.timeout, self.provider.list_models()).await {
            Ok(Ok(models)) => models,
            Ok(Err(e)) => {
                log::error!("Image provider unreachable: {}", e);
                return ConnectivityStatus::unreachable();
            }
            Err(_) => {
                log::error!(
                    "Image provider did not answer within {}s",
                    self.timeout.as_secs()
                );
                return ConnectivityStatus::unreachable();
            }
        };

        let capability_available = models.iter().any(|m| m.id == required);
        if !capability_available {
            log::warn!(
                "Provider reachable but model '{}' is not available ({} models listed)",
                required,
                models.len()
            );
        }

        ConnectivityStatus {
            reachable: true,
            capability_available,
        }
    }
}
