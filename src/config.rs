use std::env;
use std::time::Duration;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub image_model: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct DeploymentInfo {
    pub region: Option<String>,
    pub commit: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub environment: String,
    pub openai: OpenAIConfig,
    pub deployment: DeploymentInfo,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        OpenAIConfig {
            api_key: None,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl OpenAIConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = non_empty_var("OPENAI_API_KEY");
        let base_url =
            non_empty_var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        let image_model =
            non_empty_var("OPENAI_IMAGE_MODEL").unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string());
        let timeout = non_empty_var("OPENAI_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        OpenAIConfig {
            api_key,
            base_url,
            image_model,
            timeout,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .map_or(false, |key| !key.trim().is_empty())
    }
}

impl DeploymentInfo {
    pub fn from_env() -> Self {
        DeploymentInfo {
            region: non_empty_var("DEPLOY_REGION"),
            commit: non_empty_var("DEPLOY_COMMIT"),
            url: non_empty_var("DEPLOY_URL"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: None,
            port: None,
            environment: "development".to_string(),
            openai: OpenAIConfig::default(),
            deployment: DeploymentInfo::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = non_empty_var("HOST");
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());
        let environment = non_empty_var("APP_ENV").unwrap_or_else(|| "development".to_string());

        Config {
            host,
            port,
            environment,
            openai: OpenAIConfig::from_env(),
            deployment: DeploymentInfo::from_env(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_openai(mut self, config: OpenAIConfig) -> Self {
        self.openai = config;
        self
    }

    pub fn with_deployment(mut self, deployment: DeploymentInfo) -> Self {
        self.deployment = deployment;
        self
    }

    pub fn bind_host(&self) -> &str {
        self.host.as_deref().unwrap_or("127.0.0.1")
    }

    pub fn bind_port(&self) -> u16 {
        self.port.unwrap_or(8080)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_defaults() {
        let config = OpenAIConfig::new();
        assert_eq!(config.base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.image_model, "dall-e-3");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_blank_api_key_is_not_a_key() {
        assert!(!OpenAIConfig::new().with_api_key("   ").has_api_key());
        assert!(OpenAIConfig::new().with_api_key("sk-test").has_api_key());
    }

    #[test]
    fn test_config_builders() {
        let config = Config::new()
            .with_host("0.0.0.0")
            .with_port(3000)
            .with_environment("Production");
        assert_eq!(config.bind_host(), "0.0.0.0");
        assert_eq!(config.bind_port(), 3000);
        assert!(config.is_production());
        assert_eq!(Config::new().bind_port(), 8080);
    }
}
