pub mod assets;
pub mod config;
pub mod contact;
pub mod error;
pub mod logger;
pub mod models;
pub mod openai;
pub mod provider;
#[cfg(feature = "server")]
pub mod server;

pub use assets::{AssetGenerator, AssetService, ConnectivityValidator, CostQuote, RequestBuilder};
pub use config::{Config, OpenAIConfig};
pub use error::{AssetError, Result};
pub use models::*;
pub use openai::OpenAIClient;
pub use provider::ImageProvider;
