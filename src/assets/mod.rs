pub mod builder;
pub mod connectivity;
pub mod cost;
pub mod generator;

use crate::{
    error::{AssetError, Result},
    logger,
    models::{
        AssetResults, AssetSelector, ConnectivityStatus, GenerateAssetsBody,
        GenerateAssetsResponse, GenerationResult, ImageQuality,
    },
    provider::ImageProvider,
};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;

pub use builder::RequestBuilder;
pub use connectivity::ConnectivityValidator;
pub use cost::{quote, quote_batch, CostQuote, Money};
pub use generator::AssetGenerator;

/// A validated generation order.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub selector: AssetSelector,
    pub count: Option<u32>,
    pub name: Option<String>,
    pub brand_name: Option<String>,
    pub services: Option<Vec<String>>,
    pub quality: ImageQuality,
}

impl GenerationPlan {
    pub fn new(selector: AssetSelector) -> Self {
        Self {
            selector,
            count: None,
            name: None,
            brand_name: None,
            services: None,
            quality: ImageQuality::Standard,
        }
    }
}

impl TryFrom<GenerateAssetsBody> for GenerationPlan {
    type Error = AssetError;

    fn try_from(body: GenerateAssetsBody) -> Result<Self> {
        let selector = body.kind.parse::<AssetSelector>()?;
        if let Some(count) = body.count {
            if count > builder::MAX_COUNT {
                return Err(AssetError::InvalidRequest(format!(
                    "count must be at most {}, got {}",
                    builder::MAX_COUNT,
                    count
                )));
            }
        }
        Ok(Self {
            selector,
            count: body.count,
            name: body.name,
            brand_name: body.brand_name,
            services: body.services,
            quality: body
                .quality
                .as_deref()
                .map(ImageQuality::parse_or_default)
                .unwrap_or_default(),
        })
    }
}

/// Everything produced for one plan, per category, in request order.
#[derive(Debug, Clone)]
pub struct AssetBatch {
    pub selector: AssetSelector,
    pub headshots: Option<Vec<GenerationResult>>,
    pub logos: Option<Vec<GenerationResult>>,
    pub service_graphics: Option<Vec<GenerationResult>>,
    pub quality: ImageQuality,
}

impl AssetBatch {
    pub fn all_results(&self) -> impl Iterator<Item = &GenerationResult> {
        self.headshots
            .iter()
            .chain(self.logos.iter())
            .chain(self.service_graphics.iter())
            .flatten()
    }

    pub fn requested(&self) -> usize {
        self.all_results().count()
    }

    pub fn failed(&self) -> usize {
        self.all_results().filter(|r| !r.is_success()).count()
    }

    /// Pre-flight price of every requested image, failed ones included.
    pub fn estimated_cost(&self) -> CostQuote {
        quote(self.requested() as u32, self.quality)
    }

    /// Price of the images the provider actually returned.
    pub fn actual_cost(&self) -> CostQuote {
        quote((self.requested() - self.failed()) as u32, self.quality)
    }

    pub fn into_response(self) -> GenerateAssetsResponse {
        let estimated = self.estimated_cost();
        let actual = self.actual_cost();
        let failed_count = self.failed();

        let urls = |results: &[GenerationResult]| -> Vec<String> {
            results
                .iter()
                .filter_map(|r| r.url().map(str::to_string))
                .collect()
        };

        let service_graphics = self.service_graphics.as_ref().map(|results| {
            let mut by_label: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for result in results {
                let entry = by_label.entry(result.request.subject.clone()).or_default();
                if let Some(url) = result.url() {
                    entry.push(url.to_string());
                }
            }
            by_label
        });

        let results = AssetResults {
            headshots: self.headshots.as_deref().map(urls),
            logos: self.logos.as_deref().map(urls),
            service_graphics,
        };

        let generations = [self.headshots, self.logos, self.service_graphics]
            .into_iter()
            .flatten()
            .flatten()
            .collect();

        GenerateAssetsResponse {
            success: true,
            kind: self.selector,
            results,
            generations,
            failed_count,
            cost: estimated.total_cost.to_string(),
            actual_cost: actual.total_cost.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Connectivity gate, request building and generation behind one handle.
#[derive(Clone)]
pub struct AssetService {
    validator: ConnectivityValidator,
    generator: AssetGenerator,
}

impl AssetService {
    pub fn new(provider: Arc<dyn ImageProvider>) -> Self {
        Self {
            validator: ConnectivityValidator::new(provider.clone()),
            generator: AssetGenerator::new(provider),
        }
    }

    pub async fn status(&self) -> ConnectivityStatus {
        self.validator.check().await
    }

    /// Checks connectivity, then generates each selected category in turn:
    /// headshots, logos, service graphics.
    pub async fn generate(&self, plan: &GenerationPlan) -> Result<AssetBatch> {
        let status = self.validator.check().await;
        if !status.is_ready() {
            return Err(AssetError::Unavailable(if status.reachable {
                "required image model is not available".into()
            } else {
                "image provider is unreachable".into()
            }));
        }

        let _timer = logger::timer(&format!("{} asset generation", plan.selector.as_str()));
        let builder = RequestBuilder::new().with_quality(plan.quality);
        let mut batch = AssetBatch {
            selector: plan.selector,
            headshots: None,
            logos: None,
            service_graphics: None,
            quality: plan.quality,
        };

        if plan.selector.includes_headshots() {
            let requests = builder.headshots(plan.name.as_deref(), plan.count);
            log::info!("Generating {} headshots", requests.len());
            batch.headshots = Some(self.generator.generate(requests).await);
        }

        if plan.selector.includes_logos() {
            let requests = builder.logos(plan.brand_name.as_deref(), plan.count);
            log::info!("Generating {} logos", requests.len());
            batch.logos = Some(self.generator.generate(requests).await);
        }

        if plan.selector.includes_services() {
            let requests = builder.service_icons(plan.services.as_deref());
            log::info!("Generating {} service graphics", requests.len());
            batch.service_graphics = Some(self.generator.generate(requests).await);
        }

        log::info!(
            "Generated {}/{} assets, estimated cost ${}",
            batch.requested() - batch.failed(),
            batch.requested(),
            batch.estimated_cost().total_cost
        );

        Ok(batch)
    }
}

/// Quote shown by the status endpoint: the default `all` batch at standard
/// quality.
pub fn default_batch_estimate() -> CostQuote {
    quote_batch([
        (builder::DEFAULT_HEADSHOT_COUNT, ImageQuality::Standard),
        (builder::DEFAULT_LOGO_COUNT, ImageQuality::Standard),
        (builder::DEFAULT_SERVICES.len() as u32, ImageQuality::Standard),
    ])
}
