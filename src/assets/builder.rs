use crate::models::{AssetCategory, GenerationRequest, ImageQuality, ImageSize};

pub const DEFAULT_HEADSHOT_COUNT: u32 = 4;
pub const DEFAULT_LOGO_COUNT: u32 = 8;
/// Ceiling on a per-category count override.
pub const MAX_COUNT: u32 = 20;
pub const DEFAULT_PERSON_NAME: &str = "a digital marketing consultant";
pub const DEFAULT_BRAND_NAME: &str = "Digital Marketing Pro";

pub const DEFAULT_SERVICES: [&str; 12] = [
    "SEO Optimization",
    "PPC Advertising",
    "Social Media Marketing",
    "Content Marketing",
    "Email Marketing",
    "Web Design",
    "Analytics & Reporting",
    "Brand Strategy",
    "Conversion Optimization",
    "Marketing Automation",
    "Influencer Marketing",
    "Video Marketing",
];

const HEADSHOT_SETTINGS: [&str; 4] = [
    "in a bright modern office with soft natural window light",
    "against a clean light-grey studio backdrop",
    "outdoors with a softly blurred city skyline behind",
    "at a desk with a laptop, warm ambient lighting",
];

const LOGO_STYLES: [&str; 8] = [
    "minimalist wordmark",
    "modern geometric monogram",
    "abstract upward-growth emblem",
    "bold typographic lockup",
    "circular badge",
    "gradient app-icon mark",
    "clean line-art symbol",
    "negative-space lettermark",
];

/// Builds one [`GenerationRequest`] per image for each asset category.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    quality: ImageQuality,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quality(mut self, quality: ImageQuality) -> Self {
        self.quality = quality;
        self
    }

    pub fn quality(&self) -> ImageQuality {
        self.quality
    }

    pub fn headshots(&self, name: Option<&str>, count: Option<u32>) -> Vec<GenerationRequest> {
        let name = or_default(name, DEFAULT_PERSON_NAME);
        let count = count.unwrap_or(DEFAULT_HEADSHOT_COUNT).min(MAX_COUNT);

        (0..count as usize)
            .map(|i| {
                let setting = HEADSHOT_SETTINGS[i % HEADSHOT_SETTINGS.len()];
                self.request(
                    AssetCategory::Headshot,
                    name,
                    format!(
                        "Professional corporate headshot of {}, business attire, confident and \
                         approachable expression, {}, photorealistic, shallow depth of field",
                        name, setting
                    ),
                )
            })
            .collect()
    }

    pub fn logos(&self, brand_name: Option<&str>, count: Option<u32>) -> Vec<GenerationRequest> {
        let brand = or_default(brand_name, DEFAULT_BRAND_NAME);
        let count = count.unwrap_or(DEFAULT_LOGO_COUNT).min(MAX_COUNT);

        (0..count as usize)
            .map(|i| {
                let style = LOGO_STYLES[i % LOGO_STYLES.len()];
                self.request(
                    AssetCategory::Logo,
                    brand,
                    format!(
                        "{} logo for \"{}\", a digital marketing agency, flat vector design, \
                         blue and purple palette, white background, no extra text",
                        style, brand
                    ),
                )
            })
            .collect()
    }

    /// One icon per label. A missing or empty list falls back to the
    /// default twelve services.
    pub fn service_icons(&self, services: Option<&[String]>) -> Vec<GenerationRequest> {
        let labels: Vec<&str> = services
            .unwrap_or_default()
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();

        let labels = if labels.is_empty() {
            DEFAULT_SERVICES.to_vec()
        } else {
            labels
        };

        labels
            .into_iter()
            .map(|label| {
                self.request(
                    AssetCategory::ServiceIcon,
                    label,
                    format!(
                        "Modern flat icon illustrating {} for a digital marketing website, \
                         simple shapes, blue and purple gradient, white background, no text",
                        label
                    ),
                )
            })
            .collect()
    }

    fn request(&self, category: AssetCategory, subject: &str, prompt: String) -> GenerationRequest {
        GenerationRequest {
            category,
            subject: subject.to_string(),
            prompt,
            size: ImageSize::Square,
            quality: self.quality,
        }
    }
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
}
