use agarathi_types::{Illustration, WordEntry};

pub mod http;
pub mod prompt;

pub use http::HttpIllustrator;
pub use prompt::{PromptSettings, build_prompt};

/// Image generation provider interface
#[async_trait::async_trait]
pub trait Illustrator: Send + Sync {
    /// Generate images for a prompt
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, GenerationError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    pub params: ImageParams,
}

/// Fixed output parameters sent with every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageParams {
    pub number_results: u32,
    pub output_format: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ImageParams {
    fn default() -> Self {
        Self {
            number_results: 1,
            output_format: "PNG".to_string(),
            width: 512,
            height: 512,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub url: String,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Provider returned no image")]
    EmptyResult,
}

/// Build the prompt for an entry and ask the provider for one picture
pub async fn request_illustration(
    illustrator: &dyn Illustrator,
    entry: &WordEntry,
    settings: &PromptSettings,
    params: &ImageParams,
) -> Result<Illustration, GenerationError> {
    let prompt = build_prompt(entry, settings);
    tracing::debug!("Illustration prompt for '{}': {} chars", entry.word, prompt.len());

    let request = ImageRequest {
        prompt: prompt.clone(),
        params: ImageParams {
            number_results: 1,
            ..params.clone()
        },
    };

    let image = illustrator.generate(&request).await?;
    tracing::info!("Illustration for '{}' from {}", entry.word, image.provider);

    Ok(Illustration {
        image_url: image.url,
        prompt,
    })
}
