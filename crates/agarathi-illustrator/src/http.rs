use agarathi_config::illustration::IllustrationConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{GeneratedImage, GenerationError, ImageParams, ImageRequest, Illustrator, ProviderMetadata};

/// JSON image-generation endpoint authenticated with a bearer key
#[derive(Clone)]
pub struct HttpIllustrator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl HttpIllustrator {
    pub fn new(client: reqwest::Client, api_key: String, api_url: String, model: String) -> Self {
        Self {
            client,
            api_key,
            api_url,
            model,
        }
    }

    pub fn from_config(client: reqwest::Client, config: &IllustrationConfig) -> Self {
        Self::new(
            client,
            config.api_key.clone(),
            config.api_url.clone(),
            config.model.clone(),
        )
    }
}

impl From<&IllustrationConfig> for ImageParams {
    fn from(config: &IllustrationConfig) -> Self {
        Self {
            number_results: 1,
            output_format: config.output_format.clone(),
            width: config.width,
            height: config.height,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody<'a> {
    prompt: &'a str,
    model: &'a str,
    number_results: u32,
    output_format: &'a str,
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    data: Vec<GeneratedItem>,
}

#[derive(Deserialize)]
struct GeneratedItem {
    #[serde(default, alias = "imageURL", alias = "image_url")]
    url: Option<String>,
}

#[async_trait]
impl Illustrator for HttpIllustrator {
    async fn generate(&self, request: &ImageRequest) -> Result<GeneratedImage, GenerationError> {
        if self.api_key.is_empty() {
            return Err(GenerationError::AuthenticationError);
        }

        let body = GenerateBody {
            prompt: &request.prompt,
            model: &self.model,
            number_results: request.params.number_results,
            output_format: &request.params.output_format,
            width: request.params.width,
            height: request.params.height,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(GenerationError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(GenerationError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(GenerationError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            GenerationError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let url = parsed
            .data
            .into_iter()
            .find_map(|item| item.url.filter(|u| !u.is_empty()))
            .ok_or(GenerationError::EmptyResult)?;

        Ok(GeneratedImage {
            url,
            provider: self.model.clone(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "HTTP image generation".to_string(),
            model: self.model.clone(),
        }
    }
}
