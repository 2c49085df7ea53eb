pub mod image_client;

pub use image_client::ImageClient;

use crate::{
    config::GeminiConfig,
    error::{Result, VecgenError},
};

/// Entry point for the generation API. Construction fails fast when the
/// API key is missing, so the capability is explicit rather than a
/// process-global toggle.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    image_client: ImageClient,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| VecgenError::ConfigError("GOOGLE_API_KEY is not set".into()))?;

        Ok(Self {
            image_client: ImageClient::new(api_key, &config),
        })
    }

    pub fn image(&self) -> &ImageClient {
        &self.image_client
    }
}
