use async_trait::async_trait;
use base64::Engine as _;
use reqwest::Client;

use crate::{
    config::{GeminiConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL_ID},
    error::{Result, VecgenError},
    models::{
        GenerateContentRequest, GenerateContentResponse, RasterImage, WireContent,
        WireGenerationConfig, WirePart,
    },
    pipeline::ImageGenerator,
    prompt::{GenerationRequest, PromptPart},
};

#[derive(Clone, Debug)]
pub struct ImageClient {
    client: Client,
    api_key: String,
    model_id: String,
    endpoint: String,
}

impl ImageClient {
    pub(crate) fn new(api_key: String, config: &GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model_id: config
                .model_id
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            endpoint: config
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub async fn generate_image(&self, request: GenerationRequest) -> Result<RasterImage> {
        let payload = GenerateContentRequest {
            contents: vec![WireContent {
                parts: request.parts.iter().map(part_to_wire).collect(),
            }],
            generation_config: WireGenerationConfig::default(),
        };

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model_id);

        log::info!("Generating image with model: {}", self.model_id);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| VecgenError::GenerationError(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VecgenError::GenerationError(format!(
                "generation service returned {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| VecgenError::GenerationError(format!("malformed response: {}", e)))?;

        extract_image(body)
    }
}

#[async_trait]
impl ImageGenerator for ImageClient {
    async fn generate(&self, request: GenerationRequest) -> Result<RasterImage> {
        self.generate_image(request).await
    }
}

fn part_to_wire(part: &PromptPart) -> WirePart {
    match part {
        PromptPart::Text(text) => WirePart::text(text.clone()),
        PromptPart::Image(reference) => WirePart::inline_data(
            reference.mime_type.clone(),
            base64::engine::general_purpose::STANDARD.encode(&reference.bytes),
        ),
    }
}

/// First candidate, first part, which must carry inline image data. Further
/// candidates and parts are deliberately discarded.
fn extract_image(response: GenerateContentResponse) -> Result<RasterImage> {
    let candidate = response.candidates.into_iter().next().ok_or_else(|| {
        log::warn!("Generation response contained no candidates");
        VecgenError::GenerationError("no candidates in response".into())
    })?;

    let content = candidate.content.ok_or_else(|| {
        log::warn!("First candidate carried no content");
        VecgenError::GenerationError("candidate carried no content".into())
    })?;

    let part = content.parts.into_iter().next().ok_or_else(|| {
        log::warn!("First candidate carried no content parts");
        VecgenError::GenerationError("candidate carried no content parts".into())
    })?;

    let inline = part.inline_data.ok_or_else(|| {
        log::warn!("First content part carried no inline image data");
        VecgenError::GenerationError("no inline image data in first content part".into())
    })?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(inline.data)
        .map_err(|e| {
            VecgenError::GenerationError(format!("inline image data was not valid base64: {}", e))
        })?;

    Ok(RasterImage {
        bytes,
        mime_type: inline.mime_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WireCandidate, WireInlineData};

    fn response_with(parts: Vec<WirePart>) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![WireCandidate {
                content: Some(WireContent { parts }),
            }],
        }
    }

    #[test]
    fn extracts_inline_data_from_first_part() {
        let encoded = base64::engine::general_purpose::STANDARD.encode([1u8, 2, 3]);
        let response = response_with(vec![
            WirePart::inline_data("image/png", encoded),
            WirePart::text("ignored trailing part"),
        ]);

        let raster = extract_image(response).unwrap();
        assert_eq!(raster.bytes, vec![1, 2, 3]);
        assert_eq!(raster.mime_type, "image/png");
    }

    #[test]
    fn no_candidates_is_a_generation_error() {
        let response = GenerateContentResponse { candidates: vec![] };
        let err = extract_image(response).unwrap_err();
        assert!(matches!(err, VecgenError::GenerationError(_)));
    }

    #[test]
    fn no_parts_is_a_generation_error() {
        let err = extract_image(response_with(vec![])).unwrap_err();
        assert!(matches!(err, VecgenError::GenerationError(_)));
    }

    #[test]
    fn text_only_first_part_is_a_generation_error() {
        // Even if a later part carries an image, only the first one counts.
        let encoded = base64::engine::general_purpose::STANDARD.encode([1u8]);
        let response = response_with(vec![
            WirePart::text("here is your image"),
            WirePart::inline_data("image/png", encoded),
        ]);
        let err = extract_image(response).unwrap_err();
        assert!(matches!(err, VecgenError::GenerationError(_)));
    }

    #[test]
    fn invalid_base64_is_a_generation_error() {
        let response = response_with(vec![WirePart {
            text: None,
            inline_data: Some(WireInlineData {
                mime_type: "image/png".to_string(),
                data: "%%%not base64%%%".to_string(),
            }),
        }]);
        let err = extract_image(response).unwrap_err();
        assert!(matches!(err, VecgenError::GenerationError(_)));
    }
}
