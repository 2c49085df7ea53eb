use serde::{Deserialize, Serialize};

/// Raw raster bytes extracted from a generation response. Request-scoped.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

// Wire types for the generateContent REST call. The API speaks camelCase.

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<WireContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct WireGenerationConfig {
    #[serde(rename = "responseModalities")]
    pub response_modalities: Vec<String>,
}

impl Default for WireGenerationConfig {
    fn default() -> Self {
        WireGenerationConfig {
            response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireContent {
    #[serde(default)]
    pub parts: Vec<WirePart>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<WireInlineData>,
}

impl WirePart {
    pub fn text(text: impl Into<String>) -> Self {
        WirePart {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        WirePart {
            text: None,
            inline_data: Some(WireInlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireInlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<WireCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct WireCandidate {
    pub content: Option<WireContent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_part_serializes_without_inline_data() {
        let part = WirePart::text("a red bicycle");
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "a red bicycle" }));
    }

    #[test]
    fn inline_data_part_serializes_camel_case() {
        let part = WirePart::inline_data("image/png", "AAAA");
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "inlineData": { "mimeType": "image/png", "data": "AAAA" }
            })
        );
    }

    #[test]
    fn response_with_inline_image_deserializes() {
        let raw = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
                ] } }
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let part = &response.candidates[0].content.as_ref().unwrap().parts[0];
        assert_eq!(
            part.inline_data.as_ref().unwrap().mime_type,
            "image/png"
        );
    }

    #[test]
    fn empty_response_deserializes_to_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }
}
