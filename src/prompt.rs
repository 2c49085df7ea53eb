use crate::style::StyleReference;

/// Baseline visual contract appended to every generation, regardless of style.
pub const STYLE_GUIDANCE: &str =
    "Create a vector illustration. Flat style, sharp edges, minimal gradients. White background.";

/// Directive appended directly after a reference image.
pub const MATCH_DIRECTIVE: &str = "Match this style exactly.";

#[derive(Debug, Clone)]
pub enum PromptPart {
    Text(String),
    Image(StyleReference),
}

/// Ordered instruction sequence handed to the image generator.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub parts: Vec<PromptPart>,
}

impl GenerationRequest {
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Builds the instruction sequence: user prompt first, then the fixed
/// guidance sentence, then (if present) the reference image followed by the
/// match directive. No I/O happens here.
pub fn compose(prompt: &str, style: Option<StyleReference>) -> GenerationRequest {
    let mut parts = vec![
        PromptPart::Text(prompt.to_string()),
        PromptPart::Text(STYLE_GUIDANCE.to_string()),
    ];

    if let Some(reference) = style {
        parts.push(PromptPart::Image(reference));
        parts.push(PromptPart::Text(MATCH_DIRECTIVE.to_string()));
    }

    GenerationRequest { parts }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_fixture() -> StyleReference {
        StyleReference {
            bytes: vec![1, 2, 3],
            mime_type: "image/png".to_string(),
            width: 4,
            height: 4,
        }
    }

    #[test]
    fn without_style_yields_prompt_then_guidance() {
        let request = compose("a red bicycle", None);
        assert_eq!(request.len(), 2);
        assert!(matches!(&request.parts[0], PromptPart::Text(t) if t == "a red bicycle"));
        assert!(matches!(&request.parts[1], PromptPart::Text(t) if t == STYLE_GUIDANCE));
    }

    #[test]
    fn with_style_ends_in_image_then_directive() {
        let request = compose("a red bicycle", Some(style_fixture()));
        assert_eq!(request.len(), 4);
        assert!(matches!(&request.parts[0], PromptPart::Text(t) if t == "a red bicycle"));
        assert!(matches!(&request.parts[1], PromptPart::Text(t) if t == STYLE_GUIDANCE));
        assert!(matches!(&request.parts[2], PromptPart::Image(_)));
        assert!(matches!(&request.parts[3], PromptPart::Text(t) if t == MATCH_DIRECTIVE));
    }

    #[test]
    fn prompt_is_passed_through_verbatim() {
        let odd = "  spaces,\nnewlines & \"quotes\" survive  ";
        let request = compose(odd, None);
        assert!(matches!(&request.parts[0], PromptPart::Text(t) if t == odd));
    }
}
