//! Vecgen turns a text prompt (optionally biased by a style reference image)
//! into a scalable vector illustration: it composes a generation request for
//! an image model, then traces the returned raster into SVG with a fixed,
//! product-tuned profile.

pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod pipeline;
pub mod prompt;
pub mod style;
pub mod trace;

pub use config::{Config, GeminiConfig, StyleAssetsConfig};
pub use error::{Result, VecgenError};
pub use gemini::{GeminiClient, ImageClient};
pub use models::RasterImage;
pub use pipeline::{ImageGenerator, Pipeline};
pub use prompt::{compose, GenerationRequest, PromptPart, MATCH_DIRECTIVE, STYLE_GUIDANCE};
pub use style::{StylePreset, StyleReference, StyleResolver};
pub use trace::{TraceConfig, VectorTracer};
