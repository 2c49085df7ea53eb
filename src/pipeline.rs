use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::{Result, VecgenError},
    logger,
    models::RasterImage,
    prompt::{self, GenerationRequest},
    style::StyleResolver,
    trace::VectorTracer,
};

/// Seam between the pipeline and the external image generator, so the
/// pipeline can be exercised against a mock.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<RasterImage>;
}

/// Sequences one request end to end: resolve style, compose the instruction
/// sequence, call the generator, trace the raster into SVG. Strictly linear,
/// no retries, no partial output.
pub struct Pipeline<G> {
    generator: G,
    resolver: StyleResolver,
    tracer: VectorTracer,
}

impl<G: ImageGenerator> Pipeline<G> {
    pub fn new(generator: G, resolver: StyleResolver) -> Self {
        Self {
            generator,
            resolver,
            tracer: VectorTracer::new(),
        }
    }

    pub fn with_tracer(mut self, tracer: VectorTracer) -> Self {
        self.tracer = tracer;
        self
    }

    pub async fn run(
        &self,
        prompt: &str,
        style_preset_id: &str,
        reference_bytes: Option<&[u8]>,
    ) -> Result<String> {
        let request_id = Uuid::new_v4();

        log::info!(
            "[{}] Resolving style (preset: '{}', upload: {})",
            request_id,
            style_preset_id,
            reference_bytes.map_or(0, |b| b.len())
        );
        let style = self.resolver.resolve(style_preset_id, reference_bytes)?;
        match &style {
            Some(reference) => log::info!(
                "[{}] Style reference: {}x{} {}",
                request_id,
                reference.width,
                reference.height,
                reference.mime_type
            ),
            None => log::info!("[{}] No style bias", request_id),
        }

        let request = prompt::compose(prompt, style);
        log::debug!(
            "[{}] Composed generation request with {} parts",
            request_id,
            request.len()
        );

        let generation_timer = logger::timer("image generation");
        let raster = self.generator.generate(request).await?;
        generation_timer.stop();
        log::info!(
            "[{}] Received {} byte raster ({})",
            request_id,
            raster.bytes.len(),
            raster.mime_type
        );

        // CPU-bound, so it runs on the blocking pool.
        let tracer = self.tracer.clone();
        let trace_timer = logger::timer("vector tracing");
        let svg = tokio::task::spawn_blocking(move || tracer.trace(&raster.bytes))
            .await
            .map_err(|e| VecgenError::TraceError(format!("tracing task failed: {}", e)))??;
        trace_timer.stop();

        log::info!(
            "[{}] Traced vector document: {} bytes",
            request_id,
            svg.len()
        );

        Ok(svg)
    }
}
