use visioncortex::{ColorImage, PathSimplifyMode};

use crate::error::{Result, VecgenError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceColorMode {
    Color,
    Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceHierarchy {
    Stacked,
    Cutout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracePathMode {
    Spline,
    Polygon,
    Pixel,
}

/// The tuned tracing profile. The values interact (speckle filtering and
/// color precision jointly determine the final region count), so the profile
/// is carried as one value and never adjusted per image.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceConfig {
    pub color_mode: TraceColorMode,
    pub hierarchy: TraceHierarchy,
    pub path_mode: TracePathMode,
    /// Connected regions below this pixel count are discarded.
    pub filter_speckle: usize,
    /// Color quantization, in significant bits per channel.
    pub color_precision: i32,
    /// Adjacent layers closer than this color distance are merged.
    pub layer_difference: i32,
    /// Vertices sharper than this angle (degrees) are kept as corners.
    pub corner_threshold: i32,
    /// Segments shorter than this are merged into neighbors.
    pub length_threshold: f64,
    /// Curve-fitting iteration cap.
    pub max_iterations: usize,
    /// Angle (degrees) controlling where curve segments may be spliced.
    pub splice_threshold: i32,
    /// Decimal digits in output coordinates.
    pub path_precision: u32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            color_mode: TraceColorMode::Color,
            hierarchy: TraceHierarchy::Stacked,
            path_mode: TracePathMode::Spline,
            filter_speckle: 4,
            color_precision: 6,
            layer_difference: 16,
            corner_threshold: 60,
            length_threshold: 4.0,
            max_iterations: 10,
            splice_threshold: 45,
            path_precision: 3,
        }
    }
}

impl TraceConfig {
    fn to_engine_config(&self) -> vtracer::Config {
        vtracer::Config {
            color_mode: match self.color_mode {
                TraceColorMode::Color => vtracer::ColorMode::Color,
                TraceColorMode::Binary => vtracer::ColorMode::Binary,
            },
            hierarchical: match self.hierarchy {
                TraceHierarchy::Stacked => vtracer::Hierarchical::Stacked,
                TraceHierarchy::Cutout => vtracer::Hierarchical::Cutout,
            },
            mode: match self.path_mode {
                TracePathMode::Spline => PathSimplifyMode::Spline,
                TracePathMode::Polygon => PathSimplifyMode::Polygon,
                TracePathMode::Pixel => PathSimplifyMode::None,
            },
            filter_speckle: self.filter_speckle,
            color_precision: self.color_precision,
            layer_difference: self.layer_difference,
            corner_threshold: self.corner_threshold,
            length_threshold: self.length_threshold,
            max_iterations: self.max_iterations,
            splice_threshold: self.splice_threshold,
            path_precision: Some(self.path_precision),
            ..vtracer::Config::default()
        }
    }
}

/// Converts raster bytes into an SVG document. CPU-bound and synchronous;
/// callers needing responsiveness run it on a blocking worker.
#[derive(Debug, Clone)]
pub struct VectorTracer {
    config: TraceConfig,
}

impl VectorTracer {
    pub fn new() -> Self {
        Self {
            config: TraceConfig::default(),
        }
    }

    pub fn with_config(config: TraceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn trace(&self, raster_bytes: &[u8]) -> Result<String> {
        let decoded = image::load_from_memory(raster_bytes)
            .map_err(|e| VecgenError::TraceError(format!("raster decode failed: {}", e)))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        if width == 0 || height == 0 {
            return Err(VecgenError::TraceError("raster has zero dimensions".into()));
        }

        log::debug!("Tracing {}x{} raster into vector paths", width, height);

        let img = ColorImage {
            pixels: rgba.into_raw(),
            width: width as usize,
            height: height as usize,
        };

        let svg = vtracer::convert(img, self.config.to_engine_config())
            .map_err(VecgenError::TraceError)?;

        Ok(svg.to_string())
    }
}

impl Default for VectorTracer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// White canvas with a centered black square, big enough to survive the
    /// speckle filter.
    fn two_region_png() -> Vec<u8> {
        let mut img = image::RgbaImage::from_pixel(32, 32, image::Rgba([255, 255, 255, 255]));
        for y in 8..24 {
            for x in 8..24 {
                img.put_pixel(x, y, image::Rgba([0, 0, 0, 255]));
            }
        }
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn default_profile_matches_tuned_values() {
        assert_eq!(
            TraceConfig::default(),
            TraceConfig {
                color_mode: TraceColorMode::Color,
                hierarchy: TraceHierarchy::Stacked,
                path_mode: TracePathMode::Spline,
                filter_speckle: 4,
                color_precision: 6,
                layer_difference: 16,
                corner_threshold: 60,
                length_threshold: 4.0,
                max_iterations: 10,
                splice_threshold: 45,
                path_precision: 3,
            }
        );
    }

    #[test]
    fn traces_png_into_svg_with_paths() {
        let svg = VectorTracer::new().trace(&two_region_png()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn tracing_is_deterministic() {
        let tracer = VectorTracer::new();
        let png = two_region_png();
        assert_eq!(tracer.trace(&png).unwrap(), tracer.trace(&png).unwrap());
    }

    #[test]
    fn undecodable_bytes_fail_with_trace_error() {
        let err = VectorTracer::new().trace(b"not a raster").unwrap_err();
        assert!(matches!(err, VecgenError::TraceError(_)));
    }
}
