use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, VecgenError};

/// Named style presets shipped with the product. Every identifier maps to
/// exactly one outcome: a bundled reference asset, or no style bias at all.
/// Unrecognized identifiers fall back to no bias, never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylePreset {
    FlatTech,
    LineArt,
    Sketch,
    Flat,
    None,
}

impl StylePreset {
    pub fn from_id(id: &str) -> Self {
        match id {
            "flat_tech" => StylePreset::FlatTech,
            "line_art" => StylePreset::LineArt,
            "sketch" => StylePreset::Sketch,
            "flat" => StylePreset::Flat,
            _ => StylePreset::None,
        }
    }

    pub fn asset_file(&self) -> Option<&'static str> {
        match self {
            StylePreset::FlatTech => Some("flat_style.png"),
            StylePreset::LineArt => Some("line_art.png"),
            StylePreset::Sketch => Some("sketch.png"),
            StylePreset::Flat | StylePreset::None => None,
        }
    }
}

/// A validated reference image. The original encoded bytes are kept for the
/// wire; decoding them up front proves they are a usable image.
#[derive(Debug, Clone)]
pub struct StyleReference {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
}

impl StyleReference {
    fn decode(bytes: &[u8]) -> std::result::Result<Self, String> {
        let format = image::guess_format(bytes).map_err(|e| e.to_string())?;
        let decoded = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
        Ok(StyleReference {
            bytes: bytes.to_vec(),
            mime_type: format.to_mime_type().to_string(),
            width: decoded.width(),
            height: decoded.height(),
        })
    }
}

/// Decides which single reference image, if any, biases a generation.
#[derive(Debug, Clone)]
pub struct StyleResolver {
    assets_dir: PathBuf,
}

impl StyleResolver {
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
        }
    }

    /// A user-supplied upload always wins over the preset. A malformed upload
    /// is an error; a preset without an asset is a normal no-bias outcome.
    pub fn resolve(
        &self,
        preset_id: &str,
        user_bytes: Option<&[u8]>,
    ) -> Result<Option<StyleReference>> {
        if let Some(bytes) = user_bytes {
            if !bytes.is_empty() {
                return StyleReference::decode(bytes)
                    .map(Some)
                    .map_err(VecgenError::InvalidReferenceImage);
            }
        }

        let preset = StylePreset::from_id(preset_id);
        let file = match preset.asset_file() {
            Some(file) => file,
            None => return Ok(None),
        };

        Ok(self.load_asset(&self.assets_dir.join(file)))
    }

    fn load_asset(&self, path: &Path) -> Option<StyleReference> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => {
                log::debug!("Style asset not found: {}", path.display());
                return None;
            }
        };

        match StyleReference::decode(&bytes) {
            Ok(reference) => Some(reference),
            Err(e) => {
                log::warn!("Skipping undecodable style asset {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use uuid::Uuid;

    fn png_fixture() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 40, 40, 255]));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    fn resolver_without_assets() -> StyleResolver {
        StyleResolver::new("nonexistent_assets_dir")
    }

    #[test]
    fn unknown_preset_resolves_to_no_bias() {
        let resolver = resolver_without_assets();
        for id in ["", "none", "flat", "watercolor", "LINE_ART"] {
            assert!(resolver.resolve(id, None).unwrap().is_none());
        }
    }

    #[test]
    fn missing_asset_resolves_to_no_bias() {
        let resolver = resolver_without_assets();
        assert!(resolver.resolve("line_art", None).unwrap().is_none());
    }

    #[test]
    fn user_upload_wins_over_preset() {
        let resolver = resolver_without_assets();
        let reference = resolver
            .resolve("line_art", Some(&png_fixture()))
            .unwrap()
            .expect("upload should resolve");
        assert_eq!((reference.width, reference.height), (4, 4));
        assert_eq!(reference.mime_type, "image/png");
    }

    #[test]
    fn malformed_upload_is_an_error() {
        let resolver = resolver_without_assets();
        let err = resolver
            .resolve("none", Some(b"definitely not an image"))
            .unwrap_err();
        assert!(matches!(err, VecgenError::InvalidReferenceImage(_)));
    }

    #[test]
    fn empty_upload_falls_through_to_preset() {
        let resolver = resolver_without_assets();
        assert!(resolver.resolve("none", Some(&[])).unwrap().is_none());
    }

    #[test]
    fn preset_asset_resolves_when_present() {
        let dir = env::temp_dir().join(format!("vecgen-style-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("line_art.png"), png_fixture()).unwrap();

        let resolver = StyleResolver::new(&dir);
        let reference = resolver.resolve("line_art", None).unwrap();
        assert!(reference.is_some());

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn corrupt_asset_resolves_to_no_bias() {
        let dir = env::temp_dir().join(format!("vecgen-style-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("sketch.png"), b"not a png").unwrap();

        let resolver = StyleResolver::new(&dir);
        assert!(resolver.resolve("sketch", None).unwrap().is_none());

        fs::remove_dir_all(&dir).ok();
    }
}
