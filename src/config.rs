// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Canvas presets.
//!
//! A preset fixes the image size, the base palette, blend ramps between palette entries
//! and the index the image is cleared to. Presets are JSON:
//!
//! ```json
//! {
//!   "width": 64, "height": 32,
//!   "palette": [[0, 0, 0], [255, 255, 255]],
//!   "ramps": [{ "from": 0, "to": 1, "steps": 4 }],
//!   "background": 0
//! }
//! ```
//!
//! A ramp appends `steps` entries blended from `from` toward `to`, at positions
//! `255 * i / (steps + 1)` for i in 1..=steps, so neither end colour is repeated.
//! Reading the JSON from disk is left to the caller.

use crate::render::image::{ImageError, IndexedImage};
use crate::render::palette::{PaletteError, Rgb};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum ConfigError {
    /// Malformed JSON or missing fields
    Parse(serde_json::Error),
    Image(ImageError),
    Palette(PaletteError),
    /// A ramp or the background names a palette entry that does not exist yet
    BadIndex(u8),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Image(e) => write!(f, "Config image error: {}", e),
            ConfigError::Palette(e) => write!(f, "Config palette error: {}", e),
            ConfigError::BadIndex(i) => write!(f, "Config names missing palette entry {}", i),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Image(e) => Some(e),
            ConfigError::Palette(e) => Some(e),
            ConfigError::BadIndex(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Parse(err)
    }
}

impl From<ImageError> for ConfigError {
    fn from(err: ImageError) -> ConfigError {
        ConfigError::Image(err)
    }
}

impl From<PaletteError> for ConfigError {
    fn from(err: PaletteError) -> ConfigError {
        ConfigError::Palette(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RampConfig {
    pub from: u8,
    pub to: u8,
    pub steps: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub palette: Vec<[u8; 3]>,
    #[serde(default)]
    pub ramps: Vec<RampConfig>,
    #[serde(default)]
    pub background: u8,
}

const EMBEDDED_CANVAS: &str = include_str!("../assets/canvas.json");

impl CanvasConfig {
    /// Preset shipped with the crate, see assets/canvas.json
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_CANVAS)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Palette entries the preset produces: base colours then every ramp step.
    pub fn palette_len(&self) -> usize {
        self.palette.len() + self.ramps.iter().map(|r| r.steps as usize).sum::<usize>()
    }

    /// Creates the image, fills its palette and clears it to the background index.
    pub fn build(&self) -> Result<IndexedImage, ConfigError> {
        let mut img = IndexedImage::new(self.width, self.height)?;
        for c in &self.palette {
            let c = Rgb::from(*c);
            img.palette_add(c.r, c.g, c.b)?;
        }
        for ramp in &self.ramps {
            let count = img.palette().len();
            for idx in [ramp.from, ramp.to] {
                if idx as usize >= count {
                    return Err(ConfigError::BadIndex(idx));
                }
            }
            let steps = ramp.steps as u32;
            for i in 1..=steps {
                let pos = (255 * i / (steps + 1)) as u8;
                img.palette_add_blend(ramp.from, ramp.to, pos)?;
            }
        }
        if !img.palette().is_empty() && self.background as usize >= img.palette().len() {
            return Err(ConfigError::BadIndex(self.background));
        }
        img.clear(self.background);
        info!(
            "canvas {}x{} ready, {} palette entries",
            self.width,
            self.height,
            img.palette().len()
        );
        Ok(img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_preset_builds() {
        let cfg = CanvasConfig::embedded().unwrap();
        assert_eq!((cfg.width, cfg.height), (160, 48));
        let img = cfg.build().unwrap();
        assert_eq!(img.width() as usize, cfg.width);
        assert_eq!(img.palette().len(), cfg.palette_len());
        assert!(img.pixels().iter().all(|&p| p == cfg.background));
    }

    #[test]
    fn test_ramp_positions() {
        let cfg = CanvasConfig::from_json(
            r#"{"width": 2, "height": 2,
                "palette": [[0, 0, 0], [255, 255, 255]],
                "ramps": [{"from": 0, "to": 1, "steps": 4}],
                "background": 1}"#,
        )
        .unwrap();
        let img = cfg.build().unwrap();
        let greys: Vec<u8> = img.palette().iter().skip(2).map(|c| c.r).collect();
        assert_eq!(greys, vec![51, 102, 153, 204]);
        assert_eq!(img.pixels(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_missing_fields_default() {
        let cfg = CanvasConfig::from_json(r#"{"width": 3, "height": 1}"#).unwrap();
        assert!(cfg.palette.is_empty());
        assert_eq!(cfg.background, 0);
        assert_eq!(cfg.build().unwrap().size(), 3);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            CanvasConfig::from_json("{\"width\": 3}"),
            Err(ConfigError::Parse(_))
        ));
        let zero = CanvasConfig::from_json(r#"{"width": 0, "height": 1}"#).unwrap();
        assert!(matches!(zero.build(), Err(ConfigError::Image(ImageError::ZeroSize { .. }))));
        let bad = CanvasConfig::from_json(
            r#"{"width": 1, "height": 1, "palette": [[1, 2, 3]],
                "ramps": [{"from": 0, "to": 5, "steps": 1}]}"#,
        )
        .unwrap();
        assert!(matches!(bad.build(), Err(ConfigError::BadIndex(5))));
        let bg = CanvasConfig::from_json(
            r#"{"width": 1, "height": 1, "palette": [[1, 2, 3]], "background": 1}"#,
        )
        .unwrap();
        assert!(matches!(bg.build(), Err(ConfigError::BadIndex(1))));
    }

    #[test]
    fn test_palette_overflow() {
        let cfg = CanvasConfig {
            width: 1,
            height: 1,
            palette: vec![[0, 0, 0], [9, 9, 9]],
            ramps: vec![RampConfig { from: 0, to: 1, steps: 255 }],
            background: 0,
        };
        assert!(matches!(cfg.build(), Err(ConfigError::Palette(PaletteError::Full))));
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = CanvasConfig::embedded().unwrap();
        let back = CanvasConfig::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }
}
