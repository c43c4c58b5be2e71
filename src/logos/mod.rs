//! # Logo Registry
//!
//! Every card on a sheet carries the same logo, centered above the text.
//! The logo is either one of the built-in procedural rasters below or an
//! image file decoded with the `image` crate.
//!
//! ## Usage
//!
//! ```
//! use placard::logos;
//!
//! for logo in logos::all() {
//!     println!("{} - {}", logo.key, logo.name);
//! }
//!
//! let banner = logos::resolve("banner")?;
//! assert_eq!(banner.width, 400);
//! # Ok::<(), placard::LabelError>(())
//! ```

pub mod banner;
pub mod star;

pub use banner::Banner;
pub use star::Star;

use std::path::Path;

use crate::error::{LabelError, Result};

/// Key of the logo used when none is configured.
pub const DEFAULT_KEY: &str = "banner";

/// Raster data for a built-in logo.
///
/// Data is packed bits (1 bit per pixel, MSB first, 1 = black).
/// Length is `ceil(width/8) * height`.
#[derive(Debug, Clone)]
pub struct LogoRaster {
    pub width: u16,
    pub height: u16,
    pub data: Vec<u8>,
}

impl LogoRaster {
    /// Build a raster by evaluating `is_black` at every pixel.
    pub fn from_fn(width: u16, height: u16, is_black: impl Fn(u16, u16) -> bool) -> Self {
        let width_bytes = (width as usize).div_ceil(8);
        let mut data = vec![0u8; width_bytes * height as usize];

        for y in 0..height {
            for x in 0..width {
                if is_black(x, y) {
                    let byte_idx = y as usize * width_bytes + x as usize / 8;
                    data[byte_idx] |= 1 << (7 - (x % 8));
                }
            }
        }

        Self {
            width,
            height,
            data,
        }
    }

    /// Whether the pixel at (x, y) is black.
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        let width_bytes = (self.width as usize).div_ceil(8);
        let byte = self.data[y as usize * width_bytes + x as usize / 8];
        (byte >> (7 - (x % 8))) & 1 == 1
    }

    pub fn black_pixels(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

/// Pixel payload of a logo ready for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoPixels {
    /// Packed 1-bit, MSB first, 1 = black.
    Mono(Vec<u8>),
    /// 8-bit RGB triples, row-major.
    Rgb(Vec<u8>),
}

/// The logo drawn on every card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    /// Identity used to embed the image once per document.
    pub key: String,
    pub width: u32,
    pub height: u32,
    pub pixels: LogoPixels,
}

impl LogoImage {
    pub fn from_raster(key: impl Into<String>, raster: LogoRaster) -> Self {
        Self {
            key: key.into(),
            width: raster.width as u32,
            height: raster.height as u32,
            pixels: LogoPixels::Mono(raster.data),
        }
    }

    /// Decode an encoded image (PNG, JPEG, ...).
    pub fn from_bytes(key: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| LabelError::Image(format!("Failed to decode logo: {}", e)))?;
        let rgb = img.to_rgb8();
        if rgb.width() == 0 || rgb.height() == 0 {
            return Err(LabelError::Image("Logo has no pixels".to_string()));
        }

        Ok(Self {
            key: key.into(),
            width: rgb.width(),
            height: rgb.height(),
            pixels: LogoPixels::Rgb(rgb.into_raw()),
        })
    }

    /// Load a logo from an image file.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(path.display().to_string(), &bytes)
    }

    /// Height over width.
    pub fn aspect_ratio(&self) -> f32 {
        self.height as f32 / self.width as f32
    }
}

/// A built-in logo in the registry.
pub struct Logo {
    pub key: &'static str,
    /// Human-readable name
    pub name: &'static str,
    raster_fn: fn() -> LogoRaster,
}

impl Logo {
    pub const fn new(key: &'static str, name: &'static str, raster_fn: fn() -> LogoRaster) -> Self {
        Self {
            key,
            name,
            raster_fn,
        }
    }

    pub fn raster(&self) -> LogoRaster {
        (self.raster_fn)()
    }

    pub fn image(&self) -> LogoImage {
        LogoImage::from_raster(self.key, self.raster())
    }
}

/// All registered logos.
static LOGOS: &[Logo] = &[
    Logo::new("banner", "double-ruled banner", Banner::raster),
    Logo::new("star", "five-pointed star", Star::raster),
];

/// Get all registered logos.
pub fn all() -> &'static [Logo] {
    LOGOS
}

/// Look up a logo by key.
pub fn by_key(key: &str) -> Option<&'static Logo> {
    LOGOS.iter().find(|logo| logo.key == key)
}

/// The logo used when none is configured.
pub fn default_logo() -> LogoImage {
    LogoImage::from_raster(DEFAULT_KEY, Banner::raster())
}

/// Resolve a registry key, or else treat `name` as an image file path.
pub fn resolve(name: &str) -> Result<LogoImage> {
    match by_key(name) {
        Some(logo) => Ok(logo.image()),
        None => LogoImage::load(Path::new(name)),
    }
}
