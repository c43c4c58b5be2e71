//! # Banner Logo
//!
//! The default card header: a wide double-ruled frame with a star at each
//! end and a diamond in the middle. Its 5:1 aspect keeps the header short,
//! leaving most of the card for text.
//!
//! ```text
//! ┌══════════════════════════════════════════════┐
//! │ ★ ───────────────── ◆ ───────────────── ★    │
//! └══════════════════════════════════════════════┘
//! ```

use super::LogoRaster;
use super::star::is_inside_star;

/// Banner logo generator.
pub struct Banner;

impl Banner {
    pub const WIDTH: u16 = 400;
    pub const HEIGHT: u16 = 80;

    /// Outer frame thickness in dots.
    const FRAME: u16 = 3;
    /// Inset of the thin inner rule.
    const INSET: u16 = 7;

    /// Generate the banner raster.
    pub fn raster() -> LogoRaster {
        LogoRaster::from_fn(Self::WIDTH, Self::HEIGHT, is_banner_pixel)
    }
}

fn is_banner_pixel(x: u16, y: u16) -> bool {
    let (w, h) = (Banner::WIDTH, Banner::HEIGHT);

    // Thick outer frame
    if x < Banner::FRAME || y < Banner::FRAME || x >= w - Banner::FRAME || y >= h - Banner::FRAME {
        return true;
    }

    // One-dot inner rule
    let inset = Banner::INSET;
    let on_inner = ((x == inset || x == w - 1 - inset) && (inset..h - inset).contains(&y))
        || ((y == inset || y == h - 1 - inset) && (inset..w - inset).contains(&x));
    if on_inner {
        return true;
    }

    let cy = h as f32 / 2.0;
    let fx = x as f32 + 0.5;
    let fy = y as f32 + 0.5;

    // End stars
    let star_r = h as f32 * 0.3;
    for cx in [h as f32 / 2.0 + 4.0, w as f32 - h as f32 / 2.0 - 4.0] {
        if is_inside_star(fx - cx, fy - cy, star_r, star_r * 0.382) {
            return true;
        }
    }

    // Center diamond
    let cx = w as f32 / 2.0;
    let diamond = h as f32 * 0.18;
    if (fx - cx).abs() + (fy - cy).abs() <= diamond {
        return true;
    }

    // Connecting rules between stars and diamond
    let rule_start = h as f32 + 8.0;
    let rule_end = w as f32 - h as f32 - 8.0;
    (fy - cy).abs() <= 1.0 && fx >= rule_start && fx <= rule_end && (fx - cx).abs() > diamond + 6.0
}
