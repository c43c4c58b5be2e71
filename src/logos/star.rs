//! # Star Logo
//!
//! A 5-pointed star, also used as the end ornament of the banner.

use super::LogoRaster;
use std::f32::consts::{PI, TAU};

/// Star logo generator.
pub struct Star;

impl Star {
    /// Logo size in dots (width and height).
    pub const SIZE: u16 = 96;

    /// Generate the star logo raster.
    pub fn raster() -> LogoRaster {
        let center = Self::SIZE as f32 / 2.0;
        let outer = center * 0.9;
        let inner = outer * 0.382;

        LogoRaster::from_fn(Self::SIZE, Self::SIZE, |x, y| {
            is_inside_star(x as f32 - center, y as f32 - center, outer, inner)
        })
    }
}

/// Whether a point relative to the star's center lies inside it.
///
/// The edge radius is interpolated between the outer points and the inner
/// valleys by angle, with one point straight up.
pub(super) fn is_inside_star(dx: f32, dy: f32, outer_r: f32, inner_r: f32) -> bool {
    let dist = (dx * dx + dy * dy).sqrt();
    if dist > outer_r {
        return false;
    }

    let sector = TAU / 5.0;
    let half = sector / 2.0;
    let local = (dy.atan2(dx) + PI / 2.0).rem_euclid(TAU).rem_euclid(sector);

    let edge = if local < half {
        let t = local / half;
        outer_r * (1.0 - t) + inner_r * t
    } else {
        let t = (local - half) / half;
        inner_r * (1.0 - t) + outer_r * t
    };

    dist <= edge
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_dimensions() {
        let raster = Star::raster();
        assert_eq!(raster.width, 96);
        assert_eq!(raster.height, 96);
        assert_eq!(raster.data.len(), 12 * 96);
    }

    #[test]
    fn test_star_coverage() {
        let raster = Star::raster();
        let total = 96 * 96;
        let black = raster.black_pixels();
        assert!(black > total / 5, "star has too few pixels");
        assert!(black < total * 3 / 4, "star has too many pixels");
    }

    #[test]
    fn test_star_center_and_corner() {
        let raster = Star::raster();
        assert!(raster.pixel(48, 48));
        assert!(!raster.pixel(0, 0));
    }

    #[test]
    fn test_point_is_up() {
        // Straight up reaches the outer radius; straight down is a valley.
        assert!(is_inside_star(0.0, -8.5, 10.0, 4.0));
        assert!(!is_inside_star(0.0, 8.5, 10.0, 4.0));
    }
}
