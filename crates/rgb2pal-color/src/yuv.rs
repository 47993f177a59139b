//! RGB to YUV conversion.
//!
//! Colors are compared in YUV (BT.601 luma with analog U/V chroma) because
//! Euclidean distance there follows perceived difference more closely than
//! distance in RGB. Channels stay in the 0..=255 range; nothing is
//! normalized or linearized.
//!
//! ```text
//! | Y |   |  0.299    0.587    0.114   |   | R |
//! | U | = | -0.14713 -0.28886  0.436   | * | G |
//! | V |   |  0.615   -0.51499 -0.10001 |   | B |
//! ```

use crate::ColorResult;
use glam::DVec3;
use rgb2pal_math::{Matrix, MatrixEngine};

/// RGB to YUV transform, row-major.
pub const RGB_TO_YUV: [[f64; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [-0.14713, -0.28886, 0.436],
    [0.615, -0.51499, -0.10001],
];

/// Splits a packed `0xRRGGBB` value into `[r, g, b]`.
///
/// Bits above 24 are ignored.
#[inline]
pub const fn rgb_channels(rgb: u32) -> [u8; 3] {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]
}

/// Converts a packed RGB value to YUV.
///
/// The transform matrix is copied fresh for every call since the engine
/// multiplies in place.
///
/// # Example
///
/// ```rust
/// use rgb2pal_color::rgb_to_yuv;
/// use rgb2pal_color::math::MatrixEngine;
///
/// let mut engine = MatrixEngine::new();
/// let yuv = rgb_to_yuv(&mut engine, 0xffffff).unwrap();
/// assert!((yuv.x - 255.0).abs() < 1e-9);
/// ```
pub fn rgb_to_yuv(engine: &mut MatrixEngine, rgb: u32) -> ColorResult<DVec3> {
    let [r, g, b] = rgb_channels(rgb);
    let mut yuv = Matrix::from_rows(RGB_TO_YUV);
    let color = Matrix::column(&[f64::from(r), f64::from(g), f64::from(b)]);
    engine.multiply(&mut yuv, &color)?;
    Ok(DVec3::new(yuv[(0, 0)], yuv[(1, 0)], yuv[(2, 0)]))
}

/// Euclidean distance between two YUV colors.
#[inline]
pub fn yuv_distance(a: DVec3, b: DVec3) -> f64 {
    a.distance(b)
}
