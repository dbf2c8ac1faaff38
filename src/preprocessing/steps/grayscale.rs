use crate::error::PipelineError;
use image::{DynamicImage, GrayImage, Luma};

/// BT.601 luma weights in 14-bit fixed point (they sum to 1 << 14)
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;

/// Convert a decoded color image to single-channel luma.
/// Alpha is ignored; grayscale inputs pass through unchanged.
pub fn apply(image: DynamicImage) -> Result<GrayImage, PipelineError> {
    let rgb = image.into_rgb8();
    Ok(GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Luma([luma(r, g, b)])
    }))
}

fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted =
        r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT + (1 << (SHIFT - 1));
    (weighted >> SHIFT) as u8
}
