use crate::error::PipelineError;
use image::{
    imageops::{self, FilterType},
    GrayImage,
};

/// Output size for an image of `width`x`height` scaled to `target_width`,
/// keeping the aspect ratio. Height is rounded to the nearest pixel and is
/// never less than one.
pub fn target_dimensions(
    width: u32,
    height: u32,
    target_width: u32,
) -> Result<(u32, u32), PipelineError> {
    if width == 0 || height == 0 {
        return Err(PipelineError::InvalidDimensions { width, height });
    }

    // round(target_width * height / width) in integers
    let scaled = (2 * target_width as u64 * height as u64 + width as u64) / (2 * width as u64);
    let new_height = u32::try_from(scaled)
        .ok()
        .filter(|&h| target_width.checked_mul(h).is_some())
        .ok_or(PipelineError::InvalidDimensions { width, height })?
        .max(1);

    Ok((target_width, new_height))
}

/// Resample to exactly `width`x`height` (no aspect fitting here; the caller
/// computes the target from the original dimensions)
pub fn apply(
    image: GrayImage,
    (width, height): (u32, u32),
    filter: FilterType,
) -> Result<GrayImage, PipelineError> {
    if image.dimensions() == (width, height) {
        return Ok(image);
    }
    Ok(imageops::resize(&image, width, height, filter))
}
