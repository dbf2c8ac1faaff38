use crate::error::PipelineError;
use crate::preprocessing::kernel::gaussian_filter;
use image::GrayImage;

/// Smooth with a `ksize`x`ksize` Gaussian whose sigma follows from the size
pub fn apply(image: GrayImage, ksize: u32) -> Result<GrayImage, PipelineError> {
    Ok(gaussian_filter(&image, ksize))
}
