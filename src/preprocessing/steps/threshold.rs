use crate::error::PipelineError;
use crate::preprocessing::kernel::gaussian_filter;
use image::{GrayImage, Luma};

/// Adaptive thresholding against a Gaussian-weighted local mean
///
/// For each pixel, output = max_value if pixel > mean(block) - offset, else 0,
/// where mean(block) is the Gaussian-weighted mean of the `block_size`
/// neighbourhood, with the edge pixels repeated past the border. The mean is
/// rounded to 8 bits so the comparison stays in integers.
pub fn apply(
    image: GrayImage,
    block_size: u32,
    offset: i32,
    max_value: u8,
) -> Result<GrayImage, PipelineError> {
    if block_size <= 1 || block_size % 2 == 0 {
        return Err(PipelineError::InvalidConfig(format!(
            "threshold block size must be odd and greater than 1, got {}",
            block_size
        )));
    }

    let mean = gaussian_filter(&image, block_size);

    Ok(GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y).0[0] as i32;
        let local_mean = mean.get_pixel(x, y).0[0] as i32;
        if pixel - local_mean > -offset {
            Luma([max_value])
        } else {
            Luma([0u8])
        }
    }))
}
