use image::{GrayImage, ImageBuffer, Luma};
use imageproc::filter::separable_filter_equal;

/// Standard deviation derived from the kernel size when none is given
pub fn auto_sigma(ksize: u32) -> f64 {
    0.3 * ((ksize as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Build a normalized 1-D Gaussian kernel of `ksize` taps.
///
/// A non-positive `sigma` is replaced by [`auto_sigma`].
pub fn gaussian_kernel(ksize: u32, sigma: f64) -> Vec<f32> {
    let sigma = if sigma > 0.0 { sigma } else { auto_sigma(ksize) };
    let center = (ksize as f64 - 1.0) / 2.0;
    let scale = -0.5 / (sigma * sigma);

    let weights: Vec<f64> = (0..ksize)
        .map(|i| {
            let d = i as f64 - center;
            (scale * d * d).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();

    weights.iter().map(|w| (w / sum) as f32).collect()
}

/// Convolve with a `ksize`x`ksize` Gaussian (auto sigma), rounding the
/// result back to 8 bits. Pixels outside the image repeat the edge pixel.
///
/// Filtering runs on an `f32` copy so neither the intermediate pass nor the
/// final value is truncated.
pub fn gaussian_filter(image: &GrayImage, ksize: u32) -> GrayImage {
    let kernel = gaussian_kernel(ksize, 0.0);
    let samples: ImageBuffer<Luma<f32>, Vec<f32>> =
        ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
            Luma([image.get_pixel(x, y).0[0] as f32])
        });

    let filtered = separable_filter_equal(&samples, &kernel);

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([quantize(filtered.get_pixel(x, y).0[0])])
    })
}

/// Round and saturate a filtered sample to 8 bits
fn quantize(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_sigma_for_common_sizes() {
        assert!((auto_sigma(5) - 1.1).abs() < 1e-9);
        assert!((auto_sigma(11) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_kernel_is_normalized_and_symmetric() {
        let kernel = gaussian_kernel(11, 0.0);
        assert_eq!(kernel.len(), 11);

        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);

        for i in 0..kernel.len() / 2 {
            assert!((kernel[i] - kernel[kernel.len() - 1 - i]).abs() < 1e-7);
        }
        // Peak at the center
        assert!(kernel[5] > kernel[4]);
        assert!(kernel[4] > kernel[0]);
    }

    #[test]
    fn test_uniform_image_is_unchanged() {
        let img = GrayImage::from_pixel(7, 3, Luma([200]));
        let filtered = gaussian_filter(&img, 5);
        assert!(filtered.pixels().all(|p| p.0[0] == 200));
    }

    #[test]
    fn test_filter_spreads_a_point() {
        let mut img = GrayImage::new(9, 9);
        img.put_pixel(4, 4, Luma([255]));

        let filtered = gaussian_filter(&img, 5);
        let at = |x: u32, y: u32| filtered.get_pixel(x, y).0[0];

        assert!(at(4, 4) < 255);
        assert!(at(4, 4) > at(5, 4));
        assert!(at(5, 4) > 0);
        // Outside the 5x5 support
        assert_eq!(at(7, 4), 0);
    }

    #[test]
    fn test_border_repeats_edge_pixel() {
        // Dark left edge column, bright elsewhere: the edge column only sees
        // itself beyond the border, so it stays darker than its neighbour
        let img = GrayImage::from_fn(9, 3, |x, _| Luma([if x == 0 { 0 } else { 200 }]));
        let filtered = gaussian_filter(&img, 5);
        // Taps at -2, -1, 0 all read the dark column: 200 * (w3 + w4)
        let kernel = gaussian_kernel(5, 0.0);
        let expected = (200.0 * (kernel[3] + kernel[4])).round() as u8;
        assert_eq!(filtered.get_pixel(0, 1).0[0], expected);
    }

    #[test]
    fn test_quantize_saturates() {
        assert_eq!(quantize(-3.0), 0);
        assert_eq!(quantize(12.4), 12);
        assert_eq!(quantize(12.6), 13);
        assert_eq!(quantize(300.0), 255);
    }
}
