use std::path::Path;

use image::{DynamicImage, GrayImage, ImageError, ImageReader};

use crate::error::PipelineError;

/// Decode the image at `path`, detecting the format from its contents first
/// and its extension second.
pub fn decode(path: &Path) -> Result<DynamicImage, PipelineError> {
    let decode_error = |source: ImageError| PipelineError::DecodeError {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    if image.width() == 0 || image.height() == 0 {
        return Err(PipelineError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }

    Ok(image)
}

/// Encode `image` to `path` in the format implied by its extension.
pub fn encode(image: &GrayImage, path: &Path) -> Result<(), PipelineError> {
    image.save(path).map_err(|source| PipelineError::EncodeError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    #[test]
    fn test_decode_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = decode(&dir.path().join("does-not-exist.png"));
        assert!(matches!(result, Err(PipelineError::DecodeError { .. })));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noise.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let result = decode(&path);
        assert!(matches!(result, Err(PipelineError::DecodeError { .. })));
    }

    #[test]
    fn test_decode_sniffs_misnamed_file() {
        let dir = tempfile::tempdir().unwrap();
        let png = dir.path().join("photo.png");
        RgbImage::from_pixel(4, 3, Rgb([10, 20, 30])).save(&png).unwrap();
        let misnamed = dir.path().join("photo.dat");
        std::fs::copy(&png, &misnamed).unwrap();

        let image = decode(&misnamed).unwrap();
        assert_eq!((image.width(), image.height()), (4, 3));
    }

    #[test]
    fn test_encode_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let image = GrayImage::from_pixel(2, 2, Luma([255]));

        let result = encode(&image, &dir.path().join("out.notaformat"));
        assert!(matches!(result, Err(PipelineError::EncodeError { .. })));
    }

    #[test]
    fn test_encode_then_decode_keeps_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let image = GrayImage::from_fn(3, 2, |x, _| Luma([if x == 1 { 0 } else { 255 }]));

        encode(&image, &path).unwrap();
        let decoded = decode(&path).unwrap().to_luma8();
        assert_eq!(decoded, image);
    }
}
