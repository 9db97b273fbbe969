//! Validation of uploaded dish photos before they are sent to the captioner.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};

use crate::error::ImageError;

/// Formats accepted for dish photos.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::Gif,
    ImageFormat::WebP,
];

/// Maximum file size for photos (10MB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// A photo that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedImage {
    pub data: Vec<u8>,
    /// Detected content type, e.g. "image/jpeg".
    pub content_type: String,
}

/// Check the size and format of image bytes and detect the content type.
pub fn validate_image(data: &[u8]) -> Result<String, ImageError> {
    if data.len() > MAX_FILE_SIZE {
        return Err(ImageError::TooLarge {
            size: data.len(),
            max: MAX_FILE_SIZE,
        });
    }

    let reader = ImageReader::new(Cursor::new(data)).with_guessed_format()?;
    let format = reader.format().ok_or(ImageError::UnknownFormat)?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(ImageError::UnsupportedFormat(format));
    }

    Ok(format.to_mime_type().to_string())
}

/// Read a photo from disk and validate it.
pub fn load_image(path: &Path) -> Result<ValidatedImage, ImageError> {
    let data = std::fs::read(path)?;
    let content_type = validate_image(&data)?;
    tracing::debug!(path = %path.display(), %content_type, bytes = data.len(), "Loaded image");
    Ok(ValidatedImage { data, content_type })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png() -> Vec<u8> {
        let mut data = Vec::new();
        image::RgbImage::new(2, 2)
            .write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
            .unwrap();
        data
    }

    #[test]
    fn test_validate_png() {
        assert_eq!(validate_image(&encode_png()).unwrap(), "image/png");
    }

    #[test]
    fn test_load_image() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dish.png");
        std::fs::write(&path, encode_png()).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.content_type, "image/png");
        assert!(!loaded.data.is_empty());
    }

    #[test]
    fn test_validate_invalid_format() {
        let result = validate_image(b"not an image");
        assert!(matches!(result, Err(ImageError::UnknownFormat)));
    }

    #[test]
    fn test_validate_too_large() {
        let data = vec![0u8; MAX_FILE_SIZE + 1];
        assert!(matches!(
            validate_image(&data),
            Err(ImageError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_image(Path::new("/nonexistent/dish.jpg"));
        assert!(matches!(result, Err(ImageError::Read(_))));
    }
}
