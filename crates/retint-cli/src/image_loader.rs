//! Image decoding and PNG export.

use std::path::Path;

use retint_core::{PixelBuffer, RetintError};

/// Load an image from disk as 8-bit RGBA.
///
/// Supports the formats enabled in the `image` crate (PNG, JPEG, TIFF, ...).
pub fn load_image(path: &Path) -> Result<PixelBuffer, ImageLoadError> {
    let img = image::open(path).map_err(ImageLoadError::Decode)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(PixelBuffer::from_rgba_bytes(width, height, rgba.as_raw())?)
}

/// Write a buffer as PNG, creating parent directories as needed.
pub fn save_png(path: &Path, buffer: &PixelBuffer) -> Result<(), ImageLoadError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    image::save_buffer_with_format(
        path,
        buffer.as_bytes(),
        buffer.width(),
        buffer.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(ImageLoadError::Encode)
}

/// Name used for the image in logs and export file names: the file stem.
pub fn subject_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Errors that can occur while reading or writing images.
#[derive(Debug, thiserror::Error)]
pub enum ImageLoadError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("invalid pixel buffer: {0}")]
    Buffer(#[from] RetintError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_roundtrip_through_disk() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("out.png");
        let buffer = PixelBuffer::new(
            2,
            1,
            vec![[10, 20, 30, 255], [200, 100, 0, 128]],
        )
        .expect("valid buffer");

        save_png(&path, &buffer).expect("png written");
        let loaded = load_image(&path).expect("png read back");
        assert_eq!(loaded, buffer);
    }

    #[test]
    fn test_load_rejects_non_images() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not a png").expect("write file");
        assert!(matches!(load_image(&path), Err(ImageLoadError::Decode(_))));
    }

    #[test]
    fn test_subject_is_file_stem() {
        assert_eq!(subject_from_path(Path::new("/photos/beach.day.jpg")), "beach.day");
        assert_eq!(subject_from_path(Path::new("")), "");
    }
}
