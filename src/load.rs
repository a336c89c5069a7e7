use std::io;
use std::path::Path;

use eframe::egui;
use image::imageops::FilterType;
use thiserror::Error;

/* ───────────────────────── fixed dimensions ─────────────────────── */

/// Thumbnail size in the grid (width, height).
pub const THUMB_SIZE: (u32, u32) = (220, 135);

/// Image size inside a detail window (width, height).
pub const DETAIL_SIZE: (u32, u32) = (800, 600);

/// Extensions offered by the file picker.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/* ───────────────────────── decoding ─────────────────────────────── */

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("open failed: {0}")]
    Open(#[from] io::Error),
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode `path` and resize it to exactly `size`. Aspect ratio is not
/// preserved; every grid cell and every detail window has fixed dimensions.
pub fn load_scaled(path: &Path, size: (u32, u32)) -> Result<egui::ColorImage, LoadError> {
    let reader = image::ImageReader::open(path)?.with_guessed_format()?;
    let rgba = reader
        .decode()?
        .resize_exact(size.0, size.1, FilterType::Triangle)
        .to_rgba8();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [rgba.width() as usize, rgba.height() as usize],
        rgba.as_raw(),
    ))
}

/* ───────────────────────── tests ────────────────────────────────── */

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_png(dir: &Path, name: &str, w: u32, h: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(w, h, Rgba([120, 40, 200, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn scales_to_the_exact_target_size() {
        let dir = tempfile::tempdir().unwrap();
        // aspect ratio deliberately far from 220:135
        let path = write_png(dir.path(), "wide.png", 64, 16);
        let img = load_scaled(&path, THUMB_SIZE).unwrap();
        assert_eq!(img.size, [THUMB_SIZE.0 as usize, THUMB_SIZE.1 as usize]);
    }

    #[test]
    fn detail_size_is_independent_of_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "tall.png", 8, 32);
        let img = load_scaled(&path, DETAIL_SIZE).unwrap();
        assert_eq!(img.size, [DETAIL_SIZE.0 as usize, DETAIL_SIZE.1 as usize]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load_scaled(Path::new("no/such/file.png"), THUMB_SIZE).unwrap_err();
        assert!(matches!(err, LoadError::Open(_)));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not_an_image.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = load_scaled(&path, THUMB_SIZE).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}
