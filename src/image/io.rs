//! I/O helpers for the demo binary and diagnostic sinks.
//!
//! - `load_color_image`: read a PNG/JPEG/etc. into an owned interleaved BGR buffer.
//! - `save_grayscale_u8`: write a [`GrayImageU8`] to a grayscale PNG.
//! - `save_rgb_u8`: write an interleaved RGB buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ColorImageU8, GrayImageU8};
use image::{GrayImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned interleaved BGR buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct ColorImageBuf {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ColorImageBuf {
    /// Construct an owned color buffer given raw interleaved BGR bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height * 3,
            "buffer length must match dimensions"
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only [`ColorImageU8`] view.
    pub fn as_view(&self) -> ColorImageU8<'_> {
        ColorImageU8 {
            w: self.width,
            h: self.height,
            stride: 3 * self.width,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to an interleaved BGR buffer.
pub fn load_color_image(path: &Path) -> Result<ColorImageBuf, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut data = img.into_raw();
    for px in data.chunks_exact_mut(3) {
        px.swap(0, 2);
    }
    Ok(ColorImageBuf::new(width, height, data))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(image: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out = GrayImage::from_raw(image.w as u32, image.h as u32, image.data.clone())
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an interleaved RGB buffer to a PNG.
pub fn save_rgb_u8(width: usize, height: usize, data: Vec<u8>, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out = RgbImage::from_raw(width as u32, height as u32, data)
        .ok_or_else(|| "Failed to create image buffer".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
