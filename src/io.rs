//! I/O helpers for masks, contours, and JSON.
//!
//! - `load_mask_image`: read a PNG/JPEG/etc. into an owned scalar mask in [0, 1].
//! - `save_outline_image`: rasterize contour points onto a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::mask::MaskF32;
use crate::types::ContourSet;
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned scalar mask buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct MaskBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl MaskBuffer {
    /// Construct an owned mask buffer given raw values.
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Mask width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Mask height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `MaskF32` view
    pub fn as_view(&self) -> MaskF32<'_> {
        MaskF32 {
            w: self.width,
            h: self.height,
            data: &self.data,
        }
    }
}

/// Load an image from disk as a scalar mask, mapping gray levels to [0, 1].
pub fn load_mask_image(path: &Path) -> Result<MaskBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .into_raw()
        .into_iter()
        .map(|v| f32::from(v) / 255.0)
        .collect();
    Ok(MaskBuffer::new(width, height, data))
}

/// Plot every contour point as a white pixel on a black PNG.
pub fn save_outline_image(
    contours: &ContourSet,
    width: usize,
    height: usize,
    path: &Path,
) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(width as u32, height as u32);
    for contour in contours {
        for p in &contour.points {
            if p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height {
                out.put_pixel(p.x as u32, p.y as u32, Luma([255u8]));
            }
        }
    }
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
