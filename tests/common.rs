//! Shared test utilities for integration tests.
//!
//! Provides helpers for building scratch directory trees with real PNG
//! files and plain text files.

#![allow(dead_code)]

use anyhow::Result;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Encodes a small gradient image with partial transparency as PNG.
///
/// # Arguments
///
/// * `width`: Image width in pixels
/// * `height`: Image height in pixels
///
/// # Errors
///
/// Returns error if PNG encoding fails
pub fn png_bytes(width: u32, height: u32) -> Result<Vec<u8>> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 16) as u8, (y * 16) as u8, 200, 180])
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Writes a PNG file below root, creating parent directories as needed.
///
/// # Returns
///
/// Full path of the written file
///
/// # Errors
///
/// Returns error if encoding, directory creation, or file write fails
pub fn write_png(root: &Path, path: &str) -> Result<PathBuf> {
    write_file(root, path, &png_bytes(8, 8)?)
}

/// Writes file below root, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&file_path, content)?;
    Ok(file_path)
}
