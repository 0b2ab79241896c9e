//! Documentation preparation utilities.
//!
//! Rewrites inline code markers in markdown to bold emphasis and converts
//! PNG image trees to JPEG.

mod config;
mod convert;
mod markers;
mod util;
mod walker;

pub use config::{Command, Config, DEFAULT_OUTPUT};
pub use convert::{ConvertError, DEFAULT_JPEG_QUALITY, png_to_jpeg};
pub use markers::{Mode, Rewrite, rewrite, rewrite_markers};
pub use util::{format_file_size, format_size_change};
pub use walker::{
    ConversionReport, ConvertedFile, FailedFile, FileOutcome, convert_directory,
    convert_directory_with, is_png, jpeg_path_for,
};
