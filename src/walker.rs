//! Recursive PNG to JPEG directory conversion.
//!
//! Walks a directory tree in lexical order and replaces every `.png` file
//! with a sibling `.jpg`. Failures on a single file are recorded and the walk
//! continues; failing to list a directory aborts the whole walk.

use anyhow::Result;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::convert::{ConvertError, png_to_jpeg};

/// Extension selecting files for conversion (case sensitive)
const PNG_EXTENSION: &str = "png";

/// Extension given to converted files
const JPEG_EXTENSION: &str = "jpg";

/// Successfully converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    /// Original PNG path, removed after conversion
    pub source: PathBuf,
    /// Written JPEG path
    pub target: PathBuf,
    /// PNG size in bytes
    pub source_size: usize,
    /// JPEG size in bytes
    pub target_size: usize,
}

/// File skipped because one conversion step failed.
#[derive(Debug)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: ConvertError,
}

/// Outcome for one PNG file, reported as the walk reaches it.
#[derive(Debug)]
pub enum FileOutcome {
    Converted(ConvertedFile),
    Failed(FailedFile),
}

/// Summary of a directory conversion.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
}

impl ConversionReport {
    /// Number of PNG files the walk attempted.
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Converted(file) => self.converted.push(file),
            FileOutcome::Failed(file) => self.failed.push(file),
        }
    }
}

/// Returns true when path has exactly the `png` extension.
///
/// Matching is case sensitive: `photo.PNG` is left alone.
pub fn is_png(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(PNG_EXTENSION))
}

/// Returns sibling JPEG path with the same file stem.
///
/// # Examples
///
/// ```
/// use docprep::jpeg_path_for;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     jpeg_path_for(Path::new("shots/screen.png")),
///     PathBuf::from("shots/screen.jpg")
/// );
/// ```
pub fn jpeg_path_for(png: &Path) -> PathBuf {
    png.with_extension(JPEG_EXTENSION)
}

/// Converts every PNG under root to JPEG and deletes the originals.
///
/// # Errors
///
/// Returns error if a directory cannot be listed. Per-file failures are
/// collected in the report instead.
pub fn convert_directory(root: &Path, quality: u8) -> Result<ConversionReport> {
    convert_directory_with(root, quality, |_| {})
}

/// Converts every PNG under root, calling `on_outcome` after each file.
///
/// Lets callers stream progress while the walk runs. Outcomes delivered
/// before a traversal error are not rolled back.
///
/// # Arguments
///
/// * `root`: Directory to walk recursively
/// * `quality`: JPEG quality (1-100)
/// * `on_outcome`: Called once per PNG file, in walk order
///
/// # Errors
///
/// Returns error if a directory cannot be listed or an entry type cannot
/// be determined.
pub fn convert_directory_with<F>(
    root: &Path,
    quality: u8,
    mut on_outcome: F,
) -> Result<ConversionReport>
where
    F: FnMut(&FileOutcome),
{
    let mut report = ConversionReport::default();

    // Symlinks are yielded as links, never as files or directories
    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry in walker {
        let entry = entry.map_err(|e| {
            let dir = e.path().unwrap_or(root).display().to_string();
            anyhow::Error::new(e).context(format!("Failed to read directory: {}", dir))
        })?;

        if !entry.file_type().is_file() || !is_png(entry.path()) {
            continue;
        }

        let path = entry.into_path();
        let outcome = match convert_file(&path, quality) {
            Ok(converted) => FileOutcome::Converted(converted),
            Err(error) => FileOutcome::Failed(FailedFile { path, error }),
        };

        on_outcome(&outcome);
        report.record(outcome);
    }

    Ok(report)
}

fn convert_file(path: &Path, quality: u8) -> Result<ConvertedFile, ConvertError> {
    let bytes = fs::read(path).map_err(ConvertError::Read)?;
    let jpeg = png_to_jpeg(&bytes, quality)?;

    let target = jpeg_path_for(path);
    replace_source(path, &target, &jpeg)?;

    Ok(ConvertedFile {
        source: path.to_path_buf(),
        target,
        source_size: bytes.len(),
        target_size: jpeg.len(),
    })
}

/// Writes the JPEG, then removes the source. A written JPEG is left in place
/// when removal fails.
fn replace_source(source: &Path, target: &Path, jpeg: &[u8]) -> Result<(), ConvertError> {
    fs::write(target, jpeg).map_err(ConvertError::Write)?;
    fs::remove_file(source).map_err(ConvertError::Delete)
}
