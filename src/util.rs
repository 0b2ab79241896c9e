//! Utility functions for docprep

/// Formats byte count as human readable file size
///
/// Converts byte count to appropriate unit (bytes, KB, MB) with two decimal
/// places for KB and MB. Uses binary prefixes.
///
/// # Arguments
///
/// * `bytes`: File size in bytes
///
/// # Returns
///
/// Formatted string like "512 bytes", "1.50 KB", or "2.00 MB"
pub fn format_file_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Formats size change from source to target as a signed percentage
///
/// Returns "n/a" when the source is empty.
pub fn format_size_change(source: usize, target: usize) -> String {
    if source == 0 {
        return "n/a".to_string();
    }

    let change = (target as f64 - source as f64) / source as f64 * 100.0;
    format!("{:+.1}%", change)
}
