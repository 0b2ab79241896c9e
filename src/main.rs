use anyhow::{Context, Result};
use docprep::{Command, Config, ConversionReport, FileOutcome};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads markdown from a file, or from standard input when no path is given.
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read standard input")?;
            Ok(buffer)
        }
    }
}

/// Writes rewritten markdown, replacing any existing file.
fn write_output(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)
        .with_context(|| format!("Failed to write output file {}", path.display()))
}

/// Rewrites markers in the input, persists the result and echoes it.
///
/// A failed write is reported as a warning; the rewritten text is still
/// printed so the run is never lost.
///
/// # Arguments
///
/// * `input`: Markdown file, or `None` for standard input
/// * `output`: File receiving the rewritten text
/// * `no_write`: Skip writing `output` and only print
///
/// # Returns
///
/// Rewritten text that was printed
fn run_bold(input: Option<&Path>, output: &Path, no_write: bool) -> Result<String> {
    let text = read_input(input)?;
    let rewrite = docprep::rewrite(&text);

    if !rewrite.is_balanced() {
        eprintln!("Warning: Input ends inside an unterminated code fence");
    }

    if !no_write && let Err(e) = write_output(output, &rewrite.text) {
        eprintln!("Warning: {:#}", e);
    }

    println!("{}", rewrite.text);
    Ok(rewrite.text)
}

/// Joins an error and its sources into one line.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut line = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
    line
}

/// Formats the status line for one walked PNG file.
fn describe_outcome(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Converted(file) => format!(
            "Image conversion successful: {} ({} -> {}, {})",
            file.target.display(),
            docprep::format_file_size(file.source_size),
            docprep::format_file_size(file.target_size),
            docprep::format_size_change(file.source_size, file.target_size),
        ),
        FileOutcome::Failed(file) => {
            format!(
                "Warning: Skipping {}: {}",
                file.path.display(),
                error_chain(&file.error)
            )
        }
    }
}

/// Formats the closing summary of a directory conversion.
fn summary_line(report: &ConversionReport) -> String {
    if report.total() == 0 {
        return "No PNG files found".to_string();
    }

    format!(
        "Converted {} of {} PNG files ({} failed)",
        report.converted.len(),
        report.total(),
        report.failed.len()
    )
}

/// Converts PNG files under root, printing one line per file as it goes.
fn run_jpeg(root: &Path, quality: u8) -> Result<ConversionReport> {
    println!("Converting PNG files under {}...", root.display());

    let report = docprep::convert_directory_with(root, quality, |outcome| match outcome {
        FileOutcome::Converted(_) => println!("{}", describe_outcome(outcome)),
        FileOutcome::Failed(_) => eprintln!("{}", describe_outcome(outcome)),
    })
    .with_context(|| format!("Error processing directory {}", root.display()))?;

    println!("{}", summary_line(&report));
    Ok(report)
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Bold {
            input,
            output,
            no_write,
        } => {
            run_bold(input.as_deref(), output, *no_write)?;
        }
        Command::Jpeg { root, quality } => {
            run_jpeg(root, *quality)?;
        }
    }

    Ok(())
}
