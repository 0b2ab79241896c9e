//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::convert::DEFAULT_JPEG_QUALITY;

/// Default file receiving rewritten markdown.
pub const DEFAULT_OUTPUT: &str = "output.md";

/// Command line configuration for docprep.
#[derive(Debug, Clone, Parser)]
#[command(name = "docprep", version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

/// Utility to run.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Rewrite inline code spans to bold and normalize code fences
    Bold {
        /// Markdown file to read (standard input when omitted)
        input: Option<PathBuf>,

        /// File receiving the rewritten text, overwritten if present
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Only print the result, do not write the output file
        #[arg(long)]
        no_write: bool,
    },

    /// Convert every PNG under a directory to JPEG and delete the originals
    Jpeg {
        /// Directory to walk recursively
        #[arg(default_value = ".")]
        root: PathBuf,

        /// JPEG quality (1-100)
        #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY)]
        quality: u8,
    },
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist, the walk root is not
    /// a directory, or JPEG quality is outside 1..=100.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Bold { input, .. } => {
                if let Some(path) = input
                    && !path.is_file()
                {
                    bail!("Input file does not exist: {}", path.display());
                }
            }
            Command::Jpeg { root, quality } => {
                if !root.is_dir() {
                    bail!("Directory does not exist: {}", root.display());
                }
                if !(1..=100).contains(quality) {
                    bail!("JPEG quality must be between 1 and 100, got {}", quality);
                }
            }
        }

        Ok(())
    }
}
