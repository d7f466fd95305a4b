pub mod report;

pub use report::TextReport;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for mammoedit
#[derive(Parser, Debug)]
#[command(name = "mammoedit")]
#[command(about = "Mammography study preview and destructive edit tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a bounded preview of a grayscale raster image
    Thumbnail {
        /// Input raster file (8/16-bit grayscale)
        file: PathBuf,

        /// Output preview path
        #[arg(short, long)]
        out: PathBuf,

        /// Window center override
        #[arg(long)]
        center: Option<f64>,

        /// Window width override
        #[arg(long)]
        width: Option<f64>,
    },

    /// Crop a rectangular region and write the derived preview
    Crop {
        /// Input raster file (8/16-bit grayscale)
        file: PathBuf,

        /// Output preview path
        #[arg(short, long)]
        out: PathBuf,

        #[arg(long, allow_negative_numbers = true)]
        x: i32,

        #[arg(long, allow_negative_numbers = true)]
        y: i32,

        #[arg(long)]
        width: i32,

        #[arg(long)]
        height: i32,
    },

    /// Mask everything outside a polygon and write the derived preview
    Mask {
        /// Input raster file (8/16-bit grayscale)
        file: PathBuf,

        /// Output preview path
        #[arg(short, long)]
        out: PathBuf,

        /// Polygon vertex as "x,y"; repeat at least 3 times
        #[arg(
            long = "point",
            value_name = "X,Y",
            value_parser = parse_point,
            allow_hyphen_values = true,
            required = true
        )]
        points: Vec<(i32, i32)>,

        /// Photometric interpretation of the source samples
        #[arg(long, default_value = "MONOCHROME2")]
        photometric: String,
    },

    /// Classify labels and print them in canonical display order
    Order {
        /// Labels of the form LATERALITY-VIEW (e.g. R-CC), or "Unknown"
        labels: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}

/// Parses a polygon vertex argument of the form "x,y"
pub fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid x in '{}': {}", s, e))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid y in '{}': {}", s, e))?;
    Ok((x, y))
}
