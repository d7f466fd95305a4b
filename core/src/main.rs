use std::path::Path;
use std::process;

use clap::Parser;
use log::{error, info};

use mammoedit_core::cli::{Cli, Command, OutputFormat, TextReport};
use mammoedit_core::{
    edit_study, render_preview, sort_for_display, DecodedStudy, ImageDescriptor,
    InMemoryStudyRepository, PhotometricInterpretation, Point, Rect, RegionRequest, Result,
    SampleGrid, StudyRepository, WindowSpec,
};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Thumbnail {
            file,
            out,
            center,
            width,
        } => {
            let grid = load_grid(&file)?;
            let window = match (center, width) {
                (Some(center), Some(width)) => Some(WindowSpec::new(center, width)),
                _ => None,
            };
            let preview = render_preview(&grid, window.as_ref())?;
            preview.save(&out)?;
            info!(
                "wrote {}x{} preview to {} (inverted: {})",
                preview.width(),
                preview.height(),
                out.display(),
                preview.was_inverted
            );
            println!("{}", out.display());
            Ok(())
        }

        Command::Crop {
            file,
            out,
            x,
            y,
            width,
            height,
        } => {
            let request = RegionRequest::Rectangle(Rect::new(x, y, width, height));
            run_edit(&file, &out, request, PhotometricInterpretation::Monochrome2)
        }

        Command::Mask {
            file,
            out,
            points,
            photometric,
        } => {
            let vertices = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let request = RegionRequest::Polygon { points: vertices };
            run_edit(
                &file,
                &out,
                request,
                PhotometricInterpretation::from_str(&photometric),
            )
        }

        Command::Order { labels, format } => {
            let mut descriptors: Vec<ImageDescriptor> = labels
                .iter()
                .map(|label| match label.split_once('-') {
                    Some((laterality, view)) => {
                        ImageDescriptor::new(label.clone(), Some(laterality), Some(view))
                    }
                    None => ImageDescriptor::new(label.clone(), None, None),
                })
                .collect();
            sort_for_display(&mut descriptors);
            output_order(&descriptors, format);
            Ok(())
        }
    }
}

/// Loads a grayscale raster file as a sample grid
///
/// The CLI stands in for the external study decoder: 16-bit grayscale
/// inputs keep their full sample range, everything else is flattened to
/// 8-bit luma.
fn load_grid(path: &Path) -> Result<SampleGrid> {
    let dynamic = image::open(path)?;
    match dynamic {
        image::DynamicImage::ImageLuma16(buf) => {
            let (width, height) = buf.dimensions();
            let samples = buf.into_raw().into_iter().map(|v| v as i32).collect();
            SampleGrid::new(samples, height as usize, width as usize, 16)
        }
        other => {
            let buf = other.to_luma8();
            let (width, height) = buf.dimensions();
            let samples = buf.into_raw().into_iter().map(|v| v as i32).collect();
            SampleGrid::new(samples, height as usize, width as usize, 8)
        }
    }
}

/// Runs a destructive edit through the repository pipeline
fn run_edit(
    file: &Path,
    out: &Path,
    request: RegionRequest,
    photometric: PhotometricInterpretation,
) -> Result<()> {
    let grid = load_grid(file)?;
    let filename = file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("study")
        .to_string();

    let mut repo = InMemoryStudyRepository::new();
    let source_id = repo.insert(DecodedStudy {
        filename,
        grid,
        window: None,
        photometric,
        laterality: None,
        view_position: None,
    });

    let (derived_id, preview) = edit_study(&mut repo, &source_id, &request)?;
    preview.save(out)?;
    info!("edit {} -> {}", source_id, derived_id);
    println!("{}", out.display());
    Ok(())
}

fn output_order(descriptors: &[ImageDescriptor], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let report = TextReport::new(descriptors);
            println!("{}", report);
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(descriptors) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
