//! Convert command implementation.
//!
//! Decodes a source image, runs the blueprint pipeline, and writes the
//! quantized grid as a PNG plus optional JSON colour statistics.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{PxGridError, Result};
use crate::export::write_png;
use crate::output::{display_path, plural, Printer};
use crate::pipeline::{process, Blueprint, BlueprintConfig, UsedColour};
use crate::types::TierFilter;

/// Convert an image into a palette-constrained blueprint PNG
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Source image (any format the image crate can decode)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Target grid side length (presets: 32, 64, 128, 256, 512)
    #[arg(long, default_value_t = 128,
          value_parser = clap::value_parser!(u32).range(0..=crate::pipeline::MAX_SIZE as i64))]
    pub size: u32,

    /// Restrict matching to free-tier colours
    #[arg(long)]
    pub free_only: bool,

    /// Reduce the output to the K most frequent colours
    #[arg(long, value_name = "K")]
    pub colours: Option<usize>,

    /// Integer upscale factor for the exported PNG
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Output PNG path (default: input path with a .blueprint.png extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Write the colour statistics as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub stats: Option<PathBuf>,

    /// Print the colour statistics as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable summary of a pipeline run.
#[derive(Debug, Serialize)]
struct StatsSummary<'a> {
    size: u32,
    paintable_pixels: usize,
    transparent_pixels: usize,
    colours: &'a [UsedColour],
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let printer = Printer::new();
    let display = display_path(&args.input);

    let img = image::open(&args.input)
        .map_err(|e| PxGridError::Image {
            path: args.input.clone(),
            message: format!("Failed to decode: {}", e),
        })?
        .to_rgba8();

    let config = BlueprintConfig {
        size: args.size,
        tier_filter: if args.free_only {
            TierFilter::FreeOnly
        } else {
            TierFilter::All
        },
        colour_limit: args.colours,
    };

    printer.status(
        "Quantizing",
        &format!("{} ({}x{})", display, args.size, args.size),
    );

    let blueprint = process(&img, &config)?;

    emit_stats(&args, &blueprint)?;

    if blueprint.grid.is_empty() {
        printer.warning("Skipping", "target size is 0, nothing to paint");
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("blueprint.png"));

    write_png(&blueprint.grid, &output, args.scale)?;

    printer.status(
        "Exporting",
        &format!(
            "{} {}",
            display_path(&output),
            printer.dim(&format!("(scale {})", args.scale.max(1)))
        ),
    );
    printer.status(
        "Finished",
        &format!(
            "{}, {} paintable, {} transparent",
            plural(blueprint.used_colours.len(), "colour", "colours"),
            plural(blueprint.paintable_pixels, "pixel", "pixels"),
            blueprint.transparent_pixels
        ),
    );

    Ok(())
}

fn emit_stats(args: &ConvertArgs, blueprint: &Blueprint) -> Result<()> {
    if args.stats.is_none() && !args.json {
        return Ok(());
    }

    let summary = StatsSummary {
        size: blueprint.grid.size(),
        paintable_pixels: blueprint.paintable_pixels,
        transparent_pixels: blueprint.transparent_pixels,
        colours: &blueprint.used_colours,
    };

    let json = serde_json::to_string_pretty(&summary).map_err(|e| PxGridError::Io {
        path: args.stats.clone().unwrap_or_default(),
        message: format!("Failed to encode stats: {}", e),
    })?;

    if let Some(path) = &args.stats {
        fs::write(path, &json).map_err(|e| PxGridError::Io {
            path: path.clone(),
            message: format!("Failed to write stats: {}", e),
        })?;
    }

    if args.json {
        println!("{}", json);
    }

    Ok(())
}
