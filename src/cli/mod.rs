pub mod completions;
pub mod convert;
pub mod palette;

use clap::{Parser, Subcommand};

/// pxgrid - Palette-constrained pixel-art blueprint generator
#[derive(Parser, Debug)]
#[command(name = "pxgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an image into a palette-constrained blueprint PNG
    Convert(convert::ConvertArgs),

    /// Print the paintable colour registry
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
