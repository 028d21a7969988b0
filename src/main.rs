use clap::Parser;
use miette::Result;
use pxgrid::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => pxgrid::cli::convert::run(args)?,
        Commands::Palette(args) => pxgrid::cli::palette::run(args)?,
        Commands::Completions(args) => pxgrid::cli::completions::run(args)?,
    }

    Ok(())
}
