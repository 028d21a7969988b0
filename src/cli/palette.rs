//! Palette listing command.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{ActivePalette, TierFilter};

/// Print the paintable colour registry
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Only list free-tier colours
    #[arg(long)]
    pub free_only: bool,
}

pub fn run(args: PaletteArgs) -> Result<()> {
    let printer = Printer::new();

    let filter = if args.free_only {
        TierFilter::FreeOnly
    } else {
        TierFilter::All
    };
    let active = ActivePalette::select(filter)?;

    printer.status(
        "Listing",
        &plural(active.len(), "paintable colour", "paintable colours"),
    );

    // Registry order; one line per colour on stdout.
    for entry in active.entries() {
        println!("{}  {} ({})", entry.hex, entry.name, entry.tier);
    }

    Ok(())
}
