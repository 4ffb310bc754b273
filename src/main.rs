mod client;
mod config;
mod engine;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use log::{info, LevelFilter};

use client::DeckView;
use engine::prelude::*;

/// Builds a deck from the cards you own.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON collection export: a list of owned cards
    #[arg(short, long)]
    collection: PathBuf,

    /// TOML deck spec; defaults are used for anything it leaves out
    #[arg(short, long)]
    spec: Option<PathBuf>,

    /// Overrides the spec's format
    #[arg(short, long)]
    format: Option<String>,

    /// Overrides the spec's color identity, e.g. `WB`
    #[arg(long)]
    colors: Option<ColorIdentity>,

    /// Overrides the spec's land target
    #[arg(long)]
    lands: Option<usize>,

    #[arg(long, default_value = "deckbuilder.log")]
    log_file: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Print the list as text instead of opening the viewer
    #[arg(long)]
    plain: bool,

    /// Print the decklist as JSON
    #[arg(long, conflicts_with = "plain")]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    simple_logging::log_to_file(&args.log_file, args.log_level)?;

    let owned = config::load_collection(&args.collection)?;
    let mut spec = config::load_spec(args.spec.as_deref())?;
    if let Some(format) = args.format {
        spec.format = Format::from(format);
    }
    if let Some(colors) = args.colors {
        spec.color_identity = colors;
    }
    if let Some(lands) = args.lands {
        spec.target_lands = lands;
    }
    info!("main: building a {} deck in {}", spec.format, spec.color_identity);

    let build = DeckBuilder::default().build(&owned, &spec);
    info!("main: {}", build.decklist.message);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&build.decklist)?);
    } else if args.plain {
        println!("{}", DeckView::new(&build, &spec).render_plain());
    } else {
        client::launch(DeckView::new(&build, &spec))?;
    }
    Ok(())
}
