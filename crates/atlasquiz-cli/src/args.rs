use atlasquiz_core::{Mode, RegionChoice};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for atlasquiz
#[derive(Debug, Parser)]
#[command(
    name = "atlasquiz",
    version,
    about = "Learn and quiz yourself on country outlines, region by region"
)]
pub struct CliArgs {
    /// Directory holding the region lists and geo.json
    /// (default: $ATLASQUIZ_DATA_DIR, else the data/ dir of atlasquiz-core)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Always rebuild from the inputs; neither read nor write catalog snapshots
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the catalog
    Stats,

    /// List the selectable regions
    Regions,

    /// List countries, optionally for one region
    Countries {
        /// Region name (europe, asia, africa, americas, oceania, all)
        #[arg(short = 'r', long = "region", default_value = "all")]
        region: RegionChoice,
    },

    /// Show how a display name resolves
    Resolve {
        /// Display name, e.g. "Kossovo" or "Italien"
        name: String,
    },

    /// Print the render plan of a country as JSON
    Plan {
        /// Display name as listed in the catalog
        name: String,

        /// Palette to use (learn or quiz)
        #[arg(short = 'm', long = "mode", default_value = "learn")]
        mode: Mode,
    },

    /// Play interactively on stdin: n=next, b=back, s=show, p=plan,
    /// m=menu (choose mode and region again), q=quit
    Play {
        #[arg(short = 'm', long = "mode", default_value = "learn")]
        mode: Mode,

        #[arg(short = 'r', long = "region", default_value = "all")]
        region: RegionChoice,

        /// Seed for a reproducible order
        #[arg(long = "seed")]
        seed: Option<u64>,
    },
}
