//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::Section;

/// Generate placeholder images for every image slot on the website.
#[derive(Parser, Debug)]
#[command(name = "placegen", version, about)]
pub struct Cli {
    /// Directory the `images/` tree is written under.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Only generate one section of the catalog.
    #[arg(short, long, value_enum)]
    pub section: Option<Section>,

    /// Print the catalog instead of generating it.
    #[arg(short, long)]
    pub list: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
