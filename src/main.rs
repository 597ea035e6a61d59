//! Placegen - placeholder image generator for website image slots.

mod catalog;
mod cli;
mod config;
mod driver;
mod error;
mod font;
mod output;
mod palette;
mod ports;
mod render;

use std::io::Write;
use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{ErrorKind, PlaceholderError};
use crate::render::PlaceholderGenerator;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        let code = match e.kind() {
            ErrorKind::Configuration => 3,
            ErrorKind::Io => 1,
        };
        process::exit(code);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<(), PlaceholderError> {
    let entries = catalog::select(cli.section);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        return driver::list_catalog(&entries, &mut out);
    }

    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path)?;
    let palette = config.palette()?;
    log::debug!("writing under {}", cli.out_dir.display());

    let generator =
        PlaceholderGenerator::new(palette, config.fonts, config.jpeg_quality, &cli.out_dir);
    driver::run_catalog(&generator, &entries, &mut out)?;
    out.flush().map_err(|source| PlaceholderError::Io { path: "<stdout>".into(), source })
}
