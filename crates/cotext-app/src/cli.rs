use std::path::PathBuf;

use clap::Parser;

/// Cotext: several editor tabs sharing one text buffer over a local bus.
#[derive(Parser, Debug)]
#[command(name = "cotext", version, about)]
pub struct Args {
    /// Number of tabs to open.
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=64))]
    pub tabs: u16,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `cotext=debug`).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
