//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use crate::core::{Board, GravityConfig, NextPieceSource};
use crate::types::{GRAVITY_BASE_MS, GRAVITY_LEVEL_OFFSET};

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Config {
    #[arg(long, env = "BLOCKFALL_SEED", help = "Seed for the piece sequence (random if unset)")]
    pub seed: Option<u64>,

    #[arg(
        long,
        env = "BLOCKFALL_GRAVITY_BASE_MS",
        default_value_t = GRAVITY_BASE_MS,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Gravity base in milliseconds; the interval is base / (level + offset)"
    )]
    pub gravity_base_ms: u64,

    #[arg(
        long,
        env = "BLOCKFALL_GRAVITY_OFFSET",
        default_value_t = GRAVITY_LEVEL_OFFSET,
        help = "Added to the level before dividing the gravity base"
    )]
    pub gravity_offset: u32,

    #[arg(long, env = "BLOCKFALL_LOG", help = "Write logs to this file (discarded otherwise)")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity (-v = DEBUG, -vv = TRACE)"
    )]
    pub verbose: u8,
}

impl Config {
    pub fn gravity(&self) -> GravityConfig {
        GravityConfig::new(
            Duration::from_millis(self.gravity_base_ms),
            self.gravity_offset,
        )
    }

    /// Log level for the file subscriber. INFO unless raised with `-v`.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// A fresh board using the configured seed and gravity.
    pub fn board(&self) -> Board {
        let source = match self.seed {
            Some(seed) => NextPieceSource::new(seed),
            None => NextPieceSource::from_entropy(),
        };
        Board::with_source(source, self.gravity())
    }
}

impl From<&Config> for GravityConfig {
    fn from(value: &Config) -> Self {
        value.gravity()
    }
}
