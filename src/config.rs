//! Command-line configuration.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::GameError;

pub const DEFAULT_FPS: u32 = 30;

#[derive(Debug, Parser)]
#[command(author, version, about = "Cross the road, dodge the bugs, grab the gems.", long_about = None)]
pub struct Config {
    /// Frames per second for the game loop.
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Seed for a reproducible session; random when omitted.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write log output here instead of stderr.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Target duration of one frame.
    pub fn frame(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Install the global logger.  `RUST_LOG` wins over the defaults; a log
    /// file defaults to `info`, stderr to `warn` so the play field stays
    /// clean.
    pub fn init_logging(&self) -> Result<(), GameError> {
        let default_filter = if self.log_file.is_some() { "info" } else { "warn" };
        let mut builder = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default_filter),
        );
        if let Some(path) = &self.log_file {
            let file = File::create(path).map_err(|source| GameError::LogFile {
                path: path.clone(),
                source,
            })?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        builder.try_init()?;
        Ok(())
    }
}
