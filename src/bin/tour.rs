//! Runs every configured lesson in order.
//!
//! Run with: cargo run --bin tour [config.toml]
//! The config path may also come from OBJECT_BASICS_CONFIG.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use object_basics::config::TourConfig;
use object_basics::{telemetry, tour};

fn main() -> object_basics::Result<()> {
    telemetry::init();

    let config = TourConfig::resolve(env::args_os().nth(1).map(PathBuf::from))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    tour::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
