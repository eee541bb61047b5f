//! # Logging
//!
//! File logger setup. The logger is installed before the config file is
//! read so config loading and resolution can log; the configured level is
//! applied once it is known.

use std::fs::File;
use std::io;
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

/// Written to the current directory.
pub const LOG_FILE: &str = "tfquiz.log";

/// Install a `WriteLogger` on `path`, accepting every level until
/// [`apply_level`] narrows it.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    let log_file = File::create(path)?;
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(LevelFilter::Trace, log_config, log_file).map_err(io::Error::other)
}

/// Narrow the global level to the resolved one.
pub fn apply_level(level: LevelFilter) {
    log::set_max_level(level);
}
