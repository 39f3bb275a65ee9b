//! Platform logging initialization for the resume-match binary.
//!
//! Verbose runs also log to the terminal; every run writes `./resume_match.log`.

use std::path::PathBuf;

use log::LevelFilter;
use match_logging::{LogDestination, DEFAULT_LOG_FILE};

pub fn initialize(verbose: bool) {
    let (destination, level) = if verbose {
        (
            LogDestination::Both(PathBuf::from(DEFAULT_LOG_FILE)),
            LevelFilter::Debug,
        )
    } else {
        (
            LogDestination::File(PathBuf::from(DEFAULT_LOG_FILE)),
            LevelFilter::Info,
        )
    };
    match_logging::initialize(destination, level);
}
