//! Platform logging initialization for the prediction console.
//!
//! Writes logs to `./prediction_console.log` in the current working directory.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./prediction_console.log";

/// Initialize the global logger: terminal plus `./prediction_console.log`.
///
/// The log file is truncated on start. If it cannot be created, only the
/// terminal logger is installed.
pub fn initialize(level: LevelFilter) {
    let config = build_config();

    let mut loggers = vec![terminal_logger(level, config.clone())];
    if let Some(file_logger) = create_file_logger(level, config) {
        loggers.push(file_logger);
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    // Records from egui, wgpu and reqwest are dropped; only workspace crates pass.
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str("console_")
        .add_filter_allow_str("prediction_console")
        .build()
}

fn terminal_logger(level: LevelFilter, config: Config) -> Box<dyn SharedLogger> {
    TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<dyn SharedLogger>> {
    let log_path = PathBuf::from(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
