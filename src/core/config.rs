// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

// Configuration for our strength checker
#[derive(Debug, Clone)]
pub struct Config {
    // History
    pub history_limit: Option<usize>,

    // History table
    pub page_size: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // History
            history_limit: None, // unbounded

            // History table
            page_size: 10,

            // Logging
            log_level: LevelFilter::Info,
            log_file: PathBuf::from("logs/passcheck.log"),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // History
        if let Ok(val) = env::var("HISTORY_LIMIT") {
            match val.parse::<usize>() {
                Ok(0) => config.history_limit = None,
                Ok(limit) => config.history_limit = Some(limit),
                Err(_) => log::warn!("Invalid HISTORY_LIMIT '{}', keeping history unbounded", val),
            }
        }

        // History table
        if let Ok(val) = env::var("PAGE_SIZE") {
            if let Ok(size) = val.parse::<usize>() {
                if size > 0 {
                    config.page_size = size;
                }
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        }

        config
    }

    // Create directories needed for operation
    pub fn ensure_directories_exist(&self) {
        // Create the log directory if it doesn't exist
        if let Some(parent) = self.log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    log::warn!("Failed to create log directory: {}", e);
                }
            }
        }
    }
}
