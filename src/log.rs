// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Log module initialises a backend for the `log` facade, reference
//! https://docs.rs/log4rs
//!
//! The rasterizer itself only emits `log` records; embedders that already run a logger
//! simply skip these functions.

use log::LevelFilter;

#[cfg(all(feature = "log4rs", not(target_arch = "wasm32")))]
use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

#[cfg(all(feature = "log4rs", not(target_arch = "wasm32")))]
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}";

/// init logs to stderr
#[allow(unused)]
pub fn init_log(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_logger::init(wasm_logger::Config::new(level.to_level().unwrap_or(log::Level::Error)));
    }
    #[cfg(all(feature = "log4rs", not(target_arch = "wasm32")))]
    {
        let console = ConsoleAppender::builder()
            .target(log4rs::append::console::Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        install("console", Box::new(console), level);
    }
}

/// init logs to a file, the file is created if missing
#[allow(unused)]
pub fn init_log_file(level: LevelFilter, file_path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        init_log(level);
    }
    #[cfg(all(feature = "log4rs", not(target_arch = "wasm32")))]
    {
        match FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(file_path)
        {
            Ok(logfile) => install("logfile", Box::new(logfile), level),
            Err(e) => eprintln!("pixel_raster: cannot open log file {}: {}", file_path, e),
        }
    }
}

#[cfg(all(feature = "log4rs", not(target_arch = "wasm32")))]
fn install(name: &str, appender: Box<dyn log4rs::append::Append>, level: LevelFilter) {
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build(name, appender),
        )
        .build(Root::builder().appender(name).build(level));
    match config {
        // a second init keeps the logger that is already installed
        Ok(config) => {
            let _ = log4rs::init_config(config);
        }
        Err(e) => eprintln!("pixel_raster: bad log config: {}", e),
    }
}
