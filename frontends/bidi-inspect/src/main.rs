// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

mod cli;
mod report;

use clap::Parser;
use rio_bidi::{BidiEngine, Config, ConfigError};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

const LOG_LEVEL_ENV: &str = "RIO_BIDI_LOG_LEVEL";

fn setup_logs_by_filter_level(
    log_level: &str,
    log_file: &Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut filter_level = LevelFilter::from_str(log_level).unwrap_or(LevelFilter::OFF);

    if let Ok(data) = std::env::var(LOG_LEVEL_ENV) {
        if !data.is_empty() {
            filter_level = LevelFilter::from_str(&data).unwrap_or(filter_level);
        }
    }

    let filter = EnvFilter::builder()
        .with_default_directive(filter_level.into())
        .parse("")?;

    // Standard output carries the report, logs go to stderr.
    let stderr_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(filter);
    let subscriber = tracing_subscriber::registry().with(stderr_subscriber);

    if let Some(log_file) = &log_file {
        let log_file = std::fs::File::create(log_file)?;
        let file_subscriber = tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_writer(log_file)
            .with_target(false)
            .with_ansi(false);
        subscriber.with(file_subscriber).init();
    } else {
        subscriber.init();
    }

    tracing::info!("log_level: {log_level}");
    if let Some(log_file) = log_file {
        tracing::info!("log_file: {log_file}");
    }
    Ok(())
}

/// Falls back to the default configuration. A missing file is not worth a
/// warning, any other failure is returned to be logged once the logger is up.
fn config_or_default(
    loaded: rio_bidi::error::Result<Config>,
) -> (Config, Option<ConfigError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(ConfigError::PathNotFound(_)) => (Config::default(), None),
        Err(err) => (Config::default(), Some(err)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::Cli::parse();

    if let Some(config_path) = args.write_config {
        let _ = setup_logs_by_filter_level("INFO", &None);
        let path = rio_bidi::config::create_config_file(config_path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let (mut config, config_error) = config_or_default(Config::try_load());

    if args.log_file.is_some() {
        config.developer.log_file = args.log_file;
    }

    if let Err(e) =
        setup_logs_by_filter_level(&config.developer.log_level, &config.developer.log_file)
    {
        eprintln!("unable to configure the logger: {e:?}");
    }

    if let Some(err) = config_error {
        tracing::warn!("using default configuration: {err}");
    }

    if let Some(direction) = args.direction {
        config.engine.base_direction = direction.into();
    }
    tracing::info!(
        "base direction {} with max depth {}",
        config.engine.base_direction,
        config.engine.max_depth()
    );

    let mut engine = BidiEngine::with_config(&config.engine);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.text {
        Some(text) => {
            writeln!(out, "{}", report::describe_line(&mut engine, &text, args.logical))?;
        }
        None => {
            for line in std::io::stdin().lock().lines() {
                let line = line?;
                writeln!(
                    out,
                    "{}",
                    report::describe_line(&mut engine, &line, args.logical)
                )?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rio_bidi::BaseDirection;
    use std::path::PathBuf;

    #[test]
    fn test_missing_config_falls_back_quietly() {
        let missing = Err(ConfigError::PathNotFound(PathBuf::from("/nowhere/config.toml")));
        let (config, error) = config_or_default(missing);
        assert_eq!(config, Config::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_invalid_config_falls_back_with_error() {
        let invalid = Config::from_toml("[engine]\nmax-depth = \"deep\"");
        let (config, error) = config_or_default(invalid);
        assert_eq!(config, Config::default());
        assert!(matches!(error, Some(ConfigError::Parse(_))));
    }

    #[test]
    fn test_loaded_config_is_kept() {
        let loaded = Config::from_toml("[engine]\nbase-direction = \"rtl\"");
        let (config, error) = config_or_default(loaded);
        assert_eq!(config.engine.base_direction, BaseDirection::RightToLeft);
        assert!(error.is_none());
    }
}
