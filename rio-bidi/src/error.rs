// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Configuration errors.
//!
//! The algorithm itself never fails; only loading settings from disk does.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("configuration file was not found at {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("could not read configuration file")]
    Io(#[from] std::io::Error),
    #[error("found an issue loading the configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
