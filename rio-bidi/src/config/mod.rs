// Copyright (c) 2023-present, Raphael Amorim.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

pub mod defaults;

use crate::error::{ConfigError, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Paragraph base direction.
#[derive(Default, Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum BaseDirection {
    /// Taken from the first strong character of the text.
    #[default]
    #[serde(alias = "auto")]
    Auto,
    #[serde(alias = "ltr", alias = "left-to-right")]
    LeftToRight,
    #[serde(alias = "rtl", alias = "right-to-left")]
    RightToLeft,
}

impl BaseDirection {
    /// Paragraph level forced by this direction, if any.
    pub fn level(self) -> Option<u8> {
        match self {
            BaseDirection::Auto => None,
            BaseDirection::LeftToRight => Some(0),
            BaseDirection::RightToLeft => Some(1),
        }
    }
}

impl Display for BaseDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            BaseDirection::Auto => {
                write!(f, "auto")
            }
            BaseDirection::LeftToRight => {
                write!(f, "ltr")
            }
            BaseDirection::RightToLeft => {
                write!(f, "rtl")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Engine {
    #[serde(default = "default_base_direction", rename = "base-direction")]
    pub base_direction: BaseDirection,
    #[serde(default = "default_max_depth", rename = "max-depth")]
    pub max_depth: u8,
}

impl Engine {
    /// Maximum embedding depth, clamped to what the level type can hold.
    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth.min(MAX_DEPTH)
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine {
            base_direction: default_base_direction(),
            max_depth: default_max_depth(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Developer {
    #[serde(default = "default_log_level", rename = "log-level")]
    pub log_level: String,
    #[serde(
        default = "default_log_file",
        rename = "log-file",
        skip_serializing_if = "Option::is_none"
    )]
    pub log_file: Option<String>,
}

impl Default for Developer {
    fn default() -> Developer {
        Developer {
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Engine::default")]
    pub engine: Engine,
    #[serde(default = "Developer::default")]
    pub developer: Developer,
}

#[inline]
pub fn config_dir_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rio-bidi")
}

#[inline]
pub fn config_file_path() -> PathBuf {
    config_dir_path().join("config.toml")
}

/// Writes the default configuration to `path`, or to the default location.
///
/// An existing file is left untouched. Returns the path of the file.
pub fn create_config_file(path: Option<PathBuf>) -> Result<PathBuf> {
    let file_path = path.unwrap_or_else(config_file_path);
    if file_path.exists() {
        tracing::info!(
            "configuration file already exists at {}",
            file_path.display()
        );
        return Ok(file_path);
    }

    if let Some(dir) = file_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
            tracing::info!("configuration path created {}", dir.display());
        }
    }

    let mut created_file = File::create(&file_path)?;
    writeln!(created_file, "{}", default_config_file_content())?;
    tracing::info!("configuration file created {}", file_path.display());
    Ok(file_path)
}

impl Config {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Config::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(content)?)
    }

    pub fn to_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn try_load() -> Result<Self> {
        Config::load_from_path(&config_file_path())
    }
}
