//
// emojicon
//
// Copyright 2024 emojicon contributors
//
// This file is part of emojicon.
//
// emojicon is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emojicon is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emojicon. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration.
//!
//! Settings are read from a TOML file located through `$EMOJICON_CONFIG` or
//! `$XDG_CONFIG_HOME/emojicon/config.toml`. A missing default file means
//! default settings; every key is optional.
//!
//! ```toml
//! cldr_dir = "build/cldr"
//! output_dir = "prebuilt"
//! skip_regional_locales = true
//! log_level = "INFO"
//! # log_file = "/tmp/emojicon.log"
//! ```

use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};

use emojilib::LogLevel;

use crate::{Error, ErrorKind, Result, ResultIntoError};


pub const CONFIG_ENV_VAR: &str = "EMOJICON_CONFIG";

pub fn true_val() -> bool {
    true
}

pub fn default_cldr_dir() -> PathBuf {
    PathBuf::from("build/cldr")
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from("prebuilt")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Root of an extracted CLDR release.
    #[serde(default = "default_cldr_dir")]
    pub cldr_dir: PathBuf,
    /// Outputs go to `<output_dir>/emoji-<version>/<locale>.txt`.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Skip locale codes with a region or script subtag (`de_CH`,
    /// `sr_Latn`) when building all locales.
    #[serde(default = "true_val")]
    pub skip_regional_locales: bool,
    #[serde(default)]
    pub log_level: LogLevel,
    /// Also append log messages to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cldr_dir: default_cldr_dir(),
            output_dir: default_output_dir(),
            skip_regional_locales: true,
            log_level: LogLevel::default(),
            log_file: None,
        }
    }
}

pub fn get_config_file() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let xdg_dirs = xdg::BaseDirectories::with_prefix("emojicon").map_err(|err| {
        Error::new("Could not find your XDG directories")
            .set_source(Some(Arc::new(err)))
            .set_kind(ErrorKind::Configuration)
    })?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

impl Settings {
    /// Load settings from `path`, or from [`get_config_file`] if `None`.
    ///
    /// An explicitly given path must exist; the default location may be
    /// absent, giving default settings.
    pub fn new(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => get_config_file()?,
        };
        if !config_path.exists() {
            if path.is_some() || env::var_os(CONFIG_ENV_VAR).is_some() {
                return Err(Error::new(format!(
                    "Configuration file `{}` does not exist.",
                    config_path.display()
                ))
                .set_kind(ErrorKind::Configuration));
            }
            log::trace!(
                "no configuration file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::validate(&config_path)
    }

    /// Read and validate the configuration file at `path`.
    pub fn validate(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .chain_err_summary(|| format!("Could not read configuration file `{}`", path.display()))
            .chain_err_kind(ErrorKind::Configuration)?;
        Self::validate_string(&s)
            .chain_err_summary(|| format!("Configuration file `{}` is invalid", path.display()))
    }

    /// Validate configuration from `input` string.
    pub fn validate_string(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|err| {
            Error::new("Input contains errors")
                .set_source(Some(Arc::new(err)))
                .set_kind(ErrorKind::Configuration)
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|err| {
            Error::new("Could not serialize configuration")
                .set_source(Some(Arc::new(err)))
                .set_kind(ErrorKind::Bug)
        })
    }

    /// Directory the outputs of CLDR release `version` are written to.
    pub fn output_dir_for(&self, version: &str) -> Result<PathBuf> {
        if version.is_empty()
            || version
                .chars()
                .any(|c| std::path::is_separator(c) || c.is_whitespace())
        {
            return Err(
                Error::new(format!("Invalid CLDR version `{}`.", version))
                    .set_details("Expected a release number such as `44` or `44.1`.")
                    .set_kind(ErrorKind::InvalidInput),
            );
        }
        Ok(self.output_dir.join(format!("emoji-{}", version)))
    }
}
