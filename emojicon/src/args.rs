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

//! Command line arguments.

use std::{ffi::OsStr, path::PathBuf};

use emojilib::LogLevel;
use structopt::StructOpt;

use crate::{conf::Settings, subcommands, Result};

fn try_path_or_stdio(input: &OsStr) -> PathOrStdio {
    if input == "-" {
        PathOrStdio::Stdio
    } else {
        PathOrStdio::Path(PathBuf::from(input))
    }
}

/// `Pathbuf` or standard stream (`-` operand).
#[derive(Debug)]
pub enum PathOrStdio {
    /// Path
    Path(PathBuf),
    /// standard stream (`-` operand)
    Stdio,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "emojicon",
    about = "build emoji picker assets from Unicode emoji test data and CLDR annotations"
)]
pub struct Opt {
    /// use specified configuration file
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// root of an extracted CLDR release (overrides `cldr_dir`)
    #[structopt(long, value_name = "PATH", parse(from_os_str))]
    pub cldr_dir: Option<PathBuf>,

    /// directory outputs are written under (overrides `output_dir`)
    #[structopt(long, value_name = "PATH", parse(from_os_str))]
    pub output_dir: Option<PathBuf>,

    /// print more log messages, may be repeated
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,

    /// print no log messages
    #[structopt(short, long)]
    pub quiet: bool,

    #[structopt(subcommand)]
    pub subcommand: SubCommand,
}

#[derive(Debug, StructOpt)]
pub enum SubCommand {
    /// build the emoji asset file of one locale.
    #[structopt(display_order = 1)]
    Build {
        /// CLDR release version, used to name the output directory.
        #[structopt(value_name = "CLDR_VERSION")]
        version: String,
        /// locale code, e.g. `en` or `de_CH`. `root` produces entries without
        /// names or keywords.
        #[structopt(value_name = "LOCALE", default_value = "root")]
        locale: String,
        /// write to this path instead of the output directory. Path `-`
        /// writes to standard output.
        #[structopt(short, long, value_name = "OUTPUT_PATH", parse(from_os_str = try_path_or_stdio))]
        output: Option<PathOrStdio>,
    },
    /// build the emoji asset files of every locale with annotations, plus
    /// `root`.
    #[structopt(display_order = 2, name = "buildall", visible_alias = "build-all")]
    BuildAll {
        /// CLDR release version, used to name the output directory.
        #[structopt(value_name = "CLDR_VERSION")]
        version: String,
    },
    /// print the number of base emoji and variants per category.
    #[structopt(display_order = 3)]
    Stats,
    /// remove the output directory and everything in it.
    #[structopt(display_order = 4)]
    Clean,
    /// print the effective configuration as TOML and exit.
    PrintConfig,
    /// print location of configuration file that will be loaded.
    PrintConfigPath,
    /// test a configuration file for syntax issues or unknown options.
    /// If `PATH` is not specified, the configuration path that would be
    /// loaded is tested.
    TestConfig {
        #[structopt(value_name = "CONFIG_PATH", parse(from_os_str))]
        path: Option<PathBuf>,
    },
}

impl Opt {
    /// Whether the subcommand operates on the loaded configuration. The
    /// configuration inspection subcommands must work even when the
    /// configuration file is broken.
    pub fn needs_settings(&self) -> bool {
        !matches!(
            self.subcommand,
            SubCommand::TestConfig { .. } | SubCommand::PrintConfigPath
        )
    }

    /// Load the configuration and apply command line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::new(self.config.as_deref())?;
        if let Some(cldr_dir) = self.cldr_dir.as_ref() {
            settings.cldr_dir.clone_from(cldr_dir);
        }
        if let Some(output_dir) = self.output_dir.as_ref() {
            settings.output_dir.clone_from(output_dir);
        }
        Ok(settings)
    }

    /// Configured level adjusted by `-v`/`-q`.
    pub fn log_level(&self, configured: LogLevel) -> LogLevel {
        if self.quiet {
            LogLevel::OFF
        } else {
            configured.adjust(self.verbose.min(i8::MAX as u8) as i8)
        }
    }

    /// Execute `self.subcommand` and return its result.
    pub fn execute(self, settings: Settings) -> Result<()> {
        match self.subcommand {
            SubCommand::Build {
                version,
                locale,
                output,
            } => subcommands::build(&settings, &version, &locale, output),
            SubCommand::BuildAll { version } => subcommands::build_all(&settings, &version),
            SubCommand::Stats => subcommands::stats(&settings),
            SubCommand::Clean => subcommands::clean(&settings),
            SubCommand::PrintConfig => {
                print!("{}", settings.to_toml()?);
                Ok(())
            }
            SubCommand::PrintConfigPath => {
                let config_path = match self.config {
                    Some(path) => path,
                    None => crate::conf::get_config_file()?,
                };
                println!("{}", config_path.display());
                Ok(())
            }
            SubCommand::TestConfig { path } => subcommands::test_config(path.or(self.config)),
        }
    }
}
