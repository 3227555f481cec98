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

//! Command line client binary.
//!
//! Reads `emoji-test.txt` and the CLDR annotations of an extracted CLDR
//! release and writes one emoji asset file per locale.

use emojicon::{args::Opt, emojilib::LogLevel, Result, Settings};
use structopt::StructOpt;

fn main() {
    let opt = Opt::from_args();
    ::std::process::exit(match run_app(opt) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    });
}

fn run_app(opt: Opt) -> Result<()> {
    let logger = emojilib::StderrLogger::new(opt.log_level(LogLevel::default()));
    let settings = if opt.needs_settings() {
        opt.settings()?
    } else {
        Settings::default()
    };
    logger.change_log_level(opt.log_level(settings.log_level));
    if let Some(log_file) = settings.log_file.as_ref() {
        logger.change_log_dest(log_file)?;
    }
    log::debug!("{:?}", settings);
    opt.execute(settings)
}
