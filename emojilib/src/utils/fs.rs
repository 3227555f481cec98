//
// emojilib
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

//! Source file preconditions shared by the parsers.

use std::path::Path;

use crate::error::{Error, ErrorKind, Result, ResultIntoError};

/// Check that `path` names an existing regular file, then read it whole as
/// UTF-8.
pub fn read_source_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::new(format!(
            "Specified path `{}` does not exist!",
            path.display()
        ))
        .set_kind(ErrorKind::NotFound));
    }
    if !path.is_file() {
        return Err(Error::new(format!(
            "Specified path `{}` is not a file!",
            path.display()
        ))
        .set_kind(ErrorKind::InvalidInput));
    }
    std::fs::read_to_string(path)
        .chain_err_summary(|| format!("Could not read `{}`", path.display()))
}

/// Check that `path` names an existing directory.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::new(format!(
            "Specified path `{}` does not exist!",
            path.display()
        ))
        .set_kind(ErrorKind::NotFound));
    }
    if !path.is_dir() {
        return Err(Error::new(format!(
            "Specified path `{}` is not a directory!",
            path.display()
        ))
        .set_kind(ErrorKind::InvalidInput));
    }
    Ok(())
}
