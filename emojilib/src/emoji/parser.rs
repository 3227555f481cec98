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

//! Parser for the Unicode `emoji-test.txt` enumeration.
//!
//! The file is made of comment lines, `# group: NAME` headers, and data
//! lines of the shape:
//!
//! ```text
//! 1F44B 1F3FB                                            ; fully-qualified     # 👋🏻 E1.0 waving hand: light skin tone
//! ```
//!
//! Only `fully-qualified` entries are kept. Entries whose second code point is
//! a [modifier](super::MODIFIERS) are attached as variants to the last base
//! emoji of the current category.

use std::path::Path;

use smallvec::SmallVec;

use super::{category::GROUP_COMPONENT, is_modifier, Category, Emoji, EmojiGrouping, EmojiSet};
use crate::{
    error::{Error, ErrorKind, Result, ResultIntoError},
    utils::fs::read_source_file,
};

pub const COMMENT_IDENTIFIER: &str = "#";
pub const GROUP_IDENTIFIER: &str = "# group:";
pub const EOF_IDENTIFIER: &str = "#EOF";
pub const FULLY_QUALIFIED: &str = "fully-qualified";

/// Parse `emoji-test.txt` content into an [`EmojiGrouping`].
///
/// Lines that are not fully-qualified entries, or that cannot be read as
/// one, are skipped. A modifier variant appearing before any base emoji of
/// its category is an error.
pub fn parse_emoji_test(content: &str) -> Result<EmojiGrouping> {
    let mut grouping = EmojiGrouping::new();
    let mut current: Option<Category> = None;
    // Index of the most recently appended set in the current category.
    let mut last_base: Option<usize> = None;

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        if line.starts_with(COMMENT_IDENTIFIER) {
            if let Some(group_name) = line.strip_prefix(GROUP_IDENTIFIER) {
                let group_name = group_name.trim();
                current = if group_name.to_lowercase() == GROUP_COMPONENT {
                    None
                } else {
                    let category = Category::from_group_name(group_name);
                    if category.is_none() {
                        log::debug!(
                            "line {}: unknown group `{}`, skipping its entries",
                            line_no,
                            group_name
                        );
                    }
                    category
                };
                last_base = current.and_then(|c| grouping.get(c).len().checked_sub(1));
            } else if line.starts_with(EOF_IDENTIFIER) {
                break;
            }
            continue;
        }
        let Some(category) = current else {
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(emoji) = parse_data_line(line) else {
            log::trace!("line {}: not a fully-qualified entry, skipping", line_no);
            continue;
        };

        let sets = grouping.get_mut(category);
        if emoji.code_points().get(1).copied().map_or(false, is_modifier) {
            let Some(set) = last_base.and_then(|i| sets.get_mut(i)) else {
                return Err(Error::new(format!(
                    "line {}: variant {} has no preceding base emoji in category {}",
                    line_no, emoji, category
                ))
                .set_kind(ErrorKind::ValueError));
            };
            set.push_variant(emoji);
        } else {
            sets.push(EmojiSet::new(emoji));
            last_base = Some(sets.len() - 1);
        }
    }
    log::debug!(
        "parsed {} emoji in {} categories",
        grouping.len(),
        grouping.categories().count()
    );

    Ok(grouping)
}

/// Read and parse an `emoji-test.txt` file. See [`parse_emoji_test`].
pub fn parse_emoji_test_file<P: AsRef<Path>>(path: P) -> Result<EmojiGrouping> {
    let path = path.as_ref();
    let content = read_source_file(path)?;
    parse_emoji_test(&content)
        .chain_err_summary(|| format!("Could not parse emoji test file `{}`", path.display()))
}

/// `CODEPOINTS ; QUALIFICATION # comment`, returning `None` for anything
/// that isn't a well formed fully-qualified entry.
fn parse_data_line(line: &str) -> Option<Emoji> {
    let data = line.split(COMMENT_IDENTIFIER).next()?;
    let mut fields = data.split(';').map(str::trim);
    let (code_points, qualification) = match (fields.next(), fields.next(), fields.next()) {
        (Some(c), Some(q), None) => (c, q),
        _ => return None,
    };
    if qualification != FULLY_QUALIFIED {
        return None;
    }
    let code_points = code_points
        .split_whitespace()
        .map(|hex| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32))
        .collect::<Option<SmallVec<[char; 4]>>>()?;
    if code_points.is_empty() {
        return None;
    }
    Some(Emoji::from_code_points(code_points))
}
