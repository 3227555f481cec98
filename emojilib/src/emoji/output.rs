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

//! Serialization of an [`EmojiGrouping`] joined with one locale's
//! annotations.
//!
//! ```text
//! [smileys_emotion]
//! 😀;grinning face;face|grin
//! ...
//!
//! [people_body]
//! 👋;waving hand;hand|wave|waving
//! 	👋🏻;waving hand: light skin tone;hand|light skin tone|wave|waving
//! ...
//! ```
//!
//! Variant lines are indented with a single tab. Emoji without an annotation
//! entry get empty name and keyword fields.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::{Emoji, EmojiGrouping, EmojiSet};
use crate::{
    annotations::AnnotationMapping,
    error::{Result, ResultIntoError},
};

pub const KEYWORD_SEPARATOR: &str = "|";
pub const FIELD_SEPARATOR: char = ';';

pub fn write_emoji_data<W: Write>(
    writer: &mut W,
    grouping: &EmojiGrouping,
    mapping: &AnnotationMapping,
) -> Result<()> {
    for (category, sets) in grouping.iter() {
        writeln!(writer, "[{}]", category.id())?;
        for set in sets {
            write_emoji_set(writer, set, mapping)?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn emoji_data_to_string(
    grouping: &EmojiGrouping,
    mapping: &AnnotationMapping,
) -> Result<String> {
    let mut buf = Vec::with_capacity(grouping.len() * 48);
    write_emoji_data(&mut buf, grouping, mapping)?;
    Ok(String::from_utf8(buf)?)
}

/// Create (or truncate) `path` and write the emoji data into it.
pub fn write_emoji_data_file<P: AsRef<Path>>(
    path: P,
    grouping: &EmojiGrouping,
    mapping: &AnnotationMapping,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .chain_err_summary(|| format!("Could not create `{}`", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_emoji_data(&mut writer, grouping, mapping)
        .chain_err_summary(|| format!("Could not write emoji data to `{}`", path.display()))
}

fn write_emoji_set<W: Write>(
    writer: &mut W,
    set: &EmojiSet,
    mapping: &AnnotationMapping,
) -> std::io::Result<()> {
    write_emoji(writer, set.base(), mapping)?;
    for variant in set.variants() {
        writer.write_all(b"\t")?;
        write_emoji(writer, variant, mapping)?;
    }
    Ok(())
}

fn write_emoji<W: Write>(
    writer: &mut W,
    emoji: &Emoji,
    mapping: &AnnotationMapping,
) -> std::io::Result<()> {
    let (name, keywords) = mapping
        .get(emoji.unqualified())
        .map(|entry| (entry.name.as_str(), entry.keywords.join(KEYWORD_SEPARATOR)))
        .unwrap_or_default();
    writeln!(
        writer,
        "{}{sep}{}{sep}{}",
        emoji.qualified(),
        name,
        keywords,
        sep = FIELD_SEPARATOR
    )
}
