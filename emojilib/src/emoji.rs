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

/*!
 * Emoji sequences and their grouping by category.
 *
 * An [`EmojiGrouping`] is built once from `emoji-test.txt` with
 * [`parse_emoji_test`] and then written out, once per locale, with
 * [`write_emoji_data`].
 */

use indexmap::IndexMap;
use smallvec::SmallVec;

pub mod category;
pub mod output;
pub mod parser;
#[cfg(test)]
mod tests;

pub use category::{is_modifier, Category, MODIFIERS};
pub use output::{emoji_data_to_string, write_emoji_data, write_emoji_data_file};
pub use parser::{parse_emoji_test, parse_emoji_test_file};

/// Emoji presentation selector. Stripped to obtain the annotation lookup key.
pub const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// A code point sequence with its qualified and unqualified renderings.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Emoji {
    code_points: SmallVec<[char; 4]>,
    qualified: String,
    unqualified: String,
}

impl Emoji {
    pub fn from_code_points<I: IntoIterator<Item = char>>(code_points: I) -> Self {
        let code_points: SmallVec<[char; 4]> = code_points.into_iter().collect();
        let qualified = code_points.iter().collect::<String>();
        let unqualified = code_points
            .iter()
            .filter(|&&c| c != VARIATION_SELECTOR_16)
            .collect::<String>();
        Self {
            code_points,
            qualified,
            unqualified,
        }
    }

    pub fn code_points(&self) -> &[char] {
        &self.code_points
    }

    /// Every code point, presentation selectors included.
    pub fn qualified(&self) -> &str {
        &self.qualified
    }

    /// Same as [`Emoji::qualified`] without `U+FE0F`; this is how CLDR keys
    /// its annotations.
    pub fn unqualified(&self) -> &str {
        &self.unqualified
    }
}

impl std::fmt::Display for Emoji {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.qualified)
    }
}

/// A base emoji followed by its modifier variants, in input order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmojiSet {
    base: Emoji,
    variants: Vec<Emoji>,
}

impl EmojiSet {
    pub fn new(base: Emoji) -> Self {
        Self {
            base,
            variants: vec![],
        }
    }

    pub fn base(&self) -> &Emoji {
        &self.base
    }

    pub fn variants(&self) -> &[Emoji] {
        &self.variants
    }

    pub fn push_variant(&mut self, variant: Emoji) {
        self.variants.push(variant);
    }
}

/// Per category base/variant counts of an [`EmojiGrouping`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GroupStats {
    pub category: Category,
    pub bases: usize,
    pub variants: usize,
}

/// Category to [`EmojiSet`] list. Every [`Category`] is always present, in
/// [`Category::ALL`] order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmojiGrouping {
    groups: IndexMap<Category, Vec<EmojiSet>>,
}

impl Default for EmojiGrouping {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiGrouping {
    pub fn new() -> Self {
        Self {
            groups: Category::ALL.into_iter().map(|c| (c, vec![])).collect(),
        }
    }

    pub fn get(&self, category: Category) -> &[EmojiSet] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn get_mut(&mut self, category: Category) -> &mut Vec<EmojiSet> {
        self.groups.entry(category).or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[EmojiSet])> + '_ {
        self.groups.iter().map(|(&c, sets)| (c, sets.as_slice()))
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.keys().copied()
    }

    /// Total number of emoji, bases and variants.
    pub fn len(&self) -> usize {
        self.groups
            .values()
            .flatten()
            .map(|set| 1 + set.variants.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    pub fn stats(&self) -> Vec<GroupStats> {
        self.iter()
            .map(|(category, sets)| GroupStats {
                category,
                bases: sets.len(),
                variants: sets.iter().map(|s| s.variants.len()).sum(),
            })
            .collect()
    }
}
