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
 * CLDR emoji annotations.
 *
 * CLDR publishes, per locale, `common/annotations/<locale>.xml` and
 * `common/annotationsDerived/<locale>.xml`. Each emoji gets up to two lines:
 *
 * ```xml
 * <annotation cp="😀">face | grin | grinning face</annotation>
 * <annotation cp="😀" type="tts">grinning face</annotation>
 * ```
 *
 * The `tts` line carries the display name, the other one the `|` separated
 * keywords. Keys are unqualified sequences, i.e. without `U+FE0F`.
 */

use std::{path::Path, sync::OnceLock};

use indexmap::IndexMap;
use regex::Regex;

use crate::{
    error::{Result, ResultIntoError},
    utils::fs::read_source_file,
};

#[cfg(test)]
mod tests;

const ANNOTATION_NAME_PATTERN: &str =
    r#"^\s*<annotation cp="(?P<cp>[^"]+)" type="tts">(?P<name>.+)</annotation>\s*$"#;
const ANNOTATION_KEYWORDS_PATTERN: &str =
    r#"^\s*<annotation cp="(?P<cp>[^"]+)">(?P<keywords>.+)</annotation>\s*$"#;

fn annotation_patterns() -> &'static (Regex, Regex) {
    static PATTERNS: OnceLock<(Regex, Regex)> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        (
            Regex::new(ANNOTATION_NAME_PATTERN).expect("annotation name pattern is valid"),
            Regex::new(ANNOTATION_KEYWORDS_PATTERN)
                .expect("annotation keywords pattern is valid"),
        )
    })
}

/// One locale's name and keywords for an emoji.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AnnotationEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Unqualified emoji sequence to [`AnnotationEntry`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AnnotationMapping {
    entries: IndexMap<String, AnnotationEntry>,
}

impl AnnotationMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AnnotationEntry> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, entry: AnnotationEntry) -> Option<AnnotationEntry> {
        self.entries.insert(key, entry)
    }

    /// Entry for `key`, created empty if absent.
    pub fn entry_mut(&mut self, key: &str) -> &mut AnnotationEntry {
        if !self.entries.contains_key(key) {
            self.entries.insert(key.to_string(), AnnotationEntry::default());
        }
        &mut self.entries[key]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationEntry)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Add every entry of `other`, replacing whole entries on key collision.
    pub fn merge_from(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}

impl FromIterator<(String, AnnotationEntry)> for AnnotationMapping {
    fn from_iter<T: IntoIterator<Item = (String, AnnotationEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AnnotationMapping {
    type Item = (String, AnnotationEntry);
    type IntoIter = indexmap::map::IntoIter<String, AnnotationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Right-biased union of two mappings: for keys present in both, `b`'s entry
/// wins as a whole.
pub fn merge(a: AnnotationMapping, b: AnnotationMapping) -> AnnotationMapping {
    let mut ret = a;
    ret.merge_from(b);
    ret
}

/// Fold [`merge`] over `mappings` in order; the last mapping defining a key
/// wins. No mappings give an empty mapping.
pub fn merge_all<I: IntoIterator<Item = AnnotationMapping>>(mappings: I) -> AnnotationMapping {
    mappings
        .into_iter()
        .fold(AnnotationMapping::new(), merge)
}

/// Parse the content of one CLDR annotation file. Lines that are not
/// annotations are ignored.
pub fn parse_annotations(content: &str) -> AnnotationMapping {
    let (name_re, keywords_re) = annotation_patterns();
    let mut mapping = AnnotationMapping::new();
    for line in content.lines() {
        if let Some(caps) = name_re.captures(line) {
            mapping.entry_mut(&caps["cp"]).name = caps["name"].to_string();
        } else if let Some(caps) = keywords_re.captures(line) {
            mapping.entry_mut(&caps["cp"]).keywords = caps["keywords"]
                .split('|')
                .map(|k| k.trim().to_string())
                .collect();
        }
    }
    log::trace!("parsed {} annotations", mapping.len());
    mapping
}

/// Read and parse a CLDR annotation file. `path` must be an existing regular
/// file.
pub fn parse_annotation_file<P: AsRef<Path>>(path: P) -> Result<AnnotationMapping> {
    let path = path.as_ref();
    let content = read_source_file(path)
        .chain_err_summary(|| format!("Could not load annotations from `{}`", path.display()))?;
    let mapping = parse_annotations(&content);
    log::debug!("{}: {} annotations", path.display(), mapping.len());
    Ok(mapping)
}
