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

//! Layout of an extracted CLDR release.
//!
//! ```text
//! <cldr_dir>/common/annotations/<locale>.xml
//! <cldr_dir>/common/annotationsDerived/<locale>.xml
//! <cldr_dir>/tools/cldr-code/src/main/resources/org/unicode/cldr/util/data/emoji/emoji-test.txt
//! ```

use std::path::{Path, PathBuf};

use emojilib::{
    annotations::{merge_all, parse_annotation_file, AnnotationMapping},
    utils::fs::ensure_dir,
    EmojiGrouping,
};
use indexmap::IndexMap;

use crate::{Error, ErrorKind, Result, ResultIntoError};

/// Locale without annotations; its output carries bare emoji.
pub const ROOT_LOCALE: &str = "root";

pub const ANNOTATIONS_DIR: &str = "common/annotations";
pub const ANNOTATIONS_DERIVED_DIR: &str = "common/annotationsDerived";
pub const EMOJI_TEST_PATH: &str =
    "tools/cldr-code/src/main/resources/org/unicode/cldr/util/data/emoji/emoji-test.txt";

const ANNOTATION_FILE_EXTENSION: &str = "xml";

#[derive(Clone, Debug)]
pub struct CldrTree {
    root: PathBuf,
}

impl CldrTree {
    pub fn new<P: Into<PathBuf>>(root: P) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)
            .chain_err_summary(|| format!("Could not open CLDR release at `{}`", root.display()))
            .chain_err_details(|| {
                "Set `cldr_dir` in the configuration file or pass `--cldr-dir`."
            })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn annotations_dir(&self) -> PathBuf {
        self.root.join(ANNOTATIONS_DIR)
    }

    pub fn derived_dir(&self) -> PathBuf {
        self.root.join(ANNOTATIONS_DERIVED_DIR)
    }

    pub fn emoji_test_path(&self) -> PathBuf {
        self.root.join(EMOJI_TEST_PATH)
    }

    pub fn emoji_grouping(&self) -> Result<EmojiGrouping> {
        let grouping = emojilib::parse_emoji_test_file(self.emoji_test_path())?;
        log::debug!("emoji-test.txt: {} emoji", grouping.len());
        Ok(grouping)
    }

    /// Merged annotations of `locale`, derived annotations taking
    /// precedence. [`ROOT_LOCALE`] is always empty.
    pub fn locale_annotations(&self, locale: &str) -> Result<AnnotationMapping> {
        if locale == ROOT_LOCALE {
            return Ok(AnnotationMapping::new());
        }
        validate_locale(locale)?;
        let file_name = format!("{}.{}", locale, ANNOTATION_FILE_EXTENSION);
        let sources = [
            self.annotations_dir().join(&file_name),
            self.derived_dir().join(&file_name),
        ];
        let existing = sources.iter().filter(|p| p.exists()).collect::<Vec<_>>();
        if existing.is_empty() {
            return Err(Error::new(format!(
                "No annotations for locale `{}` in `{}`.",
                locale,
                self.root.display()
            ))
            .set_kind(ErrorKind::NotFound));
        }
        if existing.len() < sources.len() {
            for missing in sources.iter().filter(|p| !p.exists()) {
                log::warn!("{}: {} does not exist", locale, missing.display());
            }
        }
        let mappings = existing
            .into_iter()
            .map(parse_annotation_file)
            .collect::<Result<Vec<_>>>()?;
        Ok(merge_all(mappings))
    }

    /// Merged annotations of every locale in the release. [`ROOT_LOCALE`]
    /// comes first and is empty; the rest follow in file name order.
    pub fn all_locale_annotations(
        &self,
        skip_regional: bool,
    ) -> Result<IndexMap<String, AnnotationMapping>> {
        let mut ret = IndexMap::new();
        ret.insert(ROOT_LOCALE.to_string(), AnnotationMapping::new());
        for (locale, mapping) in parse_annotation_dir(&self.annotations_dir())? {
            ret.insert(locale, mapping);
        }
        let derived_dir = self.derived_dir();
        if derived_dir.exists() {
            for (locale, mapping) in parse_annotation_dir(&derived_dir)? {
                let entry = ret.entry(locale).or_default();
                entry.merge_from(mapping);
            }
        } else {
            log::warn!("{} does not exist", derived_dir.display());
        }
        // CLDR ships a root.xml with placeholder annotations.
        ret.insert(ROOT_LOCALE.to_string(), AnnotationMapping::new());
        if skip_regional {
            ret.retain(|locale, _| !locale.contains('_'));
        }
        Ok(ret)
    }
}

/// Parse every `*.xml` file directly inside `path`, in file name order. The
/// locale is the file stem.
pub fn parse_annotation_dir(path: &Path) -> Result<Vec<(String, AnnotationMapping)>> {
    ensure_dir(path)?;
    let mut files = std::fs::read_dir(path)
        .chain_err_summary(|| format!("Could not list `{}`", path.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    files.retain(|p| {
        p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(ANNOTATION_FILE_EXTENSION)
    });
    files.sort();
    let mut ret = Vec::with_capacity(files.len());
    for file in files {
        let Some(locale) = file.file_stem().and_then(|s| s.to_str()) else {
            log::warn!("skipping {}: file name is not UTF-8", file.display());
            continue;
        };
        let locale = locale.to_string();
        ret.push((locale, parse_annotation_file(&file)?));
    }
    log::debug!("{}: {} annotation files", path.display(), ret.len());
    Ok(ret)
}

fn validate_locale(locale: &str) -> Result<()> {
    if locale.is_empty()
        || !locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(Error::new(format!("Invalid locale `{}`.", locale))
            .set_details("Expected a CLDR locale code such as `en` or `de_CH`.")
            .set_kind(ErrorKind::InvalidInput));
    }
    Ok(())
}
