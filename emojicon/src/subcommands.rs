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

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use emojilib::{annotations::AnnotationMapping, EmojiGrouping};

use crate::{
    args::PathOrStdio,
    cldr::CldrTree,
    conf::{self, Settings},
    Error, ErrorKind, Result, ResultIntoError,
};

/// Output file of `locale` inside `dir`.
pub fn locale_output_path(dir: &Path, locale: &str) -> PathBuf {
    dir.join(format!("{}.txt", locale))
}

pub fn build(
    settings: &Settings,
    version: &str,
    locale: &str,
    output: Option<PathOrStdio>,
) -> Result<()> {
    let tree = CldrTree::new(&settings.cldr_dir)?;
    let grouping = tree.emoji_grouping()?;
    let mapping = tree.locale_annotations(locale)?;
    match output {
        Some(PathOrStdio::Stdio) => {
            let stdout = std::io::stdout();
            let mut stdout = stdout.lock();
            emojilib::write_emoji_data(&mut stdout, &grouping, &mapping)?;
            stdout.flush()?;
        }
        Some(PathOrStdio::Path(path)) => {
            emojilib::write_emoji_data_file(&path, &grouping, &mapping)?;
            log::info!("{}: wrote {}", locale, path.display());
        }
        None => {
            let dir = settings.output_dir_for(version)?;
            std::fs::create_dir_all(&dir)
                .chain_err_summary(|| format!("Could not create `{}`", dir.display()))?;
            let path = locale_output_path(&dir, locale);
            emojilib::write_emoji_data_file(&path, &grouping, &mapping)?;
            log::info!("{}: wrote {}", locale, path.display());
        }
    }
    Ok(())
}

pub fn build_all(settings: &Settings, version: &str) -> Result<()> {
    let dir = settings.output_dir_for(version)?;
    let tree = CldrTree::new(&settings.cldr_dir)?;
    let grouping = tree.emoji_grouping()?;
    let locales = tree
        .all_locale_annotations(settings.skip_regional_locales)?
        .into_iter()
        .collect::<Vec<_>>();
    std::fs::create_dir_all(&dir)
        .chain_err_summary(|| format!("Could not create `{}`", dir.display()))?;

    let workers = std::thread::available_parallelism()
        .map(usize::from)
        .unwrap_or(1)
        .clamp(1, locales.len().max(1));
    let chunk_size = ((locales.len() + workers - 1) / workers).max(1);
    log::debug!(
        "building {} locales with {} worker threads",
        locales.len(),
        workers
    );

    let written = crossbeam::scope(|s| {
        let handles = locales
            .chunks(chunk_size)
            .map(|chunk| {
                let (grouping, dir) = (&grouping, &dir);
                s.spawn(move |_| write_locales(dir, grouping, chunk))
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|_| Err(worker_panicked())))
            .collect::<Result<Vec<usize>>>()
    })
    .unwrap_or_else(|_| Err(worker_panicked()))?
    .into_iter()
    .sum::<usize>();

    log::info!("wrote {} locales to {}", written, dir.display());
    Ok(())
}

fn write_locales(
    dir: &Path,
    grouping: &EmojiGrouping,
    locales: &[(String, AnnotationMapping)],
) -> Result<usize> {
    for (locale, mapping) in locales {
        let path = locale_output_path(dir, locale);
        emojilib::write_emoji_data_file(&path, grouping, mapping)?;
        log::info!("{}: wrote {}", locale, path.display());
    }
    Ok(locales.len())
}

fn worker_panicked() -> Error {
    Error::new("A build worker thread panicked.").set_kind(ErrorKind::Bug)
}

pub fn stats(settings: &Settings) -> Result<()> {
    let tree = CldrTree::new(&settings.cldr_dir)?;
    let grouping = tree.emoji_grouping()?;
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    write_stats(&mut stdout, &grouping)?;
    Ok(())
}

/// One row per category: id, base count, variant count and display name,
/// then the totals.
pub fn write_stats<W: Write>(writer: &mut W, grouping: &EmojiGrouping) -> Result<()> {
    let stats = grouping.stats();
    let id_width = stats
        .iter()
        .map(|s| s.category.id().len())
        .max()
        .unwrap_or(0)
        .max("category".len());
    writeln!(
        writer,
        "{:<id_width$}  {:>6}  {:>8}  name",
        "category", "bases", "variants"
    )?;
    let (mut bases, mut variants) = (0, 0);
    for s in &stats {
        writeln!(
            writer,
            "{:<id_width$}  {:>6}  {:>8}  {}",
            s.category.id(),
            s.bases,
            s.variants,
            s.category.name()
        )?;
        bases += s.bases;
        variants += s.variants;
    }
    writeln!(writer, "{:<id_width$}  {:>6}  {:>8}", "total", bases, variants)?;
    writer.flush()?;
    Ok(())
}

pub fn clean(settings: &Settings) -> Result<()> {
    let dir = &settings.output_dir;
    if !dir.exists() {
        log::info!("{} does not exist, nothing to clean", dir.display());
        return Ok(());
    }
    std::fs::remove_dir_all(dir)
        .chain_err_summary(|| format!("Could not remove `{}`", dir.display()))?;
    log::info!("removed {}", dir.display());
    Ok(())
}

pub fn test_config(path: Option<PathBuf>) -> Result<()> {
    let config_path = match path {
        Some(path) => path,
        None => conf::get_config_file()?,
    };
    if !config_path.exists() {
        return Err(Error::new(format!(
            "Configuration file `{}` does not exist.",
            config_path.display()
        ))
        .set_kind(ErrorKind::Configuration));
    }
    Settings::validate(&config_path)?;
    println!("{}: OK", config_path.display());
    Ok(())
}
