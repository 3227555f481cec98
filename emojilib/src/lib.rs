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

#![deny(
    rustdoc::redundant_explicit_links,
    unsafe_op_in_unsafe_fn,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::as_underscore,
    clippy::assertions_on_result_states,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
)]
#![allow(clippy::option_if_let_else, clippy::missing_const_for_fn)]
#![doc = include_str!("../README.md")]
//!
//! ## Description
//!
//! A crate that turns Unicode and CLDR emoji data into emoji picker assets:
//! - Parse `emoji-test.txt` into an [`EmojiGrouping`] of base emoji and
//!   their skin tone / hair style variants (see module [`emoji`])
//! - Parse CLDR annotation files into an [`AnnotationMapping`] and merge
//!   several of them for one locale (see module [`annotations`])
//! - Write the grouping joined with one locale's annotations in the
//!   line-oriented asset format (see [`emoji::output`])
//!
//! Other exports are
//! - An [`Error`] type shared by the parsers and their callers (see module
//!   [`error`])
//! - A [`log`] backend printing to standard error (see
//!   [`utils::logging::StderrLogger`])

pub mod annotations;
pub use annotations::{
    merge, merge_all, parse_annotation_file, parse_annotations, AnnotationEntry,
    AnnotationMapping,
};
pub mod emoji;
pub use emoji::{
    emoji_data_to_string, parse_emoji_test, parse_emoji_test_file, write_emoji_data,
    write_emoji_data_file, Category, Emoji, EmojiGrouping, EmojiSet,
};
pub mod error;
pub use error::*;
pub mod utils;
pub use utils::logging::{LogLevel, StderrLogger};

#[macro_use]
extern crate serde_derive;
pub extern crate indexmap;
pub extern crate log;
