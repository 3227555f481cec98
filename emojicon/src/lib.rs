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

//! Command line driver for building emoji picker assets.
//!
//! This crate resolves where things live in an extracted CLDR release,
//! which annotation files belong to which locale, and where outputs go. The
//! parsing and writing is done in the `emojilib` crate.

#[macro_use]
extern crate serde_derive;

pub use emojilib::{self, Error, ErrorKind, Result, ResultIntoError};

pub mod args;
pub mod cldr;
pub mod conf;
pub mod subcommands;

pub use cldr::CldrTree;
pub use conf::Settings;
