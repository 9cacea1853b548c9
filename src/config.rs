// This file is part of Dicephrase.
//
// Copyright (c) 2025  René Coignard <contact@renecoignard.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::path::PathBuf;

use crate::error::{DicewareError, Result};

pub const DEFAULT_COUNT: usize = 1;
pub const MAX_COUNT: usize = 64 * 1024;
pub const MAX_WORDS: usize = 32;

/// Settings for one run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub word_count: usize,
    pub count: usize,
    pub stats: bool,
}

impl Config {
    /// `path` and a non-zero `word_count` are required.
    pub fn new(
        path: Option<PathBuf>,
        word_count: usize,
        count: usize,
        stats: bool,
    ) -> Result<Self> {
        let path = match path {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Err(DicewareError::MissingArgument("-f <PATH>")),
        };

        if word_count == 0 {
            return Err(DicewareError::MissingArgument("-n <WORDS>"));
        }

        Ok(Self {
            path,
            word_count,
            count,
            stats,
        })
    }
}
