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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a passphrase from being produced.
///
/// None of these are recoverable: the binary reports them and exits.
#[derive(Debug, Error)]
pub enum DicewareError {
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: missing tab between number and word: {content:?}")]
    MissingTab { line: usize, content: String },

    #[error("line {line}: no word after the tab")]
    EmptyWord { line: usize },

    #[error("word list {} contains no entries", path.display())]
    EmptyList { path: PathBuf },

    #[error("secure random source failed: {0}")]
    Random(String),
}

pub type Result<T, E = DicewareError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_keeps_source() {
        let err = DicewareError::Io {
            path: PathBuf::from("words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        assert_eq!(err.to_string(), "failed to read word list words.txt");
        assert_eq!(err.source().map(|s| s.to_string()), Some("gone".into()));
    }

    #[test]
    fn test_missing_tab_message() {
        let err = DicewareError::MissingTab {
            line: 3,
            content: "11113 abbey".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "line 3: missing tab between number and word: \"11113 abbey\""
        );
    }
}
