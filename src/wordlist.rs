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

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{DicewareError, Result};

/// One `NUMBER<TAB>WORD` line of a diceware file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DicewareEntry {
    /// The dice code as written in the file. Selection never looks at it.
    pub index: i64,
    pub word: String,
}

impl DicewareEntry {
    pub fn new(index: i64, word: impl Into<String>) -> Self {
        Self {
            index,
            word: word.into(),
        }
    }

    /// Parses a single line, splitting on the first tab.
    ///
    /// A prefix that is not an integer becomes index `0` instead of an
    /// error. A line without a tab fails with [`DicewareError::MissingTab`].
    pub fn parse_line(line: &str, line_no: usize) -> Result<Self> {
        let (prefix, word) = line
            .split_once('\t')
            .ok_or_else(|| DicewareError::MissingTab {
                line: line_no,
                content: line.to_string(),
            })?;

        let word = word.trim();
        if word.is_empty() {
            return Err(DicewareError::EmptyWord { line: line_no });
        }

        let index = prefix.trim().parse().unwrap_or(0);

        Ok(Self::new(index, word))
    }
}

/// Ordered, non-empty collection of entries in file order.
#[derive(Debug, Clone)]
pub struct WordList {
    entries: Vec<DicewareEntry>,
    longest_word: usize,
}

impl WordList {
    /// Returns `None` for an empty vector; a word list always has at least
    /// one entry to draw from.
    pub fn from_entries(entries: Vec<DicewareEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let longest_word = entries.iter().map(|e| e.word.len()).max().unwrap_or(0);

        Some(Self {
            entries,
            longest_word,
        })
    }

    pub fn parse<R: BufRead>(reader: R, origin: &Path) -> Result<Self> {
        let mut entries = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| DicewareError::Io {
                path: origin.to_path_buf(),
                source,
            })?;

            if line.trim().is_empty() {
                continue;
            }

            entries.push(DicewareEntry::parse_line(&line, i + 1)?);
        }

        Self::from_entries(entries).ok_or_else(|| DicewareError::EmptyList {
            path: origin.to_path_buf(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DicewareEntry] {
        &self.entries
    }

    pub fn word(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(|e| e.word.as_str())
    }

    pub fn longest_word(&self) -> usize {
        self.longest_word
    }
}

/// Reads a diceware file from disk.
pub fn load(path: impl AsRef<Path>) -> Result<WordList> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| DicewareError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let list = WordList::parse(BufReader::new(file), path)?;
    debug!("Loaded {} entries from {}", list.len(), path.display());

    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn parse_str(data: &str) -> Result<WordList> {
        WordList::parse(Cursor::new(data), Path::new("<memory>"))
    }

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "dicephrase-{}-{}.txt",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_wordlist_parse_in_order() {
        let list = parse_str("1\tapple\n2\tbanana\n").unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(
            list.entries(),
            &[
                DicewareEntry::new(1, "apple"),
                DicewareEntry::new(2, "banana"),
            ]
        );
    }

    #[test]
    fn test_wordlist_load_from_disk() {
        let path = scratch_file("load", "11111\tabacus\n11112\tabdomen\n66666\tzoom\n");

        let list = load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(list.len(), 3);
        assert_eq!(list.word(0), Some("abacus"));
        assert_eq!(list.word(2), Some("zoom"));
        assert_eq!(list.entries()[2].index, 66666);
        assert_eq!(list.longest_word(), 7);
    }

    #[test]
    fn test_wordlist_missing_file() {
        let path = std::env::temp_dir().join("dicephrase-does-not-exist.txt");

        match load(&path) {
            Err(DicewareError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_wordlist_non_numeric_prefix_is_zero() {
        let list = parse_str("abc\tword\n\tbare\n").unwrap();

        assert_eq!(list.entries()[0], DicewareEntry::new(0, "word"));
        assert_eq!(list.entries()[1], DicewareEntry::new(0, "bare"));
    }

    #[test]
    fn test_wordlist_splits_on_first_tab() {
        let list = parse_str("7\tice\tcream\n").unwrap();

        assert_eq!(list.word(0), Some("ice\tcream"));
    }

    #[test]
    fn test_wordlist_missing_tab_fails() {
        let err = parse_str("1\tapple\n2 banana\n3\tcherry\n").unwrap_err();

        match err {
            DicewareError::MissingTab { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "2 banana");
            }
            other => panic!("expected a missing tab error, got {:?}", other),
        }
    }

    #[test]
    fn test_wordlist_empty_word_fails() {
        let err = parse_str("1\tapple\n2\t  \n").unwrap_err();

        assert!(matches!(err, DicewareError::EmptyWord { line: 2 }));
    }

    #[test]
    fn test_wordlist_skips_blank_lines_and_crlf() {
        let list = parse_str("1\tapple\r\n\r\n   \n2\tbanana\r\n").unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.word(0), Some("apple"));
        assert_eq!(list.word(1), Some("banana"));
    }

    #[test]
    fn test_wordlist_empty_input() {
        assert!(matches!(
            parse_str("\n\n"),
            Err(DicewareError::EmptyList { .. })
        ));
        assert!(WordList::from_entries(Vec::new()).is_none());
    }

    #[test]
    fn test_wordlist_invalid_utf8_is_io_error() {
        let bytes: &[u8] = b"1\tapple\n2\t\xff\xfe\n";
        let err = WordList::parse(Cursor::new(bytes), Path::new("<memory>")).unwrap_err();

        assert!(matches!(err, DicewareError::Io { .. }));
    }
}
