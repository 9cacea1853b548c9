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

use rand::TryRngCore;
use zeroize::Zeroizing;

use crate::error::{DicewareError, Result};
use crate::wordlist::WordList;

const SEPARATOR: char = ' ';

/// Draws `word_count` words from `list` with replacement and renders them as
/// `word1 word2 ... wordN\n`. A `word_count` of zero yields an empty string.
///
/// Any failure of `rng` aborts the whole passphrase.
pub fn generate<R>(list: &WordList, word_count: usize, rng: &mut R) -> Result<Zeroizing<String>>
where
    R: TryRngCore + ?Sized,
{
    if word_count == 0 {
        return Ok(Zeroizing::new(String::new()));
    }

    // Sized up front so the buffer is never reallocated with a copy left behind.
    let capacity = word_count * (list.longest_word() + 1);
    let mut passphrase = Zeroizing::new(String::with_capacity(capacity));

    for i in 0..word_count {
        let position = uniform_index(rng, list.len())?;

        if i > 0 {
            passphrase.push(SEPARATOR);
        }
        passphrase.push_str(&list.entries()[position].word);
    }
    passphrase.push('\n');

    Ok(passphrase)
}

/// Uniform draw from `[0, len - 1]`.
///
/// Draws landing in the incomplete last block of the 64-bit range are
/// rejected so every position has the same probability.
pub(crate) fn uniform_index<R>(rng: &mut R, len: usize) -> Result<usize>
where
    R: TryRngCore + ?Sized,
{
    debug_assert!(len > 0);

    let span = u64::MAX as u128 + 1;
    let len = len as u128;
    let rejection_threshold = span - span % len;

    loop {
        let draw = rng
            .try_next_u64()
            .map_err(|e| DicewareError::Random(e.to_string()))?;

        if (draw as u128) < rejection_threshold {
            return Ok((draw as u128 % len) as usize);
        }
    }
}

pub fn entropy_bits(list_len: usize, word_count: usize) -> f64 {
    word_count as f64 * (list_len as f64).log2()
}
