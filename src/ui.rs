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

use anyhow::Result;
use console::{Style, Term};
use std::path::Path;

pub const MIN_SAFE_ENTROPY: f64 = 64.0;
pub const PARANOID_ENTROPY: f64 = 128.0;

pub const MIN_SAFE_WORD_COUNT: usize = 6;

pub struct ReportInfo<'a> {
    pub path: &'a Path,
    pub entries: usize,
    pub word_count: usize,
    pub count: usize,
    pub entropy: f64,
}

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Strong,
    Paranoid,
}

impl Strength {
    pub fn classify(entropy: f64) -> Self {
        if entropy >= PARANOID_ENTROPY {
            Strength::Paranoid
        } else if entropy >= MIN_SAFE_ENTROPY {
            Strength::Strong
        } else {
            Strength::Weak
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Strong => "Strong",
            Strength::Paranoid => "Paranoid",
        }
    }

    pub fn is_secure(self) -> bool {
        self != Strength::Weak
    }
}

// The report goes to stderr, so probe stderr rather than stdout.
pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stderr)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stderr).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn get_branch_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("├─", "└─")
    } else {
        ("|-", "`-")
    }
}

fn status_style(secure: bool, options: &DisplayOptions) -> Style {
    if !options.color_support {
        return Style::new();
    }

    if secure {
        Style::new().for_stderr().green()
    } else {
        Style::new().for_stderr().yellow()
    }
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

pub fn render_report(info: &ReportInfo, options: &DisplayOptions) -> Vec<String> {
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let (branch, last) = get_branch_symbols(options.unicode_support);

    let strength = Strength::classify(info.entropy);
    let entropy_style = status_style(strength.is_secure(), options);
    let entropy_status = if strength.is_secure() {
        check_ok
    } else {
        check_warn
    };

    let words_secure = info.word_count >= MIN_SAFE_WORD_COUNT;
    let words_style = status_style(words_secure, options);
    let words_status = if words_secure { check_ok } else { check_warn };

    vec![
        "Settings:".to_string(),
        format!(
            "  {} Wordlist   {} ({} {})",
            branch,
            info.path.display(),
            info.entries,
            plural(info.entries, "entry", "entries")
        ),
        format!("  {} Sampling   OS random, unbiased rejection", branch),
        format!(
            "  {} Output     {} x {} {}",
            last,
            info.count,
            info.word_count,
            plural(info.word_count, "word", "words")
        ),
        String::new(),
        "Stats:".to_string(),
        format!(
            "  {} Entropy    {} {} bits ({})",
            branch,
            entropy_style.apply_to(format!("[{}]", entropy_status)),
            entropy_style.apply_to(format!("{:.1}", info.entropy)),
            entropy_style.apply_to(strength.label())
        ),
        format!(
            "  {} Words      {} {} {}",
            last,
            words_style.apply_to(format!("[{}]", words_status)),
            words_style.apply_to(info.word_count),
            plural(info.word_count, "word", "words")
        ),
        String::new(),
        format!(
            "{} Security: {}",
            entropy_style.apply_to(format!("[{}]", entropy_status)),
            entropy_style.apply_to(strength.label())
        ),
    ]
}

pub fn display_report(info: &ReportInfo, options: &DisplayOptions) -> Result<()> {
    let term = Term::stderr();

    term.write_line("")?;
    for line in render_report(info, options) {
        term.write_line(&line)?;
    }

    Ok(())
}
