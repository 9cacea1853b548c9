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

mod ui;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use dicephrase::config::{self, Config};
use dicephrase::{entropy_bits, generator, wordlist, DicewareError};
use env_logger::Env;
use log::{error, info, warn};
use rand::rngs::OsRng;

#[derive(Parser)]
#[command(
    name = "dicephrase",
    version,
    author,
    about = "Diceware passphrase generator"
)]
struct Cli {
    /// Number of passphrases to print
    #[arg(
        short = 'c',
        long,
        default_value_t = config::DEFAULT_COUNT as u32,
        value_parser = clap::value_parser!(u32).range(1..=config::MAX_COUNT as i64)
    )]
    count: u32,

    /// Word list with one NUMBER<TAB>WORD entry per line
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file: Option<PathBuf>,

    /// Number of words in each passphrase
    #[arg(
        short = 'n',
        long = "words",
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(0..=config::MAX_WORDS as i64)
    )]
    words: u32,

    /// Print list, sampling and entropy details to stderr
    #[arg(short, long)]
    stats: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(cli.verbosity.log_level_filter())
        .parse_env(Env::new().filter("DICEPHRASE_LOG"))
        .init();

    let config = match Config::new(cli.file, cli.words as usize, cli.count as usize, cli.stats) {
        Ok(config) => config,
        Err(why @ DicewareError::MissingArgument(_)) => {
            error!("{why}");
            Cli::command().write_help(&mut io::stderr()).ok();
            return ExitCode::FAILURE;
        }
        Err(why) => {
            error!("{why}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            error!("{why:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let list = wordlist::load(&config.path).context("Failed to load word list")?;

    let entropy = entropy_bits(list.len(), config.word_count);
    info!(
        "{} entries, {} words per passphrase, {:.1} bits of entropy",
        list.len(),
        config.word_count,
        entropy
    );
    if entropy < ui::MIN_SAFE_ENTROPY {
        warn!(
            "Passphrases carry only {:.1} bits of entropy (at least {} recommended)",
            entropy,
            ui::MIN_SAFE_ENTROPY
        );
    }

    let mut stdout = io::stdout().lock();
    for _ in 0..config.count {
        let passphrase = generator::generate(&list, config.word_count, &mut OsRng)
            .context("Failed to generate passphrase")?;
        stdout.write_all(passphrase.as_bytes())?;
    }
    stdout.flush()?;

    if config.stats {
        let info = ui::ReportInfo {
            path: &config.path,
            entries: list.len(),
            word_count: config.word_count,
            count: config.count,
            entropy,
        };
        let options = ui::DisplayOptions {
            unicode_support: ui::detect_unicode_support(),
            color_support: ui::detect_color_support(),
        };
        ui::display_report(&info, &options)?;
    }

    Ok(())
}
