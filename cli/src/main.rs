/*  Wordforge - password strength analysis and contextual wordlists
    Copyright (C) 2024 The wordforge developers

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::debug;

use wordforge::settings::{self, Settings};
use wordforge::strength::{Engine, EnginePreference, StrengthEstimator};

mod helpers;

/// Password strength analyzer and custom wordlist generator, for authorized security testing
/// and awareness.
#[derive(Parser, Debug)]
#[command(name = "wordforge", version, author, about)]
struct Cli {
    /// Log what the generator is doing, same as RUST_LOG=debug
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze password strength
    Analyze(AnalyzeArgs),
    /// Generate a custom wordlist
    Generate(GenerateArgs),
    /// Generate a wordlist and analyze a password
    Both(BothArgs),
    /// Print the effective settings in the settings file format
    Config,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Password to analyze
    #[arg(long)]
    password: String,

    /// User specific hints (names, company, pet, etc.)
    #[arg(long, num_args = 0..)]
    hints: Vec<String>,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub(crate) struct GenerateArgs {
    /// Comma/space separated keywords (name, nick, company, city)
    #[arg(long, default_value = "")]
    pub keywords: String,

    /// Date of birth like 2002-08-09 or 09-08-2002
    #[arg(long)]
    pub dob: Option<String>,

    /// Range like 2018-2025 or list like 20,21,2022 [default: 2015-2026]
    #[arg(long)]
    pub years: Option<String>,

    /// Leetspeak expansion [default: basic]
    #[arg(long, value_parser = ["off", "basic", "aggressive"])]
    pub leet: Option<String>,

    /// Comma separated suffixes [default: !,@,#,123,*]
    #[arg(long)]
    pub suffixes: Option<String>,

    /// Comma separated separators for joining keywords [default: _,-,.]
    #[arg(long)]
    pub separators: Option<String>,

    /// Max candidates to output [default: 20000]
    #[arg(long)]
    pub max: Option<usize>,

    /// Output file path
    #[arg(long)]
    pub outfile: PathBuf,
}

#[derive(Args, Debug)]
struct BothArgs {
    /// Password to analyze
    #[arg(long)]
    password: String,

    /// User specific hints (names, company, pet, etc.)
    #[arg(long, num_args = 0..)]
    hints: Vec<String>,

    #[command(flatten)]
    generate: GenerateArgs,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn run(cli: Cli, settings: Settings, estimator: &dyn StrengthEstimator) -> anyhow::Result<()> {
    match cli.command {
        Command::Analyze(args) => {
            let output = helpers::analyze(estimator, &args.password, &args.hints, args.json)?;
            print!("{output}");
        }
        Command::Generate(args) => {
            let written = helpers::generate(&settings.generate, &args)?;
            println!("[+] Wrote {} candidates to {}", written, args.outfile.display());
        }
        Command::Both(args) => {
            let written = helpers::generate(&settings.generate, &args.generate)?;
            println!(
                "[+] Wrote {} candidates to {}",
                written,
                args.generate.outfile.display()
            );

            let summary = helpers::analyze(estimator, &args.password, &args.hints, true)?;
            println!("\nAnalysis summary:");
            print!("{summary}");
        }
        Command::Config => {
            print!("{}", settings.to_toml()?);
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match settings::read_config(&env_path("HOME"), &env_path("XDG_CONFIG_HOME"))
        .context("failed to read settings")
    {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(1);
        }
    };

    // the settings are validated when read
    let preference =
        EnginePreference::from_setting(&settings.analyze.engine).unwrap_or(EnginePreference::Auto);
    let engine = Engine::probe(preference);
    debug!("strength engine: {:?}", engine);
    let estimator = engine.estimator();

    if let Err(err) = run(cli, settings, estimator.as_ref()) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
