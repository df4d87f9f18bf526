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

use anyhow::Context;
use log::info;

use wordforge::settings::GenerateSettings;
use wordforge::strength::{analyze_password, render_text, StrengthEstimator};
use wordforge::wordlist::{generate_wordlist, write_wordlist, WordlistRequest};

use crate::GenerateArgs;

/// The generate settings with everything given on the command line taking precedence over the
/// settings file.
pub fn merge_generate_settings(
    settings: &GenerateSettings,
    args: &GenerateArgs,
) -> GenerateSettings {
    GenerateSettings {
        years: args.years.clone().unwrap_or_else(|| settings.years.clone()),
        leet: args.leet.clone().unwrap_or_else(|| settings.leet.clone()),
        suffixes: args
            .suffixes
            .clone()
            .unwrap_or_else(|| settings.suffixes.clone()),
        separators: args
            .separators
            .clone()
            .unwrap_or_else(|| settings.separators.clone()),
        max: args.max.unwrap_or(settings.max),
    }
}

/// Generates the wordlist and writes it to the output file, returns the number of candidates
/// written. Nothing is written until the whole list is generated.
pub fn generate(settings: &GenerateSettings, args: &GenerateArgs) -> anyhow::Result<usize> {
    let settings = merge_generate_settings(settings, args);
    let request =
        WordlistRequest::from_raw(Some(args.keywords.as_str()), args.dob.as_deref(), &settings)?;
    info!(
        "generating from {} keywords, {} years, {} suffixes",
        request.keywords.len(),
        request.years.len(),
        request.suffixes.len()
    );

    let candidates = generate_wordlist(&request);
    write_wordlist(&args.outfile, &candidates)
        .with_context(|| format!("failed to write {}", args.outfile.display()))?;

    Ok(candidates.len())
}

/// Analyzes the password and renders the result, as JSON or as text.
pub fn analyze(
    estimator: &dyn StrengthEstimator,
    password: &str,
    hints: &[String],
    json: bool,
) -> anyhow::Result<String> {
    let result = analyze_password(estimator, password, hints);
    if json {
        Ok(result.to_json()? + "\n")
    } else {
        Ok(render_text(&result)?)
    }
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_tests;
