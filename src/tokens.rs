use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref YEAR_RANGE: Regex = Regex::new(r"^\s*([0-9]{4})\s*-\s*([0-9]{4})\s*$").unwrap();
    static ref DOB_PART: Regex = Regex::new(r"[0-9]{2,4}").unwrap();
    static ref DOB_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Splits a free text list like `"naman, patil mumbai"` into its tokens, in the order they
/// were written. Runs of commas and whitespace count as one separator.
pub fn tokenize(raw: Option<&str>) -> Vec<String> {
    match raw {
        None => vec![],
        Some(raw) => raw
            .split(is_separator)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect(),
    }
}

fn is_year_token(token: &str) -> bool {
    (token.len() == 2 || token.len() == 4) && token.bytes().all(|b| b.is_ascii_digit())
}

/// Collects the year tokens to combine candidates with.
///
/// `years` is either a range like `2018-2025`, which yields every year in it, or a list like
/// `20,21,2022` where only 2 and 4 digit numbers are kept. Anything else is ignored rather than
/// reported.
///
/// `dob` contributes its 2 and 4 digit groups, and if the groups add up to at least eight digits
/// also the first eight of them as one token (so `09-08-2002` gives `09082002`).
///
/// The result is sorted as strings and has no duplicates.
pub fn parse_years(years: Option<&str>, dob: Option<&str>) -> Vec<String> {
    let mut out: BTreeSet<String> = BTreeSet::new();

    if let Some(years) = years {
        if let Some(caps) = YEAR_RANGE.captures(years) {
            // four ascii digits always parse
            let start: u32 = caps[1].parse().unwrap_or_default();
            let end: u32 = caps[2].parse().unwrap_or_default();
            out.extend((start..=end).map(|y| y.to_string()));
        } else {
            out.extend(
                years
                    .trim()
                    .split(is_separator)
                    .filter(|t| is_year_token(t))
                    .map(String::from),
            );
        }
    }

    if let Some(dob) = dob {
        let parts: Vec<&str> = DOB_PART.find_iter(dob).map(|m| m.as_str()).collect();
        let digits = parts.concat();
        if digits.len() >= 8 {
            out.insert(digits[..8].to_owned());
        }
        out.extend(
            parts
                .iter()
                .filter(|p| p.len() == 2 || p.len() == 4)
                .map(|p| p.to_string()),
        );
    }

    out.into_iter().collect()
}

/// All maximal digit runs in a date of birth, used as base candidates as-is.
pub fn dob_digit_runs(dob: &str) -> Vec<String> {
    DOB_RUN
        .find_iter(dob)
        .map(|m| m.as_str().to_owned())
        .collect()
}

#[cfg(test)]
#[path = "tests/tokens.rs"]
mod tokens;
