use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use crate::error::{Error, Result};

/// Letters that have look-alike substitutions. The first entry of every list is the letter
/// itself.
pub const LEET_MAP: &[(char, &[char])] = &[
    ('a', &['a', '4', '@']),
    ('e', &['e', '3']),
    ('i', &['i', '1', '!']),
    ('o', &['o', '0']),
    ('s', &['s', '5', '$']),
    ('t', &['t', '7']),
    ('g', &['g', '9']),
    ('b', &['b', '8']),
    ('l', &['l', '1']),
];

/// Number of substitutions per letter that aggressive expansion considers, the letter included.
const AGGRESSIVE_CHOICES: usize = 3;

/// The substitution list for a character, matched case-insensitively.
pub fn leet_choices(c: char) -> Option<&'static [char]> {
    let lower = c.to_ascii_lowercase();
    LEET_MAP
        .iter()
        .find(|(letter, _)| *letter == lower)
        .map(|(_, choices)| *choices)
}

/// How much leetspeak expansion to apply to the base candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeetMode {
    /// No substitutions, the bases are used as they are.
    Off,
    /// One substitution per variant.
    #[default]
    Basic,
    /// Substitutions in several positions at once, capped per base.
    Aggressive,
}

impl LeetMode {
    pub fn is_aggressive(self) -> bool {
        self == LeetMode::Aggressive
    }
}

impl FromStr for LeetMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(LeetMode::Off),
            "basic" => Ok(LeetMode::Basic),
            "aggressive" => Ok(LeetMode::Aggressive),
            other => Err(Error::InvalidChoice(format!(
                "leet mode '{other}', expected one of off, basic, aggressive"
            ))),
        }
    }
}

impl fmt::Display for LeetMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LeetMode::Off => write!(f, "off"),
            LeetMode::Basic => write!(f, "basic"),
            LeetMode::Aggressive => write!(f, "aggressive"),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Upper cases the first letter of every word, where a word starts after any character that
/// isn't a letter, so `naman_patil` becomes `Naman_Patil` and `abc1def` becomes `Abc1Def`.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut previous_is_letter = false;
    for c in word.chars() {
        if previous_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_lowercase() || c.is_uppercase();
    }
    out
}

/// The casings of a word that people commonly use in passwords: as written, lower, upper,
/// capitalized and title case. Casings that coincide are only returned once.
pub fn case_variants(word: &str) -> BTreeSet<String> {
    BTreeSet::from([
        word.to_owned(),
        word.to_lowercase(),
        word.to_uppercase(),
        capitalize(word),
        title_case(word),
    ])
}

/// Moves `mask` to the next combination, the last position changing fastest. Returns false
/// when every combination has been visited.
fn next_combination(mask: &mut [usize], limits: &[usize]) -> bool {
    for i in (0..mask.len()).rev() {
        mask[i] += 1;
        if mask[i] < limits[i] {
            return true;
        }
        mask[i] = 0;
    }
    false
}

/// Leetspeak variants of a word, the word itself always included.
///
/// Without `aggressive` every substitutable letter gives one variant where only that letter is
/// replaced by its first look-alike, so the growth is linear in the word length.
///
/// With `aggressive` the combinations of the first three choices for every substitutable letter
/// are enumerated and stops as soon as `cap` variants have been produced. The first choice is the
/// lower case letter, so every substitutable letter of a combination is written from the map.
pub fn leet_variants(word: &str, aggressive: bool, cap: usize) -> BTreeSet<String> {
    let mut variants = BTreeSet::from([word.to_owned()]);

    let chars: Vec<char> = word.chars().collect();
    let positions: Vec<(usize, &'static [char])> = chars
        .iter()
        .enumerate()
        .filter_map(|(i, c)| leet_choices(*c).map(|choices| (i, choices)))
        .collect();

    if positions.is_empty() {
        return variants;
    }

    let mut produced: BTreeSet<String> = BTreeSet::new();

    if !aggressive {
        for (pos, choices) in &positions {
            if let Some(replacement) = choices.get(1) {
                let mut s = chars.clone();
                s[*pos] = *replacement;
                produced.insert(s.into_iter().collect());
            }
        }
    } else {
        let limits: Vec<usize> = positions
            .iter()
            .map(|(_, choices)| choices.len().min(AGGRESSIVE_CHOICES))
            .collect();
        let mut mask = vec![0; positions.len()];
        loop {
            let mut s = chars.clone();
            for ((pos, choices), choice) in positions.iter().zip(&mask) {
                s[*pos] = choices[*choice];
            }
            produced.insert(s.into_iter().collect());

            if produced.len() >= cap || !next_combination(&mut mask, &limits) {
                break;
            }
        }
    }

    variants.append(&mut produced);
    variants
}

#[cfg(test)]
#[path = "tests/variants.rs"]
mod variants;
