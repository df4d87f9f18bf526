use std::collections::BTreeSet;

use crate::tokens::dob_digit_runs;
use crate::variants::case_variants;

/// Builds the base candidates that leetspeak, years and suffixes are later applied to.
///
/// Every keyword contributes its case variants, every pair of keywords is joined with every
/// separator in both orders, and the digit runs of the date of birth are added unchanged.
pub fn build_bases(
    keywords: &[String],
    dob: Option<&str>,
    separators: &[String],
) -> BTreeSet<String> {
    let mut bases = BTreeSet::new();
    let keywords: Vec<&str> = keywords
        .iter()
        .map(String::as_str)
        .filter(|k| !k.is_empty())
        .collect();

    for keyword in &keywords {
        bases.extend(case_variants(keyword));
    }

    for sep in separators {
        for (i, first) in keywords.iter().enumerate() {
            for second in &keywords[i + 1..] {
                bases.insert(format!("{first}{sep}{second}"));
                bases.insert(format!("{second}{sep}{first}"));
            }
        }
    }

    if let Some(dob) = dob {
        bases.extend(dob_digit_runs(dob));
    }

    bases
}

#[cfg(test)]
#[path = "tests/bases.rs"]
mod bases;
