use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use tempfile::NamedTempFile;

pub use crate::error::{Error, Result};
use crate::bases::build_bases;
use crate::settings::GenerateSettings;
use crate::tokens::{parse_years, tokenize};
use crate::variants::{leet_variants, LeetMode};

/// Shortest candidate that is emitted.
pub const MIN_CANDIDATE_LEN: usize = 4;
/// Longest candidate that is emitted.
pub const MAX_CANDIDATE_LEN: usize = 64;
/// How many leetspeak variants aggressive mode may produce for a single base.
pub const LEET_CAP_PER_BASE: usize = 12;
pub const DEFAULT_MAX_CANDIDATES: usize = 20000;

/// Everything that controls the generation of one wordlist, already split into tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct WordlistRequest {
    pub keywords: Vec<String>,
    pub dob: Option<String>,
    pub years: Vec<String>,
    pub leet_mode: LeetMode,
    pub suffixes: Vec<String>,
    pub separators: Vec<String>,
    pub max_candidates: usize,
}

impl Default for WordlistRequest {
    fn default() -> Self {
        WordlistRequest {
            keywords: vec![],
            dob: None,
            years: vec![],
            leet_mode: LeetMode::default(),
            suffixes: vec![],
            separators: vec![],
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl WordlistRequest {
    /// Builds a request from the free text lists a user types, `keywords` like `"naman,patil"`
    /// and the year, suffix and separator expressions in `settings`.
    pub fn from_raw(
        keywords: Option<&str>,
        dob: Option<&str>,
        settings: &GenerateSettings,
    ) -> Result<WordlistRequest> {
        let dob = dob.filter(|d| !d.is_empty());
        Ok(WordlistRequest {
            keywords: tokenize(keywords),
            dob: dob.map(String::from),
            years: parse_years(Some(settings.years.as_str()), dob),
            leet_mode: settings.leet.parse()?,
            suffixes: tokenize(Some(settings.suffixes.as_str())),
            separators: tokenize(Some(settings.separators.as_str())),
            max_candidates: settings.max,
        })
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn maybe_add(out: &mut HashSet<String>, candidate: String) {
    let len = char_len(&candidate);
    if (MIN_CANDIDATE_LEN..=MAX_CANDIDATE_LEN).contains(&len) {
        out.insert(candidate);
    }
}

/// Orders shorter candidates first, candidates of the same length lexicographically.
pub fn by_length_then_lexical(a: &str, b: &str) -> Ordering {
    char_len(a)
        .cmp(&char_len(b))
        .then_with(|| a.cmp(b))
}

fn expand_bases(
    bases: &BTreeSet<String>,
    leet_mode: LeetMode,
    max_candidates: usize,
) -> BTreeSet<String> {
    let aggressive = leet_mode.is_aggressive();
    let mut expanded = BTreeSet::new();

    for base in bases {
        if leet_mode == LeetMode::Off {
            expanded.insert(base.clone());
        } else {
            expanded.append(&mut leet_variants(base, aggressive, LEET_CAP_PER_BASE));
        }

        if expanded.len() > max_candidates {
            debug!(
                "stopped expanding at base '{}', {} candidates already",
                base,
                expanded.len()
            );
            break;
        }
    }

    expanded
}

/// Generates the candidate wordlist for a request.
///
/// The bases are expanded with leetspeak and every expanded candidate is emitted alone, with
/// each year appended and prepended, with each suffix appended and with each year followed by
/// each suffix appended. Only candidates between [`MIN_CANDIDATE_LEN`] and
/// [`MAX_CANDIDATE_LEN`] characters are kept.
///
/// The result has no duplicates, is ordered by length and then lexicographically, and holds at
/// most `max_candidates` entries. The same request always gives the same list.
pub fn generate_wordlist(request: &WordlistRequest) -> Vec<String> {
    let bases = build_bases(
        &request.keywords,
        request.dob.as_deref(),
        &request.separators,
    );
    debug!("built {} base candidates", bases.len());

    let expanded = expand_bases(&bases, request.leet_mode, request.max_candidates);
    debug!(
        "{} candidates after {} leetspeak expansion",
        expanded.len(),
        request.leet_mode
    );

    let mut out = HashSet::new();

    for candidate in &expanded {
        maybe_add(&mut out, candidate.clone());
    }

    for candidate in &expanded {
        for year in &request.years {
            maybe_add(&mut out, format!("{candidate}{year}"));
            maybe_add(&mut out, format!("{year}{candidate}"));
        }
    }

    for candidate in &expanded {
        for suffix in &request.suffixes {
            maybe_add(&mut out, format!("{candidate}{suffix}"));
        }
    }

    for candidate in &expanded {
        for year in &request.years {
            for suffix in &request.suffixes {
                maybe_add(&mut out, format!("{candidate}{year}{suffix}"));
            }
        }
    }

    let mut candidates: Vec<String> = out.into_iter().collect();
    candidates.sort_by(|a, b| by_length_then_lexical(a, b));
    if candidates.len() > request.max_candidates {
        info!(
            "truncating {} candidates to {}",
            candidates.len(),
            request.max_candidates
        );
        candidates.truncate(request.max_candidates);
    }

    candidates
}

/// Writes the candidates to `path`, one per line.
///
/// The list is written to a temporary file next to `path` that is then moved in place, so a
/// failed run never leaves a half written wordlist behind.
pub fn write_wordlist(path: &Path, candidates: &[String]) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        for candidate in candidates {
            writeln!(writer, "{candidate}")?;
        }
        writer.flush()?;
    }

    temp_file.persist(path)?;
    info!("wrote {} candidates to {}", candidates.len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/wordlist.rs"]
mod wordlist;
