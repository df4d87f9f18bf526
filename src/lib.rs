//! This is the library part of wordforge. It estimates how strong a password is and generates
//! wordlists of likely passwords from what is known about a person, names, dates of birth and
//! favourite years, to be used in authorized security testing.

/// Splitting of user input into keywords, suffixes, separators and years.
pub mod tokens;
/// Case and leetspeak variants of a single word.
pub mod variants;
pub mod bases;
/// Wordlist generation and writing.
pub mod wordlist;
/// Password strength estimation, with zxcvbn or a simple entropy fallback.
pub mod strength;
pub mod settings;

pub(crate) mod error;

pub use crate::error::{Error, Result};
