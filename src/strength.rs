use std::fmt::Write;

use log::debug;
use serde::{Deserialize, Serialize};

pub use crate::error::{Error, Result};

/// Name reported by the entropy fallback estimator.
pub const ENTROPY_FALLBACK_ENGINE: &str = "entropy_fallback";
/// Name reported by the zxcvbn estimator.
pub const ZXCVBN_ENGINE: &str = "zxcvbn";

/// Size of the printable ascii alphabet the fallback assumes every character is drawn from.
const PRINTABLE_CHARSET: f64 = 94.0;

const FALLBACK_WARNING: &str = "Using fallback estimator. Install 'zxcvbn' for richer results.";
const FALLBACK_SUGGESTIONS: [&str; 3] = [
    "Use longer passphrases (3–5+ random words).",
    "Avoid personal info and common patterns.",
    "Include variety (case, digits, symbols) but prioritize length.",
];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

/// Human readable crack time estimates for the four attack scenarios zxcvbn models, slowest
/// attacker first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CrackTimesDisplay {
    pub online_throttling_100_per_hour: String,
    pub online_no_throttling_10_per_second: String,
    pub offline_slow_hashing_1e4_per_second: String,
    pub offline_fast_hashing_1e10_per_second: String,
}

impl CrackTimesDisplay {
    /// Scenario names and estimates in the order they are reported.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            (
                "online_throttling_100_per_hour",
                self.online_throttling_100_per_hour.as_str(),
            ),
            (
                "online_no_throttling_10_per_second",
                self.online_no_throttling_10_per_second.as_str(),
            ),
            (
                "offline_slow_hashing_1e4_per_second",
                self.offline_slow_hashing_1e4_per_second.as_str(),
            ),
            (
                "offline_fast_hashing_1e10_per_second",
                self.offline_fast_hashing_1e10_per_second.as_str(),
            ),
        ]
    }
}

/// The outcome of estimating the strength of one password.
///
/// Which of the metric fields are set depends on the engine, zxcvbn fills in the crack times and
/// guesses, the fallback the entropy estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub engine: String,
    /// 0 is very weak, 4 is very strong.
    pub score: u8,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub crack_times_display: Option<CrackTimesDisplay>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub guesses_log10: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub entropy_bits_est: Option<f64>,
    pub feedback: Feedback,
}

impl StrengthResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Something that can judge how hard a password is to guess.
pub trait StrengthEstimator {
    /// The name that ends up in the `engine` field of the results.
    fn name(&self) -> &'static str;

    /// Estimates the strength of `password`. `hints` are words connected to the user, like
    /// names or places, that an attacker is likely to try.
    fn estimate(&self, password: &str, hints: &[String]) -> StrengthResult;
}

/// Rough entropy of a password in bits, assuming every character is picked from the printable
/// ascii characters.
pub fn entropy_estimate(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }
    password.chars().count() as f64 * PRINTABLE_CHARSET.log2()
}

/// Maps an entropy estimate in bits to the 0 to 4 score scale.
pub fn score_from_entropy(bits: f64) -> u8 {
    if bits < 28.0 {
        0
    } else if bits < 36.0 {
        1
    } else if bits < 60.0 {
        2
    } else if bits < 80.0 {
        3
    } else {
        4
    }
}

/// Estimator used when zxcvbn isn't available, only looks at the length of the password.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropyFallback {}

impl StrengthEstimator for EntropyFallback {
    fn name(&self) -> &'static str {
        ENTROPY_FALLBACK_ENGINE
    }

    fn estimate(&self, password: &str, _hints: &[String]) -> StrengthResult {
        let bits = entropy_estimate(password);
        StrengthResult {
            engine: self.name().to_owned(),
            score: score_from_entropy(bits),
            crack_times_display: None,
            guesses_log10: None,
            entropy_bits_est: Some((bits * 100.0).round() / 100.0),
            feedback: Feedback {
                warning: Some(FALLBACK_WARNING.to_owned()),
                suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            },
        }
    }
}

/// Estimator backed by the zxcvbn crate, which also penalizes dictionary words, keyboard
/// patterns, dates and the user's own hints.
#[cfg(feature = "zxcvbn")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Zxcvbn {}

#[cfg(feature = "zxcvbn")]
impl StrengthEstimator for Zxcvbn {
    fn name(&self) -> &'static str {
        ZXCVBN_ENGINE
    }

    fn estimate(&self, password: &str, hints: &[String]) -> StrengthResult {
        let user_inputs: Vec<&str> = hints.iter().map(String::as_str).collect();

        match zxcvbn::zxcvbn(password, &user_inputs) {
            Ok(entropy) => {
                let times = entropy.crack_times();
                let crack_times_display = CrackTimesDisplay {
                    online_throttling_100_per_hour: times
                        .online_throttling_100_per_hour()
                        .to_string(),
                    online_no_throttling_10_per_second: times
                        .online_no_throttling_10_per_second()
                        .to_string(),
                    offline_slow_hashing_1e4_per_second: times
                        .offline_slow_hashing_1e4_per_second()
                        .to_string(),
                    offline_fast_hashing_1e10_per_second: times
                        .offline_fast_hashing_1e10_per_second()
                        .to_string(),
                };

                let feedback = match entropy.feedback() {
                    Some(fb) => Feedback {
                        warning: fb.warning().map(|w| w.to_string()),
                        suggestions: fb.suggestions().iter().map(|s| s.to_string()).collect(),
                    },
                    None => Feedback::default(),
                };

                StrengthResult {
                    engine: self.name().to_owned(),
                    score: entropy.score(),
                    crack_times_display: Some(crack_times_display),
                    guesses_log10: Some(entropy.guesses_log10()),
                    entropy_bits_est: None,
                    feedback,
                }
            }
            // zxcvbn refuses blank passwords
            Err(err) => StrengthResult {
                engine: self.name().to_owned(),
                score: 0,
                crack_times_display: None,
                guesses_log10: Some(0.0),
                entropy_bits_est: None,
                feedback: Feedback {
                    warning: Some(err.to_string()),
                    suggestions: vec![],
                },
            },
        }
    }
}

/// Which estimator the user asked for in the settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnginePreference {
    /// The best engine available.
    Auto,
    /// Always the entropy fallback.
    Entropy,
}

impl EnginePreference {
    pub fn from_setting(value: &str) -> Result<EnginePreference> {
        match value.trim().to_lowercase().as_str() {
            "auto" | "" => Ok(EnginePreference::Auto),
            "entropy" | ENTROPY_FALLBACK_ENGINE => Ok(EnginePreference::Entropy),
            other => Err(Error::InvalidChoice(format!(
                "engine '{other}', expected auto or entropy"
            ))),
        }
    }
}

/// The estimators that can be built into the program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Engine {
    Zxcvbn,
    EntropyFallback,
}

impl Engine {
    /// Finds out once which estimator this build can use.
    pub fn probe(preference: EnginePreference) -> Engine {
        let engine = match preference {
            EnginePreference::Entropy => Engine::EntropyFallback,
            EnginePreference::Auto if cfg!(feature = "zxcvbn") => Engine::Zxcvbn,
            EnginePreference::Auto => Engine::EntropyFallback,
        };
        debug!("using strength engine {:?}", engine);
        engine
    }

    pub fn estimator(self) -> Box<dyn StrengthEstimator> {
        match self {
            #[cfg(feature = "zxcvbn")]
            Engine::Zxcvbn => Box::new(Zxcvbn {}),
            #[cfg(not(feature = "zxcvbn"))]
            Engine::Zxcvbn => Box::new(EntropyFallback {}),
            Engine::EntropyFallback => Box::new(EntropyFallback {}),
        }
    }
}

/// Analyzes a password with the estimator that was selected at startup.
pub fn analyze_password(
    estimator: &dyn StrengthEstimator,
    password: &str,
    hints: &[String],
) -> StrengthResult {
    estimator.estimate(password, hints)
}

/// Renders a result the way it's shown on a terminal.
pub fn render_text(result: &StrengthResult) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Engine: {}", result.engine)?;
    writeln!(
        out,
        "Score : {} (0=very weak … 4=very strong)",
        result.score
    )?;

    if let Some(warning) = result.feedback.warning.as_ref().filter(|w| !w.is_empty()) {
        writeln!(out, "Warning: {warning}")?;
    }
    if !result.feedback.suggestions.is_empty() {
        writeln!(out, "Suggestions:")?;
        for suggestion in &result.feedback.suggestions {
            writeln!(out, " - {suggestion}")?;
        }
    }
    if let Some(crack_times) = &result.crack_times_display {
        writeln!(out, "Crack Times (est.):")?;
        for (scenario, display) in crack_times.entries() {
            writeln!(out, " - {scenario}: {display}")?;
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "tests/strength.rs"]
mod strength;
