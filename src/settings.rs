use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

pub use crate::error::{Error, Result};

pub const DEFAULT_YEARS: &str = "2015-2026";
pub const DEFAULT_SUFFIXES: &str = "!,@,#,123,*";
pub const DEFAULT_SEPARATORS: &str = "_,-,.";

/// Defaults for wordlist generation, kept as the raw expressions a user would type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSettings {
    pub years: String,
    pub leet: String,
    pub suffixes: String,
    pub separators: String,
    pub max: usize,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        GenerateSettings {
            years: DEFAULT_YEARS.to_owned(),
            leet: "basic".to_owned(),
            suffixes: DEFAULT_SUFFIXES.to_owned(),
            separators: DEFAULT_SEPARATORS.to_owned(),
            max: crate::wordlist::DEFAULT_MAX_CANDIDATES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeSettings {
    /// `auto` uses the best engine compiled in, `entropy` always uses the fallback estimator.
    pub engine: String,
}

impl Default for AnalyzeSettings {
    fn default() -> Self {
        AnalyzeSettings {
            engine: "auto".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub generate: GenerateSettings,
    pub analyze: AnalyzeSettings,
}

impl Settings {
    /// The settings in the same format as the settings file.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Location of the settings file, `$XDG_CONFIG_HOME/wordforge/settings.toml` if that variable
/// is set, otherwise `$HOME/.config/wordforge/settings.toml`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    match xdg_config_home {
        Some(config_home) => Ok(config_home.join("wordforge").join("settings.toml")),
        None => match home {
            Some(home) => Ok(home
                .join(".config")
                .join("wordforge")
                .join("settings.toml")),
            None => Err(Error::Generic("no home directory set")),
        },
    }
}

fn file_settings(path: &Path) -> config::File<config::FileSourceFile> {
    config::File::from(path.to_path_buf())
        .format(config::FileFormat::Toml)
        .required(false)
}

fn default_settings() -> Result<config::Config> {
    let defaults = Settings::default();
    let mut settings = config::Config::default();

    settings.set_default("generate.years", defaults.generate.years)?;
    settings.set_default("generate.leet", defaults.generate.leet)?;
    settings.set_default("generate.suffixes", defaults.generate.suffixes)?;
    settings.set_default("generate.separators", defaults.generate.separators)?;
    settings.set_default("generate.max", defaults.generate.max as i64)?;
    settings.set_default("analyze.engine", defaults.analyze.engine)?;

    Ok(settings)
}

/// Reads the settings file at `path`, a missing file gives the built in defaults. Keys that
/// the file doesn't mention keep their defaults.
pub fn read_settings_file(path: &Path) -> Result<Settings> {
    let mut settings = default_settings()?;
    settings.merge(file_settings(path))?;

    let settings: Settings = settings.try_into()?;
    settings.generate.leet.parse::<crate::variants::LeetMode>()?;
    crate::strength::EnginePreference::from_setting(&settings.analyze.engine)?;

    Ok(settings)
}

/// Reads the settings from the user's settings file.
pub fn read_config(home: &Option<PathBuf>, xdg_config_home: &Option<PathBuf>) -> Result<Settings> {
    let location = xdg_config_file_location(home, xdg_config_home);
    match location {
        Ok(path) => {
            debug!("reading settings from {}", path.display());
            read_settings_file(&path)
        }
        Err(err) => {
            debug!("using built in settings: {err}");
            Ok(Settings::default())
        }
    }
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings;
