use super::*;

use std::fs::File;
use std::io::Write;

#[test]
fn xdg_config_file_location_home_only() {
    let result = xdg_config_file_location(&Some(PathBuf::from("/home/user")), &None).unwrap();

    assert_eq!(
        PathBuf::from("/home/user/.config/wordforge/settings.toml"),
        result
    );
}

#[test]
fn xdg_config_file_location_xdg_wins() {
    let result = xdg_config_file_location(
        &Some(PathBuf::from("/home/user")),
        &Some(PathBuf::from("/tmp/config")),
    )
    .unwrap();

    assert_eq!(PathBuf::from("/tmp/config/wordforge/settings.toml"), result);
}

#[test]
fn xdg_config_file_location_nothing_set() {
    let result = xdg_config_file_location(&None, &None);

    assert!(matches!(result, Err(Error::Generic(_))));
}

#[test]
fn read_config_without_home_gives_defaults() -> Result<()> {
    let settings = read_config(&None, &None)?;

    assert_eq!(Settings::default(), settings);
    Ok(())
}

#[test]
fn read_config_missing_file_gives_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let settings = read_config(&Some(dir.path().to_path_buf()), &None)?;

    assert_eq!(Settings::default(), settings);
    assert_eq!("2015-2026", settings.generate.years);
    assert_eq!("basic", settings.generate.leet);
    assert_eq!(20000, settings.generate.max);
    assert_eq!("auto", settings.analyze.engine);
    Ok(())
}

#[test]
fn read_config_partial_file_keeps_other_defaults() -> Result<()> {
    let dir = tempfile::tempdir()?;
    std::fs::create_dir_all(dir.path().join("wordforge"))?;
    let mut file = File::create(dir.path().join("wordforge").join("settings.toml"))?;
    writeln!(
        &file,
        "[generate]\nyears = \"2020-2022\"\nleet = \"aggressive\"\nmax = 500\n"
    )?;
    file.flush()?;

    let settings = read_config(&None, &Some(dir.path().to_path_buf()))?;

    assert_eq!("2020-2022", settings.generate.years);
    assert_eq!("aggressive", settings.generate.leet);
    assert_eq!(500, settings.generate.max);
    assert_eq!(DEFAULT_SUFFIXES, settings.generate.suffixes);
    assert_eq!(DEFAULT_SEPARATORS, settings.generate.separators);
    assert_eq!("auto", settings.analyze.engine);
    Ok(())
}

#[test]
fn read_settings_file_engine() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[analyze]\nengine = \"entropy\"\n")?;

    let settings = read_settings_file(&path)?;

    assert_eq!("entropy", settings.analyze.engine);
    Ok(())
}

#[test]
fn read_settings_file_bad_leet_mode() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[generate]\nleet = \"sometimes\"\n")?;

    let result = read_settings_file(&path);

    assert!(matches!(result, Err(Error::InvalidChoice(_))));
    Ok(())
}

#[test]
fn read_settings_file_bad_engine() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[analyze]\nengine = \"hashcat\"\n")?;

    let result = read_settings_file(&path);

    assert!(matches!(result, Err(Error::InvalidChoice(_))));
    Ok(())
}

#[test]
fn read_settings_file_broken_toml() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[generate\nyears = ")?;

    let result = read_settings_file(&path);

    assert!(matches!(result, Err(Error::ConfigError(_))));
    Ok(())
}

#[test]
fn settings_to_toml() -> Result<()> {
    let toml = Settings::default().to_toml()?;

    assert!(toml.contains("[generate]"));
    assert!(toml.contains("years = \"2015-2026\""));
    assert!(toml.contains("max = 20000"));
    assert!(toml.contains("[analyze]"));
    assert!(toml.contains("engine = \"auto\""));
    Ok(())
}
