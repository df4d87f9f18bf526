use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;
use wordforge::settings::GenerateSettings;
use wordforge::strength::EntropyFallback;

use crate::helpers::{analyze, generate, merge_generate_settings};
use crate::GenerateArgs;

#[test]
fn merge_generate_settings_no_overrides() {
    let settings = GenerateSettings::default();

    let result = merge_generate_settings(&settings, &GenerateArgs::default());

    assert_eq!(settings, result);
}

#[test]
fn merge_generate_settings_arguments_win() {
    let settings = GenerateSettings {
        years: "2000-2001".to_owned(),
        ..GenerateSettings::default()
    };
    let args = GenerateArgs {
        leet: Some("aggressive".to_owned()),
        max: Some(5),
        separators: Some("+".to_owned()),
        ..GenerateArgs::default()
    };

    let result = merge_generate_settings(&settings, &args);

    assert_eq!("2000-2001", result.years);
    assert_eq!("aggressive", result.leet);
    assert_eq!(5, result.max);
    assert_eq!("+", result.separators);
    assert_eq!(settings.suffixes, result.suffixes);
}

#[test]
fn generate_writes_outfile() {
    let dir = tempdir().unwrap();
    let outfile = dir.path().join("list.txt");
    let args = GenerateArgs {
        keywords: "naman".to_owned(),
        years: Some("2024".to_owned()),
        suffixes: Some("!".to_owned()),
        separators: Some("".to_owned()),
        max: Some(1000),
        outfile: outfile.clone(),
        ..GenerateArgs::default()
    };

    let written = generate(&GenerateSettings::default(), &args).unwrap();

    let content = fs::read_to_string(&outfile).unwrap();
    assert_eq!(written, content.lines().count());
    assert!(content.lines().any(|l| l == "naman2024!"));
    assert!(content.lines().any(|l| l == "2024naman"));
}

#[test]
fn generate_unwritable_outfile() {
    let dir = tempdir().unwrap();
    let args = GenerateArgs {
        keywords: "naman".to_owned(),
        outfile: dir.path().join("no").join("such").join("dir.txt"),
        ..GenerateArgs::default()
    };

    let err = generate(&GenerateSettings::default(), &args).unwrap_err();

    assert!(format!("{err:#}").starts_with("failed to write"));
}

#[test]
fn generate_empty_keywords_writes_empty_file() {
    let dir = tempdir().unwrap();
    let outfile: PathBuf = dir.path().join("empty.txt");
    let args = GenerateArgs {
        outfile: outfile.clone(),
        ..GenerateArgs::default()
    };

    let written = generate(&GenerateSettings::default(), &args).unwrap();

    assert_eq!(0, written);
    assert_eq!("", fs::read_to_string(&outfile).unwrap());
}

#[test]
fn analyze_text() {
    let output = analyze(&EntropyFallback {}, "abcdefgh", &[], false).unwrap();

    assert!(output.starts_with("Engine: entropy_fallback\nScore : 2"));
}

#[test]
fn analyze_json() {
    let output = analyze(&EntropyFallback {}, "abcdefgh", &[], true).unwrap();

    assert!(output.contains("\"engine\": \"entropy_fallback\""));
    assert!(output.contains("\"score\": 2"));
    assert!(output.ends_with("}\n"));
}
