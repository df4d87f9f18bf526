use super::*;

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn build_bases_joins_pairs_in_both_orders() {
    let result = build_bases(&strings(&["naman", "patil"]), None, &strings(&["_", "-"]));

    for expected in [
        "naman_patil",
        "patil_naman",
        "naman-patil",
        "patil-naman",
        "naman",
        "NAMAN",
        "Naman",
        "patil",
        "PATIL",
        "Patil",
    ] {
        assert!(result.contains(expected), "missing {expected}");
    }
    assert_eq!(10, result.len());
}

#[test]
fn build_bases_joins_are_not_case_expanded() {
    let result = build_bases(&strings(&["naman", "patil"]), None, &strings(&["_"]));

    assert!(!result.contains("Naman_Patil"));
}

#[test]
fn build_bases_skips_empty_keywords() {
    let result = build_bases(&strings(&["", "naman", ""]), None, &strings(&["_"]));

    assert_eq!(3, result.len());
    assert!(!result.contains("_naman"));
    assert!(!result.contains(""));
}

#[test]
fn build_bases_without_separators_has_no_joins() {
    let result = build_bases(&strings(&["a", "b"]), None, &[]);

    assert_eq!(
        ["A", "B", "a", "b"].iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        result
    );
}

#[test]
fn build_bases_adds_dob_runs_unchanged() {
    let result = build_bases(&[], Some("09-08-2002"), &strings(&["_"]));

    assert_eq!(
        ["08", "09", "2002"].iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        result
    );
}

#[test]
fn build_bases_empty_input() {
    assert!(build_bases(&[], None, &strings(&["_", "-", "."])).is_empty());
    assert!(build_bases(&[], Some("no digits"), &[]).is_empty());
}

#[test]
fn build_bases_three_keywords() {
    let result = build_bases(&strings(&["a", "b", "c"]), None, &strings(&["."]));

    for join in ["a.b", "b.a", "a.c", "c.a", "b.c", "c.b"] {
        assert!(result.contains(join), "missing {join}");
    }
}
