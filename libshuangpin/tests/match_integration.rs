//! Match engine and registry behaviour across whole schemes.

use std::sync::Arc;

use libshuangpin::{
    match_keys, MatchResult, RawScheme, SchemeBuilder, SchemeRegistry, SyllableInventory,
};

/// The scenario scheme: key `i` produces lead "ch" and follow "i", key `u`
/// produces follow "u" only.
fn scenario_scheme() -> libshuangpin::Scheme {
    let inventory = Arc::new(SyllableInventory::from_pairs([
        ("ch", "u"),
        ("ch", "i"),
        ("", "a"),
    ]));
    let raw = RawScheme::from_text("i/i/ch\nu/u/", "aa/a");
    SchemeBuilder::new("scenario", &raw, inventory).build()
}

#[test]
fn two_keystrokes_matching_the_target_are_valid() {
    let scheme = scenario_scheme();
    assert_eq!(
        match_keys(&scheme, Some('i'), Some('u'), "chu"),
        MatchResult {
            valid: true,
            lead: Some("ch".to_string()),
            follow: Some("u".to_string()),
        }
    );
}

#[test]
fn a_single_keystroke_resolves_the_lead_without_validity() {
    let scheme = scenario_scheme();
    let result = match_keys(&scheme, Some('i'), None, "chu");
    assert_eq!(
        result,
        MatchResult {
            valid: false,
            lead: Some("ch".to_string()),
            follow: None,
        }
    );
}

#[test]
fn a_single_keystroke_is_never_fully_valid() {
    let registry = SchemeRegistry::new();
    let scheme = registry.get("XiaoHe");

    for (syllable, code) in scheme.syllable_codes() {
        let lead_key = code.chars().next().unwrap();
        let result = match_keys(&scheme, Some(lead_key), None, syllable);
        assert!(
            !result.valid,
            "single key {} validated {}",
            lead_key, syllable
        );
    }
}

#[test]
fn zero_initial_targets_validate_with_their_dedicated_code() {
    let registry = SchemeRegistry::new();
    let scheme = registry.get("XiaoHe");

    let result = match_keys(&scheme, Some('a'), Some('h'), "ang");
    assert_eq!(
        result,
        MatchResult {
            valid: true,
            lead: Some(String::new()),
            follow: Some("ang".to_string()),
        }
    );
}

#[test]
fn match_output_is_identical_for_identical_inputs() {
    let registry = SchemeRegistry::new();
    let scheme = registry.get("Microsoft");

    let cases = [
        (Some('u'), Some('h'), "shang"),
        (Some('u'), None, "shang"),
        (None, Some('h'), "shang"),
        (Some('x'), Some('y'), "shang"),
        (None, None, "shang"),
    ];
    for (lead, follow, target) in cases {
        let first = match_keys(&scheme, lead, follow, target);
        for _ in 0..5 {
            assert_eq!(match_keys(&scheme, lead, follow, target), first);
        }
    }
}

#[test]
fn wrong_lead_with_correct_follow_reports_the_follow_only() {
    let registry = SchemeRegistry::new();
    let scheme = registry.get("XiaoHe");

    // Target "zhang" wants v+h; typing d+h gets the follow right.
    let result = match_keys(&scheme, Some('d'), Some('h'), "zhang");
    assert!(!result.valid);
    assert_eq!(result.lead, None);
    assert_eq!(result.follow.as_deref(), Some("ang"));
}

#[test]
fn unknown_scheme_name_yields_the_first_known_scheme() {
    let registry = SchemeRegistry::new();
    let scheme = registry.get("does-not-exist");
    assert_eq!(scheme.name(), registry.names()[0]);
    // Callers detect the substitution by comparing names.
    assert_ne!(scheme.name(), "does-not-exist");
}

#[test]
fn schemes_disagree_where_their_layouts_differ() {
    let registry = SchemeRegistry::new();
    let xiaohe = registry.get("XiaoHe");
    let microsoft = registry.get("Microsoft");

    // XiaoHe puts "ei" on w, Microsoft on z (w carries "ia" instead).
    assert_eq!(xiaohe.syllable_for("lw"), Some("lei"));
    assert_eq!(microsoft.syllable_for("lz"), Some("lei"));
    assert_eq!(microsoft.syllable_for("lw"), Some("lia"));
}
