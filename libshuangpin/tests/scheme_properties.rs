//! Construction properties of built schemes: round-trip behaviour of the
//! bidirectional indices, coverage of reachable syllables, and idempotent
//! rebuilds.

use std::sync::Arc;

use libshuangpin::{standard_inventory, RawScheme, Scheme, SchemeBuilder, SchemeRegistry};

fn xiaohe() -> Arc<Scheme> {
    SchemeRegistry::new().get("XiaoHe")
}

#[test]
fn syllable_and_code_indices_are_mutual_inverses_modulo_collisions() {
    let scheme = xiaohe();
    let inventory = scheme.inventory();

    for (syllable, code) in scheme.syllable_codes() {
        // The forward entry may have been overwritten by a later colliding
        // syllable; the code must still resolve to some valid syllable.
        let resolved = scheme
            .syllable_for(code)
            .unwrap_or_else(|| panic!("code {} for {} resolves to nothing", code, syllable));
        assert!(
            inventory.get(resolved).is_some(),
            "code {} resolves to unknown syllable {}",
            code,
            resolved
        );
    }

    for (code, syllable) in scheme.code_syllables() {
        assert!(
            scheme.code_for(syllable).is_some(),
            "syllable {} (code {}) lost its forward entry",
            syllable,
            code
        );
    }
}

#[test]
fn common_syllables_round_trip_exactly() {
    let scheme = xiaohe();
    for spelling in ["zhang", "shang", "ming", "ha", "lie"] {
        let code = scheme
            .code_for(spelling)
            .unwrap_or_else(|| panic!("no code for {}", spelling));
        assert_eq!(scheme.syllable_for(code), Some(spelling));
    }
}

#[test]
fn every_reachable_syllable_receives_a_code() {
    let scheme = xiaohe();
    let inventory = scheme.inventory();

    for lead_key in scheme.keys() {
        for follow_key in scheme.keys() {
            for lead in &lead_key.leads {
                for follow in &follow_key.follows {
                    if !inventory.is_valid(lead, follow) {
                        continue;
                    }
                    let spelling = format!("{}{}", lead, follow);
                    assert!(
                        scheme.code_for(&spelling).is_some(),
                        "reachable syllable {} has no code",
                        spelling
                    );
                }
            }
        }
    }
}

#[test]
fn zero_initial_syllables_are_coded_via_their_dedicated_records() {
    let scheme = xiaohe();
    assert_eq!(scheme.syllable_for("ah"), Some("ang"));
    assert_eq!(scheme.code_for("ang"), Some("ah"));
    assert_eq!(scheme.code_for("er"), Some("er"));
}

#[test]
fn rebuilding_from_the_same_raw_definition_is_idempotent() {
    let registry = SchemeRegistry::new();
    let raw = registry.raw_scheme("XiaoHe").cloned().unwrap();

    let build = || SchemeBuilder::new("XiaoHe", &raw, standard_inventory()).build();
    let first = build();
    let second = build();

    assert_eq!(first.syllable_codes(), second.syllable_codes());
    assert_eq!(first.code_syllables(), second.code_syllables());
    assert_eq!(first.keys(), second.keys());
    assert_eq!(first.zero_codes(), second.zero_codes());
}

#[test]
fn builder_accepts_degenerate_definitions() {
    // A thoroughly malformed definition still loads; it just produces an
    // empty codec.
    let raw = RawScheme::from_text("///\nnot a record\n,", "broken\n/x");
    let scheme = SchemeBuilder::new("broken", &raw, standard_inventory()).build();
    assert!(scheme.syllable_codes().is_empty());
    assert!(scheme.zero_codes().is_empty());
}
