//! Match engine: resolves up to two keystrokes against a target syllable.
//!
//! Pure and total; no state lives here. The caller owns per-character
//! progress across repeated calls and feeds each keystroke back in.

use libshuangpin_core::Syllable;

use crate::scheme::Scheme;

/// Outcome of matching the typed keys against a target syllable.
///
/// `valid` requires both keys to be present and their code to resolve to
/// the target; a single keystroke can at most partially resolve. The
/// resolved fragments are the target's own decomposition when valid, or a
/// best-effort partial resolution otherwise, so the caller can render
/// "consonant correct, vowel pending" feedback mid-keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub valid: bool,
    pub lead: Option<String>,
    pub follow: Option<String>,
}

/// Resolve `lead_key` + `follow_key` against `target`.
///
/// With both keys present the code is looked up in the scheme; equality
/// with the target reports the target's (lead, follow) decomposition, not
/// the raw key labels, because one key may stand for several fragments and
/// only the one composing the target is correct. Otherwise the fragment
/// sets of both keys (plus the empty fragment) are scanned for a lead that
/// prefixes the target's lead or a follow that suffixes the target's
/// follow, and the first hits are reported without setting `valid`.
pub fn match_keys(
    scheme: &Scheme,
    lead_key: Option<char>,
    follow_key: Option<char>,
    target: &str,
) -> MatchResult {
    let target_syllable = scheme
        .inventory()
        .get(target)
        .cloned()
        .unwrap_or_else(|| Syllable::zero_initial(target));

    if let (Some(lead), Some(follow)) = (lead_key, follow_key) {
        let code: String = [lead, follow].iter().collect();
        if scheme.syllable_for(&code) == Some(target) {
            return MatchResult {
                valid: true,
                lead: Some(target_syllable.lead),
                follow: Some(target_syllable.follow),
            };
        }
    }

    partial_resolution(scheme, lead_key, follow_key, &target_syllable)
}

/// Scan the cartesian product of both keys' fragment sets (each extended
/// with the empty fragment, the all-empty pair excluded) and report the
/// first fragments compatible with the target.
fn partial_resolution(
    scheme: &Scheme,
    lead_key: Option<char>,
    follow_key: Option<char>,
    target: &Syllable,
) -> MatchResult {
    let with_empty = |fragments: &[String]| {
        let mut all: Vec<String> = fragments.to_vec();
        all.push(String::new());
        all
    };

    let leads = with_empty(lead_key.map(|k| scheme.leads_of(k)).unwrap_or(&[]));
    let follows = with_empty(follow_key.map(|k| scheme.follows_of(k)).unwrap_or(&[]));

    let mut resolved = MatchResult::default();
    for lead in &leads {
        for follow in &follows {
            if lead.is_empty() && follow.is_empty() {
                continue;
            }
            if resolved.lead.is_none() && !lead.is_empty() && target.lead.starts_with(lead.as_str())
            {
                resolved.lead = Some(lead.clone());
            }
            if resolved.follow.is_none()
                && !follow.is_empty()
                && target.follow.ends_with(follow.as_str())
            {
                resolved.follow = Some(follow.clone());
            }
            if resolved.lead.is_some() && resolved.follow.is_some() {
                return resolved;
            }
        }
    }
    resolved
}
