use crate::{SHORT_NAMES, short_name_for};

use std::collections::HashSet;

/// WHAT: Overlapping keys resolve to the first defined
/// WHY: "Singing" precedes "Singing voice", so the shorter key wins
#[test]
fn given_label_matching_two_keys_when_looking_up_then_first_defined_key_wins() {
    assert_eq!(short_name_for("Singing voice"), Some("Singing"));
    assert_eq!(short_name_for("Drum kit"), Some("Drum Loop"));
}

/// WHAT: Matching is case-sensitive
/// WHY: "Guitar" must not match the lowercase "guitar" in "Electric guitar"
#[test]
fn given_lowercase_variant_when_looking_up_then_only_exact_case_keys_match() {
    assert_eq!(short_name_for("Electric guitar"), Some("Electric Guitar"));
    assert_eq!(short_name_for("Acoustic guitar"), Some("Acoustic Guitar"));
    assert_eq!(short_name_for("Guitar"), Some("Guitar Riff"));
    assert_eq!(short_name_for("guitar"), None);
}

/// WHAT: Keys match anywhere inside the class name
/// WHY: Class names carry qualifiers around the instrument word
#[test]
fn given_key_inside_longer_label_when_looking_up_then_unanchored_match() {
    assert_eq!(short_name_for("Snare drum"), Some("Snare"));
    assert_eq!(short_name_for("Bass drum"), Some("Kick Drum"));
    assert_eq!(short_name_for("Hammond Organ"), Some("Organ"));
    assert_eq!(short_name_for("Speech"), None);
}

/// WHAT: Table keys are unique
/// WHY: A duplicate key would make its later entry unreachable
#[test]
fn given_short_name_table_when_inspecting_then_keys_unique() {
    let keys: HashSet<&str> = SHORT_NAMES.iter().map(|&(key, _)| key).collect();
    assert_eq!(keys.len(), SHORT_NAMES.len());
    assert_eq!(SHORT_NAMES.first(), Some(&("Drum", "Drum Loop")));
    assert_eq!(SHORT_NAMES.last(), Some(&("Clarinet", "Clarinet Line")));
}
