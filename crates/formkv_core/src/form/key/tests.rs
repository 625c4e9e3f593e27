use super::{SUPPRESS_MARKER, compose_key, index_key};

#[test]
fn child_is_prefixed_with_parent() {
	assert_eq!(compose_key("auth", "ak"), "auth.ak");
}

#[test]
fn suppression_marker_drops_prefix() {
	assert_eq!(compose_key(SUPPRESS_MARKER, "ak"), "ak");
}

#[test]
fn empty_parent_still_adds_separator() {
	assert_eq!(compose_key("", "cpu"), ".cpu");
}

#[test]
fn index_keys_are_zero_based() {
	assert_eq!(index_key("items", 0), "items.0");
	assert_eq!(index_key("items", 12), "items.12");
}

#[test]
fn suppression_applies_at_sequence_boundary() {
	assert_eq!(index_key(SUPPRESS_MARKER, 3), "3");
}

#[test]
fn marker_must_match_exactly() {
	assert_eq!(compose_key("....", "x"), ".....x");
	assert_eq!(compose_key("a...", "x"), "a....x");
}
