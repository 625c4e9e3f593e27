use crate::form::value::FieldMeta;

/// Modifier that collapses a string list into one comma-joined value.
pub const JOIN_MODIFIER: &str = "join";

/// Outcome of resolving a field's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTag<'a> {
	/// Emit the field under this key; modifiers are kept verbatim.
	Key(&'a str),
	/// Field carries the ignore marker.
	Drop,
}

/// Resolve the output key for a field under `tag_name`.
///
/// Absent and empty tags fall back to the declared field name. The raw tag is
/// otherwise returned unchanged, modifier segments included.
pub fn resolve_field_tag<'a>(meta: &FieldMeta<'a>, tag_name: &str, ignore_flag: &str) -> FieldTag<'a> {
	match meta.tag(tag_name) {
		Some(raw) if raw == ignore_flag => FieldTag::Drop,
		Some(raw) if !raw.is_empty() => FieldTag::Key(raw),
		_ => FieldTag::Key(meta.name),
	}
}

/// Raw tag split into key name and modifier segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec<'a> {
	/// First comma-separated segment.
	pub name: &'a str,
	modifiers: Option<&'a str>,
}

impl<'a> TagSpec<'a> {
	/// Split `raw` at its first comma.
	pub fn parse(raw: &'a str) -> Self {
		match raw.split_once(',') {
			Some((name, rest)) => Self { name, modifiers: Some(rest) },
			None => Self { name: raw, modifiers: None },
		}
	}

	/// Modifier segments in tag order, empty segments included.
	pub fn modifiers(&self) -> impl Iterator<Item = &'a str> {
		self.modifiers.into_iter().flat_map(|rest| rest.split(','))
	}

	/// Whether the first modifier is `join`.
	pub fn is_join(&self) -> bool {
		self.modifiers().next() == Some(JOIN_MODIFIER)
	}
}
