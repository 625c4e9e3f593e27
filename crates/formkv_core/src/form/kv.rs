use std::fmt;

use crate::form::key::compose_key;

/// One flat output pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Kv {
	key: String,
	value: String,
}

impl Kv {
	/// Build a pair.
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}

	/// Output key path.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Rendered value.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Split into `(key, value)`.
	pub fn into_parts(self) -> (String, String) {
		(self.key, self.value)
	}

	/// New pair with the key moved under `parent`.
	pub(crate) fn nested_under(self, parent: &str) -> Self {
		Self {
			key: compose_key(parent, &self.key),
			value: self.value,
		}
	}
}

impl fmt::Display for Kv {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:>10} : {}", self.key, self.value)
	}
}
