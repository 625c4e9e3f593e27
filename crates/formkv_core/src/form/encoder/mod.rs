use std::collections::HashMap;

use tracing::debug;

use crate::form::adapt::FormValue;
use crate::form::encode::encode_root;
use crate::form::kv::Kv;
use crate::form::value::Value;
use crate::form::{FormError, Result};

/// Ordering applied to pairs produced by mapping-typed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapOrder {
	/// Keep the order the source container yields its entries in.
	#[default]
	Source,
	/// Sort each mapping's pairs by final key.
	SortedByKey,
}

/// Flattens struct values into ordered form pairs.
///
/// Configuration is fixed at construction; one encoder can serve any number of
/// concurrent `encode` calls.
#[derive(Debug, Clone)]
pub struct Encoder {
	tag_name: Box<str>,
	ignore_flag: Box<str>,
	map_order: MapOrder,
}

impl Default for Encoder {
	fn default() -> Self {
		Self {
			tag_name: Self::DEFAULT_TAG.into(),
			ignore_flag: Self::DEFAULT_IGNORE_FLAG.into(),
			map_order: MapOrder::default(),
		}
	}
}

impl Encoder {
	/// Tag name used by [`Encoder::default`].
	pub const DEFAULT_TAG: &'static str = "form";
	/// Ignore marker used by [`Encoder::default`].
	pub const DEFAULT_IGNORE_FLAG: &'static str = "-";

	/// Build an encoder reading tags under `tag_name` and dropping fields tagged `ignore_flag`.
	pub fn new(tag_name: &str, ignore_flag: &str) -> Result<Self> {
		if tag_name.is_empty() {
			return Err(FormError::EmptyTagName);
		}
		if ignore_flag.is_empty() {
			return Err(FormError::EmptyIgnoreFlag);
		}

		Ok(Self {
			tag_name: tag_name.into(),
			ignore_flag: ignore_flag.into(),
			map_order: MapOrder::default(),
		})
	}

	/// Same encoder with a different mapping order policy.
	pub fn with_map_order(mut self, map_order: MapOrder) -> Self {
		self.map_order = map_order;
		self
	}

	/// Tag name consulted on each field.
	pub fn tag_name(&self) -> &str {
		&self.tag_name
	}

	/// Tag value that drops a field.
	pub fn ignore_flag(&self) -> &str {
		&self.ignore_flag
	}

	/// Mapping order policy.
	pub fn map_order(&self) -> MapOrder {
		self.map_order
	}

	/// Flatten `root`, a struct or pointer to struct, into ordered pairs.
	pub fn encode<T: FormValue + ?Sized>(&self, root: &T) -> Result<Vec<Kv>> {
		self.encode_value(&root.form_value())
	}

	/// Flatten an already-built value.
	pub fn encode_value(&self, root: &Value<'_>) -> Result<Vec<Kv>> {
		let kvs = encode_root(self, root)?;
		debug!(tag = %self.tag_name, pairs = kvs.len(), "encoded form value");
		Ok(kvs)
	}

	/// Flatten `root` into a key-unique map; later pairs win on key collision.
	pub fn to_map<T: FormValue + ?Sized>(&self, root: &T) -> Result<HashMap<String, String>> {
		self.value_to_map(&root.form_value())
	}

	/// Map form of [`Encoder::encode_value`].
	pub fn value_to_map(&self, root: &Value<'_>) -> Result<HashMap<String, String>> {
		Ok(self.encode_value(root)?.into_iter().map(Kv::into_parts).collect())
	}

	/// One aligned `key : value` line per pair.
	pub fn render<T: FormValue + ?Sized>(&self, root: &T) -> Result<String> {
		let kvs = self.encode(root)?;
		Ok(kvs.iter().map(Kv::to_string).collect::<Vec<_>>().join("\n"))
	}
}
