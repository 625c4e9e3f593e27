use crate::form::encode::{encode_node, mismatch};
use crate::form::encoder::{Encoder, MapOrder};
use crate::form::key::compose_key;
use crate::form::kv::Kv;
use crate::form::value::Value;
use crate::form::Result;

/// Encode a mapping: each rendered entry key becomes one key path segment.
///
/// Entry keys and values are encoded with an empty key and only their rendered
/// values are kept. Composite keys or values yield the cross product of their
/// pairs.
pub(crate) fn encode_map(encoder: &Encoder, value: &Value<'_>, key: &str) -> Result<Vec<Kv>> {
	let Value::Map(map) = value else {
		return Err(mismatch(value, key));
	};

	let mut out = Vec::with_capacity(map.entries.len());
	for (entry_key, entry_value) in &map.entries {
		let keys = encode_node(encoder, entry_key, "").map_err(|err| err.at(key))?;
		let values = encode_node(encoder, entry_value, "").map_err(|err| {
			let segment = keys.first().map_or("", Kv::value);
			err.at(compose_key(key, segment))
		})?;

		for entry_key in &keys {
			for entry_value in &values {
				out.push(Kv::new(compose_key(key, entry_key.value()), entry_value.value()));
			}
		}
	}

	if encoder.map_order() == MapOrder::SortedByKey {
		out.sort_by(|left, right| left.key().cmp(right.key()));
	}
	Ok(out)
}
