use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::form::encode::{encode_node, mismatch};
use crate::form::encoder::Encoder;
use crate::form::key::index_key;
use crate::form::kv::Kv;
use crate::form::tag::TagSpec;
use crate::form::value::{SeqValue, Value};
use crate::form::Result;

/// Encode a slice or array.
///
/// Byte sequences become one base64 pair. String lists tagged `name,join`
/// become one comma-joined pair under `name`. Everything else is indexed.
pub(crate) fn encode_seq(encoder: &Encoder, value: &Value<'_>, key: &str) -> Result<Vec<Kv>> {
	let Value::Seq(seq) = value else {
		return Err(mismatch(value, key));
	};

	match seq {
		SeqValue::Bytes(bytes) => Ok(vec![Kv::new(key, STANDARD.encode(bytes))]),
		SeqValue::Strings(items) => {
			let tag = TagSpec::parse(key);
			if tag.is_join() {
				return Ok(vec![Kv::new(tag.name, items.join(","))]);
			}
			Ok(items
				.iter()
				.enumerate()
				.map(|(idx, item)| Kv::new(index_key(key, idx), &**item))
				.collect())
		}
		SeqValue::Items(items) => {
			let mut out = Vec::with_capacity(items.len());
			for (idx, item) in items.iter().enumerate() {
				out.extend(encode_node(encoder, item, &index_key(key, idx))?);
			}
			Ok(out)
		}
	}
}
