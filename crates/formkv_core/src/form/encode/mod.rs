use tracing::trace;

use crate::form::dispatch::lookup;
use crate::form::encoder::Encoder;
use crate::form::kv::Kv;
use crate::form::scalar::render_scalar;
use crate::form::tag::{FieldTag, resolve_field_tag};
use crate::form::value::{StructValue, Value};
use crate::form::{FormError, Result};

mod map;
mod seq;

pub(crate) use map::encode_map;
pub(crate) use seq::encode_seq;

/// Encode a root value, which must resolve to a struct.
pub(crate) fn encode_root(encoder: &Encoder, root: &Value<'_>) -> Result<Vec<Kv>> {
	let Some(value) = root.deref_ptr() else {
		return Err(FormError::InvalidRoot { kind: root.kind() });
	};
	let Value::Struct(item) = value else {
		return Err(FormError::InvalidRoot { kind: value.kind() });
	};
	encode_fields(encoder, item)
}

/// Encode struct fields in declaration order with unprefixed keys.
pub(crate) fn encode_fields(encoder: &Encoder, item: &StructValue<'_>) -> Result<Vec<Kv>> {
	let mut out = Vec::new();
	for field in &item.fields {
		let key = match resolve_field_tag(&field.meta, encoder.tag_name(), encoder.ignore_flag()) {
			FieldTag::Key(key) => key,
			FieldTag::Drop => {
				trace!(type_name = item.type_name, field = field.meta.name, "skip ignored field");
				continue;
			}
		};

		let Some(value) = field.value.deref_ptr() else {
			trace!(type_name = item.type_name, field = field.meta.name, "skip nil field");
			continue;
		};
		out.extend(encode_node(encoder, value, key)?);
	}
	Ok(out)
}

/// Unwrap pointers and dispatch `value` to the encoder for its kind.
///
/// Failures are reported at `key`, the key a pair for `value` would carry.
pub(crate) fn encode_node(encoder: &Encoder, value: &Value<'_>, key: &str) -> Result<Vec<Kv>> {
	let Some(value) = value.deref_ptr() else {
		return Ok(Vec::new());
	};

	let kind = value.kind();
	trace!(key, %kind, "dispatch");
	let Some(encode) = lookup(kind) else {
		return Err(FormError::UnsupportedKind { kind }.at(key));
	};
	encode(encoder, value, key)
}

pub(crate) fn encode_invalid(_encoder: &Encoder, _value: &Value<'_>, _key: &str) -> Result<Vec<Kv>> {
	Ok(Vec::new())
}

pub(crate) fn encode_scalar(_encoder: &Encoder, value: &Value<'_>, key: &str) -> Result<Vec<Kv>> {
	let Value::Scalar(scalar) = value else {
		return Err(mismatch(value, key));
	};
	Ok(vec![Kv::new(key, render_scalar(scalar))])
}

/// Nested struct: children inherit `key` unless it is the suppression marker.
pub(crate) fn encode_struct(encoder: &Encoder, value: &Value<'_>, key: &str) -> Result<Vec<Kv>> {
	let Value::Struct(item) = value else {
		return Err(mismatch(value, key));
	};
	let kvs = encode_fields(encoder, item).map_err(|err| err.within(key))?;
	Ok(kvs.into_iter().map(|kv| kv.nested_under(key)).collect())
}

/// Value routed to an encoder for a different kind.
fn mismatch(value: &Value<'_>, key: &str) -> FormError {
	FormError::UnsupportedKind { kind: value.kind() }.at(key)
}
