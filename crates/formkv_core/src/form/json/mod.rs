//! View JSON documents through the form value model.
//!
//! Objects become structs keyed by member name, in document order. Arrays made
//! only of strings become string lists; other arrays keep their elements.
//! `null` is a nil pointer, so null members encode to nothing.
//!
//! Member names are used as declared field names and pass through the same
//! key rules as struct fields. [`parse`] rejects names those rules would
//! reinterpret: empty names, the suppression marker, and names with a comma.
//! Documents built any other way are viewed as they are.

use std::borrow::Cow;

use serde_json::{Map, Number};

use crate::form::adapt::FormValue;
use crate::form::key::SUPPRESS_MARKER;
use crate::form::value::{Field, FieldMeta, Scalar, SeqValue, StructValue, Value};
use crate::form::{FormError, Result};

/// Type name reported for JSON objects.
pub const OBJECT_TYPE_NAME: &str = "object";

/// Borrowing value view of a JSON document.
pub fn to_value(json: &serde_json::Value) -> Value<'_> {
	match json {
		serde_json::Value::Null => Value::Ptr(None),
		serde_json::Value::Bool(value) => Value::Scalar(Scalar::Bool(*value)),
		serde_json::Value::Number(number) => number_value(number),
		serde_json::Value::String(value) => Value::Scalar(Scalar::Str(Cow::Borrowed(value.as_str()))),
		serde_json::Value::Array(items) => Value::Seq(array_value(items)),
		serde_json::Value::Object(members) => Value::Struct(object_value(members)),
	}
}

/// Parse JSON text into a document that [`to_value`] can view.
pub fn parse(text: &str) -> Result<serde_json::Value> {
	let document = serde_json::from_str(text)?;
	check_member_names(&document)?;
	Ok(document)
}

fn check_member_names(json: &serde_json::Value) -> Result<()> {
	match json {
		serde_json::Value::Array(items) => items.iter().try_for_each(check_member_names),
		serde_json::Value::Object(members) => members.iter().try_for_each(|(name, value)| {
			if !is_field_name(name) {
				return Err(FormError::InvalidMemberName { name: name.clone() });
			}
			check_member_names(value)
		}),
		_ => Ok(()),
	}
}

fn is_field_name(name: &str) -> bool {
	!name.is_empty() && name != SUPPRESS_MARKER && !name.contains(',')
}

fn number_value(number: &Number) -> Value<'static> {
	if let Some(value) = number.as_u64() {
		return Value::Scalar(Scalar::U64(value));
	}
	if let Some(value) = number.as_i64() {
		return Value::Scalar(Scalar::I64(value));
	}
	number.as_f64().map_or(Value::Invalid, |value| Value::Scalar(Scalar::F64(value)))
}

fn array_value(items: &[serde_json::Value]) -> SeqValue<'_> {
	let strings: Option<Vec<_>> = items.iter().map(|item| item.as_str().map(Cow::Borrowed)).collect();
	match strings {
		Some(strings) if !strings.is_empty() => SeqValue::Strings(strings),
		_ => SeqValue::Items(items.iter().map(to_value).collect()),
	}
}

fn object_value(members: &Map<String, serde_json::Value>) -> StructValue<'_> {
	StructValue {
		type_name: OBJECT_TYPE_NAME,
		fields: members
			.iter()
			.map(|(name, value)| Field {
				meta: FieldMeta::untagged(name),
				value: to_value(value),
			})
			.collect(),
	}
}

impl FormValue for serde_json::Value {
	fn form_value(&self) -> Value<'_> {
		to_value(self)
	}
}
