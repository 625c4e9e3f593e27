use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::mpsc::channel;

use super::{FormStruct, FormValue};
use crate::form::{Complex, Kind, Scalar, SeqValue, Value};

struct Point {
	x: i32,
	y: i32,
}

crate::form_struct!(Point {
	x [form = "px", query = "x"],
	y,
});

#[test]
fn byte_containers_map_to_byte_sequences() {
	let vec = vec![1_u8, 2, 3];
	assert_eq!(vec.form_value(), Value::Seq(SeqValue::Bytes(Cow::Borrowed(&[1_u8, 2, 3][..]))));

	let array = [9_u8; 2];
	assert_eq!(array.form_value(), Value::Seq(SeqValue::Bytes(Cow::Borrowed(&[9_u8, 9][..]))));

	let refs = vec![&array[0], &array[1]];
	assert_eq!(refs.form_value(), Value::Seq(SeqValue::Bytes(Cow::Owned(vec![9, 9]))));
}

#[test]
fn string_containers_map_to_string_lists() {
	let owned = vec!["a".to_owned(), "b".to_owned()];
	let borrowed = vec!["a", "b"];
	let cows: Vec<Cow<'_, str>> = vec![Cow::Borrowed("a"), Cow::Owned("b".to_owned())];
	let expected = Value::Seq(SeqValue::Strings(vec![Cow::Borrowed("a"), Cow::Borrowed("b")]));

	assert_eq!(owned.form_value(), expected);
	assert_eq!(borrowed.form_value(), expected);
	assert_eq!(cows.form_value(), expected);
	assert_eq!(["a", "b"].form_value(), expected);
}

#[test]
fn string_like_elements_map_to_string_lists() {
	let names = ["a".to_owned(), "b".to_owned()];
	let refs: Vec<&String> = names.iter().collect();
	let nested: Vec<&&str> = vec![&"a", &"b"];
	let boxed: Vec<Box<str>> = vec!["a".into(), "b".into()];
	let shared: Vec<std::rc::Rc<str>> = vec!["a".into(), "b".into()];
	let atomic: Vec<std::sync::Arc<str>> = vec!["a".into(), "b".into()];
	let expected = Value::Seq(SeqValue::Strings(vec![Cow::Borrowed("a"), Cow::Borrowed("b")]));

	assert_eq!(refs.form_value(), expected);
	assert_eq!(nested.form_value(), expected);
	assert_eq!(boxed.form_value(), expected);
	assert_eq!(shared.form_value(), expected);
	assert_eq!(atomic.form_value(), expected);
}

#[test]
fn empty_string_list_keeps_its_element_type() {
	let empty: Vec<String> = Vec::new();
	assert_eq!(empty.form_value(), Value::Seq(SeqValue::Strings(Vec::new())));

	let boxed: Vec<Box<str>> = Vec::new();
	assert_eq!(boxed.form_value(), Value::Seq(SeqValue::Strings(Vec::new())));

	let optional: Vec<Option<String>> = Vec::new();
	assert_eq!(optional.form_value(), Value::Seq(SeqValue::Items(Vec::new())));
}

#[test]
fn other_containers_map_to_items() {
	let values = vec![1_u16, 2];
	assert_eq!(
		values.form_value(),
		Value::Seq(SeqValue::Items(vec![Value::Scalar(Scalar::U16(1)), Value::Scalar(Scalar::U16(2))]))
	);

	let nested = vec![vec!["a"]];
	let Value::Seq(SeqValue::Items(items)) = nested.form_value() else {
		panic!("expected item sequence");
	};
	assert!(matches!(items[0], Value::Seq(SeqValue::Strings(_))));
}

#[test]
fn options_map_to_pointers() {
	let some = Some(5_i64);
	let none: Option<i64> = None;
	assert_eq!(some.form_value(), Value::Ptr(Some(Box::new(Value::Scalar(Scalar::I64(5))))));
	assert_eq!(none.form_value(), Value::Ptr(None));
	assert_eq!(Some(&some).form_value().deref_ptr(), Some(&Value::Scalar(Scalar::I64(5))));
}

#[test]
fn smart_pointers_are_transparent() {
	assert_eq!(Box::new(true).form_value(), Value::Scalar(Scalar::Bool(true)));
	assert_eq!(std::rc::Rc::new(1.5_f32).form_value(), Value::Scalar(Scalar::F32(1.5)));
	assert_eq!(std::sync::Arc::<str>::from("s").form_value(), Value::Scalar(Scalar::Str(Cow::Borrowed("s"))));
}

#[test]
fn complex_numbers_keep_their_width() {
	assert_eq!(Complex::new(1.0_f32, 2.0).form_value().kind(), Kind::C64);
	assert_eq!(Complex::new(1.0_f64, 2.0).form_value().kind(), Kind::C128);
}

#[test]
fn maps_expose_every_entry() {
	let map = HashMap::from([("k", 1_usize)]);
	let Value::Map(map) = map.form_value() else {
		panic!("expected map value");
	};
	assert_eq!(map.entries.len(), 1);
	assert_eq!(map.entries[0].0, Value::Scalar(Scalar::Str(Cow::Borrowed("k"))));
	assert_eq!(map.entries[0].1, Value::Scalar(Scalar::Usize(1)));
}

#[test]
fn host_only_kinds_are_opaque() {
	let callback: fn() -> u8 = || 0;
	let handler: fn(u8) -> u8 = |value| value;
	let (sender, receiver) = channel::<u8>();
	let raw: *const u8 = std::ptr::null();

	assert_eq!(callback.form_value().kind(), Kind::Opaque("func"));
	assert_eq!(handler.form_value().kind(), Kind::Opaque("func"));
	assert_eq!(sender.form_value().kind(), Kind::Opaque("chan"));
	assert_eq!(receiver.form_value().kind(), Kind::Opaque("chan"));
	assert_eq!(raw.form_value().kind(), Kind::Opaque("unsafe pointer"));
}

#[test]
fn form_struct_macro_lists_fields_and_tags() {
	let point = Point { x: 1, y: -2 };
	let value = point.form_struct();
	assert_eq!(value.type_name, "Point");
	assert_eq!(value.fields.len(), 2);
	assert_eq!(value.fields[0].meta.name, "x");
	assert_eq!(value.fields[0].meta.tag("form"), Some("px"));
	assert_eq!(value.fields[0].meta.tag("query"), Some("x"));
	assert_eq!(value.fields[1].meta.name, "y");
	assert!(value.fields[1].meta.tags.is_empty());
	assert_eq!(value.fields[1].value, Value::Scalar(Scalar::I32(-2)));
	assert_eq!(point.form_value().kind(), Kind::Struct);
}
