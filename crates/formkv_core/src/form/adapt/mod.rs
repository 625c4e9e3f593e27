use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};

use indexmap::IndexMap;

use crate::form::value::{Complex, Field, MapValue, Scalar, SeqValue, StructValue, Value};

/// Host types that can be viewed as a [`Value`].
pub trait FormValue {
	/// Borrowing view of `self`.
	fn form_value(&self) -> Value<'_>;

	/// Whether every value of this type views as a string.
	///
	/// Sequences of such types become [`SeqValue::Strings`], even when empty.
	#[doc(hidden)]
	const IS_STR: bool = false;

	/// String view of `self`; `Some` whenever `IS_STR` holds.
	#[doc(hidden)]
	fn form_str(&self) -> Option<&str> {
		None
	}

	/// Sequence view of a slice of `Self`.
	///
	/// Byte elements override this.
	#[doc(hidden)]
	fn form_seq(items: &[Self]) -> SeqValue<'_>
	where
		Self: Sized,
	{
		if Self::IS_STR {
			return SeqValue::Strings(items.iter().filter_map(FormValue::form_str).map(Cow::Borrowed).collect());
		}
		SeqValue::Items(items.iter().map(FormValue::form_value).collect())
	}

	/// Sequence view of a slice of references to `Self`.
	#[doc(hidden)]
	fn form_ref_seq<'a>(items: &'a [&'a Self]) -> SeqValue<'a> {
		if Self::IS_STR {
			return SeqValue::Strings(items.iter().filter_map(|item| (**item).form_str()).map(Cow::Borrowed).collect());
		}
		SeqValue::Items(items.iter().map(|item| (**item).form_value()).collect())
	}
}

/// Record types whose fields are encoded by name and tag.
///
/// Usually implemented through [`form_struct!`](crate::form_struct).
pub trait FormStruct {
	/// Fields in declaration order.
	fn form_fields(&self) -> Vec<Field<'_>>;

	/// Host type name, for diagnostics.
	fn form_type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	/// Struct view of `self`.
	fn form_struct(&self) -> StructValue<'_> {
		StructValue {
			type_name: self.form_type_name(),
			fields: self.form_fields(),
		}
	}
}

macro_rules! scalar_form_value {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl FormValue for $ty {
				fn form_value(&self) -> Value<'_> {
					Value::Scalar(Scalar::$variant(*self))
				}
			}
		)*
	};
}

scalar_form_value! {
	bool => Bool,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	isize => Isize,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	usize => Usize,
	f32 => F32,
	f64 => F64,
	Complex<f32> => C64,
	Complex<f64> => C128,
}

impl FormValue for u8 {
	fn form_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::U8(*self))
	}

	fn form_seq(items: &[Self]) -> SeqValue<'_> {
		SeqValue::Bytes(Cow::Borrowed(items))
	}

	fn form_ref_seq<'a>(items: &'a [&'a Self]) -> SeqValue<'a> {
		SeqValue::Bytes(Cow::Owned(items.iter().map(|byte| **byte).collect()))
	}
}

impl FormValue for str {
	const IS_STR: bool = true;

	fn form_value(&self) -> Value<'_> {
		Value::Scalar(Scalar::Str(Cow::Borrowed(self)))
	}

	fn form_str(&self) -> Option<&str> {
		Some(self)
	}
}

impl FormValue for String {
	const IS_STR: bool = true;

	fn form_value(&self) -> Value<'_> {
		self.as_str().form_value()
	}

	fn form_str(&self) -> Option<&str> {
		Some(self.as_str())
	}
}

impl FormValue for Cow<'_, str> {
	const IS_STR: bool = true;

	fn form_value(&self) -> Value<'_> {
		(**self).form_value()
	}

	fn form_str(&self) -> Option<&str> {
		Some(&**self)
	}
}

impl<T: FormValue + ?Sized> FormValue for &T {
	const IS_STR: bool = T::IS_STR;

	fn form_value(&self) -> Value<'_> {
		(**self).form_value()
	}

	fn form_str(&self) -> Option<&str> {
		(**self).form_str()
	}

	fn form_seq(items: &[Self]) -> SeqValue<'_> {
		T::form_ref_seq(items)
	}
}

impl<T: FormValue + ?Sized> FormValue for Box<T> {
	const IS_STR: bool = T::IS_STR;

	fn form_value(&self) -> Value<'_> {
		(**self).form_value()
	}

	fn form_str(&self) -> Option<&str> {
		(**self).form_str()
	}
}

impl<T: FormValue + ?Sized> FormValue for Rc<T> {
	const IS_STR: bool = T::IS_STR;

	fn form_value(&self) -> Value<'_> {
		(**self).form_value()
	}

	fn form_str(&self) -> Option<&str> {
		(**self).form_str()
	}
}

impl<T: FormValue + ?Sized> FormValue for Arc<T> {
	const IS_STR: bool = T::IS_STR;

	fn form_value(&self) -> Value<'_> {
		(**self).form_value()
	}

	fn form_str(&self) -> Option<&str> {
		(**self).form_str()
	}
}

impl<T: FormValue> FormValue for Option<T> {
	fn form_value(&self) -> Value<'_> {
		Value::Ptr(self.as_ref().map(|inner| Box::new(inner.form_value())))
	}
}

impl<T: FormValue> FormValue for [T] {
	fn form_value(&self) -> Value<'_> {
		Value::Seq(T::form_seq(self))
	}
}

impl<T: FormValue, const N: usize> FormValue for [T; N] {
	fn form_value(&self) -> Value<'_> {
		Value::Seq(T::form_seq(self))
	}
}

impl<T: FormValue> FormValue for Vec<T> {
	fn form_value(&self) -> Value<'_> {
		Value::Seq(T::form_seq(self))
	}
}

fn map_value<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Value<'a>
where
	K: FormValue + 'a,
	V: FormValue + 'a,
{
	Value::Map(MapValue {
		entries: entries.map(|(key, value)| (key.form_value(), value.form_value())).collect(),
	})
}

impl<K: FormValue, V: FormValue, S: BuildHasher> FormValue for HashMap<K, V, S> {
	fn form_value(&self) -> Value<'_> {
		map_value(self.iter())
	}
}

impl<K: FormValue, V: FormValue> FormValue for BTreeMap<K, V> {
	fn form_value(&self) -> Value<'_> {
		map_value(self.iter())
	}
}

impl<K: FormValue, V: FormValue, S: BuildHasher> FormValue for IndexMap<K, V, S> {
	fn form_value(&self) -> Value<'_> {
		map_value(self.iter())
	}
}

impl<R> FormValue for fn() -> R {
	fn form_value(&self) -> Value<'_> {
		Value::Opaque("func")
	}
}

impl<A, R> FormValue for fn(A) -> R {
	fn form_value(&self) -> Value<'_> {
		Value::Opaque("func")
	}
}

impl<T> FormValue for Sender<T> {
	fn form_value(&self) -> Value<'_> {
		Value::Opaque("chan")
	}
}

impl<T> FormValue for SyncSender<T> {
	fn form_value(&self) -> Value<'_> {
		Value::Opaque("chan")
	}
}

impl<T> FormValue for Receiver<T> {
	fn form_value(&self) -> Value<'_> {
		Value::Opaque("chan")
	}
}

impl<T: ?Sized> FormValue for *const T {
	fn form_value(&self) -> Value<'_> {
		Value::Opaque("unsafe pointer")
	}
}

impl<T: ?Sized> FormValue for *mut T {
	fn form_value(&self) -> Value<'_> {
		Value::Opaque("unsafe pointer")
	}
}

#[cfg(test)]
mod tests;
