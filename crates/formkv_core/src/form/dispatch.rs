use crate::form::encode::{encode_invalid, encode_map, encode_scalar, encode_seq, encode_struct};
use crate::form::encoder::Encoder;
use crate::form::kv::Kv;
use crate::form::value::{Kind, Value};
use crate::form::Result;

/// Encoder entry for one value kind: `(encoder, value, key) -> pairs`.
pub(crate) type EncodeFn = fn(&Encoder, &Value<'_>, &str) -> Result<Vec<Kv>>;

/// Encoder registered for `kind`.
///
/// Pointers are unwrapped before lookup and have no entry of their own.
pub(crate) fn lookup(kind: Kind) -> Option<EncodeFn> {
	match kind {
		Kind::Invalid => Some(encode_invalid),
		Kind::Bool
		| Kind::I8
		| Kind::I16
		| Kind::I32
		| Kind::I64
		| Kind::Isize
		| Kind::U8
		| Kind::U16
		| Kind::U32
		| Kind::U64
		| Kind::Usize
		| Kind::F32
		| Kind::F64
		| Kind::C64
		| Kind::C128
		| Kind::String => Some(encode_scalar),
		Kind::Struct => Some(encode_struct),
		Kind::Seq => Some(encode_seq),
		Kind::Map => Some(encode_map),
		Kind::Ptr | Kind::Opaque(_) => None,
	}
}
