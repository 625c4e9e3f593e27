use std::borrow::Cow;
use std::fmt;

/// Read-only view over one host value, as seen by the encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
	/// Absent value; encodes to nothing.
	Invalid,
	/// Primitive leaf.
	Scalar(Scalar<'a>),
	/// Record with ordered, named fields.
	Struct(StructValue<'a>),
	/// Slice or array.
	Seq(SeqValue<'a>),
	/// Associative container.
	Map(MapValue<'a>),
	/// Pointer or optional; `None` is a nil pointer.
	Ptr(Option<Box<Value<'a>>>),
	/// Host value with no form encoding (functions, channels, raw pointers).
	Opaque(&'static str),
}

/// Primitive leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
	/// Boolean.
	Bool(bool),
	/// 8-bit signed integer.
	I8(i8),
	/// 16-bit signed integer.
	I16(i16),
	/// 32-bit signed integer.
	I32(i32),
	/// 64-bit signed integer.
	I64(i64),
	/// Pointer-sized signed integer.
	Isize(isize),
	/// 8-bit unsigned integer.
	U8(u8),
	/// 16-bit unsigned integer.
	U16(u16),
	/// 32-bit unsigned integer.
	U32(u32),
	/// 64-bit unsigned integer.
	U64(u64),
	/// Pointer-sized unsigned integer.
	Usize(usize),
	/// 32-bit float.
	F32(f32),
	/// 64-bit float.
	F64(f64),
	/// Complex number with 32-bit parts.
	C64(Complex<f32>),
	/// Complex number with 64-bit parts.
	C128(Complex<f64>),
	/// UTF-8 string.
	Str(Cow<'a, str>),
}

/// Complex number in rectangular form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
	/// Real part.
	pub re: T,
	/// Imaginary part.
	pub im: T,
}

impl<T> Complex<T> {
	/// Build a complex number from its parts.
	pub const fn new(re: T, im: T) -> Self {
		Self { re, im }
	}
}

/// Sequence payload, split by element type.
#[derive(Debug, Clone, PartialEq)]
pub enum SeqValue<'a> {
	/// Elements are single-byte primitives.
	Bytes(Cow<'a, [u8]>),
	/// Elements are strings.
	Strings(Vec<Cow<'a, str>>),
	/// Any other element type.
	Items(Vec<Value<'a>>),
}

/// Mapping entries in the order the source container yields them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapValue<'a> {
	/// Key/value entries.
	pub entries: Vec<(Value<'a>, Value<'a>)>,
}

/// Struct value with field metadata preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue<'a> {
	/// Host type name, for diagnostics.
	pub type_name: &'a str,
	/// Fields in declaration order.
	pub fields: Vec<Field<'a>>,
}

/// One struct field and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
	/// Declared name and tags.
	pub meta: FieldMeta<'a>,
	/// Field payload.
	pub value: Value<'a>,
}

/// Declared field name plus `(tag name, raw tag value)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta<'a> {
	/// Declared field identifier.
	pub name: &'a str,
	/// Raw tags keyed by tag name.
	pub tags: &'a [(&'a str, &'a str)],
}

impl<'a> FieldMeta<'a> {
	/// Metadata for a field without tags.
	pub const fn untagged(name: &'a str) -> Self {
		Self { name, tags: &[] }
	}

	/// Raw tag value registered under `tag_name`.
	pub fn tag(&self, tag_name: &str) -> Option<&'a str> {
		self.tags.iter().find(|(name, _)| *name == tag_name).map(|(_, raw)| *raw)
	}
}

/// Abstract value kind used for encoder dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
	/// Absent value.
	Invalid,
	/// `bool`.
	Bool,
	/// `i8`.
	I8,
	/// `i16`.
	I16,
	/// `i32`.
	I32,
	/// `i64`.
	I64,
	/// `isize`.
	Isize,
	/// `u8`.
	U8,
	/// `u16`.
	U16,
	/// `u32`.
	U32,
	/// `u64`.
	U64,
	/// `usize`.
	Usize,
	/// `f32`.
	F32,
	/// `f64`.
	F64,
	/// `Complex<f32>`.
	C64,
	/// `Complex<f64>`.
	C128,
	/// String.
	String,
	/// Struct.
	Struct,
	/// Slice or array.
	Seq,
	/// Mapping.
	Map,
	/// Pointer or optional.
	Ptr,
	/// Kind without an encoder, named by its host kind.
	Opaque(&'static str),
}

impl Kind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Invalid => "invalid",
			Self::Bool => "bool",
			Self::I8 => "i8",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::Isize => "isize",
			Self::U8 => "u8",
			Self::U16 => "u16",
			Self::U32 => "u32",
			Self::U64 => "u64",
			Self::Usize => "usize",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::C64 => "complex64",
			Self::C128 => "complex128",
			Self::String => "string",
			Self::Struct => "struct",
			Self::Seq => "seq",
			Self::Map => "map",
			Self::Ptr => "ptr",
			Self::Opaque(name) => name,
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

impl Value<'_> {
	/// Abstract kind of this value, without unwrapping pointers.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Invalid => Kind::Invalid,
			Self::Scalar(scalar) => scalar.kind(),
			Self::Struct(_) => Kind::Struct,
			Self::Seq(_) => Kind::Seq,
			Self::Map(_) => Kind::Map,
			Self::Ptr(_) => Kind::Ptr,
			Self::Opaque(name) => Kind::Opaque(*name),
		}
	}

	/// Follow pointer layers; `None` when a nil pointer is reached.
	pub fn deref_ptr(&self) -> Option<&Self> {
		let mut current = self;
		while let Self::Ptr(inner) = current {
			current = inner.as_deref()?;
		}
		Some(current)
	}
}

impl Scalar<'_> {
	/// Primitive kind of this scalar.
	pub fn kind(&self) -> Kind {
		match self {
			Self::Bool(_) => Kind::Bool,
			Self::I8(_) => Kind::I8,
			Self::I16(_) => Kind::I16,
			Self::I32(_) => Kind::I32,
			Self::I64(_) => Kind::I64,
			Self::Isize(_) => Kind::Isize,
			Self::U8(_) => Kind::U8,
			Self::U16(_) => Kind::U16,
			Self::U32(_) => Kind::U32,
			Self::U64(_) => Kind::U64,
			Self::Usize(_) => Kind::Usize,
			Self::F32(_) => Kind::F32,
			Self::F64(_) => Kind::F64,
			Self::C64(_) => Kind::C64,
			Self::C128(_) => Kind::C128,
			Self::Str(_) => Kind::String,
		}
	}
}
