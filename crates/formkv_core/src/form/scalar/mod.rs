use std::fmt::Display;

use crate::form::value::Scalar;

/// Canonical text for a scalar.
///
/// Integers are base 10. Floats use the shortest text that reads back to the
/// same value and never switch to exponent notation; non-finite values render as
/// `NaN`, `inf` and `-inf`. Complex numbers render as `(re+imi)`.
pub fn render_scalar(scalar: &Scalar<'_>) -> String {
	match scalar {
		Scalar::Bool(value) => value.to_string(),
		Scalar::I8(value) => value.to_string(),
		Scalar::I16(value) => value.to_string(),
		Scalar::I32(value) => value.to_string(),
		Scalar::I64(value) => value.to_string(),
		Scalar::Isize(value) => value.to_string(),
		Scalar::U8(value) => value.to_string(),
		Scalar::U16(value) => value.to_string(),
		Scalar::U32(value) => value.to_string(),
		Scalar::U64(value) => value.to_string(),
		Scalar::Usize(value) => value.to_string(),
		Scalar::F32(value) => value.to_string(),
		Scalar::F64(value) => value.to_string(),
		Scalar::C64(value) => render_complex(value.re, value.im),
		Scalar::C128(value) => render_complex(value.re, value.im),
		Scalar::Str(value) => value.to_string(),
	}
}

fn render_complex<T: Display>(re: T, im: T) -> String {
	let im = im.to_string();
	if im.starts_with('-') {
		format!("({re}{im}i)")
	} else {
		format!("({re}+{im}i)")
	}
}

#[cfg(test)]
mod tests;
