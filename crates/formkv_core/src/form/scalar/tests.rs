use std::borrow::Cow;

use super::render_scalar;
use crate::form::{Complex, Scalar};

#[test]
fn booleans_render_as_words() {
	assert_eq!(render_scalar(&Scalar::Bool(true)), "true");
	assert_eq!(render_scalar(&Scalar::Bool(false)), "false");
}

#[test]
fn integers_render_in_base_ten() {
	assert_eq!(render_scalar(&Scalar::I8(-128)), "-128");
	assert_eq!(render_scalar(&Scalar::I64(i64::MIN)), "-9223372036854775808");
	assert_eq!(render_scalar(&Scalar::U8(255)), "255");
	assert_eq!(render_scalar(&Scalar::U64(u64::MAX)), "18446744073709551615");
	assert_eq!(render_scalar(&Scalar::Usize(42)), "42");
}

#[test]
fn floats_use_shortest_round_trip_text() {
	assert_eq!(render_scalar(&Scalar::F64(2.75)), "2.75");
	assert_eq!(render_scalar(&Scalar::F32(2.75)), "2.75");
	assert_eq!(render_scalar(&Scalar::F64(2.0)), "2");
	assert_eq!(render_scalar(&Scalar::F64(0.1 + 0.2)), "0.30000000000000004");
	assert_eq!(render_scalar(&Scalar::F32(0.1)), "0.1");
}

#[test]
fn floats_never_use_exponent_notation() {
	assert_eq!(render_scalar(&Scalar::F64(1e21)), "1000000000000000000000");
	assert_eq!(render_scalar(&Scalar::F64(1e-7)), "0.0000001");
}

#[test]
fn non_finite_floats_have_fixed_labels() {
	assert_eq!(render_scalar(&Scalar::F64(f64::NAN)), "NaN");
	assert_eq!(render_scalar(&Scalar::F64(f64::INFINITY)), "inf");
	assert_eq!(render_scalar(&Scalar::F32(f32::NEG_INFINITY)), "-inf");
}

#[test]
fn complex_numbers_render_in_parentheses() {
	assert_eq!(render_scalar(&Scalar::C128(Complex::new(1.0, 2.0))), "(1+2i)");
	assert_eq!(render_scalar(&Scalar::C128(Complex::new(1.5, -0.5))), "(1.5-0.5i)");
	assert_eq!(render_scalar(&Scalar::C64(Complex::new(-1.0, 0.0))), "(-1+0i)");
}

#[test]
fn strings_render_verbatim() {
	assert_eq!(render_scalar(&Scalar::Str(Cow::Borrowed("1核"))), "1核");
	assert_eq!(render_scalar(&Scalar::Str(Cow::Owned(String::new()))), "");
}
