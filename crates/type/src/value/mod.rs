// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod access;
mod decimal;
pub mod number;
mod ordered_f32;
mod ordered_f64;
pub mod r#type;

pub use decimal::Decimal;
pub use ordered_f32::OrderedF32;
pub use ordered_f64::OrderedF64;
pub use r#type::Type;

/// A value known by its producer to conform to a semantic type, carrying
/// its concrete payload directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Bool(bool),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// An arbitrary-precision decimal
	Decimal(Decimal),
	/// A UTF-8 encoded text
	Utf8(String),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Bool(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		Value::Float4(OrderedF32::from(v.into()))
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		Value::Float8(OrderedF64::from(v.into()))
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Value::Decimal(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}
}

impl Value {
	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Bool(_) => Type::Bool,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Decimal(_) => Type::Decimal,
			Value::Utf8(_) => Type::Utf8,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Bool(true) => f.write_str("true"),
			Value::Bool(false) => f.write_str("false"),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::{Decimal, Type, Value};

	#[test]
	fn test_get_type() {
		assert_eq!(Value::undefined().get_type(), Type::Undefined);
		assert_eq!(Value::bool(true).get_type(), Type::Bool);
		assert_eq!(Value::int1(1i8).get_type(), Type::Int1);
		assert_eq!(Value::int2(1i16).get_type(), Type::Int2);
		assert_eq!(Value::int4(1).get_type(), Type::Int4);
		assert_eq!(Value::int8(1i64).get_type(), Type::Int8);
		assert_eq!(Value::float4(1.0f32).get_type(), Type::Float4);
		assert_eq!(Value::float8(1.0).get_type(), Type::Float8);
		assert_eq!(Value::decimal(Decimal::from_str("1.0").unwrap()).get_type(), Type::Decimal);
		assert_eq!(Value::utf8("one").get_type(), Type::Utf8);
	}

	#[test]
	fn test_float_constructors_keep_nan() {
		let Value::Float8(v) = Value::float8(f64::NAN) else {
			panic!("expected Float8");
		};
		assert!(v.is_nan());
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::undefined().to_string(), "undefined");
		assert_eq!(Value::int4(12).to_string(), "12");
		assert_eq!(Value::float8(1.5).to_string(), "1.5");
		assert_eq!(Value::decimal(Decimal::from_str("0.3").unwrap()).to_string(), "0.3");
	}
}
