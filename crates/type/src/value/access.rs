// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use bigdecimal::BigDecimal;

use crate::{
	error::diagnostic::access::value_cannot_be_accessed_as,
	fragment::IntoFragment,
	return_error,
	value::{Decimal, Value, r#type::Type},
};

/// Per-width value accessors. Each accessor accepts exactly the variants it
/// can widen without loss relative to its declared capability and fails with
/// an `ACCESS_001` diagnostic on anything else; such a mismatch is a
/// contract violation by upstream type assignment, not a data problem.
impl Value {
	pub fn to_int1(&self, fragment: impl IntoFragment) -> crate::Result<i8> {
		match self {
			Value::Int1(v) => Ok(*v),
			_ => return_error!(value_cannot_be_accessed_as(fragment, self.get_type(), Type::Int1)),
		}
	}

	pub fn to_int2(&self, fragment: impl IntoFragment) -> crate::Result<i16> {
		match self {
			Value::Int1(v) => Ok(*v as i16),
			Value::Int2(v) => Ok(*v),
			_ => return_error!(value_cannot_be_accessed_as(fragment, self.get_type(), Type::Int2)),
		}
	}

	pub fn to_int4(&self, fragment: impl IntoFragment) -> crate::Result<i32> {
		match self {
			Value::Int1(v) => Ok(*v as i32),
			Value::Int2(v) => Ok(*v as i32),
			Value::Int4(v) => Ok(*v),
			_ => return_error!(value_cannot_be_accessed_as(fragment, self.get_type(), Type::Int4)),
		}
	}

	pub fn to_int8(&self, fragment: impl IntoFragment) -> crate::Result<i64> {
		match self {
			Value::Int1(v) => Ok(*v as i64),
			Value::Int2(v) => Ok(*v as i64),
			Value::Int4(v) => Ok(*v as i64),
			Value::Int8(v) => Ok(*v),
			_ => return_error!(value_cannot_be_accessed_as(fragment, self.get_type(), Type::Int8)),
		}
	}

	pub fn to_float4(&self, fragment: impl IntoFragment) -> crate::Result<f32> {
		match self {
			Value::Int1(v) => Ok(*v as f32),
			Value::Int2(v) => Ok(*v as f32),
			Value::Int4(v) => Ok(*v as f32),
			Value::Int8(v) => Ok(*v as f32),
			Value::Float4(v) => Ok(v.value()),
			_ => return_error!(value_cannot_be_accessed_as(fragment, self.get_type(), Type::Float4)),
		}
	}

	pub fn to_float8(&self, fragment: impl IntoFragment) -> crate::Result<f64> {
		match self {
			Value::Int1(v) => Ok(*v as f64),
			Value::Int2(v) => Ok(*v as f64),
			Value::Int4(v) => Ok(*v as f64),
			Value::Int8(v) => Ok(*v as f64),
			Value::Float4(v) => Ok(v.value() as f64),
			Value::Float8(v) => Ok(v.value()),
			_ => return_error!(value_cannot_be_accessed_as(fragment, self.get_type(), Type::Float8)),
		}
	}

	pub fn to_decimal(&self, fragment: impl IntoFragment) -> crate::Result<Decimal> {
		match self {
			Value::Int1(v) => Ok(Decimal::from(*v)),
			Value::Int2(v) => Ok(Decimal::from(*v)),
			Value::Int4(v) => Ok(Decimal::from(*v)),
			Value::Int8(v) => Ok(Decimal::from(*v)),
			// NaN and the infinities have no decimal representation
			Value::Float4(v) => match BigDecimal::try_from(v.value()) {
				Ok(inner) => Ok(Decimal::new(inner)),
				Err(_) => return_error!(value_cannot_be_accessed_as(
					fragment,
					self.get_type(),
					Type::Decimal
				)),
			},
			Value::Float8(v) => match BigDecimal::try_from(v.value()) {
				Ok(inner) => Ok(Decimal::new(inner)),
				Err(_) => return_error!(value_cannot_be_accessed_as(
					fragment,
					self.get_type(),
					Type::Decimal
				)),
			},
			Value::Decimal(v) => Ok(v.clone()),
			_ => return_error!(value_cannot_be_accessed_as(fragment, self.get_type(), Type::Decimal)),
		}
	}
}
