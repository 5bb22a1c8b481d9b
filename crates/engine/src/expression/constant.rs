// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opal_type::{Type, Value};

use crate::{
	evaluate::{EvaluationContext, Row},
	expression::Expression,
};

/// A typed literal operand. The declared type is derived from the payload;
/// a typed null literal carries its declared type explicitly because the
/// payload alone cannot.
#[derive(Debug, Clone)]
pub struct ConstantExpression {
	value: Value,
	ty: Type,
}

impl ConstantExpression {
	pub fn new(value: Value) -> Self {
		let ty = value.get_type();
		Self {
			value,
			ty,
		}
	}

	/// A null literal with a declared type, e.g. `CAST(NULL AS INT4)`.
	pub fn undefined(ty: Type) -> Self {
		Self {
			value: Value::Undefined,
			ty,
		}
	}
}

impl Expression for ConstantExpression {
	fn evaluate(&self, _ctx: &EvaluationContext, _row: &Row) -> crate::Result<Value> {
		Ok(self.value.clone())
	}

	fn get_type(&self) -> Type {
		self.ty
	}
}
