// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opal_type::{Fragment, Type, Value, error::diagnostic::query::column_not_found, return_error};

use crate::{
	evaluate::{EvaluationContext, Row},
	expression::Expression,
};

/// An operand reading the value at a column index from the row. The declared
/// type comes from the plan's column binding.
#[derive(Debug, Clone)]
pub struct ColumnExpression {
	index: usize,
	ty: Type,
	fragment: Fragment,
}

impl ColumnExpression {
	pub fn new(index: usize, ty: Type, fragment: Fragment) -> Self {
		Self {
			index,
			ty,
			fragment,
		}
	}
}

impl Expression for ColumnExpression {
	fn evaluate(&self, _ctx: &EvaluationContext, row: &Row) -> crate::Result<Value> {
		match row.get(self.index) {
			Some(value) => Ok(value.clone()),
			None => return_error!(column_not_found(&self.fragment, self.index)),
		}
	}

	fn get_type(&self) -> Type {
		self.ty
	}
}
