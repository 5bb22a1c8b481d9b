// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use opal_type::{
	Fragment, Type, Value,
	error::diagnostic::operator::{add_cannot_be_applied_to_incompatible_types, unsupported_result_type},
	return_error,
	value::number::SafeAdd,
};
use tracing::instrument;

use crate::{
	evaluate::{EvaluationContext, Row},
	expression::{Expression, Operator},
};

/// Binary addition over two operand expressions.
///
/// The result type is resolved from the operands' declared types once, at
/// construction time, and is immutable for the lifetime of the node. That
/// makes evaluation a pure `&self` call: the node carries no interior
/// mutability and is safe to share across query-execution threads.
#[derive(Debug)]
pub struct AddExpression {
	left: Box<dyn Expression>,
	right: Box<dyn Expression>,
	target: Type,
	fragment: Fragment,
}

impl AddExpression {
	#[instrument(name = "expression::add::new", level = "trace", skip_all)]
	pub fn new(
		left: Box<dyn Expression>,
		right: Box<dyn Expression>,
		fragment: Fragment,
	) -> crate::Result<Self> {
		let Some(target) = Type::promote(left.get_type(), right.get_type()) else {
			return_error!(add_cannot_be_applied_to_incompatible_types(
				fragment,
				left.get_type(),
				right.get_type(),
			));
		};

		Ok(Self {
			left,
			right,
			target,
			fragment,
		})
	}

	pub fn operator(&self) -> Operator {
		Operator::Plus
	}
}

impl Expression for AddExpression {
	#[instrument(name = "expression::add::evaluate", level = "trace", skip_all)]
	fn evaluate(&self, ctx: &EvaluationContext, row: &Row) -> crate::Result<Value> {
		// Fail-fast null semantics: an undefined left operand
		// short-circuits before the right operand runs.
		let left = self.left.evaluate(ctx, row)?;
		if left.is_undefined() {
			return Ok(Value::Undefined);
		}

		let right = self.right.evaluate(ctx, row)?;
		if right.is_undefined() {
			return Ok(Value::Undefined);
		}

		add_numeric(&left, &right, self.target, &self.fragment)
	}

	fn get_type(&self) -> Type {
		self.target
	}
}

/// Integral sums wrap at the resolved width, matching the engine's native
/// fixed-width arithmetic. Floating-point sums follow IEEE-754, NaN and
/// infinities included. Decimal sums are exact.
fn add_numeric(left: &Value, right: &Value, target: Type, fragment: &Fragment) -> crate::Result<Value> {
	match target {
		Type::Int1 => Ok(Value::int1(SafeAdd::wrapping_add(
			left.to_int1(fragment)?,
			right.to_int1(fragment)?,
		))),
		Type::Int2 => Ok(Value::int2(SafeAdd::wrapping_add(
			left.to_int2(fragment)?,
			right.to_int2(fragment)?,
		))),
		Type::Int4 => Ok(Value::int4(SafeAdd::wrapping_add(
			left.to_int4(fragment)?,
			right.to_int4(fragment)?,
		))),
		Type::Int8 => Ok(Value::int8(SafeAdd::wrapping_add(
			left.to_int8(fragment)?,
			right.to_int8(fragment)?,
		))),
		Type::Decimal => Ok(Value::decimal(left.to_decimal(fragment)? + right.to_decimal(fragment)?)),
		Type::Float4 => Ok(Value::float4(SafeAdd::wrapping_add(
			left.to_float4(fragment)?,
			right.to_float4(fragment)?,
		))),
		Type::Float8 => Ok(Value::float8(SafeAdd::wrapping_add(
			left.to_float8(fragment)?,
			right.to_float8(fragment)?,
		))),
		ty => return_error!(unsupported_result_type(fragment, ty)),
	}
}

#[cfg(test)]
mod tests {
	use std::{
		str::FromStr,
		sync::{
			Arc,
			atomic::{AtomicUsize, Ordering},
		},
	};

	use opal_type::{Decimal, Fragment, Type, Value};

	use super::AddExpression;
	use crate::{
		evaluate::{EvaluationContext, Row},
		expression::{ConstantExpression, Expression, Operator},
	};

	fn add(left: Value, right: Value) -> AddExpression {
		AddExpression::new(
			Box::new(ConstantExpression::new(left)),
			Box::new(ConstantExpression::new(right)),
			Fragment::testing_empty(),
		)
		.unwrap()
	}

	fn eval(expression: &AddExpression) -> Value {
		let ctx = EvaluationContext::testing();
		let row = Row::new(vec![]);
		expression.evaluate(&ctx, &row).unwrap()
	}

	/// Counts how often it is evaluated; used to observe short-circuiting.
	#[derive(Debug)]
	struct CountingOperand {
		value: Value,
		ty: Type,
		calls: Arc<AtomicUsize>,
	}

	impl Expression for CountingOperand {
		fn evaluate(&self, _ctx: &EvaluationContext, _row: &Row) -> crate::Result<Value> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			Ok(self.value.clone())
		}

		fn get_type(&self) -> Type {
			self.ty
		}
	}

	#[test]
	fn test_same_type_integers() {
		let expression = add(Value::int4(5), Value::int4(7));
		assert_eq!(expression.get_type(), Type::Int4);
		assert_eq!(eval(&expression), Value::int4(12));
	}

	#[test]
	fn test_mixed_integers_widen() {
		let expression = add(Value::int2(1i16), Value::int8(2i64));
		assert_eq!(expression.get_type(), Type::Int8);
		assert_eq!(eval(&expression), Value::int8(3i64));
	}

	#[test]
	fn test_int1_overflow_wraps() {
		let expression = add(Value::int1(127i8), Value::int1(1i8));
		assert_eq!(eval(&expression), Value::int1(-128i8));
	}

	#[test]
	fn test_int8_overflow_wraps() {
		let expression = add(Value::int8(i64::MAX), Value::int8(1i64));
		assert_eq!(eval(&expression), Value::int8(i64::MIN));
	}

	#[test]
	fn test_decimal_addition_is_exact() {
		let expression = add(
			Value::decimal(Decimal::from_str("0.1").unwrap()),
			Value::decimal(Decimal::from_str("0.2").unwrap()),
		);
		assert_eq!(expression.get_type(), Type::Decimal);
		assert_eq!(eval(&expression), Value::decimal(Decimal::from_str("0.3").unwrap()));
	}

	#[test]
	fn test_decimal_dominates_floating_point() {
		let expression = add(Value::decimal(Decimal::from_str("1.5").unwrap()), Value::float8(0.25));
		assert_eq!(expression.get_type(), Type::Decimal);
		assert_eq!(eval(&expression), Value::decimal(Decimal::from_str("1.75").unwrap()));
	}

	#[test]
	fn test_decimal_with_integer() {
		let expression = add(Value::decimal(Decimal::from_str("0.5").unwrap()), Value::int4(2));
		assert_eq!(eval(&expression), Value::decimal(Decimal::from_str("2.5").unwrap()));
	}

	#[test]
	fn test_float8_nan_propagates() {
		let expression = add(Value::float8(f64::NAN), Value::float8(1.0));
		let Value::Float8(result) = eval(&expression) else {
			panic!("expected Float8");
		};
		assert!(result.is_nan());
	}

	#[test]
	fn test_float8_infinity_propagates() {
		let expression = add(Value::float8(f64::INFINITY), Value::float8(1.0));
		assert_eq!(eval(&expression), Value::float8(f64::INFINITY));
	}

	#[test]
	fn test_float4_stays_float4_with_integer() {
		let expression = add(Value::float4(1.5f32), Value::int4(2));
		assert_eq!(expression.get_type(), Type::Float4);
		assert_eq!(eval(&expression), Value::float4(3.5f32));
	}

	#[test]
	fn test_undefined_left_short_circuits() {
		let calls = Arc::new(AtomicUsize::new(0));
		let left = ConstantExpression::undefined(Type::Int4);
		let right = CountingOperand {
			value: Value::int4(3),
			ty: Type::Int4,
			calls: Arc::clone(&calls),
		};

		let expression =
			AddExpression::new(Box::new(left), Box::new(right), Fragment::testing_empty()).unwrap();
		assert_eq!(eval(&expression), Value::Undefined);
		assert_eq!(calls.load(Ordering::SeqCst), 0);
	}

	#[test]
	fn test_undefined_right_yields_undefined() {
		let expression = AddExpression::new(
			Box::new(ConstantExpression::new(Value::int4(3))),
			Box::new(ConstantExpression::undefined(Type::Int4)),
			Fragment::testing_empty(),
		)
		.unwrap();
		assert_eq!(eval(&expression), Value::Undefined);
	}

	#[test]
	fn test_repeated_evaluation_is_idempotent() {
		let expression = add(Value::int4(5), Value::int4(7));
		let first = eval(&expression);
		let second = eval(&expression);
		assert_eq!(first, second);
		assert_eq!(expression.get_type(), Type::Int4);
	}

	#[test]
	fn test_incompatible_types_fail_at_construction() {
		let err = AddExpression::new(
			Box::new(ConstantExpression::new(Value::utf8("12"))),
			Box::new(ConstantExpression::new(Value::int4(3))),
			Fragment::testing("'12' + 3"),
		)
		.unwrap_err();
		assert_eq!(err.code, "OPERATOR_001");
	}

	#[test]
	fn test_operator_tag() {
		let expression = add(Value::int4(1), Value::int4(2));
		assert_eq!(expression.operator(), Operator::Plus);
	}
}
