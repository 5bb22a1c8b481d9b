// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

pub mod evaluate;
pub mod expression;

pub use evaluate::{EvaluationContext, Row};
pub use expression::{AddExpression, ColumnExpression, ConstantExpression, Expression, Operator};

pub type Result<T> = std::result::Result<T, opal_type::Error>;
