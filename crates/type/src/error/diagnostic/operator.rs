// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use crate::{error::diagnostic::Diagnostic, fragment::IntoFragment, value::r#type::Type};

pub fn add_cannot_be_applied_to_incompatible_types(
	fragment: impl IntoFragment,
	left: Type,
	right: Type,
) -> Diagnostic {
	let fragment = fragment.into_fragment();
	let label = Some(format!("cannot add {} and {}", left, right));
	Diagnostic {
		code: "OPERATOR_001".to_string(),
		statement: None,
		message: format!("'+' cannot be applied to types {} and {}", left, right),
		fragment: Some(fragment),
		label,
		help: Some("addition is defined for the numeric types only".to_string()),
		notes: vec![
			"numeric types: Int1, Int2, Int4, Int8, Decimal, Float4, Float8".to_string(),
			"this indicates a gap in upstream type checking, not a data problem".to_string(),
		],
		cause: None,
	}
}

/// The promotion resolver produced a kind the evaluator has no arithmetic
/// path for. Must never occur in a correct build.
pub fn unsupported_result_type(fragment: impl IntoFragment, ty: Type) -> Diagnostic {
	let fragment = fragment.into_fragment();
	Diagnostic {
		code: "OPERATOR_002".to_string(),
		statement: None,
		message: format!("no arithmetic path for resolved type {}", ty),
		fragment: Some(fragment),
		label: Some("internal invariant violated".to_string()),
		help: Some(
			"this is an internal error that should never occur in normal operation; \
			 please file a bug report at: https://github.com/opaldb/opaldb/issues"
				.to_string(),
		),
		notes: vec![],
		cause: None,
	}
}
