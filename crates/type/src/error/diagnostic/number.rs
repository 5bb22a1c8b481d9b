// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use crate::{error::diagnostic::Diagnostic, fragment::IntoFragment, value::r#type::Type};

pub fn invalid_number_format(fragment: impl IntoFragment, target: Type) -> Diagnostic {
	let fragment = fragment.into_fragment();
	let label = Some(format!("'{}' is not a valid {}", fragment.text, target));
	Diagnostic {
		code: "NUMBER_001".to_string(),
		statement: None,
		message: format!("invalid {} literal", target),
		fragment: Some(fragment),
		label,
		help: Some("use a plain decimal notation such as 42, -1.5 or 0.25".to_string()),
		notes: vec![],
		cause: None,
	}
}
