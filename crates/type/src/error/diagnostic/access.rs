// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use crate::{error::diagnostic::Diagnostic, fragment::IntoFragment, value::r#type::Type};

pub fn value_cannot_be_accessed_as(
	fragment: impl IntoFragment,
	value_type: Type,
	target: Type,
) -> Diagnostic {
	let fragment = fragment.into_fragment();
	let label = Some(format!("cannot read a {} value as {}", value_type, target));
	Diagnostic {
		code: "ACCESS_001".to_string(),
		statement: None,
		message: format!("value of type {} cannot be accessed as {}", value_type, target),
		fragment: Some(fragment),
		label,
		help: Some("an accessor only widens; it never narrows or reinterprets a value".to_string()),
		notes: vec![
			"this indicates a bug in upstream type assignment".to_string(),
		],
		cause: None,
	}
}
