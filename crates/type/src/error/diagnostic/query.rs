// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use crate::{error::diagnostic::Diagnostic, fragment::IntoFragment};

pub fn column_not_found(fragment: impl IntoFragment, index: usize) -> Diagnostic {
	let fragment = fragment.into_fragment();
	Diagnostic {
		code: "QUERY_001".to_string(),
		statement: None,
		message: format!("column {} not found in row", index),
		fragment: Some(fragment),
		label: Some("this column does not exist in the current row".to_string()),
		help: Some("ensure the plan binds column indexes against the row layout it executes over".to_string()),
		notes: vec![],
		cause: None,
	}
}
