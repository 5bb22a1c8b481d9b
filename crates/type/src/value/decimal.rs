// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::Add,
	str::FromStr,
};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::{
	error::diagnostic::number::invalid_number_format, fragment::Fragment, return_error,
	value::r#type::Type,
};

/// An arbitrary-precision decimal. Addition is exact; scale follows the
/// usual decimal-arithmetic rule (the larger scale of the two operands).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(inner: BigDecimal) -> Self {
		Self(inner)
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}

	/// Parses a decimal literal. Underscore separators and surrounding
	/// whitespace are tolerated, matching the engine's number lexing.
	pub fn parse(fragment: Fragment) -> crate::Result<Decimal> {
		let raw = fragment.text.trim();
		let cleaned = if raw.as_bytes().contains(&b'_') {
			raw.replace('_', "")
		} else {
			raw.to_string()
		};

		if cleaned.is_empty() {
			return_error!(invalid_number_format(fragment, Type::Decimal));
		}

		let inner = BigDecimal::from_str(&cleaned)
			.map_err(|_| crate::error!(invalid_number_format(fragment, Type::Decimal)))?;

		Ok(Decimal(inner))
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl FromStr for Decimal {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Decimal::parse(Fragment::internal(s))
	}
}

impl Add for Decimal {
	type Output = Decimal;

	fn add(self, rhs: Decimal) -> Decimal {
		Decimal(self.0 + rhs.0)
	}
}

macro_rules! impl_decimal_from_int {
	($($t:ty),*) => {
		$(
			impl From<$t> for Decimal {
				fn from(v: $t) -> Self {
					Decimal(BigDecimal::from(v))
				}
			}
		)*
	};
}

impl_decimal_from_int!(i8, i16, i32, i64);
