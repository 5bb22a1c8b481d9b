// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

pub mod error;
pub mod fragment;
pub mod value;

pub use error::{Error, diagnostic::Diagnostic};
pub use fragment::{Fragment, FragmentColumn, FragmentLine, IntoFragment};
pub use value::{Decimal, OrderedF32, OrderedF64, Value, r#type::Type};

pub type Result<T> = std::result::Result<T, Error>;
