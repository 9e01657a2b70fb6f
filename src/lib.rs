/*
 * ==========================================================================
 * ASK - Ask once, get a value.
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the ASK project.
 *
 * ASK is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

//! Conditional-value helpers that fold "if X is meaningful use X, else Y"
//! into a single expression.
//!
//! # Basic Usage
//! ```
//! // Ternary operator
//! let label = ask::if_(3 > 2, "bigger", "smaller");
//! assert_eq!(label, "bigger");
//!
//! // Null coalescing
//! let name = ask::ifelse("", "anonymous");
//! assert_eq!(name, "anonymous");
//!
//! // First meaningful value of many
//! let port = ask::coalesce!(0, 0, 8080);
//! assert_eq!(port, 8080);
//! ```
//!
//! # Zero and Empty
//! Everything is built on the [`Zero`] trait:
//! - [`is_zero`] asks whether a value is the default inhabitant of its type.
//! - [`is_empty`] asks the same, except that containers and fixed-size
//!   arrays answer by length.
//!
//! Statically typed values go through [`Zero`] directly. Values whose type
//! is only known at runtime can be lifted into [`Value`] or passed as
//! `&dyn Any` to [`is_zero_any`] / [`is_empty_any`].
//!
//! # Features
//! - `json` (default): `Zero` for `serde_json::Value`, and `Value::from`
//!   for decoded JSON documents.
//! - `time` (default): `Zero` for chrono durations, dates and timestamps.
//! - `complex` (default): `Zero` for `num_complex::Complex<T>`.

mod dispatch;
mod error;
mod interop;
mod macros;
mod select;
mod value;
mod zero;

pub use dispatch::{is_empty_any, is_registered, is_zero_any, register};
pub use error::RegistryError;
pub use select::{coalesce, default, if_, ifelse, is_truthy, Truthy};
pub use value::{NativeFn, Value};
pub use zero::{is_empty, is_zero, Zero};
