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

use thiserror::Error;

/// Errors raised while extending the dynamic type registry.
///
/// The predicates and selectors themselves never fail; only
/// [`register`](crate::register) can report a problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The type is part of the built-in catalog and cannot be replaced.
    #[error("type `{0}` is already classified by the built-in catalog")]
    BuiltIn(&'static str),

    /// The type was registered earlier.
    #[error("type `{0}` is already registered")]
    Duplicate(&'static str),
}

impl RegistryError {
    /// Stable error code (A0001, A0002, …)
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::BuiltIn(_) => "A0001",
            RegistryError::Duplicate(_) => "A0002",
        }
    }

    /// Name of the offending type.
    pub fn type_name(&self) -> &'static str {
        match self {
            RegistryError::BuiltIn(name) | RegistryError::Duplicate(name) => name,
        }
    }
}
