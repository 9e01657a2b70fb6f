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

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::zero::Zero;

/// Native host function carried by [`Value::Function`].
pub type NativeFn = Arc<dyn Fn(Vec<Value>) -> Value + Send + Sync>;

/// Dynamically shaped value.
///
/// Each variant is one emptiness classification. Values whose shape is only
/// known at runtime (decoded payloads, template data, loosely typed
/// configuration) are lifted into this type so the predicates can reason
/// about them without knowing a concrete Rust type.
///
/// Nullable kinds carry an `Option`: `None` is the absent handle, which is
/// distinct from an allocated-but-empty container even though both are zero.
#[derive(Clone, Default)]
pub enum Value {
    // Untyped absent marker
    #[default]
    Null,

    // Scalars
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex { re: f64, im: f64 },
    String(String),

    // Error carrier: `None` is "no failure", `Some(message)` a failure
    // (even with an empty message)
    Error(Option<String>),

    // Indirect handles
    Handle(Option<Box<Value>>),
    Function(Option<NativeFn>),

    // Channel handle with the number of buffered messages
    Channel(Option<usize>),

    // Dynamically sized containers
    List(Option<Vec<Value>>),
    Map(Option<HashMap<String, Value>>),

    // Fixed-size array
    Array(Vec<Value>),

    // Aggregate with named fields, in declaration order
    Record(Vec<(String, Value)>),
}

impl Value {
    /// Returns a stable type name string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null           => "Null",
            Value::Bool(_)        => "Bool",
            Value::Int(_)         => "Int",
            Value::Uint(_)        => "Uint",
            Value::Float(_)       => "Float",
            Value::Complex { .. } => "Complex",
            Value::String(_)      => "String",
            Value::Error(_)       => "Error",
            Value::Handle(_)      => "Handle",
            Value::Function(_)    => "Function",
            Value::Channel(_)     => "Channel",
            Value::List(_)        => "List",
            Value::Map(_)         => "Map",
            Value::Array(_)       => "Array",
            Value::Record(_)      => "Record",
        }
    }

    /// Wraps a native closure as a live function handle.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(Vec<Value>) -> Value + Send + Sync + 'static,
    {
        Value::Function(Some(Arc::new(f)))
    }

    /// An error carrier holding a failure with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(Some(message.into()))
    }

    /// A live handle pointing at `target`.
    pub fn handle(target: impl Into<Value>) -> Self {
        Value::Handle(Some(Box::new(target.into())))
    }

    /// A fixed-size array built from `items`.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// An aggregate built from `(field, value)` pairs.
    pub fn record<K, V, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Number of elements for containers, `None` for everything else.
    ///
    /// The absent list/map handle reports a length of 0.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::List(items) => Some(items.as_ref().map_or(0, Vec::len)),
            Value::Map(entries) => Some(entries.as_ref().map_or(0, HashMap::len)),
            Value::Array(items) => Some(items.len()),
            Value::Channel(buffered) => Some(buffered.unwrap_or(0)),
            _ => None,
        }
    }
}

impl Zero for Value {
    fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Int(n) => *n == 0,
            Value::Uint(n) => *n == 0,
            Value::Float(n) => *n == 0.0,
            Value::Complex { re, im } => *re == 0.0 && *im == 0.0,
            Value::String(s) => s.is_empty(),

            Value::Error(failure) => failure.is_none(),

            // Handles are zero only when they refer to nothing,
            // whatever the target holds.
            Value::Handle(target) => target.is_none(),
            Value::Function(f) => f.is_none(),
            Value::Channel(buffered) => buffered.is_none(),

            // Absent or allocated-but-empty
            Value::List(items) => items.as_ref().map_or(true, Vec::is_empty),
            Value::Map(entries) => entries.as_ref().map_or(true, HashMap::is_empty),

            // Structural
            Value::Array(items) => items.iter().all(Value::is_zero),
            Value::Record(fields) => fields.iter().all(|(_, value)| value.is_zero()),
        }
    }

    fn is_empty(&self) -> bool {
        match self.len() {
            Some(len) => len == 0,
            None => self.is_zero(),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality; function handles compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (
                Value::Complex { re: ar, im: ai },
                Value::Complex { re: br, im: bi },
            ) => ar == br && ai == bi,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Handle(a), Value::Handle(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => match (a, b) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            },
            (Value::Channel(a), Value::Channel(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({})", b),
            Value::Int(n) => write!(f, "Int({})", n),
            Value::Uint(n) => write!(f, "Uint({})", n),
            Value::Float(n) => write!(f, "Float({})", n),
            Value::Complex { re, im } => write!(f, "Complex({}{:+}i)", re, im),
            Value::String(s) => write!(f, "String({:?})", s),

            Value::Error(Some(message)) => write!(f, "Error({:?})", message),
            Value::Error(None) => write!(f, "Error(nil)"),

            Value::Handle(Some(target)) => write!(f, "Handle({:?})", target),
            Value::Function(Some(_)) => write!(f, "[NativeFunction]"),
            Value::Channel(Some(buffered)) => write!(f, "[Channel buffered={}]", buffered),

            Value::List(Some(items)) => f.debug_list().entries(items).finish(),
            Value::Map(Some(entries)) => f.debug_map().entries(entries).finish(),

            Value::Handle(None) => write!(f, "Handle(nil)"),
            Value::Function(None) => write!(f, "Function(nil)"),
            Value::Channel(None) => write!(f, "Channel(nil)"),
            Value::List(None) => write!(f, "List(nil)"),
            Value::Map(None) => write!(f, "Map(nil)"),

            Value::Array(items) => write!(f, "Array{:?}", items),

            Value::Record(fields) => {
                let mut record = f.debug_struct("Record");
                for (name, value) in fields {
                    record.field(name, value);
                }
                record.finish()
            }
        }
    }
}

macro_rules! value_from {
    ($variant:ident as $target:ty: $($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::$variant(value as $target)
                }
            }
        )*
    };
}

value_from!(Int as i64: i8, i16, i32, i64, isize);
value_from!(Uint as u64: u8, u16, u32, u64, usize);
value_from!(Float as f64: f32, f64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(Some(items))
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(entries: HashMap<String, Value>) -> Self {
        Value::Map(Some(entries))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
