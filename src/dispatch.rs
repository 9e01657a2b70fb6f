/*
 * ==========================================================================
 * ASK - Ask once, get a value.
 * Dynamic Dispatch over `dyn Any`
 * ==========================================================================
 *
 * This module answers the zero / empty questions for values whose static
 * type has been erased behind `&dyn Any`.
 *
 * Classification is a single `TypeId` lookup:
 *
 *   1. The built-in catalog (scalars, strings, common sequences and maps,
 *      error carriers, `Value`), built once on first use and never
 *      mutated afterwards.
 *   2. The registry, where applications add their own `Zero` types.
 *
 * A type found in neither table is reported as non-zero and non-empty.
 *
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the ASK project.
 *
 * ASK is dual-licensed under the terms of:
 *   - The MIT License
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

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{OnceLock, PoisonError, RwLock};

#[cfg(feature = "complex")]
use num_complex::{Complex32, Complex64};

use crate::error::RegistryError;
use crate::value::Value;
use crate::zero::Zero;

type Probe = fn(&dyn Any) -> bool;

type Table = HashMap<TypeId, Classifier>;

/// Monomorphised predicates for one concrete type.
#[derive(Clone, Copy)]
struct Classifier {
    name: &'static str,
    is_zero: Probe,
    is_empty: Probe,
}

impl Classifier {
    fn of<T: Zero + Any>() -> Self {
        Self {
            name: type_name::<T>(),
            is_zero: zero_probe::<T>,
            is_empty: empty_probe::<T>,
        }
    }
}

fn zero_probe<T: Zero + Any>(value: &dyn Any) -> bool {
    value.downcast_ref::<T>().map_or(false, T::is_zero)
}

fn empty_probe<T: Zero + Any>(value: &dyn Any) -> bool {
    value.downcast_ref::<T>().map_or(false, T::is_empty)
}

/// Built-in catalog, initialised on first use.
fn catalog() -> &'static Table {
    static CATALOG: OnceLock<Table> = OnceLock::new();

    CATALOG.get_or_init(|| {
        let mut table = Table::new();

        // `nullable:` also catalogs the absent-able `Option<T>` of each type.
        macro_rules! classify {
            (nullable: $($t:ty),* $(,)?) => {
                classify!($($t, Option<$t>),*);
            };
            ($($t:ty),* $(,)?) => {
                $( table.insert(TypeId::of::<$t>(), Classifier::of::<$t>()); )*
            };
        }

        // ---------------------------------------------------------------------
        // Scalars
        // ---------------------------------------------------------------------
        classify!(
            nullable:
            (),
            bool,
            i8, i16, i32, i64, i128, isize,
            u8, u16, u32, u64, u128, usize,
            f32, f64,
            char,
            String,
            &'static str,
        );

        // ---------------------------------------------------------------------
        // Sequences
        // ---------------------------------------------------------------------
        classify!(
            nullable:
            Vec<bool>,
            Vec<i8>, Vec<i16>, Vec<i32>, Vec<i64>, Vec<isize>,
            Vec<u8>, Vec<u16>, Vec<u32>, Vec<u64>, Vec<usize>,
            Vec<f32>, Vec<f64>,
            Vec<String>,
            Vec<&'static str>,
            Vec<Value>,
            Vec<Box<dyn Any>>,
            Vec<Box<dyn Any + Send>>,
            Vec<Box<dyn Any + Send + Sync>>,
        );

        // ---------------------------------------------------------------------
        // Mappings
        // ---------------------------------------------------------------------
        classify!(
            nullable:
            HashMap<String, String>,
            HashMap<String, i32>,
            HashMap<String, i64>,
            HashMap<String, Value>,
            HashMap<String, Box<dyn Any + Send + Sync>>,
            HashMap<i32, String>,
            HashMap<i32, i32>,
            HashMap<i64, String>,
            HashMap<i64, i64>,
        );

        // ---------------------------------------------------------------------
        // Error carriers
        // ---------------------------------------------------------------------
        classify!(
            nullable:
            Box<dyn Error>,
            Box<dyn Error + Send>,
            Box<dyn Error + Send + Sync>,
        );
        classify!(
            Result<(), Box<dyn Error>>,
            Result<(), Box<dyn Error + Send + Sync>>,
        );

        // ---------------------------------------------------------------------
        // Absent-able erased handles (a boxed `dyn Any` itself is looked
        // through before lookup)
        // ---------------------------------------------------------------------
        classify!(
            Option<Box<dyn Any>>,
            Option<Box<dyn Any + Send>>,
            Option<Box<dyn Any + Send + Sync>>,
        );

        #[cfg(feature = "complex")]
        classify!(nullable: Complex32, Complex64, Vec<Complex32>, Vec<Complex64>);

        classify!(nullable: Value);

        table
    })
}

fn registry() -> &'static RwLock<Table> {
    static REGISTRY: OnceLock<RwLock<Table>> = OnceLock::new();
    REGISTRY.get_or_init(Default::default)
}

/// Adds `T` to the registry so that `&dyn Any` values of type `T` are
/// classified with `T`'s own [`Zero`] implementation.
///
/// Predicates are resolved once per type, so later lookups cost a single
/// hash probe regardless of how many fields `T` has.
///
/// # Errors
/// - [`RegistryError::BuiltIn`] when `T` is already in the built-in catalog
/// - [`RegistryError::Duplicate`] when `T` was registered before
///
/// # Examples
/// ```
/// use std::any::Any;
///
/// struct Port(u16);
/// ask::impl_zero!(Port { 0 });
///
/// ask::register::<Port>().unwrap();
/// assert!(ask::is_zero_any(&Port(0) as &dyn Any));
/// assert!(!ask::is_zero_any(&Port(80) as &dyn Any));
/// ```
pub fn register<T: Zero + Any>() -> Result<(), RegistryError> {
    let id = TypeId::of::<T>();
    let name = type_name::<T>();

    if catalog().contains_key(&id) {
        return Err(RegistryError::BuiltIn(name));
    }

    let mut table = registry().write().unwrap_or_else(PoisonError::into_inner);
    if table.contains_key(&id) {
        return Err(RegistryError::Duplicate(name));
    }
    table.insert(id, Classifier::of::<T>());

    log::debug!("ask: registered `{}` for dynamic zero checks", name);
    Ok(())
}

/// Returns `true` if values of type `T` can be classified behind `dyn Any`.
pub fn is_registered<T: Any>() -> bool {
    lookup(TypeId::of::<T>()).is_some()
}

fn lookup(id: TypeId) -> Option<Classifier> {
    if let Some(classifier) = catalog().get(&id) {
        return Some(*classifier);
    }

    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&id)
        .copied()
}

/// Looks through boxed `dyn Any` layers; boxes are never absent.
fn unbox(mut value: &dyn Any) -> &dyn Any {
    loop {
        if let Some(inner) = value.downcast_ref::<Box<dyn Any>>() {
            value = &**inner;
        } else if let Some(inner) = value.downcast_ref::<Box<dyn Any + Send>>() {
            value = &**inner;
        } else if let Some(inner) = value.downcast_ref::<Box<dyn Any + Send + Sync>>() {
            value = &**inner;
        } else {
            return value;
        }
    }
}

fn run(classifier: Classifier, probe: Probe, value: &dyn Any) -> bool {
    panic::catch_unwind(AssertUnwindSafe(|| probe(value))).unwrap_or_else(|_| {
        log::debug!(
            "ask: zero check for `{}` panicked; treating the value as non-zero",
            classifier.name
        );
        false
    })
}

/// Reports whether a type-erased value holds the zero value of its type.
///
/// Unknown types are never zero.
///
/// # Examples
/// ```
/// use std::any::Any;
///
/// assert!(ask::is_zero_any(&0_i64 as &dyn Any));
/// assert!(ask::is_zero_any(&Vec::<String>::new() as &dyn Any));
/// assert!(!ask::is_zero_any(&"hi" as &dyn Any));
/// ```
pub fn is_zero_any(value: &dyn Any) -> bool {
    let value = unbox(value);
    match lookup(value.type_id()) {
        Some(classifier) => run(classifier, classifier.is_zero, value),
        None => false,
    }
}

/// Reports whether a type-erased value is empty; see [`is_empty`](crate::is_empty).
///
/// Unknown types are never empty.
pub fn is_empty_any(value: &dyn Any) -> bool {
    let value = unbox(value);
    match lookup(value.type_id()) {
        Some(classifier) => run(classifier, classifier.is_empty, value),
        None => false,
    }
}

macro_rules! any_zero {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                fn is_zero(&self) -> bool {
                    is_zero_any(self)
                }

                fn is_empty(&self) -> bool {
                    is_empty_any(self)
                }
            }
        )*
    };
}

any_zero!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);
