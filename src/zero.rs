/*
 * ==========================================================================
 * ASK - Ask once, get a value.
 * Zero & Emptiness Predicates
 * ==========================================================================
 *
 * This module defines the `Zero` trait, the statically dispatched answer
 * to "does this value hold the default inhabitant of its type?".
 *
 * Every implementation here is resolved at compile time, so the scalar and
 * container catalog below never pays for runtime type inspection:
 *
 *   - Scalars:      bool, every integer width, f32/f64, char, str, String
 *   - Handles:      Option<T> (the absent marker), plus transparent
 *                   &T / Box<T> / Rc<T> / Arc<T> / Cow<B>
 *   - Errors:       Result<T, E>, dyn Error
 *   - Containers:   slices, Vec, VecDeque, LinkedList, BinaryHeap,
 *                   HashMap, BTreeMap, HashSet, BTreeSet
 *   - Fixed arrays: [T; N] (structural zero, length-based emptiness)
 *   - Aggregates:   tuples, and user structs through `impl_zero!`
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

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::error::Error;
use std::marker::PhantomData;
use std::num::{
    NonZeroI128, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU128,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8, NonZeroUsize, Wrapping,
};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

/// Types with a distinguished zero (default) inhabitant.
///
/// `is_zero` answers "is this the zero of its type?". `is_empty` is the
/// length-aware variant: containers answer by length, and every other type
/// falls back to `is_zero`, which is why only containers and fixed-size
/// arrays ever override it.
///
/// # Rules
/// - `false`, `0`, `-0.0`, `'\0'` and `""` are zero. `NaN` is not.
/// - `None` is zero; `Some(_)` never is, even when it wraps a zero.
/// - References and smart pointers cannot be absent, so they ask the
///   value they point to.
/// - `Ok(_)` is zero whatever it holds; an `Err` always carries a failure
///   and is never zero.
/// - Sequences and maps are zero when they hold no entries, allocated
///   or not.
/// - `[T; N]` is zero when every element is zero, but empty only when
///   `N == 0`.
/// - Tuples are zero when every field is zero.
pub trait Zero {
    /// Returns `true` when `self` equals the zero value of its type.
    fn is_zero(&self) -> bool;

    /// Returns `true` when `self` is semantically empty.
    fn is_empty(&self) -> bool {
        self.is_zero()
    }
}

/// Reports whether `value` holds the zero value of its type.
///
/// # Examples
/// ```
/// assert!(ask::is_zero(&0_u8));
/// assert!(ask::is_zero(&Vec::<i32>::new()));
/// assert!(!ask::is_zero(&Some(0)));
/// ```
#[inline]
pub fn is_zero<T: Zero + ?Sized>(value: &T) -> bool {
    value.is_zero()
}

/// Reports whether `value` is empty: length 0 for containers and
/// fixed-size arrays, [`is_zero`] for everything else.
///
/// # Examples
/// ```
/// assert!(ask::is_empty(&[0_i32; 0]));
/// assert!(!ask::is_empty(&[0_i32, 0]));
/// assert!(ask::is_zero(&[0_i32, 0]));
/// ```
#[inline]
pub fn is_empty<T: Zero + ?Sized>(value: &T) -> bool {
    Zero::is_empty(value)
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

impl Zero for () {
    #[inline]
    fn is_zero(&self) -> bool {
        true
    }
}

impl Zero for bool {
    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }
}

macro_rules! integer_zero {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

integer_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_zero {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                // IEEE comparison: -0.0 == 0.0 holds, NaN == 0.0 does not.
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }
        )*
    };
}

float_zero!(f32, f64);

macro_rules! never_zero {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                #[inline]
                fn is_zero(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_zero!(
    NonZeroI8,
    NonZeroI16,
    NonZeroI32,
    NonZeroI64,
    NonZeroI128,
    NonZeroIsize,
    NonZeroU8,
    NonZeroU16,
    NonZeroU32,
    NonZeroU64,
    NonZeroU128,
    NonZeroUsize,
);

impl Zero for char {
    #[inline]
    fn is_zero(&self) -> bool {
        *self == '\0'
    }
}

impl Zero for str {
    #[inline]
    fn is_zero(&self) -> bool {
        self.len() == 0
    }
}

impl Zero for String {
    #[inline]
    fn is_zero(&self) -> bool {
        self.len() == 0
    }
}

impl Zero for Duration {
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Duration::ZERO
    }
}

impl<T: Zero> Zero for Wrapping<T> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T: ?Sized> Zero for PhantomData<T> {
    #[inline]
    fn is_zero(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

impl<T> Zero for Option<T> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

macro_rules! transparent_zero {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Zero + ?Sized> Zero for $ptr<T> {
                #[inline]
                fn is_zero(&self) -> bool {
                    T::is_zero(self)
                }

                #[inline]
                fn is_empty(&self) -> bool {
                    T::is_empty(self)
                }
            }
        )*
    };
}

transparent_zero!(Box, Rc, Arc);

impl<T: Zero + ?Sized> Zero for &T {
    #[inline]
    fn is_zero(&self) -> bool {
        T::is_zero(*self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        T::is_empty(*self)
    }
}

impl<T: Zero + ?Sized> Zero for &mut T {
    #[inline]
    fn is_zero(&self) -> bool {
        T::is_zero(&**self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        T::is_empty(&**self)
    }
}

impl<B> Zero for Cow<'_, B>
where
    B: Zero + ToOwned + ?Sized,
{
    #[inline]
    fn is_zero(&self) -> bool {
        B::is_zero(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        B::is_empty(self)
    }
}

// ---------------------------------------------------------------------------
// Error-shaped carriers
// ---------------------------------------------------------------------------

/// A `Result` carries a failure or it doesn't: `Ok` is zero whatever its
/// payload, and any `Err` is not.
impl<T, E> Zero for Result<T, E> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_ok()
    }
}

impl Zero for dyn Error + '_ {
    #[inline]
    fn is_zero(&self) -> bool {
        false
    }
}

impl Zero for dyn Error + Send + '_ {
    #[inline]
    fn is_zero(&self) -> bool {
        false
    }
}

impl Zero for dyn Error + Send + Sync + '_ {
    #[inline]
    fn is_zero(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Sequences & mappings
// ---------------------------------------------------------------------------

impl<T> Zero for [T] {
    #[inline]
    fn is_zero(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! length_zero {
    ($(impl<$($gen:ident),+> for $t:ty;)*) => {
        $(
            impl<$($gen),+> Zero for $t {
                #[inline]
                fn is_zero(&self) -> bool {
                    self.len() == 0
                }
            }
        )*
    };
}

length_zero! {
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<T> for LinkedList<T>;
    impl<T> for BinaryHeap<T>;
    impl<T> for BTreeSet<T>;
    impl<T, S> for HashSet<T, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<K, V, S> for HashMap<K, V, S>;
}

impl<T: Zero, const N: usize> Zero for [T; N] {
    #[inline]
    fn is_zero(&self) -> bool {
        self.iter().all(T::is_zero)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        N == 0
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

macro_rules! tuple_zero {
    ($($name:ident)+) => {
        impl<$($name: Zero),+> Zero for ($($name,)+) {
            #[allow(non_snake_case)]
            #[inline]
            fn is_zero(&self) -> bool {
                let ($($name,)+) = self;
                true $(&& Zero::is_zero($name))+
            }
        }
    };
}

tuple_zero!(A);
tuple_zero!(A B);
tuple_zero!(A B C);
tuple_zero!(A B C D);
tuple_zero!(A B C D E);
tuple_zero!(A B C D E F);
tuple_zero!(A B C D E F G);
tuple_zero!(A B C D E F G H);
tuple_zero!(A B C D E F G H I);
tuple_zero!(A B C D E F G H I J);
tuple_zero!(A B C D E F G H I J K);
tuple_zero!(A B C D E F G H I J K L);

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    fn assert_default_is_zero<T: Zero + Default>() {
        assert!(is_zero(&T::default()), "{}", std::any::type_name::<T>());
    }

    #[test]
    fn test_default_is_zero() {
        assert_default_is_zero::<()>();
        assert_default_is_zero::<bool>();
        assert_default_is_zero::<i8>();
        assert_default_is_zero::<i16>();
        assert_default_is_zero::<i32>();
        assert_default_is_zero::<i64>();
        assert_default_is_zero::<i128>();
        assert_default_is_zero::<isize>();
        assert_default_is_zero::<u8>();
        assert_default_is_zero::<u16>();
        assert_default_is_zero::<u32>();
        assert_default_is_zero::<u64>();
        assert_default_is_zero::<u128>();
        assert_default_is_zero::<usize>();
        assert_default_is_zero::<f32>();
        assert_default_is_zero::<f64>();
        assert_default_is_zero::<char>();
        assert_default_is_zero::<String>();
        assert_default_is_zero::<&str>();
        assert_default_is_zero::<Duration>();
        assert_default_is_zero::<Wrapping<u16>>();
        assert_default_is_zero::<Option<String>>();
        assert_default_is_zero::<Box<i32>>();
        assert_default_is_zero::<Rc<String>>();
        assert_default_is_zero::<Arc<Vec<u8>>>();
        assert_default_is_zero::<Cow<'static, str>>();
        assert_default_is_zero::<Vec<i32>>();
        assert_default_is_zero::<VecDeque<i32>>();
        assert_default_is_zero::<LinkedList<i32>>();
        assert_default_is_zero::<BinaryHeap<i32>>();
        assert_default_is_zero::<BTreeSet<i32>>();
        assert_default_is_zero::<HashSet<i32>>();
        assert_default_is_zero::<BTreeMap<String, i32>>();
        assert_default_is_zero::<HashMap<String, i32>>();
        assert_default_is_zero::<[i32; 0]>();
        assert_default_is_zero::<[u8; 16]>();
        assert_default_is_zero::<(i32, String, Option<u8>)>();
        assert_default_is_zero::<PhantomData<str>>();
    }

    #[test]
    fn test_scalars_non_zero() {
        assert!(!is_zero(&true));
        assert!(!is_zero(&-1_i8));
        assert!(!is_zero(&42_u64));
        assert!(!is_zero(&i128::MIN));
        assert!(!is_zero(&usize::MAX));
        assert!(!is_zero(&0.5_f32));
        assert!(!is_zero(&f64::MIN_POSITIVE));
        assert!(!is_zero(&'a'));
        assert!(!is_zero("hi"));
        assert!(!is_zero(&String::from(" ")));
        assert!(!is_zero(&Duration::from_nanos(1)));
        assert!(!is_zero(&NonZeroU32::MIN));
    }

    #[test]
    fn test_float_edges() {
        assert!(is_zero(&-0.0_f64));
        assert!(is_zero(&-0.0_f32));
        assert!(!is_zero(&f64::NAN));
        assert!(!is_zero(&f32::NAN));
        assert!(!is_zero(&f64::INFINITY));
    }

    #[test]
    fn test_option_is_a_handle() {
        assert!(is_zero(&None::<i32>));
        assert!(!is_zero(&Some(0)));
        assert!(!is_zero(&Some(String::new())));
        assert!(is_empty(&None::<Vec<i32>>));
        assert!(!is_empty(&Some(0)));
    }

    #[test]
    fn test_pointers_are_transparent() {
        assert!(is_zero(&Box::new(0)));
        assert!(!is_zero(&Rc::new(7)));
        assert!(is_zero(&Arc::new(String::new())));
        assert!(is_zero(&&""));
        assert!(is_empty(&Box::new([0_u8; 0])));
        assert!(!is_empty(&Box::new([0_u8; 1])));

        let mut n = 3;
        let r = &mut n;
        assert!(!is_zero(&r));
    }

    #[test]
    fn test_error_shape() {
        let ok: Result<(), io::Error> = Ok(());
        let failed: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::Other, ""));
        assert!(is_zero(&ok));
        assert!(!is_zero(&failed));

        let boxed: Box<dyn Error + Send + Sync> = "".into();
        assert!(!is_zero(&boxed));
        assert!(is_zero(&None::<Box<dyn Error>>));
        assert!(is_zero(&Ok::<i32, ()>(5)));
        assert!(!is_zero(&Err::<i32, ()>(())));
    }

    #[test]
    fn test_containers_by_length() {
        assert!(is_zero(&Vec::<u8>::with_capacity(64)));
        assert!(!is_zero(&vec![0]));
        assert!(is_zero(&[0_u8; 4][..0]));
        assert!(!is_empty(&vec![false]));

        let mut map = HashMap::new();
        assert!(is_zero(&map));
        map.insert("a", 0);
        assert!(!is_zero(&map));
        assert!(!is_empty(&map));
    }

    #[test]
    fn test_fixed_arrays() {
        assert!(is_zero(&[0, 0]));
        assert!(!is_zero(&[0, 1]));
        assert!(is_zero(&[0_i32; 0]));
        assert!(is_empty(&[0_i32; 0]));
        assert!(!is_empty(&[42]));
        assert!(!is_empty(&[0, 0]));
        assert!(is_zero(&[[0_u8; 2]; 3]));
    }

    #[test]
    fn test_tuples() {
        assert!(is_zero(&(0, "", false)));
        assert!(!is_zero(&(0, "x", false)));
        assert!(is_empty(&(0, None::<u8>)));
        assert!(!is_zero(&(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1)));
    }
}
