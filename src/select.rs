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

use crate::zero::Zero;

/// Boolean coercion used by [`if_`].
///
/// # Truthiness Rules
/// The following values are considered **false**:
/// - `false`
/// - `None`
/// - `0`, `-0.0`
/// - `""` (empty string)
/// - `Ok(())` (no failure carried)
/// - empty sequences and maps
///
/// All other values are considered **true**, including:
/// - `NaN`
/// - `Some(_)`, whatever it wraps
/// - `Err(_)` and any `dyn Error`, even with an empty message
///
/// `Ok(_)` is false whatever its payload: only a carried failure fires.
///
/// Every [`Zero`] type is `Truthy`: a value is truthy exactly when it is
/// not zero. For `bool` that is the value itself, and for error carriers
/// it means "a failure is present".
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl<T: Zero + ?Sized> Truthy for T {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_zero()
    }
}

/// Determines whether `value` is truthy; see [`Truthy`].
#[inline]
pub fn is_truthy<C: Truthy + ?Sized>(value: &C) -> bool {
    value.is_truthy()
}

/// Ternary operator.
///
/// Returns `true_val` when `condition` is truthy, `false_val` otherwise.
/// The condition may be a `bool`, an error carrier or any other [`Zero`]
/// value.
///
/// Both branches are evaluated by the caller before the call. Pass
/// closures and call the returned one when a branch is expensive.
///
/// # Examples
/// ```
/// use std::io;
///
/// assert_eq!(ask::if_(85 > 60, "pass", "fail"), "pass");
/// assert_eq!(ask::if_("", "yes", "no"), "no");
/// assert_eq!(ask::if_(42, "yes", "no"), "yes");
///
/// let outcome: Result<(), io::Error> = Err(io::Error::other("boom"));
/// assert_eq!(ask::if_(&outcome, "err", "ok"), "err");
/// ```
#[inline]
pub fn if_<C: Truthy, T>(condition: C, true_val: T, false_val: T) -> T {
    if condition.is_truthy() {
        true_val
    } else {
        false_val
    }
}

/// Null coalescing operator (`?:`).
///
/// Returns `value` if it is non-zero, otherwise `fallback`.
///
/// # Examples
/// ```
/// assert_eq!(ask::ifelse("", "anonymous"), "anonymous");
/// assert_eq!(ask::ifelse(42, 100), 42);
/// ```
#[inline]
pub fn ifelse<T: Zero>(value: T, fallback: T) -> T {
    if value.is_zero() {
        fallback
    } else {
        value
    }
}

/// Returns `fallback` if `value` is zero, otherwise `value`.
///
/// Same operation as [`ifelse`], for call sites that read better with
/// "default".
#[inline]
pub fn default<T: Zero>(value: T, fallback: T) -> T {
    ifelse(value, fallback)
}

/// Returns the first non-zero value, scanning left to right, like SQL's
/// `COALESCE`.
///
/// When every value is zero, or there are none, the zero value of `T`
/// (`T::default()`) is returned. See [`coalesce!`](crate::coalesce!) for
/// the variadic form.
///
/// # Examples
/// ```
/// assert_eq!(ask::coalesce(["", "", "hello", "world"]), "hello");
/// assert_eq!(ask::coalesce(Vec::<String>::new()), "");
/// ```
pub fn coalesce<T, I>(values: I) -> T
where
    T: Zero + Default,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .find(|value| !value.is_zero())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io;

    #[test]
    fn test_if_bool() {
        assert_eq!(if_(true, "yes", "no"), "yes");
        assert_eq!(if_(false, "yes", "no"), "no");
    }

    #[test]
    fn test_if_generic_zero() {
        assert_eq!(if_("", "yes", "no"), "no");
        assert_eq!(if_("hi", "yes", "no"), "yes");
        assert_eq!(if_(0, "yes", "no"), "no");
        assert_eq!(if_(42, "yes", "no"), "yes");
        assert_eq!(if_(0.0, 1, 2), 2);
        assert_eq!(if_(f64::NAN, 1, 2), 1);
        assert_eq!(if_(Vec::<u8>::new(), 'y', 'n'), 'n');
    }

    #[test]
    fn test_if_handles() {
        assert_eq!(if_(None::<&i32>, "y", "n"), "n");
        assert_eq!(if_(Some(&0), "y", "n"), "y");
        assert_eq!(if_(Some(String::new()), "y", "n"), "y");
    }

    #[test]
    fn test_if_error_present_is_truthy() {
        let failed: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(if_(&failed, "err", "ok"), "err");

        let ok: Result<(), io::Error> = Ok(());
        assert_eq!(if_(&ok, "err", "ok"), "ok");

        let parsed: Result<u16, std::num::ParseIntError> = "8080".parse();
        assert_eq!(if_(&parsed, "err", "ok"), "ok");

        assert_eq!(if_(None::<io::Error>, "err", "ok"), "ok");
        assert_eq!(if_(Some(io::Error::new(io::ErrorKind::Other, "")), "err", "ok"), "err");
    }

    #[test]
    fn test_if_nested() {
        let status = |paid: bool, shipped: bool| {
            if_(paid, if_(shipped, "shipped", "awaiting shipment"), "awaiting payment")
        };
        assert_eq!(status(true, true), "shipped");
        assert_eq!(status(true, false), "awaiting shipment");
        assert_eq!(status(false, true), "awaiting payment");
    }

    #[test]
    fn test_if_lazy_branches() {
        let computed: fn() -> &'static str = || "computed";
        let skipped: fn() -> &'static str = || "skipped";
        let pick = if_(1, computed, skipped);
        assert_eq!(pick(), "computed");
    }

    #[test]
    fn test_ifelse() {
        assert_eq!(ifelse("", "default"), "default");
        assert_eq!(ifelse("x", "default"), "x");
        assert_eq!(ifelse(0, 100), 100);
        assert_eq!(ifelse(42, 100), 42);
        assert_eq!(ifelse(None, Some("fallback")), Some("fallback"));
        assert_eq!(ifelse(Some(""), Some("fallback")), Some(""));
    }

    #[test]
    fn test_default_matches_ifelse() {
        let cases = [("", "d"), ("x", "d"), ("", ""), ("x", "")];
        for (value, fallback) in cases {
            assert_eq!(default(value, fallback), ifelse(value, fallback));
        }
        assert_eq!(default(0.0, 1.5), 1.5);
    }

    #[test]
    fn test_coalesce() {
        assert_eq!(coalesce(["", "", "hello", "world"]), "hello");
        assert_eq!(coalesce(["", "", ""]), "");
        assert_eq!(coalesce(["first", "second"]), "first");
        assert_eq!(coalesce(Vec::<&str>::new()), "");
        assert_eq!(coalesce([0, 0, 7]), 7);
        assert_eq!(coalesce([None, Some(0), Some(5)]), Some(0));
    }

    #[test]
    fn test_coalesce_stops_at_first_hit() {
        let mut seen = Vec::new();
        let picked = coalesce([0, 3, 5].into_iter().inspect(|v| seen.push(*v)));
        assert_eq!(picked, 3);
        assert_eq!(seen, vec![0, 3]);
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&true));
        assert!(is_truthy("a"));
        assert!(!is_truthy(&0_u8));
        assert!(!is_truthy(&Ok::<(), String>(())));
        assert!(is_truthy(&Err::<(), _>("")));
    }
}
