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

/// Returns the first non-zero argument, or the zero value of the argument
/// type when there is none.
///
/// Every argument is evaluated, left to right, before the scan starts.
///
/// # Examples
/// ```
/// use ask::coalesce;
///
/// let host: String = std::env::var("ASK_DOC_HOST").unwrap_or_default();
/// assert_eq!(coalesce!(host, String::from("localhost")), "localhost");
///
/// assert_eq!(coalesce!(0, 0, 8080), 8080);
///
/// let nothing: &str = coalesce!();
/// assert_eq!(nothing, "");
/// ```
#[macro_export]
macro_rules! coalesce {
    () => {
        $crate::coalesce(::core::iter::empty())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::coalesce([$($value),+])
    };
}

/// Implements [`Zero`](crate::Zero) for structs.
///
/// The field form checks each listed field in turn, so the struct is zero
/// when every field is zero. Tuple structs list field indices. The list
/// must name every field of the struct; leaving one out is a compile error.
///
/// The `default:` form compares against `Default::default()` and needs
/// `PartialEq + Default`.
///
/// # Examples
/// ```
/// #[derive(Default, PartialEq)]
/// struct Limits {
///     max_conns: u32,
///     burst: u32,
/// }
///
/// struct User {
///     name: String,
///     email: String,
///     tags: Vec<String>,
/// }
///
/// struct Port(u16);
///
/// ask::impl_zero!(User { name, email, tags });
/// ask::impl_zero!(Port { 0 });
/// ask::impl_zero!(default: Limits);
///
/// assert!(ask::is_zero(&User { name: String::new(), email: String::new(), tags: vec![] }));
/// assert!(!ask::is_zero(&Port(443)));
/// assert!(ask::is_zero(&Limits::default()));
/// ```
///
/// ```compile_fail
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// ask::impl_zero!(Endpoint { host });
/// ```
#[macro_export]
macro_rules! impl_zero {
    (default: $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Zero for $ty {
                fn is_zero(&self) -> bool {
                    *self == <$ty as ::core::default::Default>::default()
                }
            }
        )+
    };
    ($($ty:ty { $($field:tt),* $(,)? });+ $(;)?) => {
        $(
            impl $crate::Zero for $ty {
                fn is_zero(&self) -> bool {
                    let Self { $($field: _),* } = self;
                    true $(&& $crate::Zero::is_zero(&self.$field))*
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use crate::zero::{is_empty, is_zero};

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Address {
        street: String,
        zip: Option<u32>,
    }

    struct Customer {
        id: u64,
        address: Address,
        scores: [u8; 3],
    }

    struct Pair(i32, &'static str);

    struct Marker;

    crate::impl_zero!(default: Address);
    crate::impl_zero! {
        Customer { id, address, scores };
        Pair { 0, 1 };
        Marker {};
    }

    #[test]
    fn test_field_form() {
        let blank = Customer {
            id: 0,
            address: Address::default(),
            scores: [0; 3],
        };
        assert!(is_zero(&blank));
        assert!(is_empty(&blank));

        let scored = Customer {
            scores: [0, 0, 1],
            ..blank
        };
        assert!(!is_zero(&scored));

        assert!(is_zero(&Pair(0, "")));
        assert!(!is_zero(&Pair(0, "x")));
        assert!(is_zero(&Marker));
    }

    #[test]
    fn test_default_form() {
        assert!(is_zero(&Address::default()));
        assert!(!is_zero(&Address {
            street: String::new(),
            zip: Some(0),
        }));
    }

    #[test]
    fn test_coalesce_macro() {
        assert_eq!(crate::coalesce!("", "", "hello", "world"), "hello");
        assert_eq!(crate::coalesce!("", "", ""), "");
        assert_eq!(crate::coalesce!(0.0, -0.0, 2.5,), 2.5);

        let none: String = crate::coalesce!();
        assert_eq!(none, "");
    }
}
