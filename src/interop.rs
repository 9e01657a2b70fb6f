/*
 * ==========================================================================
 * ASK - Ask once, get a value.
 * Third-Party Type Support
 * ==========================================================================
 *
 * `Zero` implementations for types owned by other crates, each behind its
 * own Cargo feature:
 *
 *   - json:    serde_json::Value, serde_json::Map, Value <- serde_json::Value
 *   - time:    chrono::TimeDelta, NaiveDate, NaiveTime, NaiveDateTime,
 *              DateTime<Utc>
 *   - complex: num_complex::Complex<T>
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

#[cfg(feature = "json")]
mod json {
    use serde_json::{Map, Value as Json};

    use crate::value::Value;
    use crate::zero::Zero;

    impl Zero for Json {
        /// JSON `null`, `false`, `0`, `""`, `[]` and `{}` are zero.
        fn is_zero(&self) -> bool {
            match self {
                Json::Null => true,
                Json::Bool(b) => !*b,
                Json::Number(n) => n.as_f64().map_or(false, |n| n == 0.0),
                Json::String(s) => s.is_empty(),
                Json::Array(items) => items.is_empty(),
                Json::Object(entries) => entries.is_empty(),
            }
        }
    }

    impl Zero for Map<String, Json> {
        fn is_zero(&self) -> bool {
            self.len() == 0
        }
    }

    impl From<Json> for Value {
        /// Lifts a decoded JSON document into a [`Value`].
        ///
        /// Integers keep their sign class (`Int` / `Uint`), arrays become
        /// lists and objects become maps.
        fn from(json: Json) -> Self {
            match json {
                Json::Null => Value::Null,
                Json::Bool(b) => Value::Bool(b),
                Json::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        Value::Int(i)
                    } else if let Some(u) = n.as_u64() {
                        Value::Uint(u)
                    } else {
                        Value::Float(n.as_f64().unwrap_or(f64::NAN))
                    }
                }
                Json::String(s) => Value::String(s),
                Json::Array(items) => Value::List(Some(items.into_iter().map(Value::from).collect())),
                Json::Object(entries) => Value::Map(Some(
                    entries
                        .into_iter()
                        .map(|(key, value)| (key, Value::from(value)))
                        .collect(),
                )),
            }
        }
    }

}

#[cfg(feature = "time")]
mod time {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

    use crate::zero::Zero;

    impl Zero for TimeDelta {
        fn is_zero(&self) -> bool {
            *self == TimeDelta::zero()
        }
    }

    // Calendar types have no natural zero; their `Default` (the Unix epoch,
    // midnight) stands in for it.
    macro_rules! default_zero {
        ($($t:ty),* $(,)?) => {
            $(
                impl Zero for $t {
                    fn is_zero(&self) -> bool {
                        *self == <$t>::default()
                    }
                }
            )*
        };
    }

    default_zero!(NaiveDate, NaiveTime, NaiveDateTime, DateTime<Utc>);

}

#[cfg(feature = "complex")]
mod complex {
    use num_complex::Complex;

    use crate::zero::Zero;

    impl<T: Zero> Zero for Complex<T> {
        fn is_zero(&self) -> bool {
            self.re.is_zero() && self.im.is_zero()
        }
    }

    #[cfg(test)]
    mod tests {
        use num_complex::{Complex32, Complex64};

        use crate::zero::is_zero;

        #[test]
        fn test_complex_zero() {
            assert!(is_zero(&Complex64::new(0.0, 0.0)));
            assert!(is_zero(&Complex32::new(-0.0, 0.0)));
            assert!(!is_zero(&Complex64::new(0.0, 1.0)));
            assert!(!is_zero(&Complex64::new(f64::NAN, 0.0)));
        }
    }
}
