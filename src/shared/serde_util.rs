//! Custom serde helpers for backend wire formats.

/// Deserializes any JSON number into an `i64`, truncating toward zero.
///
/// Quantities may arrive as floats (`100.0`, or `100.7` from a careless
/// caller); the API only understands whole units.
pub mod whole_number {
    use serde::de::{self, Visitor};
    use serde::Deserializer;
    use std::fmt;

    struct WholeNumberVisitor;

    impl<'de> Visitor<'de> for WholeNumberVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON number")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::custom(format!("Number out of range: {}", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // i64::MAX as f64 rounds up to 2^63, which is already out of range.
            if !v.is_finite() || v.trunc() < i64::MIN as f64 || v.trunc() >= i64::MAX as f64 {
                return Err(E::custom(format!("Number out of range: {}", v)));
            }
            Ok(v.trunc() as i64)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(WholeNumberVisitor)
    }
}

/// `Option` flavour of [`whole_number`]; `null` maps to `None`.
pub mod whole_number_option {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    struct Wrapped(#[serde(with = "super::whole_number")] i64);

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(v)| v))
    }
}

/// Unsigned counterpart of [`whole_number`], for broker-assigned ids.
pub mod whole_number_u64 {
    use serde::de::{self, Visitor};
    use serde::Deserializer;
    use std::fmt;

    struct WholeU64Visitor;

    impl<'de> Visitor<'de> for WholeU64Visitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a non-negative JSON number")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::custom(format!("Number out of range: {}", v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u64, E> {
            if !v.is_finite() || v.trunc() < 0.0 || v.trunc() >= u64::MAX as f64 {
                return Err(E::custom(format!("Number out of range: {}", v)));
            }
            Ok(v.trunc() as u64)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(WholeU64Visitor)
    }
}

/// Optional price that accepts integer or float JSON numbers; `null` maps to `None`.
///
/// `rust_decimal::serde::float_option` refuses integers on the way in, so this
/// is paired with it for serialization only.
pub mod decimal_option {
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    struct Wrapped(#[serde(with = "rust_decimal::serde::float")] Decimal);

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(v)| v))
    }
}

/// Accepts a single object or a list of objects.
///
/// The profile endpoint returns bank details as an object for some accounts
/// and as a list for others.
pub mod one_or_many {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        match Option::<OneOrMany<T>>::deserialize(deserializer)? {
            None => Ok(Vec::new()),
            Some(OneOrMany::One(item)) => Ok(vec![item]),
            Some(OneOrMany::Many(items)) => Ok(items),
        }
    }
}
