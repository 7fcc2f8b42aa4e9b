//! Helpers for query-string and form fields.

use std::fmt;

use serde::Deserializer;
use serde::de::{SeqAccess, Visitor};

/// Deserializes a text field that may be repeated, keeping the first value.
///
/// Use with `#[serde(default, deserialize_with = "first_value")]` so that an
/// absent key stays `None`.
pub fn first_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FirstValue;

    impl<'de> Visitor<'de> for FirstValue {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a sequence of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_owned()))
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let first = seq.next_element::<String>()?;
            while seq.next_element::<serde::de::IgnoredAny>()?.is_some() {}
            Ok(first)
        }
    }

    deserializer.deserialize_any(FirstValue)
}
