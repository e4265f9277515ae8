//! Decoding helper for response fields the API may send as `null`.

use serde::{Deserialize, Deserializer};

/// Read `null` the same as a missing key: the field's default.
///
/// Use together with `#[serde(default)]`, which covers the missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn null_missing_and_present_fields() {
        let nulls: Sample = serde_json::from_str(r#"{"name": null, "tags": null}"#).unwrap();
        assert_eq!(nulls, Sample::default());

        let missing: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(missing, Sample::default());

        let present: Sample = serde_json::from_str(r#"{"name": "Ada", "tags": ["x"]}"#).unwrap();
        assert_eq!(present.name, "Ada");
        assert_eq!(present.tags, vec!["x"]);
    }

    #[test]
    fn wrong_type_is_still_an_error() {
        assert!(serde_json::from_str::<Sample>(r#"{"name": 3}"#).is_err());
    }
}
