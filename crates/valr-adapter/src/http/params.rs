/*
[INPUT]:  Request option structs deriving serde::Serialize
[OUTPUT]: URL-encoded query strings
[POS]:    HTTP layer - query parameter encoding
[UPDATE]: When adding new field encoding rules
*/

use crate::http::Result;
use serde::Serialize;

/// Encode a request options value into a query string.
///
/// Field names and omission rules come from the value's serde attributes.
/// Returns `None` when every field was omitted. Values are passed through
/// without range checks.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Option<String>> {
    let query = serde_urlencoded::to_string(value)?;
    Ok((!query.is_empty()).then_some(query))
}

/// Serialize a list field as a single comma-separated parameter
pub(crate) fn comma_separated<S, T>(values: &[T], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: Serialize,
{
    let mut parts = Vec::with_capacity(values.len());
    for value in values {
        let raw = serde_json::to_value(value).map_err(serde::ser::Error::custom)?;
        match raw {
            serde_json::Value::String(text) => parts.push(text),
            other => parts.push(other.to_string()),
        }
    }
    serializer.serialize_str(&parts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Page {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
        #[serde(rename = "skip", skip_serializing_if = "Option::is_none")]
        offset: Option<u32>,
        #[serde(
            rename = "kinds",
            skip_serializing_if = "Vec::is_empty",
            serialize_with = "comma_separated"
        )]
        kinds: Vec<String>,
    }

    #[test]
    fn empty_options_encode_to_none() {
        let page = Page { limit: None, offset: None, kinds: Vec::new() };
        assert_eq!(encode(&page).expect("encode"), None);
    }

    #[test]
    fn renamed_fields_and_lists() {
        let page = Page {
            limit: Some(10),
            offset: Some(20),
            kinds: vec!["A".to_string(), "B".to_string()],
        };
        assert_eq!(
            encode(&page).expect("encode").as_deref(),
            Some("limit=10&skip=20&kinds=A%2CB")
        );
    }

    #[test]
    fn out_of_range_values_pass_through() {
        let page = Page { limit: Some(1_000_000), offset: None, kinds: Vec::new() };
        assert_eq!(encode(&page).expect("encode").as_deref(), Some("limit=1000000"));
    }
}
