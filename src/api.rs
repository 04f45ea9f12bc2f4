//! Wire types for the MediathekViewWeb `/api/query` endpoint.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

const SEARCH_FIELDS: [&str; 3] = ["channel", "title", "topic"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest<'a> {
    pub queries: Vec<QueryField<'a>>,
    pub sort_by: &'static str,
    pub sort_order: &'static str,
    pub future: bool,
    pub offset: usize,
    pub size: usize,
}

#[derive(Debug, Serialize)]
pub struct QueryField<'a> {
    pub fields: [&'static str; 3],
    pub query: &'a str,
}

impl<'a> SearchRequest<'a> {
    /// Newest-first search for `term` across channel, title and topic.
    pub fn for_term(term: &'a str, size: usize) -> Self {
        Self {
            queries: vec![QueryField {
                fields: SEARCH_FIELDS,
                query: term,
            }],
            sort_by: "timestamp",
            sort_order: "desc",
            future: false,
            offset: 0,
            size,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub err: Option<Value>,
    #[serde(default, deserialize_with = "falsy_as_default")]
    pub result: Option<SearchResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default, deserialize_with = "falsy_as_default")]
    pub results: Vec<ResultItem>,
    #[serde(default, deserialize_with = "invalid_as_none")]
    pub query_info: Option<QueryInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryInfo {
    #[serde(default)]
    pub result_count: u64,
    #[serde(default)]
    pub total_results: u64,
}

/// One media asset. Descriptive fields that are not strings are dropped; URL
/// fields are kept raw so a single odd value only costs that one URL.
#[derive(Debug, Default, Deserialize)]
pub struct ResultItem {
    #[serde(default, deserialize_with = "invalid_as_none")]
    pub channel: Option<String>,
    #[serde(default, deserialize_with = "invalid_as_none")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "invalid_as_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub url_video_hd: Option<Value>,
    #[serde(default)]
    pub url_video: Option<Value>,
    #[serde(default)]
    pub url_video_low: Option<Value>,
    #[serde(default)]
    pub url_subtitle: Option<Value>,
}

impl ResultItem {
    /// Media URLs in hd, standard, low, subtitle order.
    ///
    /// Null, `false`, zero and empty values are skipped. Any other non-string
    /// value is passed on as its JSON text and fails hostname parsing later.
    pub fn urls(&self) -> impl Iterator<Item = Cow<'_, str>> {
        [
            &self.url_video_hd,
            &self.url_video,
            &self.url_video_low,
            &self.url_subtitle,
        ]
        .into_iter()
        .filter_map(|url| url.as_ref())
        .filter(|url| is_truthy(url))
        .map(|url| match url {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        })
    }
}

impl SearchResponse {
    /// The API error message, if the envelope carries a non-empty `err`.
    pub fn error_message(&self) -> Option<String> {
        let err = self.err.as_ref().filter(|err| is_truthy(err))?;
        match err {
            Value::String(message) => Some(message.clone()),
            Value::Array(items) => Some(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            other => Some(other.to_string()),
        }
    }
}

/// JSON truthiness: null, `false`, zero and empty strings, arrays and objects
/// count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn falsy_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !is_truthy(&value) {
        return Ok(T::default());
    }
    serde_json::from_value(value).map_err(de::Error::custom)
}

fn invalid_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_matches_api_shape() {
        let body = serde_json::to_value(SearchRequest::for_term("ZDF", 50)).unwrap();
        assert_eq!(
            body,
            json!({
                "queries": [{"fields": ["channel", "title", "topic"], "query": "ZDF"}],
                "sortBy": "timestamp",
                "sortOrder": "desc",
                "future": false,
                "offset": 0,
                "size": 50
            })
        );
    }

    #[test]
    fn item_yields_all_four_urls_in_order() {
        let item: ResultItem = serde_json::from_value(json!({
            "url_video_hd": "https://hd.example.de/v.mp4",
            "url_video": "https://sd.example.de/v.mp4",
            "url_video_low": "https://low.example.de/v.mp4",
            "url_subtitle": "https://sub.example.de/v.xml"
        }))
        .unwrap();

        let urls: Vec<Cow<str>> = item.urls().collect();
        assert_eq!(
            urls,
            vec![
                "https://hd.example.de/v.mp4",
                "https://sd.example.de/v.mp4",
                "https://low.example.de/v.mp4",
                "https://sub.example.de/v.xml",
            ]
        );
    }

    #[test]
    fn item_skips_missing_null_and_empty_urls() {
        let item: ResultItem = serde_json::from_value(json!({
            "channel": "ARD",
            "url_video_hd": "",
            "url_video": "https://sd.example.de/v.mp4",
            "url_video_low": null
        }))
        .unwrap();

        assert_eq!(item.urls().collect::<Vec<_>>(), vec!["https://sd.example.de/v.mp4"]);
    }

    #[test]
    fn response_with_unknown_fields_decodes() {
        let response: SearchResponse = serde_json::from_value(json!({
            "result": {
                "results": [{"id": "abc", "timestamp": 1700000000, "duration": 60, "url_video": "https://a.de/x"}],
                "queryInfo": {"filmlisteTimestamp": 1, "resultCount": 1, "totalResults": 120, "totalRelation": "eq"}
            },
            "err": null
        }))
        .unwrap();

        let result = response.result.as_ref().unwrap();
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.query_info.as_ref().unwrap().total_results, 120);
        assert_eq!(response.error_message(), None);
    }

    #[test]
    fn error_message_renders_strings_and_arrays() {
        let single: SearchResponse = serde_json::from_value(json!({"err": "bad query"})).unwrap();
        assert_eq!(single.error_message().as_deref(), Some("bad query"));

        let many: SearchResponse =
            serde_json::from_value(json!({"err": ["size too large", "offset invalid"]})).unwrap();
        assert_eq!(many.error_message().as_deref(), Some("size too large; offset invalid"));

        let empty: SearchResponse = serde_json::from_value(json!({"err": []})).unwrap();
        assert_eq!(empty.error_message(), None);
    }

    #[test]
    fn falsy_url_fields_are_skipped() {
        let item: ResultItem = serde_json::from_value(json!({
            "url_video_hd": false,
            "url_video": 0,
            "url_video_low": [],
            "url_subtitle": "https://sub.example.de/v.xml"
        }))
        .unwrap();

        assert_eq!(item.urls().collect::<Vec<_>>(), vec!["https://sub.example.de/v.xml"]);
    }

    #[test]
    fn odd_truthy_url_field_is_kept_as_text() {
        let item: ResultItem = serde_json::from_value(json!({
            "url_video": 42,
            "url_subtitle": true
        }))
        .unwrap();

        assert_eq!(item.urls().collect::<Vec<_>>(), vec!["42", "true"]);
    }

    #[test]
    fn non_string_descriptive_fields_are_dropped() {
        let item: ResultItem =
            serde_json::from_value(json!({"channel": 3, "title": ["x"], "url_video": "https://a.de/x"})).unwrap();

        assert_eq!(item.channel, None);
        assert_eq!(item.title, None);
        assert_eq!(item.urls().count(), 1);
    }

    #[test]
    fn null_results_fall_through_to_error() {
        let response: SearchResponse =
            serde_json::from_value(json!({"result": {"results": null}, "err": ["x"]})).unwrap();

        assert!(response.result.as_ref().unwrap().results.is_empty());
        assert_eq!(response.error_message().as_deref(), Some("x"));
    }

    #[test]
    fn empty_result_list_counts_as_missing() {
        let response: SearchResponse = serde_json::from_value(json!({"result": [], "err": "down"})).unwrap();

        assert!(response.result.is_none());
        assert_eq!(response.error_message().as_deref(), Some("down"));
    }

    #[test]
    fn falsy_error_values_are_not_errors() {
        for err in [json!(null), json!(""), json!([]), json!(false), json!({})] {
            let response: SearchResponse = serde_json::from_value(json!({ "err": err })).unwrap();
            assert_eq!(response.error_message(), None);
        }
    }
}
