//! Paginated collection envelopes.

use crate::object::{Object, Tag};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `{ data, has_more, object: "list", url }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct List<T> {
    pub data: Vec<T>,
    pub has_more: bool,
    pub object: Tag<List<T>>,
    pub url: String,
}

impl<T> Object for List<T> {
    const OBJECT: &'static str = "list";
}

impl<T> List<T> {
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            has_more: false,
            object: Tag::new(),
            url: url.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Envelope returned by the search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResult<T> {
    pub data: Vec<T>,
    pub has_more: bool,
    #[serde(deserialize_with = "crate::presence::nullable")]
    pub next_page: Option<String>,
    pub object: Tag<SearchResult<T>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::presence::present"
    )]
    pub total_count: Option<i64>,
    pub url: String,
}

impl<T> Object for SearchResult<T> {
    const OBJECT: &'static str = "search_result";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_envelope_any_element() {
        let payload = json!({"data": [], "has_more": false, "object": "list", "url": ""});
        let strings: List<String> = serde_json::from_value(payload.clone()).unwrap();
        let numbers: List<i64> = serde_json::from_value(payload.clone()).unwrap();
        assert!(strings.is_empty());
        assert!(numbers.is_empty());
        assert_eq!(serde_json::to_value(List::<u8>::empty("")).unwrap(), payload);
    }

    #[test]
    fn test_list_rejects_other_object() {
        let payload = json!({"data": [], "has_more": false, "object": "search_result", "url": ""});
        assert!(serde_json::from_value::<List<String>>(payload).is_err());
    }

    #[test]
    fn test_search_result_next_page_required() {
        let ok = json!({
            "data": ["a"], "has_more": true, "next_page": "page_2",
            "object": "search_result", "url": "/v1/customers/search"
        });
        let result: SearchResult<String> = serde_json::from_value(ok).unwrap();
        assert_eq!(result.next_page.as_deref(), Some("page_2"));
        assert_eq!(result.total_count, None);

        let missing = json!({
            "data": [], "has_more": false,
            "object": "search_result", "url": "/v1/customers/search"
        });
        assert!(serde_json::from_value::<SearchResult<String>>(missing).is_err());
    }
}
