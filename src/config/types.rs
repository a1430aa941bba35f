use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Contents of `config.json`.
///
/// Only `HttpHeaders` is interpreted. Everything else (credentials, formats,
/// registry settings) is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigFile {
    #[serde(rename = "HttpHeaders", default)]
    http_headers: Option<BTreeMap<String, String>>,

    #[serde(flatten)]
    other: Map<String, Value>,
}

impl ConfigFile {
    pub fn http_headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.http_headers
            .iter()
            .flatten()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn has_http_headers(&self) -> bool {
        self.http_headers.as_ref().is_some_and(|headers| !headers.is_empty())
    }

    pub fn other_fields(&self) -> &Map<String, Value> {
        &self.other
    }
}
