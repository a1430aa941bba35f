//! Header sets attached to outbound requests.

use std::collections::BTreeMap;
use std::env::consts::OS;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::config::{CLIENT_NAME, ConfigFile};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    value: String,
}

/// Header name/value pairs keyed case-insensitively.
///
/// The spelling of the first insert is kept for display; lookups ignore case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: BTreeMap<String, HeaderEntry>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers that identify this client on every request.
    pub fn mandatory() -> Self {
        let mut set = Self::new();
        set.insert(USER_AGENT.as_str(), client_user_agent());
        set
    }

    /// Custom headers from the `HttpHeaders` field of the config file.
    pub fn from_config(config: &ConfigFile) -> Self {
        config.http_headers().collect()
    }

    /// Inserts or replaces a header.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let key = name.to_ascii_lowercase();
        let value = value.into();
        match self.entries.get_mut(&key) {
            Some(existing) => existing.value = value,
            None => {
                self.entries.insert(key, HeaderEntry { name, value });
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|entry| entry.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|entry| (entry.name.as_str(), entry.value.as_str()))
    }

    /// Converts to a transport header map.
    ///
    /// Pairs that are not valid HTTP header names or values are dropped with a
    /// warning instead of failing the request.
    pub fn to_header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.len());
        for (name, value) in self.iter() {
            let parsed_name = match HeaderName::from_bytes(name.as_bytes()) {
                Ok(parsed) => parsed,
                Err(_) => {
                    tracing::warn!(header = name, "skipping header with invalid name");
                    continue;
                }
            };
            let parsed_value = match HeaderValue::from_str(value) {
                Ok(parsed) => parsed,
                Err(_) => {
                    tracing::warn!(header = name, "skipping header with invalid value");
                    continue;
                }
            };
            map.insert(parsed_name, parsed_value);
        }
        map
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

/// `Docker-Client/<version> (<os>)`
pub fn client_user_agent() -> String {
    format!("{CLIENT_NAME}-Client/{} ({OS})", env!("CARGO_PKG_VERSION"))
}

/// Merges configured headers into the mandatory ones.
///
/// Mandatory headers win on a case-insensitive name collision, so a config
/// file cannot replace `User-Agent`.
pub fn build_headers(mandatory: &HeaderSet, configured: &HeaderSet) -> HeaderSet {
    let mut merged = mandatory.clone();
    for (name, value) in configured.iter() {
        if mandatory.contains(name) {
            tracing::debug!(header = name, "configured header shadowed by client header");
            continue;
        }
        merged.insert(name, value);
    }
    merged
}
