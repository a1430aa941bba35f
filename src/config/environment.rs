use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Read-only view of the process environment.
///
/// Resolution code takes this instead of calling `std::env` directly so a
/// fixed snapshot can stand in for the real environment.
pub trait EnvLookup {
    fn get(&self, key: &str) -> Option<OsString>;

    /// Home directory from `HOME` (or `USERPROFILE` on Windows).
    fn home_dir(&self) -> Option<PathBuf> {
        self.get(home_key())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        env_path(self, home_key()).or_else(dirs::home_dir)
    }
}

/// A fixed set of variables.
///
/// Nothing falls through to the real process environment: without a home
/// entry the snapshot has no home directory.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, OsString>,
}

impl EnvSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSnapshot
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl EnvLookup for EnvSnapshot {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

/// Returns the variable as a path. Unset and empty values both count as absent.
pub fn env_path(env: &dyn EnvLookup, key: &str) -> Option<PathBuf> {
    env.get(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the variable as UTF-8 text, ignoring empty and non-UTF-8 values.
pub fn env_string(env: &dyn EnvLookup, key: &str) -> Option<String> {
    env.get(key)
        .and_then(|value| value.into_string().ok())
        .filter(|value| !value.trim().is_empty())
}

pub fn home_key() -> &'static str {
    if cfg!(windows) { "USERPROFILE" } else { "HOME" }
}
