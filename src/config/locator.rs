use std::fmt;
use std::path::{Path, PathBuf};

use super::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::environment::{EnvLookup, env_path};

/// Where the config directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirSource {
    ExplicitFlag,
    EnvironmentVariable,
    DefaultHome,
}

impl fmt::Display for ConfigDirSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigDirSource::ExplicitFlag => write!(f, "--config flag"),
            ConfigDirSource::EnvironmentVariable => write!(f, "{CONFIG_DIR_ENV}"),
            ConfigDirSource::DefaultHome => write!(f, "home directory default"),
        }
    }
}

/// The config directory chosen for this invocation.
///
/// The path is kept verbatim; nothing here checks that it exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfigPath {
    path: PathBuf,
    source: ConfigDirSource,
}

impl ResolvedConfigPath {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> ConfigDirSource {
        self.source
    }

    pub fn is_explicit(&self) -> bool {
        self.source == ConfigDirSource::ExplicitFlag
    }

    pub fn config_file(&self) -> PathBuf {
        self.path.join(CONFIG_FILE_NAME)
    }
}

/// Picks the config directory: flag, then environment, then `<home>/.docker`.
///
/// Empty values count as absent. Precedence depends only on which sources
/// are set, never on whether their paths exist.
pub fn resolve(
    explicit_flag: Option<&Path>,
    env_value: Option<&Path>,
    home: &Path,
) -> ResolvedConfigPath {
    fn present(value: Option<&Path>) -> Option<&Path> {
        value.filter(|p| !p.as_os_str().is_empty())
    }

    if let Some(flag) = present(explicit_flag) {
        return ResolvedConfigPath {
            path: flag.to_path_buf(),
            source: ConfigDirSource::ExplicitFlag,
        };
    }

    if let Some(env_dir) = present(env_value) {
        return ResolvedConfigPath {
            path: env_dir.to_path_buf(),
            source: ConfigDirSource::EnvironmentVariable,
        };
    }

    ResolvedConfigPath {
        path: home.join(CONFIG_DIR_NAME),
        source: ConfigDirSource::DefaultHome,
    }
}

/// Resolves the config directory for this process from the flag and `env`.
pub fn locate(explicit_flag: Option<&Path>, env: &dyn EnvLookup) -> ResolvedConfigPath {
    let env_value = env_path(env, CONFIG_DIR_ENV);
    let home = env.home_dir().unwrap_or_else(|| {
        tracing::warn!("could not determine home directory; using {CONFIG_DIR_NAME} relative to the working directory");
        PathBuf::new()
    });

    let resolved = resolve(explicit_flag, env_value.as_deref(), &home);
    tracing::debug!(
        path = %resolved.path().display(),
        source = %resolved.source(),
        "resolved config directory"
    );
    resolved
}
