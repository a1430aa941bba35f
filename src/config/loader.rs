use std::fs;
use std::io::ErrorKind;

use super::error::ConfigError;
use super::locator::ResolvedConfigPath;
use super::types::ConfigFile;

/// Reads `config.json` from the resolved directory.
///
/// A missing directory or file yields the default config. A file that exists
/// but does not parse is an error.
pub fn load(resolved: &ResolvedConfigPath) -> Result<ConfigFile, ConfigError> {
    let path = resolved.config_file();

    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(ConfigFile::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    if contents.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        headers = config.http_headers().count(),
        "loaded config file"
    );
    Ok(config)
}

/// Fails when an explicitly requested config directory is not a usable directory.
///
/// Directories from the environment or the home default may be absent.
pub fn require_available(resolved: &ResolvedConfigPath) -> Result<(), ConfigError> {
    if !resolved.is_explicit() {
        return Ok(());
    }

    let path = resolved.path();
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ConfigError::DirectoryUnavailable {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        }),
        Err(err) => Err(ConfigError::DirectoryUnavailable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }),
    }
}
