//! Config directory resolution and loading for the dockerc client.
//!
//! The directory is picked once per invocation from, in order:
//! - the `--config` flag
//! - the `DOCKER_CONFIG` environment variable
//! - `<home>/.docker`
//!
//! `config.json` inside it supplies the custom `HttpHeaders` sent with every request.

mod constants;
mod environment;
mod error;
mod loader;
mod locator;
mod types;

pub use constants::{
    CLIENT_NAME, CONFIG_DIR_ENV, DEFAULT_HOST, DEFAULT_TIMEOUT_SECS, HOST_ENV, LOG_ENV,
};
pub use environment::{EnvLookup, EnvSnapshot, ProcessEnv, env_string};
pub use error::ConfigError;
pub use loader::{load, require_available};
pub use locator::{ConfigDirSource, ResolvedConfigPath, locate, resolve};
pub use types::ConfigFile;
