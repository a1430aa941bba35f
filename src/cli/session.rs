use std::path::Path;

use anyhow::Result;

use crate::client::ClientSettings;
use crate::config::{
    ConfigFile, DEFAULT_HOST, DEFAULT_TIMEOUT_SECS, EnvLookup, HOST_ENV, ResolvedConfigPath,
    env_string, load, locate, require_available,
};
use crate::headers::HeaderSet;

/// Configuration resolved once at startup and shared by every request.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub config_dir: ResolvedConfigPath,
    pub config: ConfigFile,
    pub host: String,
}

impl Session {
    pub(crate) fn prepare(
        config_flag: Option<&Path>,
        host_flag: Option<&str>,
        env: &dyn EnvLookup,
    ) -> Result<Self> {
        let config_dir = locate(config_flag, env);
        require_available(&config_dir)?;
        let config = load(&config_dir)?;

        let host = host_flag
            .map(str::trim)
            .filter(|host| !host.is_empty())
            .map(str::to_string)
            .or_else(|| env_string(env, HOST_ENV))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self {
            config_dir,
            config,
            host,
        })
    }

    pub(crate) fn configured_headers(&self) -> HeaderSet {
        HeaderSet::from_config(&self.config)
    }

    pub(crate) fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            host: self.host.clone(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            configured_headers: self.configured_headers(),
        }
    }
}
