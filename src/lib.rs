//! dockerc: a container engine client whose config directory is resolved from
//! `--config`, `DOCKER_CONFIG` or `~/.docker`, and whose requests carry the
//! custom `HttpHeaders` from that directory's `config.json`.

pub mod cli;
pub mod client;
pub mod config;
pub mod headers;
pub mod logging;
