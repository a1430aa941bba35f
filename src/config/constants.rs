pub const CONFIG_DIR_ENV: &str = "DOCKER_CONFIG";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const CONFIG_DIR_NAME: &str = ".docker";
pub const HOST_ENV: &str = "DOCKER_HOST";
pub const LOG_ENV: &str = "DOCKERC_LOG";
pub const DEFAULT_HOST: &str = "tcp://127.0.0.1:2375";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const CLIENT_NAME: &str = "Docker";
