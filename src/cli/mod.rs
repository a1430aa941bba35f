mod args;
mod commands;
mod config_cmd;
mod ps;
mod session;
mod util;
mod version;

pub use args::Cli;
