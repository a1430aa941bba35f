use std::env::consts::{ARCH, OS};

use anyhow::Result;

use crate::client::{DynEngineApi, ServerVersion};
use crate::headers::client_user_agent;

pub(crate) async fn handle_version(api: &DynEngineApi) -> Result<()> {
    println!("{}", render_client());
    let server = api.server_version().await?;
    println!();
    println!("{}", render_server(&server));
    Ok(())
}

fn render_client() -> String {
    format!(
        "Client:\n Version:    {}\n OS/Arch:    {OS}/{ARCH}\n User-Agent: {}",
        env!("CARGO_PKG_VERSION"),
        client_user_agent()
    )
}

pub(crate) fn render_server(server: &ServerVersion) -> String {
    let mut out = format!("Server:\n Version:     {}", server.version);
    if !server.api_version.is_empty() {
        out.push_str(&format!("\n API version: {}", server.api_version));
    }
    if !server.os.is_empty() {
        out.push_str(&format!("\n OS/Arch:     {}/{}", server.os, server.arch));
    }
    out
}
