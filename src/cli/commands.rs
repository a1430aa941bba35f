use anyhow::Result;

use crate::client::{ApiClient, DynEngineApi};
use crate::config::EnvLookup;

use super::args::{Cli, Command};
use super::config_cmd;
use super::ps;
use super::session::Session;
use super::version;

pub(crate) async fn run(cli: Cli, env: &dyn EnvLookup) -> Result<()> {
    let session = Session::prepare(cli.config.as_deref(), cli.host.as_deref(), env)?;

    match cli.command {
        Command::Config => {
            config_cmd::handle_config(&session);
            Ok(())
        }
        Command::Ps(args) => {
            let client = ApiClient::new(session.client_settings())?;
            ps::handle_ps(&client, args.all).await
        }
        Command::Version => {
            let client = ApiClient::new(session.client_settings())?;
            version::handle_version(&client).await
        }
        Command::Ping => {
            let client = ApiClient::new(session.client_settings())?;
            handle_ping(&client).await
        }
    }
}

async fn handle_ping(api: &DynEngineApi) -> Result<()> {
    let body = api.ping().await?;
    println!("{}", body.trim());
    Ok(())
}
