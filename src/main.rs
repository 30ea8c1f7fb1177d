use std::sync::Arc;

use anyhow::Result;
use redmine_chat::{CommandInterpreter, Config, RedmineChatServer, RedmineClient};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let redmine = RedmineClient::new(&config.base_url, &config.api_key, &config.user_agent);
    let interpreter = CommandInterpreter::new(Arc::new(redmine), config.bot_name);
    let server = RedmineChatServer::new(interpreter);

    tracing::info!(base_url = %config.base_url, "Starting Redmine chat MCP server...");

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
