// GitHub MCP server
//
// Serves the GitHub tool catalogue over the MCP stdio transport. Logs go to
// stderr; stdout carries the protocol.

use anyhow::{Context, Result};
use github_mcp_tools::{Config, Dispatcher, GitHubClient, GitHubMcpServer};
use log::info;
use rmcp::ServiceExt;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let client = GitHubClient::from_config(&config).context("failed to create GitHub client")?;
    let dispatcher = Dispatcher::new(client).context("failed to register tools")?;
    info!(
        "serving {} GitHub tools against {}",
        dispatcher.registry().len(),
        config.api_url
    );

    let service = GitHubMcpServer::new(dispatcher)
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP service")?;
    service.waiting().await?;
    Ok(())
}
