//! Subcommand implementations.

pub mod call;
pub mod describe;
pub mod describe_global;
pub mod login;
pub mod query;

use anyhow::{Context, Result};
use colored::Colorize;

use quarry_core::{ClientConfig, Credentials, Endpoint, Session, SessionManager};
use quarry_http::HttpTransport;

use crate::cli::ConnectionArgs;
use crate::output;

/// Build a manager from the connection flags and log in.
pub async fn connect(
    args: &ConnectionArgs,
    page_size: Option<u32>,
) -> Result<(SessionManager<HttpTransport>, Session)> {
    let entry_url = args
        .entry_url
        .as_deref()
        .context("No entry endpoint. Pass --entry-url or set QUARRY_ENTRY_URL.")?;
    let username = args
        .username
        .as_deref()
        .context("No username. Pass --username or set QUARRY_USERNAME.")?;
    let password = args
        .password
        .as_deref()
        .context("No password. Pass --password or set QUARRY_PASSWORD.")?;

    let entry = Endpoint::new(entry_url).context("Invalid entry URL")?;
    let mut config = ClientConfig::new(entry).with_timeout_ms(args.timeout_ms);
    if let Some(page_size) = page_size {
        config = config.with_page_size(page_size);
    }

    let transport = HttpTransport::new().context("Failed to create HTTP client")?;
    let manager = SessionManager::new(transport, config);

    eprintln!("{}", "Logging in...".dimmed());
    let session = manager
        .authenticate(Credentials::new(username, password))
        .await
        .map_err(|e| output::failure(e, "Failed to login"))?;

    Ok((manager, session))
}
