//! Query command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use futures_util::StreamExt;

use crate::cli::ConnectionArgs;
use crate::commands::connect;
use crate::output;

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Query text, e.g. "select FirstName, LastName from Contact"
    pub query: String,

    /// Records per page, clamped to the range the service accepts
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Pretty-print each record
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(connection: &ConnectionArgs, args: QueryArgs) -> Result<()> {
    let (manager, _) = connect(connection, args.page_size).await?;

    let cursor = manager
        .query(&args.query)
        .await
        .map_err(|e| output::failure(e, "Failed to run query"))?;

    let total = cursor.total_size();
    if total == 0 {
        eprintln!("{}", "No records found.".dimmed());
        return Ok(());
    }

    let mut records = cursor.into_stream();
    let mut printed = 0u64;
    while let Some(record) = records.next().await {
        let record = record.map_err(|e| output::failure(e, "Failed to fetch records"))?;
        if args.pretty {
            output::json_pretty(&record)?;
        } else {
            output::json(&record)?;
        }
        printed += 1;
    }

    eprintln!();
    eprintln!("{}: {} of {}", "Records".dimmed(), printed, total);

    Ok(())
}
