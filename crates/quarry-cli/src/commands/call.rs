//! Raw call command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use crate::cli::ConnectionArgs;
use crate::commands::connect;
use crate::output;

#[derive(Args, Debug)]
pub struct CallArgs {
    /// RPC method name, e.g. describeGlobal
    pub method: String,

    /// JSON request body
    #[arg(long, default_value = "{}")]
    pub body: String,

    /// Pretty-print the response
    #[arg(long)]
    pub pretty: bool,
}

pub async fn run(connection: &ConnectionArgs, args: CallArgs) -> Result<()> {
    let body: Value = serde_json::from_str(&args.body).context("Invalid JSON body")?;

    let (manager, _) = connect(connection, None).await?;

    let result: Value = manager
        .call(&args.method, &body)
        .await
        .map_err(|e| output::failure(e, &format!("Call to {} failed", args.method)))?;

    if args.pretty {
        output::json_pretty(&result)
    } else {
        output::json(&result)
    }
}
