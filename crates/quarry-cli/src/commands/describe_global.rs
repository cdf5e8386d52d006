//! Describe-global command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::{Value, json};

use quarry_core::rpc::DESCRIBE_GLOBAL;

use crate::cli::ConnectionArgs;
use crate::commands::connect;
use crate::output;

#[derive(Args, Debug)]
pub struct DescribeGlobalArgs {}

pub async fn run(connection: &ConnectionArgs, _args: DescribeGlobalArgs) -> Result<()> {
    let (manager, _) = connect(connection, None).await?;

    let result: Value = manager
        .call(DESCRIBE_GLOBAL, &json!({}))
        .await
        .map_err(|e| output::failure(e, "Failed to describe object types"))?;

    output::json_pretty(&result)
}
