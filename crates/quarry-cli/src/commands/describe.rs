//! Describe command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use quarry_core::rpc::{DESCRIBE_SOBJECT, DescribeSObjectRequest};

use crate::cli::ConnectionArgs;
use crate::commands::connect;
use crate::output;

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Object type name, e.g. Account
    pub object: String,
}

pub async fn run(connection: &ConnectionArgs, args: DescribeArgs) -> Result<()> {
    let (manager, _) = connect(connection, None).await?;

    let request = DescribeSObjectRequest {
        s_object_type: &args.object,
    };
    let result: Value = manager
        .call(DESCRIBE_SOBJECT, &request)
        .await
        .map_err(|e| output::failure(e, &format!("Failed to describe {}", args.object)))?;

    output::json_pretty(&result)
}
