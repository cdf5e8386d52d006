//! Login command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::ConnectionArgs;
use crate::commands::connect;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {}

pub async fn run(connection: &ConnectionArgs, _args: LoginArgs) -> Result<()> {
    let (_, session) = connect(connection, None).await?;

    output::success("Logged in successfully");
    println!();
    if let Some(user_id) = session.user_id() {
        output::field("User", user_id);
    }
    output::field("Endpoint", session.endpoint().as_str());
    output::field("Issued", &session.issued_at().to_rfc3339());

    Ok(())
}
