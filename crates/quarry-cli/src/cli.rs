//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use quarry_core::config::DEFAULT_TIMEOUT_MS;

use crate::commands::{call, describe, describe_global, login, query};

/// Query a remote object store from the command line.
#[derive(Parser, Debug)]
#[command(name = "quarry")]
#[command(author, version = env!("QUARRY_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and as whom to log in.
///
/// Every invocation logs in afresh; nothing is kept between runs.
#[derive(Args, Debug, Clone)]
pub struct ConnectionArgs {
    /// Entry endpoint used for login
    #[arg(long, env = "QUARRY_ENTRY_URL", global = true)]
    pub entry_url: Option<String>,

    /// Account username
    #[arg(long, env = "QUARRY_USERNAME", global = true)]
    pub username: Option<String>,

    /// Account password
    #[arg(long, env = "QUARRY_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Per-call timeout in milliseconds
    #[arg(long, env = "QUARRY_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS, global = true)]
    pub timeout_ms: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and show the session
    Login(login::LoginArgs),

    /// Run a query and print every record
    Query(query::QueryArgs),

    /// List the object types visible to the account
    DescribeGlobal(describe_global::DescribeGlobalArgs),

    /// Describe one object type
    Describe(describe::DescribeArgs),

    /// Issue an arbitrary authenticated call
    Call(call::CallArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn connection_flags_are_global() {
        let cli = Cli::try_parse_from([
            "quarry",
            "query",
            "select Name from Account",
            "--entry-url",
            "https://login.example.com/rpc",
            "--username",
            "alice@example.com",
            "--timeout-ms",
            "5000",
        ])
        .unwrap();

        assert_eq!(
            cli.connection.entry_url.as_deref(),
            Some("https://login.example.com/rpc")
        );
        assert_eq!(cli.connection.username.as_deref(), Some("alice@example.com"));
        assert_eq!(cli.connection.timeout_ms, 5000);
        assert!(matches!(cli.command, Commands::Query(_)));
    }
}
