//! Command-line arguments.

use std::path::PathBuf;

use claims_mapper_sdk::TokenKind;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Claims mapper: evaluate and run token claim mappers.
#[derive(Parser, Debug)]
#[command(name = "claims-mapper", version, about)]
pub struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the email-domain role rule for one user.
    Evaluate(EvaluateArgs),
    /// Print descriptors of the registered mappers.
    Describe(DescribeArgs),
    /// Run the configured mappers over a fresh token and print its claims.
    Issue(IssueArgs),
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// JSON request `{"email": ..., "knownRoles": [...]}`; `-` reads stdin.
    #[arg(long, conflicts_with_all = ["email", "roles"])]
    pub input: Option<String>,

    /// User email address. Omit for a user without email.
    #[arg(long)]
    pub email: Option<String>,

    /// Role defined in the realm. Repeatable.
    #[arg(long = "role")]
    pub roles: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Only print the mapper with this provider id.
    #[arg(long)]
    pub provider: Option<String>,
}

#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Kind of token to issue.
    #[arg(long, value_enum, default_value_t = KindArg::Access)]
    pub kind: KindArg,

    /// Subject (`sub` claim) of the token.
    #[arg(long, default_value = "subject")]
    pub subject: String,

    /// Realm name.
    #[arg(long, default_value = "default")]
    pub realm: String,

    /// User email address. Omit for a user without email.
    #[arg(long)]
    pub email: Option<String>,

    /// Role defined in the realm. Repeatable.
    #[arg(long = "role")]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Access,
    LightweightAccess,
    Id,
    Userinfo,
    Introspection,
}

impl From<KindArg> for TokenKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Access => Self::Access,
            KindArg::LightweightAccess => Self::LightweightAccess,
            KindArg::Id => Self::Id,
            KindArg::Userinfo => Self::UserInfo,
            KindArg::Introspection => Self::Introspection,
        }
    }
}
