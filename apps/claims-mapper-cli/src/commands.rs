//! Subcommand handlers.
//!
//! Each handler writes one pretty-printed JSON document to `out`.

use std::io::{Read, Write};
use std::sync::Arc;

use anyhow::Context;
use claims_mapper::{ClaimsMapperConfig, ClaimsMapperLocalClient, Service};
use claims_mapper_sdk::{
    ClaimsMapperClient, IssuanceReport, Realm, TokenClaims, TokenKind, UserProfile,
};
use email_domain_role_plugin::EvaluateRequest;
use serde::Serialize;

use crate::cli::{Commands, DescribeArgs, EvaluateArgs, IssueArgs};
use crate::config::AppConfig;
use crate::registered_mappers;

/// Build the claims mapper client from configuration.
///
/// # Errors
///
/// Returns an error if the config refers to a provider id that is not registered.
pub fn build_client(cfg: &ClaimsMapperConfig) -> anyhow::Result<Arc<dyn ClaimsMapperClient>> {
    let service = Service::from_config(cfg, registered_mappers::contributors())
        .context("failed to set up claims mapper")?;
    Ok(Arc::new(ClaimsMapperLocalClient::new(Arc::new(service))))
}

/// Dispatch a parsed command.
///
/// # Errors
///
/// Returns an error if the mapper cannot be set up, input cannot be read or
/// parsed, or output cannot be written.
pub fn run(
    command: &Commands,
    cfg: &AppConfig,
    stdin: impl Read,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Evaluate(args) => evaluate(args, stdin, out),
        Commands::Describe(args) => {
            let client = build_client(&cfg.claims_mapper)?;
            describe(client.as_ref(), args, out)
        }
        Commands::Issue(args) => {
            let client = build_client(&cfg.claims_mapper)?;
            issue(client.as_ref(), args, out)
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn read_request(input: &str, stdin: impl Read) -> anyhow::Result<EvaluateRequest> {
    let request = if input == "-" {
        serde_json::from_reader(stdin).context("invalid request on stdin")?
    } else {
        let file = std::fs::File::open(input)
            .with_context(|| format!("cannot open request file {input}"))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("invalid request in {input}"))?
    };
    Ok(request)
}

fn evaluate(args: &EvaluateArgs, stdin: impl Read, out: &mut impl Write) -> anyhow::Result<()> {
    let request = match &args.input {
        Some(input) => read_request(input, stdin)?,
        None => EvaluateRequest {
            email: args.email.clone(),
            known_roles: args.roles.clone(),
        },
    };

    let response = request.evaluate();
    tracing::debug!(roles = ?response.roles_to_add, "Evaluated request");
    write_json(out, &response)
}

fn describe(
    client: &dyn ClaimsMapperClient,
    args: &DescribeArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match &args.provider {
        Some(provider_id) => write_json(out, &client.descriptor(provider_id)?),
        None => write_json(out, &client.descriptors()),
    }
}

#[derive(Serialize)]
struct IssueOutput {
    report: IssuanceReport,
    claims: TokenClaims,
}

fn issue(
    client: &dyn ClaimsMapperClient,
    args: &IssueArgs,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let user = UserProfile::new(args.email.clone());
    let realm = Realm::new(args.realm.as_str()).with_roles(args.roles.iter().map(String::as_str));
    let mut claims = TokenClaims::for_subject(args.subject.as_str());

    let report = client.issue(TokenKind::from(args.kind), &user, &realm, &mut claims);
    write_json(out, &IssueOutput { report, claims })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use clap::Parser;
    use serde_json::{Value, json};

    use super::*;
    use crate::cli::Cli;

    fn run_args(args: &[&str], stdin: &str) -> anyhow::Result<Value> {
        run_with(args, stdin, &AppConfig::default())
    }

    fn run_with(args: &[&str], stdin: &str, cfg: &AppConfig) -> anyhow::Result<Value> {
        let argv = std::iter::once("claims-mapper").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(&cli.command, cfg, stdin.as_bytes(), &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn evaluate_from_flags() {
        let out = run_args(
            &["evaluate", "--email", "alice@fortiumpartners.com", "--role", "PARTNER"],
            "",
        )
        .unwrap();
        assert_eq!(out, json!({ "rolesToAdd": ["PARTNER"] }));
    }

    #[test]
    fn evaluate_without_email() {
        let out = run_args(&["evaluate", "--role", "PARTNER"], "").unwrap();
        assert_eq!(out, json!({ "rolesToAdd": [] }));
    }

    #[test]
    fn evaluate_from_stdin() {
        let out = run_args(
            &["evaluate", "--input", "-"],
            r#"{"email": "alice@other.com", "knownRoles": ["PARTNER"]}"#,
        )
        .unwrap();
        assert_eq!(out, json!({ "rolesToAdd": [] }));
    }

    #[test]
    fn evaluate_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"email": "alice@fortiumpartners.com", "knownRoles": ["CLIENT", "PARTNER"]}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let out = run_args(&["evaluate", "--input", path.as_str()], "").unwrap();
        assert_eq!(out, json!({ "rolesToAdd": ["PARTNER"] }));
    }

    #[test]
    fn evaluate_rejects_malformed_stdin() {
        let err = run_args(&["evaluate", "--input", "-"], "not json").unwrap_err();
        assert!(err.to_string().contains("invalid request on stdin"));
    }

    #[test]
    fn describe_lists_registered_mappers() {
        let out = run_args(&["describe"], "").unwrap();
        let list = out.as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["provider_id"], "oidc-email-domain-role-mapper");
        assert_eq!(list[0]["display_type"], "Email Domain Role Mapper");
        assert_eq!(list[0]["token_kinds"], json!(["access", "lightweight_access"]));
    }

    #[test]
    fn describe_unknown_provider_fails() {
        let err = run_args(&["describe", "--provider", "nope"], "").unwrap_err();
        assert!(err.to_string().contains("unknown mapper provider: nope"));
    }

    #[test]
    fn issue_access_token() {
        let out = run_args(
            &[
                "issue",
                "--subject",
                "alice",
                "--email",
                "alice@fortiumpartners.com",
                "--role",
                "PARTNER",
            ],
            "",
        )
        .unwrap();

        assert_eq!(
            out,
            json!({
                "report": {
                    "kind": "access",
                    "applied_mappers": ["oidc-email-domain-role-mapper"],
                    "roles_added": ["PARTNER"]
                },
                "claims": {
                    "sub": "alice",
                    "realm_access": { "roles": ["PARTNER"] }
                }
            })
        );
    }

    #[test]
    fn issue_id_token_skips_access_mapper() {
        let out = run_args(
            &[
                "issue",
                "--kind",
                "id",
                "--email",
                "alice@fortiumpartners.com",
                "--role",
                "PARTNER",
            ],
            "",
        )
        .unwrap();

        assert_eq!(out["report"]["applied_mappers"], json!([]));
        assert_eq!(out["claims"], json!({ "sub": "subject" }));
    }

    #[test]
    fn issue_with_no_mappers_configured() {
        let cfg = AppConfig {
            claims_mapper: ClaimsMapperConfig::default(),
            ..AppConfig::default()
        };
        let out = run_with(
            &["issue", "--email", "alice@fortiumpartners.com", "--role", "PARTNER"],
            "",
            &cfg,
        )
        .unwrap();

        assert_eq!(out["report"]["roles_added"], json!([]));
    }
}
