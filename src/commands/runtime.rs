use crate::cli::{Cli, Commands};
use crate::domain::constants::{MAPI_KEY_PARAM, NODE_COLUMNS};
use crate::domain::models::{ApplyReport, KeyReport};
use crate::services::gateway::Gateway;
use crate::services::navigation::{
    apply_query_string_if_absent, build_query_string, read_credential,
};
use crate::services::output::print_one;
use crate::services::table::{build_table, node_rows, render_text};

#[derive(thiserror::Error, Debug)]
#[error("no credential: pass --key or an --href carrying ?mapikey=...")]
pub struct MissingCredential;

/// An explicit `--key` wins; otherwise the credential is read from the
/// href's query component. Present-but-empty counts as present.
fn resolve_credential(key: &Option<String>, href: &Option<String>) -> Result<String, MissingCredential> {
    if let Some(k) = key {
        return Ok(k.clone());
    }
    if let Some(h) = href {
        if let Some(v) = read_credential(h) {
            return Ok(v);
        }
    }
    Err(MissingCredential)
}

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Querystring { value } => {
            let qs = build_query_string(MAPI_KEY_PARAM, value);
            print_one(cli.json, qs, |q| q.clone())?;
        }
        Commands::Apply { value, href } => {
            let qs = build_query_string(MAPI_KEY_PARAM, value);
            let report = match apply_query_string_if_absent(href, &qs) {
                Some(location) => ApplyReport {
                    applied: true,
                    location,
                },
                None => ApplyReport {
                    applied: false,
                    location: href.clone(),
                },
            };
            print_one(cli.json, report, |r| {
                if r.applied {
                    format!("location: {}", r.location)
                } else {
                    format!("unchanged: {}", r.location)
                }
            })?;
        }
        Commands::Key { href } => {
            let value = read_credential(href);
            let report = KeyReport {
                present: value.is_some(),
                value,
            };
            print_one(cli.json, report, |r| match r.value.as_deref() {
                Some("") => format!("{} present (empty)", MAPI_KEY_PARAM),
                Some(v) => format!("{}: {}", MAPI_KEY_PARAM, v),
                None => format!("{} absent", MAPI_KEY_PARAM),
            })?;
        }
        Commands::Verify { key, href } => {
            let credential = resolve_credential(key, href)?;
            let gateway = Gateway::new(&cli.base_url, &cli.program)?;
            let payload = gateway.verify_key(&credential)?;
            // forwarded verbatim whether the key was accepted or not
            print_one(cli.json, payload, |p| {
                serde_json::to_string_pretty(p).unwrap_or_default()
            })?;
        }
        Commands::Nodes { key, href } => {
            let credential = resolve_credential(key, href)?;
            let gateway = Gateway::new(&cli.base_url, &cli.program)?;
            let nodes = gateway.list_nodes(&credential)?;
            let table = build_table(&NODE_COLUMNS, &node_rows(&nodes))?;
            print_one(cli.json, table, render_text)?;
        }
    }

    Ok(())
}
