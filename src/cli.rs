use crate::domain::constants::{DEFAULT_BASE_URL, DEFAULT_PROGRAM};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "mapic", version, about = "MAPI gateway demo client")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_BASE_URL,
        help = "Gateway base endpoint (scheme://host:port)"
    )]
    pub base_url: String,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_PROGRAM,
        help = "Backend program identifier (path segment)"
    )]
    pub program: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the ?mapikey= query string for a credential value
    Querystring { value: String },
    /// Rewrite an href to carry the credential query string, unless already present
    Apply {
        value: String,
        #[arg(long)]
        href: String,
    },
    /// Report the credential carried by an href's query component
    Key {
        #[arg(long)]
        href: String,
    },
    /// Verify the credential against the gateway and forward the payload
    Verify {
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        href: Option<String>,
    },
    /// Fetch the node set and render it as a table
    Nodes {
        #[arg(long)]
        key: Option<String>,
        #[arg(long)]
        href: Option<String>,
    },
}
