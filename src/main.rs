use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::MissingCredential;
use domain::models::{ErrorBody, ErrorOut};
use services::gateway::GatewayError;
use services::table::TableError;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = commands::handle_runtime_commands(&cli) {
        report_failure(cli.json, &err);
        std::process::exit(1);
    }
}

fn fault_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<MissingCredential>().is_some() {
        return "MISSING_CREDENTIAL";
    }
    match err.downcast_ref::<GatewayError>() {
        Some(GatewayError::Network(_)) => return "NETWORK_FAULT",
        Some(GatewayError::Malformed(_)) => return "MALFORMED_RESPONSE",
        Some(GatewayError::Shape(_)) => return "UNEXPECTED_SHAPE",
        None => {}
    }
    if err.downcast_ref::<TableError>().is_some() {
        return "UNEXPECTED_SHAPE";
    }
    "ERROR"
}

fn report_failure(json: bool, err: &anyhow::Error) {
    if json {
        let out = ErrorOut {
            ok: false,
            error: ErrorBody {
                code: fault_code(err).to_string(),
                message: format!("{:#}", err),
            },
        };
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {:#}", err),
        }
    } else {
        eprintln!("error: {:#}", err);
    }
}
