//! `grocery` binary entry point.
//!
//! Exit codes follow [`grocery_cli::error::ErrorCode::exit_code`].

use clap::Parser;
use std::process::ExitCode;

use grocery_cli::cli::Cli;
use grocery_cli::config::CliConfig;
use grocery_cli::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    let result = match CliConfig::load(cli.db.clone()) {
        Ok(config) => {
            grocery_cli::init_tracing(&config.log_filter);
            grocery_cli::run(cli, config).await
        }
        Err(err) => Err(CliError::from(err)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, json);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report(err: &CliError, json: bool) {
    if json {
        match serde_json::to_string(err) {
            Ok(body) => eprintln!("{}", body),
            Err(_) => eprintln!("error: {}", err),
        }
    } else {
        eprintln!("error: {}", err);
    }
}
