//! Paygate: payment-gateway transaction client
//!
//! Entry point for the paygate command-line tool.

use std::process::ExitCode;

use paygate::config::{Cli, Command, GatewayConfig};
use paygate::gateway::{GatewayClient, TransactionRequest};
use paygate::transport::ReqwestClient;
use url::Url;

mod app;

use app::{exit_code, setup_tracing, user_message};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let config = match GatewayConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    setup_tracing(config.verbose);
    tracing::info!("{config}");

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
    runtime.block_on(run(&cli.command, config))
}

/// Runs the selected operation against the gateway.
async fn run(command: &Command, config: GatewayConfig) -> ExitCode {
    let client = GatewayClient::new(ReqwestClient::new(), config);

    match command {
        Command::Create {
            amount,
            reference,
            email,
            return_url,
            cancel_url,
            notification_url,
        } => {
            let request = match build_request(
                *amount,
                reference,
                email,
                return_url,
                cancel_url,
                notification_url,
            ) {
                Ok(request) => request,
                Err(code) => return code,
            };
            match client.create_transaction(&request).await {
                Ok(url) => {
                    println!("{url}");
                    exit_code::SUCCESS
                }
                Err(_) => {
                    eprintln!("{}", user_message::CREATE);
                    exit_code::runtime_error()
                }
            }
        }
        Command::Status { id } => match client.transaction_status(id).await {
            Ok(status) => {
                println!("{status}");
                exit_code::SUCCESS
            }
            Err(_) => {
                eprintln!("{}", user_message::STATUS);
                exit_code::runtime_error()
            }
        },
        Command::Verify { id } => match client.verify_payment(id).await {
            Ok(verified) => {
                println!("{verified}");
                exit_code::SUCCESS
            }
            Err(_) => {
                eprintln!("{}", user_message::VERIFY);
                exit_code::runtime_error()
            }
        },
    }
}

/// Builds a validated transaction request from CLI arguments.
fn build_request(
    amount: f64,
    reference: &str,
    email: &str,
    return_url: &str,
    cancel_url: &str,
    notification_url: &str,
) -> Result<TransactionRequest, ExitCode> {
    let return_url = parse_url("return-url", return_url)?;
    let cancel_url = parse_url("cancel-url", cancel_url)?;
    let notification_url = parse_url("notification-url", notification_url)?;

    TransactionRequest::new(
        amount,
        reference,
        email,
        return_url,
        cancel_url,
        notification_url,
    )
    .map_err(|e| {
        eprintln!("Invalid transaction request: {e}");
        exit_code::CONFIG_ERROR
    })
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ExitCode> {
    Url::parse(raw).map_err(|e| {
        eprintln!("Invalid {name} '{raw}': {e}");
        exit_code::CONFIG_ERROR
    })
}
