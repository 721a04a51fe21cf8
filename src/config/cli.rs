//! CLI argument parsing using clap.

use clap::{Parser, Subcommand};

use super::validated::env_var;

/// Paygate: payment-gateway transaction client
///
/// Creates payment transactions against the gateway API (or a webhook
/// relay), polls them to a terminal status and verifies payments.
#[derive(Debug, Parser)]
#[command(name = "paygate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Gateway API root URL (overrides PAYGATE_API_URL)
    #[arg(long = "api-url", global = true)]
    pub api_url: Option<String>,

    /// Gateway store identifier (overrides PAYGATE_STORE_ID)
    #[arg(long = "store-id", global = true)]
    pub store_id: Option<String>,

    /// Gateway secret key (overrides PAYGATE_SECRET_KEY)
    #[arg(long = "secret-key", global = true)]
    pub secret_key: Option<String>,

    /// Webhook relay URL (overrides PAYGATE_RELAY_URL; wins over the direct API)
    #[arg(long = "relay-url", global = true)]
    pub relay_url: Option<String>,

    /// Resolve the payment-methods link to the hosted payment page URL
    #[arg(long = "resolve-payment-link", global = true)]
    pub resolve_payment_link: bool,

    /// Maximum number of status checks while a transaction is pending
    #[arg(long = "poll-attempts", global = true)]
    pub poll_attempts: Option<u32>,

    /// Delay between status checks, in seconds
    #[arg(long = "poll-delay", global = true)]
    pub poll_delay: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for paygate
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a transaction and print the payment redirect URL
    Create {
        /// Transaction amount in major currency units
        #[arg(long)]
        amount: f64,

        /// Merchant order reference (must be unique per order)
        #[arg(long)]
        reference: String,

        /// Customer contact email
        #[arg(long)]
        email: String,

        /// URL the customer returns to after payment
        #[arg(long = "return-url")]
        return_url: String,

        /// URL the customer returns to on cancellation
        #[arg(long = "cancel-url")]
        cancel_url: String,

        /// URL the gateway notifies about payment events
        #[arg(long = "notification-url")]
        notification_url: String,
    },

    /// Print the current status of a transaction
    Status {
        /// Gateway transaction identifier
        id: String,
    },

    /// Check whether a transaction has completed
    Verify {
        /// Gateway transaction identifier
        id: String,
    },
}

impl Cli {
    /// Parses CLI arguments from the process arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the CLI override for the given configuration variable.
    #[must_use]
    pub fn override_for(&self, name: &str) -> Option<String> {
        match name {
            env_var::API_URL => self.api_url.clone(),
            env_var::STORE_ID => self.store_id.clone(),
            env_var::SECRET_KEY => self.secret_key.clone(),
            env_var::RELAY_URL => self.relay_url.clone(),
            _ => None,
        }
    }
}
