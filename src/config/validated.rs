//! Validated configuration for the transaction client.
//!
//! All validation happens during construction, before any request is made.

use std::fmt;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::HeaderValue;
use url::Url;

use crate::gateway::PollPolicy;

use super::cli::Cli;
use super::error::ConfigError;
use super::route::Route;

/// Environment variable names consumed by [`GatewayConfig`].
pub mod env_var {
    /// Gateway API root URL (direct route).
    pub const API_URL: &str = "PAYGATE_API_URL";
    /// Gateway store identifier (direct route).
    pub const STORE_ID: &str = "PAYGATE_STORE_ID";
    /// Gateway secret key (direct route).
    pub const SECRET_KEY: &str = "PAYGATE_SECRET_KEY";
    /// Webhook relay URL (relay route; wins over the direct route).
    pub const RELAY_URL: &str = "PAYGATE_RELAY_URL";
}

/// Default values for optional configuration.
pub mod defaults {
    /// Fixed currency code sent with every transaction.
    pub const CURRENCY: &str = "EUR";
    /// Customer country code sent with every transaction.
    pub const COUNTRY: &str = "ee";
    /// Customer locale sent with every transaction.
    pub const LOCALE: &str = "ee";
}

/// Merchant credentials for the direct gateway API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Gateway store identifier
    pub store_id: String,
    /// Gateway secret key; may contain non-ASCII characters
    pub secret_key: String,
}

impl Credentials {
    /// Creates credentials from a store id and secret key.
    #[must_use]
    pub fn new(store_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            store_id: store_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Builds the `Authorization: Basic` header value.
    ///
    /// Encodes the UTF-8 bytes of `store_id:secret_key`, so non-ASCII
    /// secrets are handled correctly. The value is marked sensitive to
    /// keep it out of debug output.
    #[must_use]
    pub fn authorization_header(&self) -> HeaderValue {
        let token = BASE64.encode(format!("{}:{}", self.store_id, self.secret_key));
        // base64 output is always valid ASCII
        let mut value = HeaderValue::from_str(&format!("Basic {token}"))
            .expect("base64 token is valid ASCII");
        value.set_sensitive(true);
        value
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("store_id", &self.store_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Fully validated configuration ready for use by the transaction client.
///
/// # Construction
///
/// Use [`GatewayConfig::from_env`] for pure environment loading,
/// [`GatewayConfig::load`] to let CLI arguments override the environment,
/// or [`GatewayConfig::direct`] / [`GatewayConfig::relay`] to build one
/// programmatically.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Where requests are sent
    pub route: Route,

    /// Merchant credentials; present iff the route requires them
    pub credentials: Option<Credentials>,

    /// Fixed currency code for created transactions
    pub currency: String,

    /// Customer country code
    pub country: String,

    /// Customer locale
    pub locale: String,

    /// Polling policy for asynchronously accepted transactions
    pub poll: PollPolicy,

    /// Whether to resolve the payment-methods link to the hosted
    /// payment page URL with a second authenticated GET
    pub resolve_payment_link: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (route, target) = match &self.route {
            Route::Direct { base_url } => ("direct", base_url),
            Route::Relay { url } => ("relay", url),
        };
        write!(
            f,
            "Config {{ route: {route} ({target}), currency: {}, poll: {}x/{}s, \
             resolve_payment_link: {} }}",
            self.currency,
            self.poll.max_attempts,
            self.poll.delay.as_secs(),
            self.resolve_payment_link,
        )
    }
}

impl GatewayConfig {
    /// Creates a direct-route configuration with default options.
    #[must_use]
    pub fn direct(base_url: Url, credentials: Credentials) -> Self {
        Self::with_route(Route::Direct { base_url }, Some(credentials))
    }

    /// Creates a relay-route configuration with default options.
    #[must_use]
    pub fn relay(url: Url) -> Self {
        Self::with_route(Route::Relay { url }, None)
    }

    fn with_route(route: Route, credentials: Option<Credentials>) -> Self {
        Self {
            route,
            credentials,
            currency: defaults::CURRENCY.to_string(),
            country: defaults::COUNTRY.to_string(),
            locale: defaults::LOCALE.to_string(),
            poll: PollPolicy::default(),
            resolve_payment_link: false,
            verbose: false,
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if neither route is configured, the direct
    /// route is missing credentials, or a URL is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration from an arbitrary variable lookup.
    ///
    /// This is the testable core of [`GatewayConfig::from_env`]: tests
    /// pass a closure over a map instead of mutating the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when the relay URL is absent
    /// and any of the direct-route variables is missing, and
    /// [`ConfigError::InvalidUrl`] for URLs that fail to parse or cannot
    /// serve as a base for endpoint paths.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(relay) = lookup(env_var::RELAY_URL) {
            let url = parse_base_url(env_var::RELAY_URL, &relay)?;
            return Ok(Self::relay(url));
        }

        let api_url = lookup(env_var::API_URL).ok_or(ConfigError::MissingVar {
            name: env_var::API_URL,
            hint: "Set the gateway API root URL, or set PAYGATE_RELAY_URL to use a relay.",
        })?;
        let store_id = lookup(env_var::STORE_ID).ok_or(ConfigError::MissingVar {
            name: env_var::STORE_ID,
            hint: "The direct gateway API requires the merchant store id.",
        })?;
        let secret_key = lookup(env_var::SECRET_KEY).ok_or(ConfigError::MissingVar {
            name: env_var::SECRET_KEY,
            hint: "The direct gateway API requires the merchant secret key.",
        })?;

        let base_url = parse_base_url(env_var::API_URL, &api_url)?;
        Ok(Self::direct(base_url, Credentials::new(store_id, secret_key)))
    }

    /// Loads configuration with CLI arguments taking precedence over the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for missing or invalid values, including a
    /// polling attempt count below the allowed minimum.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config =
            Self::from_lookup(|name| cli.override_for(name).or_else(|| std::env::var(name).ok()))?;

        if let Some(attempts) = cli.poll_attempts {
            if attempts < PollPolicy::MIN_MAX_ATTEMPTS {
                return Err(ConfigError::InvalidPoll(format!(
                    "poll attempts must be at least {}",
                    PollPolicy::MIN_MAX_ATTEMPTS
                )));
            }
            config.poll.max_attempts = attempts;
        }
        if let Some(secs) = cli.poll_delay {
            config.poll.delay = Duration::from_secs(secs);
        }
        config.resolve_payment_link = cli.resolve_payment_link;
        config.verbose = cli.verbose;

        Ok(config)
    }
}

/// Parses a URL and rejects ones that cannot carry endpoint paths.
fn parse_base_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        name,
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            name,
            url: raw.to_string(),
            reason: "URL cannot serve as a base for endpoint paths".to_string(),
        });
    }
    Ok(url)
}
