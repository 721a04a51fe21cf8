//! The transaction client: create, poll and verify payments.

use http::HeaderValue;
use http::header::CONTENT_TYPE;
use serde_json::Value;
use url::Url;

use crate::config::GatewayConfig;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::{HttpClient, HttpRequest};

use super::response::{Reply, classify};
use super::types::{CreatePayload, VerifyPayload};
use super::{GatewayError, TransactionRequest, TransactionStatus};

/// Client for the payment gateway's transaction API.
///
/// Each operation executes a linear sequence of HTTP calls with no shared
/// mutable state; concurrent invocations are fully independent. The only
/// suspension point is the delay inside the polling loop, taken through
/// the injected [`Sleeper`] so it never blocks the runtime.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `S`: The sleeper used for polling delays (defaults to [`TokioSleeper`])
///
/// # Example
///
/// ```no_run
/// use paygate::config::{Credentials, GatewayConfig};
/// use paygate::gateway::GatewayClient;
/// use paygate::transport::ReqwestClient;
/// use url::Url;
///
/// let config = GatewayConfig::direct(
///     Url::parse("https://api.gateway.example/v1").unwrap(),
///     Credentials::new("store-1", "secret"),
/// );
/// let client = GatewayClient::new(ReqwestClient::new(), config);
/// ```
#[derive(Debug)]
pub struct GatewayClient<H, S = TokioSleeper> {
    http: H,
    sleeper: S,
    config: GatewayConfig,
}

impl<H> GatewayClient<H, TokioSleeper> {
    /// Creates a new transaction client with the default sleeper.
    #[must_use]
    pub const fn new(http: H, config: GatewayConfig) -> Self {
        Self {
            http,
            sleeper: TokioSleeper,
            config,
        }
    }
}

impl<H, S> GatewayClient<H, S> {
    /// Sets a custom sleeper for polling delays.
    ///
    /// This is primarily useful for testing to avoid actual delays.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> GatewayClient<H, S2> {
        GatewayClient {
            http: self.http,
            sleeper,
            config: self.config,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Attaches the Basic auth header when the route carries credentials.
    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        match &self.config.credentials {
            Some(credentials) => request.with_header(
                http::header::AUTHORIZATION,
                credentials.authorization_header(),
            ),
            None => request,
        }
    }
}

impl<H: HttpClient, S: Sleeper> GatewayClient<H, S> {
    /// Creates a transaction and returns the payment redirect URL.
    ///
    /// Dispatches on the reply shape: a JSON reply must carry both the
    /// transaction id and the payment-methods link; a 202 Accepted enters
    /// the polling loop and, once completed, returns the caller's return
    /// URL; a plain-text reply containing "accepted" also returns the
    /// return URL.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failures, non-2xx replies,
    /// malformed 2xx replies, an explicitly failed transaction, or a
    /// polling timeout.
    pub async fn create_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<Url, GatewayError> {
        self.create_inner(request)
            .await
            .inspect_err(|e| tracing::error!(reference = request.reference(), "create transaction failed: {e}"))
    }

    /// Fetches the current status of a transaction.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failures, non-2xx replies,
    /// or a JSON reply without a `status` field. Errors are never
    /// swallowed into a status value.
    pub async fn transaction_status(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionStatus, GatewayError> {
        self.status_inner(transaction_id)
            .await
            .inspect_err(|e| tracing::error!(transaction = transaction_id, "status check failed: {e}"))
    }

    /// Checks whether a payment has completed.
    ///
    /// A single-shot check with no polling: returns `Ok(true)` only when
    /// the resolved status is exactly completed.
    ///
    /// # Errors
    ///
    /// Transport and gateway errors propagate; they are never collapsed
    /// into `Ok(false)`.
    pub async fn verify_payment(&self, transaction_id: &str) -> Result<bool, GatewayError> {
        self.verify_inner(transaction_id)
            .await
            .inspect_err(|e| tracing::error!(transaction = transaction_id, "verification failed: {e}"))
    }

    async fn create_inner(&self, request: &TransactionRequest) -> Result<Url, GatewayError> {
        let payload = CreatePayload::new(
            request,
            &self.config.currency,
            &self.config.country,
            &self.config.locale,
        );
        let http_request = self
            .authorize(HttpRequest::post(self.config.route.create_url()))
            .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .with_body(encode(&payload));

        let response = self.http.request(http_request).await?;
        match classify(&response)? {
            Reply::Json(value) => self.payment_link(&value).await,
            Reply::Accepted { transaction_id } => {
                tracing::debug!(transaction = transaction_id, "creation accepted, polling");
                self.poll_until_completed(&transaction_id).await?;
                // No gateway-issued link exists for an asynchronous
                // acceptance; the caller's return URL is the redirect.
                Ok(request.return_url().clone())
            }
            Reply::Text(text) => {
                if text.to_lowercase().contains("accepted") {
                    Ok(request.return_url().clone())
                } else {
                    Err(GatewayError::InvalidResponse(format!(
                        "unexpected gateway reply: {text}"
                    )))
                }
            }
        }
    }

    /// Extracts the payment-methods link from a JSON creation reply.
    async fn payment_link(&self, value: &Value) -> Result<Url, GatewayError> {
        let id = value.get("id").and_then(Value::as_str).ok_or_else(|| {
            GatewayError::InvalidResponse("creation reply missing transaction id".to_string())
        })?;
        let link = value
            .pointer("/_links/payment_methods")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                GatewayError::InvalidResponse(
                    "creation reply missing payment_methods link".to_string(),
                )
            })?;
        let link = Url::parse(link).map_err(|e| {
            GatewayError::InvalidResponse(format!("invalid payment_methods link: {e}"))
        })?;
        tracing::debug!(transaction = id, "transaction created");

        if self.config.resolve_payment_link {
            self.resolve_link(link).await
        } else {
            Ok(link)
        }
    }

    /// Resolves the payment-methods link to the hosted payment page URL.
    async fn resolve_link(&self, link: Url) -> Result<Url, GatewayError> {
        let response = self.http.request(self.authorize(HttpRequest::get(link))).await?;
        match classify(&response)? {
            Reply::Json(value) => {
                let url = value.get("url").and_then(Value::as_str).ok_or_else(|| {
                    GatewayError::InvalidResponse(
                        "payment link reply missing hosted page url".to_string(),
                    )
                })?;
                Url::parse(url).map_err(|e| {
                    GatewayError::InvalidResponse(format!("invalid hosted page url: {e}"))
                })
            }
            Reply::Text(_) | Reply::Accepted { .. } => Err(GatewayError::InvalidResponse(
                "payment link reply is not JSON".to_string(),
            )),
        }
    }

    /// Polls the transaction until it completes.
    ///
    /// Only a pending status continues the loop; transport and HTTP
    /// errors abort immediately, and a failed status is an error.
    async fn poll_until_completed(&self, transaction_id: &str) -> Result<(), GatewayError> {
        let policy = &self.config.poll;
        for attempt in 1..=policy.max_attempts {
            let status = self.status_inner(transaction_id).await?;
            if status.is_terminal() {
                return if status == TransactionStatus::Completed {
                    tracing::debug!(transaction = transaction_id, attempt, "completed");
                    Ok(())
                } else {
                    Err(GatewayError::TransactionFailed {
                        id: transaction_id.to_string(),
                    })
                };
            }
            if policy.should_continue(attempt) {
                self.sleeper.sleep(policy.delay).await;
            }
        }
        Err(GatewayError::PollingTimeout {
            attempts: policy.max_attempts,
        })
    }

    async fn status_inner(&self, transaction_id: &str) -> Result<TransactionStatus, GatewayError> {
        let http_request =
            self.authorize(HttpRequest::get(self.config.route.status_url(transaction_id)));
        let response = self.http.request(http_request).await?;
        match classify(&response)? {
            Reply::Json(value) => status_from_json(&value),
            Reply::Text(text) => Ok(TransactionStatus::from_text(&text)),
            Reply::Accepted { .. } => Err(GatewayError::InvalidResponse(
                "unexpected 202 from status endpoint".to_string(),
            )),
        }
    }

    async fn verify_inner(&self, transaction_id: &str) -> Result<bool, GatewayError> {
        let status = match self.config.route.verify_url() {
            Some(url) => {
                let payload = VerifyPayload { transaction_id };
                let http_request = HttpRequest::post(url)
                    .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                    .with_body(encode(&payload));
                let response = self.http.request(http_request).await?;
                match classify(&response)? {
                    Reply::Json(value) => status_from_json(&value)?,
                    Reply::Text(text) => TransactionStatus::from_text(&text),
                    Reply::Accepted { .. } => {
                        return Err(GatewayError::InvalidResponse(
                            "unexpected 202 from verify endpoint".to_string(),
                        ));
                    }
                }
            }
            None => self.status_inner(transaction_id).await?,
        };
        Ok(status == TransactionStatus::Completed)
    }
}

/// Reads the tri-state status from a JSON status reply.
fn status_from_json(value: &Value) -> Result<TransactionStatus, GatewayError> {
    value
        .get("status")
        .and_then(Value::as_str)
        .map(TransactionStatus::from_json_field)
        .ok_or_else(|| {
            GatewayError::InvalidResponse("status reply missing status field".to_string())
        })
}

/// Serializes a wire payload.
fn encode<T: serde::Serialize>(payload: &T) -> Vec<u8> {
    // Invariant: payloads are string-keyed structs, serialization cannot fail
    serde_json::to_vec(payload).expect("payload serialization is infallible")
}
