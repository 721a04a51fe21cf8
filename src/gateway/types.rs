//! Transaction request, status and wire payload types.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use url::Url;

/// Error type for invalid transaction request parameters.
#[derive(Debug, Error)]
pub enum InvalidRequest {
    /// Amount must be a positive, finite number.
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(f64),

    /// The merchant order reference must not be empty.
    #[error("reference must not be empty")]
    EmptyReference,

    /// The customer email must not be empty.
    #[error("email must not be empty")]
    EmptyEmail,
}

/// A validated transaction-creation request.
///
/// Constructed once per payment attempt and immutable afterwards. The
/// reference identifies the merchant order; the gateway requires it to be
/// unique across distinct payment attempts (a gateway-side invariant this
/// client does not enforce).
#[derive(Debug, Clone)]
pub struct TransactionRequest {
    amount: f64,
    reference: String,
    email: String,
    return_url: Url,
    cancel_url: Url,
    notification_url: Url,
}

impl TransactionRequest {
    /// Creates a new transaction request, validating its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequest`] if the amount is not positive and finite,
    /// or the reference or email is empty.
    pub fn new(
        amount: f64,
        reference: impl Into<String>,
        email: impl Into<String>,
        return_url: Url,
        cancel_url: Url,
        notification_url: Url,
    ) -> Result<Self, InvalidRequest> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(InvalidRequest::NonPositiveAmount(amount));
        }
        let reference = reference.into();
        if reference.is_empty() {
            return Err(InvalidRequest::EmptyReference);
        }
        let email = email.into();
        if email.is_empty() {
            return Err(InvalidRequest::EmptyEmail);
        }

        Ok(Self {
            amount,
            reference,
            email,
            return_url,
            cancel_url,
            notification_url,
        })
    }

    /// Transaction amount in major currency units.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Merchant order reference.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Customer contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// URL the customer is redirected to after payment.
    #[must_use]
    pub const fn return_url(&self) -> &Url {
        &self.return_url
    }

    /// URL the customer is redirected to on cancellation.
    #[must_use]
    pub const fn cancel_url(&self) -> &Url {
        &self.cancel_url
    }

    /// URL the gateway notifies about payment events.
    #[must_use]
    pub const fn notification_url(&self) -> &Url {
        &self.notification_url
    }
}

/// Current state of a transaction as reported by the gateway.
///
/// Not persisted by this client; each status call re-derives it from the
/// gateway's current reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    /// The transaction has not reached a terminal state yet.
    Pending,
    /// The payment completed successfully.
    Completed,
    /// The gateway reported the payment as failed.
    Failed,
}

impl TransactionStatus {
    /// Returns true when this status ends the polling loop.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Maps the `status` field of a JSON status reply.
    ///
    /// Matched case-insensitively; any unrecognized value is treated as
    /// pending, mirroring the plain-text default.
    pub(crate) fn from_json_field(status: &str) -> Self {
        let lower = status.to_lowercase();
        match lower.as_str() {
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            _ => Self::Pending,
        }
    }

    /// Maps a plain-text status reply by case-insensitive substring match.
    ///
    /// "completed" and "failed" are terminal; "accepted" and any
    /// unrecognized body mean the transaction is still pending.
    pub(crate) fn from_text(body: &str) -> Self {
        let lower = body.to_lowercase();
        if lower.contains("completed") {
            Self::Completed
        } else if lower.contains("failed") {
            Self::Failed
        } else {
            Self::Pending
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// Formats an amount to exactly two decimal places for the wire.
///
/// Rounds on the binary `f64` value, so `9` becomes `"9.00"` and `9.005`
/// (binary ≈ 9.0050000000000008) becomes `"9.01"`.
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Wire payload for transaction creation.
///
/// Shape dictated by the gateway: the amount as a two-decimal string, a
/// fixed currency code, the merchant free-text field embedding the order
/// reference, and each redirect URL paired with its HTTP method.
#[derive(Debug, Serialize)]
pub(crate) struct CreatePayload {
    transaction: TransactionBody,
    customer: CustomerBody,
}

#[derive(Debug, Serialize)]
struct TransactionBody {
    amount: String,
    currency: String,
    reference: String,
    merchant_data: String,
    recurring_required: bool,
    transaction_url: TransactionUrls,
}

#[derive(Debug, Serialize)]
struct TransactionUrls {
    return_url: UrlWithMethod,
    cancel_url: UrlWithMethod,
    notification_url: UrlWithMethod,
}

#[derive(Debug, Serialize)]
struct UrlWithMethod {
    url: String,
    method: &'static str,
}

#[derive(Debug, Serialize)]
struct CustomerBody {
    email: String,
    country: String,
    locale: String,
}

impl CreatePayload {
    pub(crate) fn new(
        request: &TransactionRequest,
        currency: &str,
        country: &str,
        locale: &str,
    ) -> Self {
        Self {
            transaction: TransactionBody {
                amount: format_amount(request.amount()),
                currency: currency.to_string(),
                reference: request.reference().to_string(),
                merchant_data: format!("Order ID: {}", request.reference()),
                recurring_required: false,
                transaction_url: TransactionUrls {
                    return_url: UrlWithMethod {
                        url: request.return_url().to_string(),
                        method: "GET",
                    },
                    cancel_url: UrlWithMethod {
                        url: request.cancel_url().to_string(),
                        method: "GET",
                    },
                    notification_url: UrlWithMethod {
                        url: request.notification_url().to_string(),
                        method: "POST",
                    },
                },
            },
            customer: CustomerBody {
                email: request.email().to_string(),
                country: country.to_string(),
                locale: locale.to_string(),
            },
        }
    }
}

/// Wire payload for relay-based payment verification.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerifyPayload<'a> {
    pub transaction_id: &'a str,
}
