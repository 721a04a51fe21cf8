//! Request routing: direct gateway API or webhook relay.

use url::Url;

/// Where transaction requests are sent.
///
/// The direct route talks to the gateway's own HTTP API and requires
/// merchant credentials. The relay route delegates to a webhook relay
/// endpoint that fronts the gateway; the relay holds the credentials.
///
/// Both variants hold a validated base URL that is guaranteed to accept
/// path segments (checked at configuration time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Talk to the gateway API directly.
    Direct {
        /// Gateway API root, e.g. `https://api.gateway.example/v1`
        base_url: Url,
    },
    /// Delegate to a webhook relay.
    Relay {
        /// Relay endpoint URL
        url: Url,
    },
}

impl Route {
    /// URL that transaction-creation payloads are POSTed to.
    #[must_use]
    pub fn create_url(&self) -> Url {
        match self {
            Self::Direct { base_url } => join(base_url, &["transactions"]),
            Self::Relay { url } => url.clone(),
        }
    }

    /// URL for querying the status of a transaction by id.
    #[must_use]
    pub fn status_url(&self, transaction_id: &str) -> Url {
        match self {
            Self::Direct { base_url } => join(base_url, &["transactions", transaction_id]),
            Self::Relay { url } => join(url, &["status", transaction_id]),
        }
    }

    /// Dedicated verification endpoint, if this route has one.
    ///
    /// The relay exposes a `POST /verify` endpoint; the direct API has
    /// none, so verification falls back to the status query.
    #[must_use]
    pub fn verify_url(&self) -> Option<Url> {
        match self {
            Self::Direct { .. } => None,
            Self::Relay { url } => Some(join(url, &["verify"])),
        }
    }
}

/// Appends path segments to a validated base URL.
fn join(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.path_segments_mut()
        // Invariant: configuration validation rejects cannot-be-a-base URLs
        .expect("validated base URL accepts path segments")
        .pop_if_empty()
        .extend(segments);
    url
}
