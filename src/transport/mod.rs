//! HTTP transport layer for talking to the payment gateway.
//!
//! This module provides:
//! - Request and response value types ([`HttpRequest`], [`HttpResponse`])
//! - An HTTP client abstraction ([`HttpClient`]) for dependency injection
//! - The production client implementation ([`ReqwestClient`])
//! - Transport error types ([`HttpError`])

mod client;
mod error;
mod http;

#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use http::{HttpClient, HttpRequest, HttpResponse};
