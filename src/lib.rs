//! Paygate: payment-gateway transaction client
//!
//! A library for initiating payment transactions against an external
//! payment gateway (or a webhook relay fronting it), polling accepted
//! transactions to a terminal status, and verifying completed payments.

pub mod config;
pub mod gateway;
pub mod time;
pub mod transport;
