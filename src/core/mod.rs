//! Core components of the `yfinance-mcp` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`YfClient`], its builder and the cookie/crumb [`Session`].
//! - The request descriptor [`ApiRequest`] and the executor that runs it.
//! - The primary [`YfError`] type.
//! - Serde shapes shared by several endpoints (`wire`).

/// The main client (`YfClient`), builder, and authentication session.
pub mod client;
/// The primary error type (`YfError`) for the crate.
pub mod error;
/// Request execution and JSON decoding.
pub mod net;
/// The per-call request descriptor.
pub mod request;
/// Envelope and value wrappers shared across endpoints.
pub mod wire;

pub(crate) mod quotesummary;

// convenient re-exports so most code can just `use crate::core::YfClient`
pub use client::{Session, YfClient, YfClientBuilder};
pub use error::YfError;
pub use net::decode_json;
pub use request::ApiRequest;
