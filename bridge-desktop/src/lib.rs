//! # Desktop Host Bridge
//!
//! Native implementations of the host capabilities in `bridge-traits`.
//!
//! Ships the reqwest-backed [`HttpClient`](bridge_traits::http::HttpClient).
//! The interactive identity capability is intentionally not implemented
//! here: each host surface wires its own adapter around the provider's
//! consent SDK.

pub mod http;

pub use http::ReqwestHttpClient;
