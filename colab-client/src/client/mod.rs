//! Client module - HTTP transport.
//!
//! The [`HttpClient`] trait is the seam between the sync controller and
//! the network; [`NetworkHttpClient`] is the reqwest implementation.

pub mod http;

// Re-export main types
pub use http::{HttpClient, HttpResponse, NetworkHttpClient};
