//! Adapter implementations of the crate's trait abstractions.
//!
//! The production [`ReqwestHttpClient`] talks to the real backend; the
//! [`mock`] module provides a configurable in-memory client for tests.

pub mod mock;
mod reqwest_http;

pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
