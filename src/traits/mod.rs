//! Trait abstractions for external collaborators.
//!
//! The prediction backend is reached through the [`HttpClient`] trait so
//! the request pipeline can be exercised in tests without a network.

mod http;

pub use http::{HttpClient, HttpError, Response};
