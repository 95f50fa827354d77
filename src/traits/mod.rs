//! Trait abstractions for external collaborators.
//!
//! The only true external dependency this application has is HTTP transport.
//! Hiding it behind [`HttpClient`] keeps the API clients testable without
//! network access.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
