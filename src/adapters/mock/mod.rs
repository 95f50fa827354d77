//! Mock implementations of trait abstractions for testing.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
