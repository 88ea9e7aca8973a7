//! Trait abstractions for external collaborators.
//!
//! These traits decouple the application from concrete I/O implementations,
//! enabling dependency injection and mocking in tests.

mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
