//! Concrete implementations of the trait abstractions.
//!
//! Production adapters wrap real I/O (reqwest); the mock adapter lets tests
//! script responses and inspect the requests that were made.

pub mod mock;
mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
