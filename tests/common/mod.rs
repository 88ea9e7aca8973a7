//! Common test utilities for integration tests.
//!
//! Fixture builders for people/pages/films plus a harness wiring an [`App`]
//! to a shared [`MockHttpClient`] so tests can script responses and assert
//! on request counts.

#![allow(dead_code)]

use std::sync::Arc;

use bytes::Bytes;
use serde_json::json;

use holodex::adapters::mock::{MockHttpClient, MockResponse};
use holodex::api::SwapiClient;
use holodex::app::App;
use holodex::config::Config;
use holodex::models::{PeoplePage, Person};
use holodex::traits::{HttpError, Response};

/// List endpoint used by harness apps.
pub const LIST_URL: &str = "http://api.test/people/";

/// Second-page URL used by pagination tests.
pub const PAGE_2_URL: &str = "http://api.test/people/?page=2";

/// Third-page URL used by pagination tests.
pub const PAGE_3_URL: &str = "http://api.test/people/?page=3";

pub fn person(name: &str) -> Person {
    Person {
        name: name.to_string(),
        height: "172".to_string(),
        mass: "77".to_string(),
        gender: "male".to_string(),
        hair_color: "blond".to_string(),
        url: format!("http://api.test/people/{}/", name.to_lowercase().replace(' ', "-")),
        films: Vec::new(),
    }
}

pub fn person_with_films(name: &str, films: &[&str]) -> Person {
    Person {
        films: films.iter().map(|s| s.to_string()).collect(),
        ..person(name)
    }
}

pub fn page(count: u64, names: &[&str], next: Option<&str>, previous: Option<&str>) -> PeoplePage {
    PeoplePage {
        count,
        next: next.map(|s| s.to_string()),
        previous: previous.map(|s| s.to_string()),
        results: names.iter().map(|n| person(n)).collect(),
    }
}

/// A page as the JSON body the server would send.
pub fn page_body(page: &PeoplePage) -> MockResponse {
    ok_json(serde_json::to_value(page).unwrap())
}

pub fn film_body(title: &str) -> MockResponse {
    ok_json(json!({ "title": title, "episode_id": 4 }))
}

pub fn ok_json(value: serde_json::Value) -> MockResponse {
    MockResponse::Success(Response::new(200, Bytes::from(value.to_string())))
}

pub fn connection_refused() -> MockResponse {
    MockResponse::Error(HttpError::ConnectionFailed("connection refused".to_string()))
}

/// An [`App`] whose HTTP layer is a scriptable mock.
pub struct TestHarness {
    pub mock: MockHttpClient,
    pub app: App,
}

pub fn harness() -> TestHarness {
    harness_with_config(Config::default().with_endpoint(LIST_URL))
}

pub fn harness_with_config(config: Config) -> TestHarness {
    let mock = MockHttpClient::new();
    let client = SwapiClient::with_http(Arc::new(mock.clone()));
    let app = App::new(config, client);
    TestHarness { mock, app }
}

/// Receive and apply `n` fetch results from the app's message channel.
pub async fn pump(app: &mut App, n: usize) {
    for _ in 0..n {
        let message = app
            .message_rx
            .as_mut()
            .expect("message receiver taken")
            .recv()
            .await
            .expect("message channel closed");
        app.handle_message(message);
    }
}
