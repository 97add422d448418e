#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use marketstack_rs::MsClient;
use std::{fs, path::Path};

pub const TEST_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client with `TEST_KEY` pointed at the mock server.
pub fn client_for(server: &MockServer) -> MsClient {
    MsClient::builder()
        .api_key(TEST_KEY)
        .base_url(server.base_url())
        .build()
        .unwrap()
}

/// Serves `fixture` with status 200 for any authenticated GET on `path`.
pub fn mock_ok<'a>(server: &'a MockServer, path: &str, fixture_name: &str) -> Mock<'a> {
    let body = fixture(fixture_name);
    server.mock(|when, then| {
        when.method(GET)
            .path(path)
            .query_param("access_key", TEST_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
