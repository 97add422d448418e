use httpmock::Method::GET;
use marketstack_rs::{EodOptions, MsError};
use std::time::Duration;

use crate::common;

#[tokio::test]
async fn unauthorized_maps_to_structured_api_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/eod");
        then.status(401)
            .header("content-type", "application/json")
            .body(common::fixture("error_invalid_access_key"));
    });

    let client = common::client_for(&server);
    let err = client
        .eod(&EodOptions::new().symbols(["AAPL"]))
        .await
        .unwrap_err();

    mock.assert();
    assert_eq!(err.code(), Some("invalid_access_key"));
    match &err {
        MsError::Api(api) => {
            assert_eq!(api.code, "invalid_access_key");
            assert!(api.message.starts_with("You have not supplied a valid API Access Key."));
            assert_eq!(api.symbol(), None);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(err.to_string().contains("[invalid_access_key]"));
}

#[tokio::test]
async fn symbol_context_is_exposed() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/eod/latest");
        then.status(422)
            .header("content-type", "application/json")
            .body(common::fixture("error_no_valid_symbols"));
    });

    let client = common::client_for(&server);
    let err = client
        .eod_latest(&EodOptions::new().symbols(["ZZZZ"]))
        .await
        .unwrap_err();

    mock.assert();
    let api = err.api_error().expect("structured error");
    assert_eq!(api.code, "no_valid_symbols_provided");
    assert_eq!(api.symbol(), Some("ZZZZ"));
    assert!(err.to_string().contains("(symbol: ZZZZ)"));
}

#[tokio::test]
async fn unrecognized_error_body_keeps_status_and_raw_text() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/tickers/FAIL");
        then.status(500).body("oops");
    });

    let client = common::client_for(&server);
    let err = client.ticker("FAIL").await.unwrap_err();

    mock.assert();
    assert!(err.api_error().is_none());
    match err {
        MsError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "oops");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn json_without_error_field_is_a_status_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/exchanges/NOPE");
        then.status(404)
            .header("content-type", "application/json")
            .body("{}");
    });

    let client = common::client_for(&server);
    let err = client.exchange("NOPE").await.unwrap_err();

    mock.assert();
    match err {
        MsError::Status { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "{}");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/eod");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"pagination": {"limit": "many"}, "data": []}"#);
    });

    let client = common::client_for(&server);
    let err = client
        .eod(&EodOptions::new().symbols(["AAPL"]))
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, MsError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    let client = marketstack_rs::MsClient::builder()
        .api_key(common::TEST_KEY)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.ticker("TSLA").await.unwrap_err();
    assert!(matches!(err, MsError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn transport_timeout_is_a_transport_error() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/tickers/SLOW");
        then.status(200)
            .delay(Duration::from_millis(500))
            .body(common::fixture("ticker_TSLA"));
    });

    let client = marketstack_rs::MsClient::builder()
        .api_key(common::TEST_KEY)
        .base_url(server.base_url())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.ticker("SLOW").await.unwrap_err();
    match err {
        MsError::Http(e) => assert!(e.is_timeout(), "expected timeout, got {e:?}"),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn caller_deadline_cancels_the_request() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/tickers/SLOW");
        then.status(200)
            .delay(Duration::from_millis(500))
            .body(common::fixture("ticker_TSLA"));
    });

    let client = common::client_for(&server);
    let res = tokio::time::timeout(Duration::from_millis(50), client.ticker("SLOW")).await;
    assert!(res.is_err(), "the call should have been cut off by the deadline");
}

#[tokio::test]
async fn null_message_still_yields_structured_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/eod");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"error":{"code":"invalid_access_key","message":null}}"#);
    });

    let client = common::client_for(&server);
    let err = client
        .eod(&EodOptions::new().symbols(["AAPL"]))
        .await
        .unwrap_err();

    mock.assert();
    let api = err.api_error().expect("structured error");
    assert_eq!(api.code, "invalid_access_key");
    assert_eq!(api.message, "");
}

#[tokio::test]
async fn error_without_code_still_yields_structured_error() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/tickers/TSLA");
        then.status(403)
            .header("content-type", "application/json")
            .body(r#"{"error":{"message":"Access restricted"}}"#);
    });

    let client = common::client_for(&server);
    let err = client.ticker("TSLA").await.unwrap_err();

    mock.assert();
    match &err {
        MsError::Api(api) => {
            assert_eq!(api.code, "");
            assert_eq!(api.message, "Access restricted");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
