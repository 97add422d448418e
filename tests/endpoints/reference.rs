use httpmock::Method::GET;
use marketstack_rs::PageOptions;

use crate::common;

#[tokio::test]
async fn currencies_page_round_trips_pagination() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/currencies")
            .query_param("limit", "3");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("currencies_page"));
    });

    let client = common::client_for(&server);
    let page = client
        .currencies(&PageOptions::new().limit(3))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(page.pagination.total, 42);
    assert!(page.has_more());
    let codes: Vec<_> = page.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["USD", "EUR", "JPY"]);
    assert_eq!(page.data[1].symbol, "€");
}

#[tokio::test]
async fn timezones_page_sends_offset() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/timezones")
            .query_param("limit", "2")
            .query_param("offset", "10");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("timezones_page"));
    });

    let client = common::client_for(&server);
    let page = client
        .timezones(&PageOptions::new().limit(2).offset(10))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(page.pagination.offset, 10);
    assert_eq!(page.len(), 2);
    let london = page.into_iter().nth(1).unwrap();
    assert_eq!(london.tz(), Some(chrono_tz::Europe::London));
}

#[tokio::test]
async fn null_data_is_an_empty_page() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/currencies");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"pagination":{"limit":100,"offset":0,"count":0,"total":0},"data":null}"#);
    });

    let client = common::client_for(&server);
    let page = client.currencies(&PageOptions::new()).await.unwrap();

    mock.assert();
    assert!(page.is_empty());
    assert!(!page.has_more());
}
