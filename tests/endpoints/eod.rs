use chrono::NaiveDate;
use httpmock::Method::GET;
use marketstack_rs::{EodOptions, Sort};

use crate::common::{self, TEST_KEY};

#[tokio::test]
async fn eod_range_decodes_page_and_sends_options() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/eod")
            .query_param("access_key", TEST_KEY)
            .query_param("symbols", "AAPL,GOOG")
            .query_param("date_from", "2023-01-01")
            .query_param("date_to", "2023-01-31")
            .query_param("sort", "DESC")
            .query_param("limit", "100");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("eod_AAPL_GOOG"));
    });

    let client = common::client_for(&server);
    let page = client
        .eod(
            &EodOptions::new()
                .symbols(["AAPL", "GOOG"])
                .date_range(
                    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                    NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
                )
                .sort(Sort::Desc)
                .limit(100),
        )
        .await
        .unwrap();

    mock.assert();
    assert_eq!(page.pagination.count, 2);
    assert_eq!(page.len() as u64, page.pagination.count);
    assert!(!page.has_more());

    let aapl = &page.data[0];
    assert_eq!(aapl.symbol, "AAPL");
    assert_eq!(aapl.exchange, "XNAS");
    assert_eq!(aapl.close, Some(150.25));
    assert_eq!(aapl.adj_close, Some(150.25));
    assert_eq!(aapl.split_factor, Some(1.0));
    assert_eq!(
        aapl.timestamp().map(|t| t.date_naive()),
        NaiveDate::from_ymd_opt(2023, 1, 15)
    );

    let goog = &page.data[1];
    assert_eq!(goog.close, Some(2800.5));
    assert_eq!(goog.adj_close, None);
}

#[tokio::test]
async fn eod_latest_hits_latest_path() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/eod/latest")
            .query_param("symbols", "AAPL");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("eod_AAPL_GOOG"));
    });

    let client = common::client_for(&server);
    let page = client
        .eod_latest(&EodOptions::new().symbols(["AAPL"]))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn eod_by_date_appends_the_date_to_the_path() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/eod/2023-01-15")
            .query_param("symbols", "AAPL,GOOG");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("eod_AAPL_GOOG"));
    });

    let client = common::client_for(&server);
    let opts = EodOptions::new().symbols(["AAPL", "GOOG"]);

    let by_str = client.eod_by_date("2023-01-15", &opts).await.unwrap();
    let by_date = client
        .eod_on(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(), &opts)
        .await
        .unwrap();

    mock.assert_hits(2);
    assert_eq!(by_str, by_date);
    assert!(by_str.iter().all(|bar| bar.date.starts_with("2023-01-15")));
}
