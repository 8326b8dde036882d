//! Timeseries requests against a local mock of the Yahoo host

use finratio_data::yahoo::{ProviderConfig, YahooProvider};
use finratio_data::{DataError, FinancialsProvider, Period, Statement};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INCOME_BODY: &str = include_str!("fixtures/income_timeseries.json");
const AAPL_PATH: &str = "/ws/fundamentals-timeseries/v1/finance/timeseries/AAPL";

fn provider(server: &MockServer, request_interval: Duration) -> YahooProvider {
    YahooProvider::with_config(ProviderConfig {
        base_url: server.uri(),
        request_interval,
        ..ProviderConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_statement_parsed_from_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(AAPL_PATH))
        .and(query_param("symbol", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_string(INCOME_BODY))
        .expect(1)
        .mount(&server)
        .await;

    let table = provider(&server, Duration::ZERO)
        .fetch_statement("AAPL", Statement::Income)
        .await
        .unwrap();

    assert_eq!(table.periods().len(), 5);
    assert_eq!(
        table.value("Total Revenue", Period::from_ymd(2024, 9, 30).unwrap()),
        Some(391_035_000_000.0)
    );
}

#[tokio::test]
async fn test_request_names_annual_statement_keys() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(AAPL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(INCOME_BODY))
        .mount(&server)
        .await;

    provider(&server, Duration::ZERO)
        .fetch_statement("AAPL", Statement::Income)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let types = requests[0]
        .url
        .query_pairs()
        .find(|(key, _)| key == "type")
        .map(|(_, value)| value.into_owned())
        .unwrap();
    assert!(types.split(',').all(|t| t.starts_with("annual")));
    assert!(types.contains("annualTotalRevenue"));
    assert!(types.contains("annualNetIncome"));
}

#[tokio::test]
async fn test_not_found_is_empty_statement() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&server)
        .await;

    let provider = provider(&server, Duration::ZERO);
    for statement in [Statement::Income, Statement::BalanceSheet, Statement::CashFlow] {
        let table = provider.fetch_statement("AAPL", statement).await.unwrap();
        assert_eq!(table.statement(), statement);
        assert!(table.is_empty());
    }
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = provider(&server, Duration::ZERO)
        .fetch_statement("AAPL", Statement::CashFlow)
        .await;

    assert!(matches!(result, Err(DataError::Http(msg)) if msg.contains("500")));
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let result = provider(&server, Duration::ZERO)
        .fetch_statement("AAPL", Statement::Income)
        .await;

    assert!(matches!(result, Err(DataError::Serialization(_))));
}

#[tokio::test]
async fn test_invalid_symbol_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = provider(&server, Duration::ZERO)
        .fetch_statement("AAPL/../x", Statement::Income)
        .await;

    assert!(matches!(result, Err(DataError::InvalidSymbol(_))));
}

#[tokio::test]
async fn test_requests_are_spaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&server)
        .await;

    let provider = provider(&server, Duration::from_millis(60));
    let start = Instant::now();
    for statement in [Statement::Income, Statement::BalanceSheet, Statement::CashFlow] {
        provider.fetch_statement("AAPL", statement).await.unwrap();
    }
    assert!(start.elapsed() >= Duration::from_millis(120));
}
