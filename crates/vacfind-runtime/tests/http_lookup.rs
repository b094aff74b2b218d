use std::time::Duration;
use vacfind_engine::validate;
use vacfind_runtime::{CityLookup, Config, HttpLookup, LookupError, Phase, SearchSession};
use vacfind_testing::fixtures::SAMPLE_JSON;
use vacfind_testing::{MockApiServer, MockReply};
use vacfind_types::RawQuery;

fn query() -> RawQuery {
    RawQuery::new()
        .min_temp("18.5")
        .max_temp("30")
        .month("aug")
        .max_rainy_days("4")
}

#[tokio::test]
async fn test_http_lookup_sends_wire_params() {
    let server = MockApiServer::json(SAMPLE_JSON).unwrap();
    let lookup = HttpLookup::new(server.endpoint(), Duration::from_secs(5)).unwrap();

    let response = lookup.find_cities(&validate(&query()).unwrap()).await.unwrap();
    assert_eq!(response.countries().count(), 3);

    let queries = server.queries();
    assert_eq!(queries.len(), 1);
    let sent = &queries[0];
    assert_eq!(sent["minTemp"], "18.5");
    assert_eq!(sent["maxTemp"], "30");
    assert_eq!(sent["month"], "August");
    assert_eq!(sent["maxRainyDays"], "4");
}

#[tokio::test]
async fn test_http_lookup_maps_server_error_to_status() {
    let server = MockApiServer::start(MockReply::Status(500)).unwrap();
    let lookup = HttpLookup::new(server.endpoint(), Duration::from_secs(5)).unwrap();

    let err = lookup
        .find_cities(&validate(&query()).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, LookupError::Status(500));
}

#[tokio::test]
async fn test_http_lookup_rejects_malformed_body() {
    let server = MockApiServer::json("[\"not\", \"a\", \"map\"]").unwrap();
    let lookup = HttpLookup::new(server.endpoint(), Duration::from_secs(5)).unwrap();

    let err = lookup
        .find_cities(&validate(&query()).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::Decode(_)));
}

#[tokio::test]
async fn test_http_lookup_times_out() {
    let server = MockApiServer::start(MockReply::Delayed(
        Duration::from_secs(5),
        SAMPLE_JSON.to_string(),
    ))
    .unwrap();
    let lookup = HttpLookup::new(server.endpoint(), Duration::from_millis(200)).unwrap();

    let err = lookup
        .find_cities(&validate(&query()).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, LookupError::Timeout(Duration::from_millis(200)));
}

#[tokio::test]
async fn test_session_over_http_from_config() {
    let server = MockApiServer::json(SAMPLE_JSON).unwrap();
    let config = Config {
        api_url: Some(server.base_url()),
        timeout_secs: 5,
    };
    let lookup = HttpLookup::from_config(Some(&server.base_url()), &config).unwrap();
    let mut session = SearchSession::new().with_timeout(config.timeout());

    let phase = session.submit(&query(), &lookup).await;

    assert_eq!(phase, &Phase::Success);
    assert_eq!(session.results().unwrap().total_cities, 7);
}
