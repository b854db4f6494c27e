//! Integration tests for the places client using wiremock
//!
//! These tests run the client against a mock HTTP server and cover the
//! service statuses and transport failures the client has to map.

use integration_places::{GooglePlacesClient, PlacesClient, PlacesConfig, PlacesError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn sample_autocomplete_response() -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "predictions": [
            {
                "place_id": "ChIJ-paulista",
                "description": "Avenida Paulista, 1000 - Bela Vista, São Paulo - SP, Brasil",
                "types": ["street_address"]
            },
            {
                "place_id": "ChIJ-masp",
                "description": "MASP - Avenida Paulista, 1578 - Bela Vista, São Paulo - SP, Brasil",
                "types": ["museum"]
            }
        ]
    })
}

fn sample_details_response() -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "result": {
            "geometry": {
                "location": {"lat": -23.5614, "lng": -46.6559}
            }
        }
    })
}

fn client_for(server: &MockServer) -> GooglePlacesClient {
    let config = PlacesConfig {
        base_url: server.uri(),
        ..PlacesConfig::for_testing()
    };
    GooglePlacesClient::new(&config).unwrap()
}

#[tokio::test]
async fn autocomplete_returns_predictions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .and(query_param("input", "Avenida Paulista"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_autocomplete_response()))
        .expect(1)
        .mount(&server)
        .await;

    let predictions = client_for(&server)
        .autocomplete("Avenida Paulista")
        .await
        .unwrap();

    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].place_id, "ChIJ-paulista");
    assert!(predictions[1].description.starts_with("MASP"));
}

#[tokio::test]
async fn autocomplete_passes_language() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .and(query_param("language", "pt-BR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_autocomplete_response()))
        .expect(1)
        .mount(&server)
        .await;

    let config = PlacesConfig {
        base_url: server.uri(),
        language: Some("pt-BR".to_string()),
        ..PlacesConfig::for_testing()
    };
    let client = GooglePlacesClient::new(&config).unwrap();

    assert!(client.autocomplete("Rua Augusta").await.is_ok());
}

#[tokio::test]
async fn autocomplete_without_predictions_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ZERO_RESULTS"})),
        )
        .mount(&server)
        .await;

    let predictions = client_for(&server).autocomplete("xyzzy").await.unwrap();

    assert!(predictions.is_empty());
}

#[tokio::test]
async fn autocomplete_request_denied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "predictions": []
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).autocomplete("Avenida Paulista").await;

    assert!(matches!(result, Err(PlacesError::RequestDenied(ref m)) if m.contains("API key")));
}

#[tokio::test]
async fn autocomplete_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client_for(&server).autocomplete("Avenida Paulista").await;

    let err = result.unwrap_err();
    assert!(matches!(err, PlacesError::RequestFailed(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn autocomplete_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let result = client_for(&server).autocomplete("Avenida Paulista").await;

    assert!(matches!(
        result,
        Err(PlacesError::RateLimitExceeded {
            retry_after_secs: Some(30)
        })
    ));
}

#[tokio::test]
async fn autocomplete_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client_for(&server).autocomplete("Avenida Paulista").await;

    assert!(matches!(result, Err(PlacesError::ParseError(_))));
}

#[tokio::test]
async fn place_location_returns_coordinate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "ChIJ-paulista"))
        .and(query_param("fields", "geometry"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_details_response()))
        .expect(1)
        .mount(&server)
        .await;

    let coordinate = client_for(&server)
        .place_location("ChIJ-paulista")
        .await
        .unwrap();

    assert!((coordinate.latitude() + 23.5614).abs() < 1e-9);
    assert!((coordinate.longitude() + 46.6559).abs() < 1e-9);
}

#[tokio::test]
async fn place_location_without_result_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "NOT_FOUND"})),
        )
        .mount(&server)
        .await;

    let result = client_for(&server).place_location("ChIJ-gone").await;

    assert!(matches!(result, Err(PlacesError::NotFound(ref id)) if id == "ChIJ-gone"));
}

#[tokio::test]
async fn place_location_without_geometry_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "result": {}
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).place_location("ChIJ-paulista").await;

    assert!(matches!(result, Err(PlacesError::ParseError(_))));
}

#[tokio::test]
async fn place_location_out_of_range_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "result": {"geometry": {"location": {"lat": 123.0, "lng": 0.0}}}
        })))
        .mount(&server)
        .await;

    let result = client_for(&server).place_location("ChIJ-bad").await;

    assert!(matches!(result, Err(PlacesError::ParseError(_))));
}

#[tokio::test]
async fn place_location_is_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_details_response()))
        .expect(1)
        .mount(&server)
        .await;

    let config = PlacesConfig {
        base_url: server.uri(),
        cache_ttl_minutes: 5,
        ..PlacesConfig::for_testing()
    };
    let client = GooglePlacesClient::new(&config).unwrap();

    let first = client.place_location("ChIJ-paulista").await.unwrap();
    let second = client.place_location("ChIJ-paulista").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn unreachable_server_is_connection_failure() {
    let config = PlacesConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..PlacesConfig::for_testing()
    };
    let client = GooglePlacesClient::new(&config).unwrap();

    let result = client.autocomplete("Avenida Paulista").await;

    assert!(matches!(result, Err(PlacesError::ConnectionFailed(_))));
}
