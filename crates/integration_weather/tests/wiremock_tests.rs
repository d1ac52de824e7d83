//! Integration tests for weather service using wiremock
//!
//! These tests verify the weather client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::io;
use std::sync::{Arc, Mutex};

use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const TEST_KEY: &str = "test-api-key";

/// Sample OpenWeatherMap current-weather response for testing
fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 3.3947, "lat": 6.4541 },
        "weather": [
            { "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }
        ],
        "base": "stations",
        "main": {
            "temp": 29.4,
            "feels_like": 34.2,
            "temp_min": 29.4,
            "temp_max": 29.4,
            "pressure": 1011,
            "humidity": 74
        },
        "visibility": 10000,
        "wind": { "speed": 4.12, "deg": 220 },
        "clouds": { "all": 75 },
        "dt": 1_710_244_800,
        "sys": { "country": "NG", "sunrise": 1_710_222_000, "sunset": 1_710_265_500 },
        "timezone": 3600,
        "id": 2_332_459,
        "name": "Lagos",
        "cod": 200
    })
}

fn not_found_response() -> serde_json::Value {
    serde_json::json!({ "cod": "404", "message": "city not found" })
}

/// Create a test client configured to use the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn create_test_client(mock_server: &MockServer) -> OpenWeatherMapClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        api_key: Some(SecretString::from(TEST_KEY.to_string())),
        timeout_secs: 5,
    };
    #[allow(clippy::expect_used)]
    OpenWeatherMapClient::new(&config).expect("Failed to create client")
}

/// Setup a mock for the /weather endpoint with the given response
async fn setup_weather_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_get_current_weather_success() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_weather_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Lagos").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let weather = result.unwrap();
    assert!((weather.temperature - 29.4).abs() < 0.001);
    assert!((weather.cloud_cover - 75.0).abs() < 0.001);
    assert_eq!(weather.place_name.as_deref(), Some("Lagos"));
    assert!(weather.observed_at.is_some());
}

#[tokio::test]
async fn test_location_is_trimmed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Lagos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("  Lagos  ").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

// ============================================================================
// Payload status scenarios
// ============================================================================

#[tokio::test]
async fn test_payload_not_found_status_is_error() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(404).set_body_json(not_found_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Atlantis").await;

    match result {
        Err(WeatherError::Api { code, message }) => {
            assert_eq!(code, "404");
            assert_eq!(message, "city not found");
        },
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_payload_status_wins_over_transport_status() {
    let mock_server = MockServer::start().await;

    // HTTP 200 but the payload reports failure
    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(not_found_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Atlantis").await;

    assert!(
        matches!(result, Err(WeatherError::Api { .. })),
        "Expected Api error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_api_key_status() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Lagos").await;

    match result {
        Err(WeatherError::Api { code, message }) => {
            assert_eq!(code, "401");
            assert!(message.starts_with("Invalid API key"));
        },
        other => panic!("Expected Api error, got: {other:?}"),
    }
}

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_unsuccessful_lookup_is_quiet_at_warn_level() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(404).set_body_json(not_found_response()),
    )
    .await;

    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = create_test_client(&mock_server);
    let result = client.get_current("Atlantis").await;

    assert!(matches!(result, Err(WeatherError::Api { .. })));
    assert!(logs.contents().is_empty(), "unexpected log output: {}", logs.contents());
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_server_error_without_json_is_request_failure() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Lagos").await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(ref m)) if m.contains("500")),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn test_invalid_json_response() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Lagos").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn test_missing_cloud_block_is_parse_error() {
    let mock_server = MockServer::start().await;

    setup_weather_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "main": { "temp": 20.0 },
            "name": "Lagos",
            "cod": 200
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Lagos").await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

// ============================================================================
// Input validation scenarios
// ============================================================================

#[tokio::test]
async fn test_empty_location_fails_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("   ").await;

    assert!(
        matches!(result, Err(WeatherError::EmptyLocation)),
        "Expected EmptyLocation, got: {result:?}"
    );
}

// ============================================================================
// Query parameter verification
// ============================================================================

#[tokio::test]
async fn test_request_contains_correct_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Port Harcourt"))
        .and(query_param("appid", TEST_KEY))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.get_current("Port Harcourt").await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_request_error_does_not_leak_api_key() {
    // Nothing listens on this port
    let config = WeatherConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: Some(SecretString::from(TEST_KEY.to_string())),
        timeout_secs: 2,
    };
    let client = OpenWeatherMapClient::new(&config).unwrap();
    let err = client.get_current("Lagos").await.unwrap_err();

    assert!(matches!(err, WeatherError::RequestFailed(_)));
    assert!(!err.to_string().contains(TEST_KEY));
}
