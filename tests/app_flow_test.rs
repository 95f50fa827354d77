//! End-to-end flow tests over the mock HTTP adapter.
//!
//! Drive the App the way the event loop does: spawn a fetch, receive the
//! resulting message, apply it, and assert on the view state.

use std::sync::Arc;

use bytes::Bytes;

use atlas::adapters::mock::{MockHttpClient, MockResponse};
use atlas::api::ApiConfig;
use atlas::app::{App, AppMessage, Screen};
use atlas::traits::{HttpError, Response};
use atlas::view_state::{ListPhase, WeatherPhase, TRANSPORT_FAILURE_MESSAGE};

const COUNTRIES_BODY: &str = r#"[
    { "name": { "common": "Norway" }, "capital": ["Oslo"], "region": "Europe",
      "population": 5379475, "flags": { "png": "https://flagcdn.com/w320/no.png" }, "cca3": "NOR" },
    { "name": { "common": "Peru" }, "capital": ["Lima"], "region": "Americas",
      "population": 32971854, "flags": { "png": "https://flagcdn.com/w320/pe.png" }, "cca3": "PER" }
]"#;

const WEATHER_BODY: &str = r#"{
    "cod": 200,
    "main": { "temp": 11.5 },
    "weather": [{ "description": "light rain" }],
    "wind": { "speed": 4.6 },
    "clouds": { "all": 75 }
}"#;

/// Mock transport preloaded for both endpoints of the default config.
fn mock_transport() -> MockHttpClient {
    let mock = MockHttpClient::new();
    mock.set_response(
        "https://restcountries.com/v3.1/all",
        MockResponse::Success(Response::new(200, Bytes::from(COUNTRIES_BODY))),
    );
    // Prefix match covers the query string
    mock.set_response(
        "https://api.openweathermap.org/data/2.5/weather",
        MockResponse::Success(Response::new(200, Bytes::from(WEATHER_BODY))),
    );
    mock
}

async fn pump_one(app: &mut App, rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppMessage>) {
    let message = rx.recv().await.expect("a fetch message");
    app.handle_message(message);
}

#[tokio::test]
async fn list_loads_then_weather_opens_for_the_selected_country() {
    let mock = mock_transport();
    let mut app = App::new(ApiConfig::default(), Arc::new(mock.clone()));
    let mut rx = app.message_rx.take().unwrap();

    app.spawn_fetch_countries();
    assert_eq!(*app.list.phase(), ListPhase::Loading);
    pump_one(&mut app, &mut rx).await;

    assert_eq!(*app.list.phase(), ListPhase::Ready);
    assert_eq!(app.list.filtered().len(), 2);

    // Select the second country and open its weather screen
    app.list.move_selection_down();
    app.open_selected_country();
    assert_eq!(app.screen, Screen::Weather);
    assert!(app.weather.is_loading());
    assert_eq!(app.weather.country(), "Peru");

    pump_one(&mut app, &mut rx).await;
    assert_eq!(app.weather.phase(), WeatherPhase::Success);
    assert_eq!(app.weather.record().unwrap().temperature, 11.5);
    assert!(app.weather.error().is_none());
}

#[tokio::test]
async fn unit_toggle_does_not_refetch_or_change_values() {
    let mock = mock_transport();
    let mut app = App::new(ApiConfig::default(), Arc::new(mock.clone()));
    let mut rx = app.message_rx.take().unwrap();

    app.spawn_fetch_countries();
    pump_one(&mut app, &mut rx).await;
    app.open_selected_country();
    pump_one(&mut app, &mut rx).await;
    assert_eq!(app.weather.phase(), WeatherPhase::Success);

    let requests_before = mock.get_requests().len();
    app.weather.toggle_unit();
    app.weather.toggle_unit();

    assert_eq!(mock.get_requests().len(), requests_before);
    assert_eq!(app.weather.record().unwrap().temperature, 11.5);
    assert_eq!(app.weather.phase(), WeatherPhase::Success);
}

#[tokio::test]
async fn list_fetch_failure_surfaces_and_retry_refetches() {
    let mock = MockHttpClient::new();
    mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
        "refused".to_string(),
    )));

    let mut app = App::new(ApiConfig::default(), Arc::new(mock.clone()));
    let mut rx = app.message_rx.take().unwrap();

    app.spawn_fetch_countries();
    pump_one(&mut app, &mut rx).await;

    match app.list.phase() {
        ListPhase::Failed(message) => assert_eq!(message.as_str(), TRANSPORT_FAILURE_MESSAGE),
        other => panic!("expected Failed, got {:?}", other),
    }

    // Point the mock at a working dataset and retry
    mock.set_response(
        "https://restcountries.com/v3.1/all",
        MockResponse::Success(Response::new(200, Bytes::from(COUNTRIES_BODY))),
    );
    app.spawn_fetch_countries();
    assert_eq!(*app.list.phase(), ListPhase::Loading);
    pump_one(&mut app, &mut rx).await;
    assert_eq!(*app.list.phase(), ListPhase::Ready);
}

#[tokio::test]
async fn weather_api_error_reaches_the_view_with_the_service_message() {
    let mock = MockHttpClient::new();
    mock.set_response(
        "https://restcountries.com/v3.1/all",
        MockResponse::Success(Response::new(200, Bytes::from(COUNTRIES_BODY))),
    );
    mock.set_response(
        "https://api.openweathermap.org/data/2.5/weather",
        MockResponse::Success(Response::new(
            404,
            Bytes::from(r#"{ "cod": "404", "message": "city not found" }"#),
        )),
    );

    let mut app = App::new(ApiConfig::default(), Arc::new(mock.clone()));
    let mut rx = app.message_rx.take().unwrap();

    app.spawn_fetch_countries();
    pump_one(&mut app, &mut rx).await;
    app.open_selected_country();
    pump_one(&mut app, &mut rx).await;

    assert_eq!(app.weather.phase(), WeatherPhase::Failure);
    assert_eq!(app.weather.error(), Some("city not found"));
    assert!(app.weather.record().is_none());
    assert!(!app.weather.is_loading());
}
