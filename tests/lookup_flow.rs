mod common;

use chrono::NaiveDate;
use common::{FEB_12_21H, current_payload, forecast_payload};
use weather_lookup::data::{LookupError, openweather::WeatherClient};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const KEY: &str = "test-key";

async fn mount_current(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Oslo"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", KEY))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn mount_forecast(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Oslo"))
        .and(query_param("cnt", "40"))
        .and(query_param("units", "metric"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> WeatherClient {
    WeatherClient::with_base_url(server.uri(), KEY)
}

#[tokio::test]
async fn successful_lookup_groups_the_next_five_days() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(200).set_body_json(current_payload("Oslo", 0)),
    )
    .await;
    mount_forecast(
        &server,
        ResponseTemplate::new(200).set_body_json(forecast_payload(FEB_12_21H, 40, 0)),
    )
    .await;

    let report = client(&server).lookup("Oslo").await.expect("report");

    assert_eq!(report.current.display_name(), "Oslo, NO");
    assert_eq!(report.current.wind_gust, Some(9.4));
    assert_eq!(report.current.visibility_m, Some(7_000.0));
    assert_eq!(report.current.condition.icon, "13d");

    let dates: Vec<NaiveDate> = report.days.iter().map(|d| d.date).collect();
    let expected: Vec<NaiveDate> = (13..=17)
        .map(|day| NaiveDate::from_ymd_opt(2026, 2, day).unwrap())
        .collect();
    assert_eq!(dates, expected);

    let first = &report.days[0];
    assert!((first.temperature.max - 8.0).abs() < f32::EPSILON);
    assert!((first.temperature.min - 1.0).abs() < f32::EPSILON);
    assert_eq!(first.precipitation_chance, 30);
    assert_eq!(first.humidity, 75);
}

#[tokio::test]
async fn city_offset_moves_the_day_boundaries() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(200).set_body_json(current_payload("Oslo", 10_800)),
    )
    .await;
    mount_forecast(
        &server,
        ResponseTemplate::new(200).set_body_json(forecast_payload(FEB_12_21H, 40, 10_800)),
    )
    .await;

    let report = client(&server).lookup("Oslo").await.expect("report");

    assert_eq!(report.utc_offset.local_minus_utc(), 10_800);
    assert_eq!(report.days.len(), 4);
    assert_eq!(
        report.days[0].date,
        NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
    );
}

#[tokio::test]
async fn unknown_city_maps_to_not_found() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
    )
    .await;
    mount_forecast(
        &server,
        ResponseTemplate::new(200).set_body_json(forecast_payload(FEB_12_21H, 40, 0)),
    )
    .await;

    let err = client(&server).lookup("Oslo").await.expect_err("lookup should fail");
    assert_eq!(err, LookupError::NotFound);
    assert_eq!(err.to_string(), "City not found. Try a different spelling.");
}

#[tokio::test]
async fn rejected_key_maps_to_unauthorized() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(401)).await;
    mount_forecast(&server, ResponseTemplate::new(401)).await;

    let err = client(&server).lookup("Oslo").await.expect_err("lookup should fail");
    assert_eq!(err, LookupError::Unauthorized);
}

#[tokio::test]
async fn server_errors_are_unspecified() {
    let server = MockServer::start().await;
    mount_current(&server, ResponseTemplate::new(500)).await;
    mount_forecast(&server, ResponseTemplate::new(500)).await;

    let err = client(&server).lookup("Oslo").await.expect_err("lookup should fail");
    assert!(matches!(err, LookupError::Unspecified(_)));
    assert_eq!(err.to_string(), "Something went wrong. Please try again.");
}

#[tokio::test]
async fn malformed_payload_is_unspecified() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(200).set_body_raw("not json", "application/json"),
    )
    .await;
    mount_forecast(
        &server,
        ResponseTemplate::new(200).set_body_json(forecast_payload(FEB_12_21H, 40, 0)),
    )
    .await;

    let err = client(&server).lookup("Oslo").await.expect_err("lookup should fail");
    assert!(matches!(err, LookupError::Unspecified(_)));
}

#[tokio::test]
async fn forecast_failure_discards_current_conditions() {
    let server = MockServer::start().await;
    mount_current(
        &server,
        ResponseTemplate::new(200).set_body_json(current_payload("Oslo", 0)),
    )
    .await;
    mount_forecast(&server, ResponseTemplate::new(503)).await;

    let err = client(&server).lookup("Oslo").await.expect_err("lookup should fail");
    assert!(matches!(err, LookupError::Unspecified(_)));
}
