//! Directory client tests against a local wiremock server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::core::directory::models::Postcode;
use crate::core::directory::{format_dob, DirectoryError, EmployeeSource, RandomUserClient};
use crate::tests::common::randomuser_body;

fn client_for(server: &MockServer) -> RandomUserClient {
    RandomUserClient::new(format!("{}/api/", server.uri()), 12, "US")
}

#[tokio::test]
async fn test_fetch_sends_results_and_nat() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("results", "12"))
        .and(query_param("nat", "US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(randomuser_body(12)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = client_for(&mock_server).fetch_employees().await.unwrap();
    assert_eq!(records.len(), 12);
}

#[tokio::test]
async fn test_fetch_decodes_record_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(randomuser_body(2)))
        .mount(&mock_server)
        .await;

    let records = client_for(&mock_server).fetch_employees().await.unwrap();
    let first = &records[0];
    assert_eq!(first.id(), "uuid-0");
    assert_eq!(first.full_name(), "First0 Nichols");
    assert_eq!(first.city_state(), "Billings, Michigan");
    assert_eq!(first.location.postcode, Postcode::Number(63104));
    assert_eq!(
        first.street_address(),
        "8929 Valwood Pkwy, Billings, Michigan, 63104"
    );
    assert_eq!(format_dob(&first.dob.date), "03/08/1992");
    assert_eq!(records[1].id(), "uuid-1");
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fetch_employees().await.unwrap_err();
    assert!(matches!(err, DirectoryError::Status(500)));
}

#[tokio::test]
async fn test_non_json_body_maps_to_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fetch_employees().await.unwrap_err();
    assert!(matches!(err, DirectoryError::Decode(_)));
}

#[tokio::test]
async fn test_missing_results_maps_to_decode() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": "Uh oh" })),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fetch_employees().await.unwrap_err();
    assert!(matches!(err, DirectoryError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_host_maps_to_network() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = RandomUserClient::new(format!("http://{addr}/api/"), 12, "US")
        .fetch_employees()
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::Network(_)), "got {err:?}");
}

#[tokio::test]
async fn test_malformed_record_does_not_sink_payload() {
    let mock_server = MockServer::start().await;

    let mut body = randomuser_body(3);
    body["results"][1] = serde_json::json!({
        "name": { "first": "Broken", "last": null },
        "location": { "street": { "number": "12", "name": null }, "postcode": null },
        "login": { "uuid": "uuid-broken" },
        "dob": { "date": null },
        "email": null,
        "picture": null
    });
    body["results"][2] = serde_json::Value::Null;

    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let records = client_for(&mock_server).fetch_employees().await.unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].full_name(), "First0 Nichols");

    let broken = &records[1];
    assert_eq!(broken.id(), "uuid-broken");
    assert_eq!(broken.full_name(), "Broken ");
    assert_eq!(broken.email, "");
    assert_eq!(format_dob(&broken.dob.date), "");
    assert_eq!(broken.location.postcode.to_string(), "");

    assert_eq!(records[2].id(), "");
}
