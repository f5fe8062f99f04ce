use crate::common::{mock_token, test_config};
use assert_json_diff::assert_json_eq;
use mockito::Server;
use mydex_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_get_country_sends_bearer_and_scope_header() {
    let mut server = Server::new_async().await;
    let token_mock = mock_token(&mut server, "country-token").await;
    let country_mock = server
        .mock("GET", "/mrd/countries/FR")
        .match_header("authorization", "Bearer country-token")
        .match_header("x-mrd-scopes", "countries")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"code":"FR","name":"France"}"#)
        .create_async()
        .await;

    let client = Client::new(test_config(&server.url(), "countries")).unwrap();
    let response = client.get_country("FR").await.unwrap();

    assert_json_eq!(
        response.json().cloned().unwrap(),
        json!({"code": "FR", "name": "France"})
    );
    token_mock.assert_async().await;
    country_mock.assert_async().await;
}

#[tokio::test]
async fn test_get_country_not_found() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, "country-token").await;
    server
        .mock("GET", "/mrd/countries/ZZ")
        .with_status(404)
        .with_body("Not Found")
        .create_async()
        .await;

    let client = Client::new(test_config(&server.url(), "countries")).unwrap();
    let error = client.get_country("ZZ").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Transport);
    assert_eq!(error.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn test_get_country_escapes_code_as_one_segment() {
    let mut server = Server::new_async().await;
    mock_token(&mut server, "country-token").await;
    let escaped_mock = server
        .mock("GET", "/mrd/countries/FR%3Fevil=1")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let injected_mock = server
        .mock("GET", "/mrd/countries/FR")
        .match_query(mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = Client::new(test_config(&server.url(), "countries")).unwrap();
    client.get_country("FR?evil=1").await.unwrap();

    escaped_mock.assert_async().await;
    injected_mock.assert_async().await;
}

#[tokio::test]
async fn test_get_country_rejects_dot_segments() {
    let server = Server::new_async().await;
    let client = Client::new(test_config(&server.url(), "countries")).unwrap();

    let error = client.get_country("..").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Usage);
}
