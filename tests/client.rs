//
//  graph-client
//  tests/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use graph_client::api::models::places::{Place, ROOM_TYPE};
use graph_client::api::{ApiError, GraphClient, Payload, QueryOptions};
use graph_client::auth::AuthCredential;
use mockito::Matcher;
use serde_json::json;

fn client(server: &mockito::Server) -> GraphClient {
    GraphClient::new(&server.url())
        .unwrap()
        .with_auth(AuthCredential::bearer("test-token"))
}

#[tokio::test]
async fn test_update_place_sends_patch_with_omitted_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/places/p1")
        .match_header("authorization", "Bearer test-token")
        .match_body(Matcher::Json(json!({
            "@odata.type": "#microsoft.graph.room",
            "capacity": 12
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"p1","capacity":12}"#)
        .create_async()
        .await;

    let place = Place {
        odata_type: Some(ROOM_TYPE.into()),
        capacity: Some(12),
        ..Default::default()
    };
    let payload = client(&server).places().update_place("p1", &place).await.unwrap();

    mock.assert_async().await;
    assert_eq!(payload.into_json().unwrap()["capacity"], 12);
}

#[tokio::test]
async fn test_message_count_returns_plain_number() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/users/u1/messages/$count")
        .match_query(Matcher::UrlEncoded("$search".into(), "foo".into()))
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("7")
        .create_async()
        .await;

    let payload = client(&server)
        .user_mail()
        .get_message_count("u1", &QueryOptions::new().search("foo"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(payload.count().unwrap(), 7);
}

#[tokio::test]
async fn test_not_found_carries_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/u1/calendars/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":{"code":"ErrorItemNotFound"}}"#)
        .create_async()
        .await;

    let err = client(&server)
        .user_calendar()
        .get_calendar("u1", "missing", &QueryOptions::new())
        .await
        .unwrap_err();

    assert!(err.body_text().unwrap().contains("ErrorItemNotFound"));
    match err {
        ApiError::HttpStatus { status, .. } => assert_eq!(status, 404),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_message_content_is_raw_bytes() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/users/u1/messages/m1/$value")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("From: a@contoso.com\r\n\r\nhi")
        .create_async()
        .await;

    let payload = client(&server)
        .user_mail()
        .get_message_content("u1", "m1")
        .await
        .unwrap();

    assert_eq!(
        payload.as_bytes(),
        Some("From: a@contoso.com\r\n\r\nhi".as_bytes())
    );
}

#[tokio::test]
async fn test_upload_sends_octet_stream() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/users/u1/messages/m1/$value")
        .match_header("content-type", "application/octet-stream")
        .match_body("MIME")
        .with_status(204)
        .create_async()
        .await;

    let payload = client(&server)
        .user_mail()
        .update_message_content("u1", "m1", b"MIME".to_vec())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(payload, Payload::Empty);
}

#[tokio::test]
async fn test_delete_returns_empty() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/places/p1")
        .with_status(204)
        .create_async()
        .await;

    let payload = client(&server).places().delete_place("p1").await.unwrap();

    mock.assert_async().await;
    assert!(payload.is_empty());
}

#[tokio::test]
async fn test_blank_id_fails_before_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("DELETE", Matcher::Any).expect(0).create_async().await;

    let err = client(&server).places().delete_place("").await.unwrap_err();

    assert!(matches!(err, ApiError::MissingParameter { ref name } if name == "place_id"));
    mock.assert_async().await;
}
