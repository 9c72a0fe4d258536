// tests/resolve_test.rs

mod common;

use common::{config_for, users};
use serde_json::json;
use soundcloud_filter::{ApiError, Result, SoundcloudClient, filter};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn resolves_profile_url_to_record() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resolve"))
        .and(query_param("url", format!("{}/gloomweaver777", server.uri())))
        .and(query_param("client_id", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 98765,
            "kind": "user",
            "permalink": "gloomweaver777",
            "full_name": "Gloom Weaver",
            "city": "Tbilisi",
            "country_code": "GE",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SoundcloudClient::with_config(config_for(&server, Some("abc")))?;
    let user = client.resolve_user("gloomweaver777").await?;

    assert_eq!(user.id(), Some(98765));
    assert_eq!(user.permalink(), Some("gloomweaver777"));
    assert_eq!(user.location().as_deref(), Some("Tbilisi, GE"));
    assert_eq!(user.get("kind"), Some(&json!("user")));
    Ok(())
}

#[tokio::test]
async fn unknown_handle_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = SoundcloudClient::with_config(config_for(&server, Some("abc"))).unwrap();
    match client.resolve_user("nobody-here").await {
        Err(ApiError::NotFound(handle)) => assert_eq!(handle, "nobody-here"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn rejected_credential_is_a_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = SoundcloudClient::with_config(config_for(&server, Some("stale"))).unwrap();
    let err = client.resolve_user("someone").await.unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
}

#[tokio::test]
async fn credential_failure_stops_before_resolving() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
        .expect(0)
        .mount(&server)
        .await;

    let client = SoundcloudClient::with_config(config_for(&server, None)).unwrap();
    let err = client.get_followings_by_handle("someone").await.unwrap_err();
    assert!(err.is_credential());
}

#[tokio::test]
async fn followings_by_handle_uses_resolved_id() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 42 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/42/followings"))
        .and(query_param("limit", "200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection": users(0..6),
            "next_href": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SoundcloudClient::with_config(config_for(&server, Some("abc")))?;
    let followings = client.get_followings_by_handle("someone").await?;
    assert_eq!(followings.len(), 6);

    // Even ids carry a city in the fixture.
    let berliners = filter::filter_by_location(&followings, "berlin");
    let ids: Vec<u64> = berliners.iter().filter_map(|u| u.id()).collect();
    assert_eq!(ids, vec![0, 2, 4]);
    Ok(())
}

#[tokio::test]
async fn resolved_record_without_id_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/resolve"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "kind": "track" })))
        .mount(&server)
        .await;

    let client = SoundcloudClient::with_config(config_for(&server, Some("abc"))).unwrap();
    assert!(matches!(
        client.get_followings_by_handle("someone").await,
        Err(ApiError::MissingField("id"))
    ));
}
