//! Integration tests using mock HTTP server
//!
//! Tests the full flow: HTTP GET → raw response → image records, and the
//! pager following `images_links` across a real HTTP round trip.

use compute_images::http::{HttpClient, HttpClientConfig, Transport};
use compute_images::images::{extract_image, extract_images, ImagePage};
use compute_images::pagination::{Page, Pager};
use compute_images::{ClientSettings, ImageStatus, ImagesClient};
use futures::TryStreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn image(id: &str, name: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "created": "2024-03-01T10:00:00Z",
        "updated": "2024-03-01T10:05:00Z",
        "min_disk": 1,
        "min_ram": 512,
        "progress": 100,
        "status": status,
        "metadata": {"os_distro": name}
    })
}

fn images_client(server: &MockServer) -> ImagesClient {
    ClientSettings::new(format!("{}/v2.1", server.uri()))
        .with_token("test-token")
        .images_client()
        .unwrap()
}

/// Mounts a two-page listing; the second page has no next link
async fn mount_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v2.1/images/detail"))
        .and(query_param("marker", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [image("3", "ubuntu", "SAVING")],
            "images_links": [{"rel": "self", "href": format!("{}/v2.1/images/detail?marker=2", server.uri())}]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2.1/images/detail"))
        .and(header("X-Auth-Token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [image("1", "cirros", "ACTIVE"), image("2", "fedora", "ACTIVE")],
            "images_links": [{"rel": "next", "href": format!("{}/v2.1/images/detail?marker=2", server.uri())}]
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Entity Extraction
// ============================================================================

#[tokio::test]
async fn test_get_image_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.1/images/1"))
        .and(header("X-Auth-Token", "test-token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"image": image("1", "cirros", "ACTIVE")})),
        )
        .mount(&server)
        .await;

    let image = images_client(&server).get("1").await.unwrap();

    assert_eq!(image.id, "1");
    assert_eq!(image.name, "cirros");
    assert_eq!(image.min_ram, 512);
    assert_eq!(image.status, ImageStatus::Active);
    assert_eq!(
        image.created.map(|t| t.to_rfc3339()),
        Some("2024-03-01T10:00:00+00:00".to_string())
    );
}

#[tokio::test]
async fn test_raw_transport_then_extract() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/images/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"image":{"id":"7","name":"cirros","min_disk":0,"min_ram":0,"progress":100,"status":"ACTIVE"}}"#,
        ))
        .mount(&server)
        .await;

    let client = HttpClient::with_config(
        HttpClientConfig::builder().base_url(server.uri()).build(),
    )
    .unwrap();
    let raw = client.get("/images/7").await.unwrap();
    let image = extract_image(&raw).unwrap();

    assert_eq!(image.id, "7");
    assert!(image.metadata.is_empty());
}

#[tokio::test]
async fn test_get_image_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    let mut bad = image("1", "cirros", "ACTIVE");
    bad["progress"] = json!("abc");
    Mock::given(method("GET"))
        .and(path("/v2.1/images/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "image": bad })))
        .mount(&server)
        .await;

    let err = images_client(&server).get("1").await.unwrap_err();
    assert!(err.is_decode());
}

#[tokio::test]
async fn test_get_image_not_found_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.1/images/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "itemNotFound": {"code": 404, "message": "Image not found."}
        })))
        .mount(&server)
        .await;

    let err = images_client(&server).get("404").await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), Some(404));
}

// ============================================================================
// Page Walker
// ============================================================================

#[tokio::test]
async fn test_list_all_follows_next_link() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    let images = images_client(&server).list_all().await.unwrap();
    let names: Vec<&str> = images.iter().map(|i| i.name.as_str()).collect();

    assert_eq!(names, vec!["cirros", "fedora", "ubuntu"]);
    assert_eq!(images[2].status, ImageStatus::Saving);
}

#[tokio::test]
async fn test_pager_stream_over_http() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    let client = HttpClient::with_config(
        HttpClientConfig::builder().auth_token("test-token").build(),
    )
    .unwrap();
    let transport: Arc<dyn Transport> = Arc::new(client);
    let pager: Pager<ImagePage> =
        Pager::new(transport, format!("{}/v2.1/images/detail", server.uri()));

    let pages: Vec<ImagePage> = pager.into_stream().try_collect().await.unwrap();
    assert_eq!(pages.len(), 2);

    let sizes: Vec<usize> = pages
        .iter()
        .map(|p| extract_images(p).unwrap().len())
        .collect();
    assert_eq!(sizes, vec![2, 1]);
    assert_eq!(pages[1].next_page_url().unwrap(), None);
}

#[tokio::test]
async fn test_empty_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.1/images/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"images": []})))
        .mount(&server)
        .await;

    let client = images_client(&server);
    let mut pager = client.list().unwrap();
    let page = pager.next_page().await.unwrap().unwrap();

    assert!(page.is_empty().unwrap());
    assert!(pager.is_exhausted());
    assert!(client.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_pagination_stops_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2.1/images/detail"))
        .and(query_param("marker", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2.1/images/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [image("1", "cirros", "ACTIVE")],
            "images_links": [{"rel": "next", "href": format!("{}/v2.1/images/detail?marker=2", server.uri())}]
        })))
        .mount(&server)
        .await;

    let err = images_client(&server).list_all().await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_find_and_delete() {
    let server = MockServer::start().await;
    mount_listing(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/v2.1/images/3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = images_client(&server);
    let id = client.id_from_name("ubuntu").await.unwrap();
    assert_eq!(id, "3");

    client.delete(&id).await.unwrap();
}
