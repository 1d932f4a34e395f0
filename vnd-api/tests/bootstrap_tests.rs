// End-to-end flow through the env-built server and in-memory storage.
use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serial_test::serial;
use std::collections::HashSet;
use tower::ServiceExt;
use vnd_api::build_api_server_from_env;
use vnd_models::Vendor;

async fn body_json<T: serde::de::DeserializeOwned>(
    response: axum::response::Response,
) -> Result<T> {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&body)?)
}

#[tokio::test]
#[serial]
async fn create_patch_and_fetch() -> Result<()> {
    unsafe {
        std::env::set_var("STORAGE_TYPE", "memory");
    }
    let app = build_api_server_from_env().await?.into_router();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/vendors/")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"firstName":"Fred","lastName":"Flinstone"}"#))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Vec<Vendor> = body_json(response).await?;
    let id = created[0].id.clone().expect("id assigned");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri(format!("/api/v1/vendors/{}", id))
                .header("content-type", "application/json")
                .body(Body::from(r#"{"lastName":"Rubble"}"#))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/vendors/{}", id))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Vendor = body_json(response).await?;
    assert_eq!(fetched.first_name.as_deref(), Some("Fred"));
    assert_eq!(fetched.last_name.as_deref(), Some("Rubble"));
    assert_eq!(fetched.id.as_deref(), Some(id.as_str()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/vendors")
                .body(Body::empty())?,
        )
        .await?;
    let all: Vec<Vendor> = body_json(response).await?;
    assert_eq!(all.len(), 1);
    Ok(())
}

#[tokio::test]
#[serial]
async fn array_create_assigns_distinct_ids() -> Result<()> {
    unsafe {
        std::env::set_var("STORAGE_TYPE", "memory");
    }
    let app = build_api_server_from_env().await?.into_router();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/vendors")
                .header("content-type", "application/json")
                .body(Body::from(
                    r#"[{"firstName":"Fred"},{"firstName":"Barney"},{"firstName":"Wilma"}]"#,
                ))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Vec<Vendor> = body_json(response).await?;
    assert_eq!(created.len(), 3);

    let ids: HashSet<String> =
        created.iter().filter_map(|v| v.id.clone()).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| !id.is_empty()));

    for vendor in &created {
        let id = vendor.id.as_deref().expect("id assigned");
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/v1/vendors/{}", id))
                    .body(Body::empty())?,
            )
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let fetched: Vendor = body_json(response).await?;
        assert_eq!(&fetched, vendor);
    }
    Ok(())
}
