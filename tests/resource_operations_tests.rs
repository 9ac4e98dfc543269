//! Resource group operations against a mock ARM endpoint

mod common;

use azure_nsg_sample::resources::{AzureResourceOperations, ResourceGroup, ResourceOperations};
use azure_nsg_sample::SampleError;
use common::{group_path, test_client, GROUP, TOKEN};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_create_resource_group_sends_location_with_bearer_token() {
    let server = MockServer::start_async().await;
    let put = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path(group_path())
                .query_param("api-version", "2021-04-01")
                .header("authorization", format!("Bearer {TOKEN}").as_str())
                .json_body(json!({ "location": "westus" }));
            then.status(201).json_body(json!({
                "id": group_path(),
                "name": GROUP,
                "type": "Microsoft.Resources/resourceGroups",
                "location": "westus",
                "properties": { "provisioningState": "Succeeded" }
            }));
        })
        .await;

    let ops = AzureResourceOperations::new(test_client(&server.base_url()));
    let group = ops
        .create_or_update_resource_group(GROUP, &ResourceGroup::new("westus"))
        .await
        .unwrap();

    put.assert_async().await;
    assert_eq!(group.id, group_path());
    assert_eq!(group.name, GROUP);
    assert_eq!(group.provisioning_state(), Some("Succeeded"));
}

#[tokio::test]
async fn test_authorization_failure_is_not_retried() {
    let server = MockServer::start_async().await;
    let put = server
        .mock_async(|when, then| {
            when.method(PUT).path(group_path());
            then.status(403).json_body(json!({
                "error": {
                    "code": "AuthorizationFailed",
                    "message": "The client does not have authorization to perform action"
                }
            }));
        })
        .await;

    let ops = AzureResourceOperations::new(test_client(&server.base_url()));
    let result = ops
        .create_or_update_resource_group(GROUP, &ResourceGroup::new("westus"))
        .await;

    match result {
        Err(SampleError::AzureApiError { status, code, .. }) => {
            assert_eq!(status, 403);
            assert_eq!(code.as_deref(), Some("AuthorizationFailed"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
    put.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_error_without_body_uses_status_reason() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path(group_path());
            then.status(403);
        })
        .await;

    let ops = AzureResourceOperations::new(test_client(&server.base_url()));
    let result = ops
        .create_or_update_resource_group(GROUP, &ResourceGroup::new("westus"))
        .await;

    match result {
        Err(SampleError::AzureApiError { status, code, message }) => {
            assert_eq!(status, 403);
            assert!(code.is_none());
            assert_eq!(message, "Forbidden");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_service_unavailable_is_retried() {
    let server = MockServer::start_async().await;
    let put = server
        .mock_async(|when, then| {
            when.method(PUT).path(group_path());
            then.status(503).body("Service Unavailable");
        })
        .await;

    let ops = AzureResourceOperations::new(test_client(&server.base_url()));
    let result = ops
        .create_or_update_resource_group(GROUP, &ResourceGroup::new("westus"))
        .await;

    assert!(matches!(result, Err(SampleError::AzureApiError { status: 503, .. })));
    // initial attempt plus two retries
    put.assert_hits_async(3).await;
}

#[tokio::test]
async fn test_get_missing_resource_group() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(group_path());
            then.status(404).json_body(json!({
                "error": { "code": "ResourceGroupNotFound", "message": "not found" }
            }));
        })
        .await;

    let ops = AzureResourceOperations::new(test_client(&server.base_url()));
    match ops.get_resource_group(GROUP).await {
        Err(SampleError::ResourceNotFound { resource_type, name }) => {
            assert_eq!(resource_type, "resourceGroups");
            assert_eq!(name, GROUP);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
