use docledger_registry::{KeyMaterialResolver, RegistryClient, RegistryConfig, RegistryError};
use docledger_types::{AccountAddress, TokenId};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver_for(server: &MockServer) -> KeyMaterialResolver {
    let client = RegistryClient::new(RegistryConfig {
        api_base_url: server.uri(),
        request_timeout_secs: 5,
    });
    KeyMaterialResolver::new(Arc::new(client))
}

fn requester() -> AccountAddress {
    AccountAddress::new("0xA11CE00000000000000000000000000000000001")
}

async fn mount_owner(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/registry/files/7/owner"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "owner": "0xb0b" })),
        )
        .mount(server)
        .await;
}

async fn mount_key(server: &MockServer, key: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/registry/files/7/key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "key": key })))
        .mount(server)
        .await;
}

async fn mount_iv(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/registry/files/7/iv"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "iv": "cd".repeat(16) })),
        )
        .mount(server)
        .await;
}

async fn mount_mime(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/registry/files/7/mime"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "mime": "image/png" })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn resolve_normalizes_prefixed_key_and_bare_iv() {
    let server = MockServer::start().await;
    mount_owner(&server).await;
    mount_key(&server, serde_json::json!(format!("0x{}", "ab".repeat(32)))).await;
    mount_iv(&server).await;
    mount_mime(&server).await;

    let resolved = resolver_for(&server)
        .resolve(TokenId(7), &requester())
        .await
        .unwrap();

    assert_eq!(resolved.mime, "image/png");
    assert_eq!(resolved.material.key_hex(), "ab".repeat(32));
    assert_eq!(resolved.material.iv_hex(), "cd".repeat(16));
}

#[tokio::test]
async fn denied_key_fails_whole_resolution() {
    let server = MockServer::start().await;
    mount_owner(&server).await;
    mount_iv(&server).await;
    mount_mime(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/registry/files/7/key"))
        .respond_with(ResponseTemplate::new(403).set_body_string("license expired"))
        .mount(&server)
        .await;

    let err = resolver_for(&server)
        .resolve(TokenId(7), &requester())
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::AccessDenied(_)));
}

#[tokio::test]
async fn failed_mime_lookup_is_never_defaulted() {
    let server = MockServer::start().await;
    mount_owner(&server).await;
    mount_key(&server, serde_json::json!("ab".repeat(32))).await;
    mount_iv(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/registry/files/7/mime"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    // Key and IV both succeeded; resolution must still fail rather than
    // guess a MIME type.
    let err = resolver_for(&server)
        .resolve(TokenId(7), &requester())
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Unavailable(_)));
}

#[tokio::test]
async fn receipt_shaped_key_fails_resolution_as_malformed() {
    let server = MockServer::start().await;
    mount_owner(&server).await;
    mount_key(
        &server,
        serde_json::json!({ "tx_hash": "0xfeed", "data": "0xabcd" }),
    )
    .await;
    mount_iv(&server).await;
    mount_mime(&server).await;

    let err = resolver_for(&server)
        .resolve(TokenId(7), &requester())
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::MalformedResponse(_)));
}

#[tokio::test]
async fn mis_sized_key_hex_is_malformed() {
    let server = MockServer::start().await;
    mount_owner(&server).await;
    mount_key(&server, serde_json::json!("abcd")).await;
    mount_iv(&server).await;
    mount_mime(&server).await;

    let err = resolver_for(&server)
        .resolve(TokenId(7), &requester())
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::MalformedResponse(_)));
}

#[tokio::test]
async fn unknown_token_owner_lookup_fails_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/registry/files/7/owner"))
        .respond_with(ResponseTemplate::new(404).set_body_string("token 7 not registered"))
        .mount(&server)
        .await;

    let err = resolver_for(&server)
        .resolve(TokenId(7), &requester())
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}
