//! Integration tests for ttrest-rs.
//!
//! These tests drive the full client stack - token exchange, header
//! decoration, request identifiers, and pagination - against a local gateway
//! stub, so they run offline and can count every call the client makes.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use ttrest_rs::{ClientConfig, Credentials, Environment, Error, TTRestClient};

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Shared state of the gateway stub, recording everything the client sends.
#[derive(Default)]
struct GatewayState {
    token_calls: AtomicUsize,
    data_calls: AtomicUsize,
    fail_token: AtomicBool,
    fail_data: AtomicBool,
    /// Scripted pages served by the accounts endpoint, first to last.
    pages: Mutex<Vec<Value>>,
    token_environments: Mutex<Vec<String>>,
    token_grants: Mutex<Vec<HashMap<String, String>>>,
    seen_api_keys: Mutex<Vec<String>>,
    seen_authorization: Mutex<Vec<String>>,
    seen_request_ids: Mutex<Vec<String>>,
    seen_cursors: Mutex<Vec<Option<String>>>,
}

async fn token_handler(
    State(state): State<Arc<GatewayState>>,
    Path(env): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Form(grant): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.token_calls.fetch_add(1, Ordering::SeqCst);
    state.token_environments.lock().unwrap().push(env);
    state.token_grants.lock().unwrap().push(grant);

    if let Some(api_key) = headers.get("x-api-key") {
        state
            .seen_api_keys
            .lock()
            .unwrap()
            .push(api_key.to_str().unwrap().to_string());
    }
    if let Some(request_id) = params.get("requestId") {
        state
            .seen_request_ids
            .lock()
            .unwrap()
            .push(request_id.clone());
    }

    if state.fail_token.load(Ordering::SeqCst) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({
                "statusCode": "403",
                "status_desc": "invalid application key"
            })),
        );
    }

    // token_type is lowercase on the wire; the client capitalizes it.
    (
        StatusCode::OK,
        Json(json!({
            "token_type": "bearer",
            "access_token": "test-access-token"
        })),
    )
}

async fn accounts_handler(
    State(state): State<Arc<GatewayState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    state.data_calls.fetch_add(1, Ordering::SeqCst);

    if let Some(authorization) = headers.get("authorization") {
        state
            .seen_authorization
            .lock()
            .unwrap()
            .push(authorization.to_str().unwrap().to_string());
    }
    if let Some(api_key) = headers.get("x-api-key") {
        state
            .seen_api_keys
            .lock()
            .unwrap()
            .push(api_key.to_str().unwrap().to_string());
    }
    if let Some(request_id) = params.get("requestId") {
        state
            .seen_request_ids
            .lock()
            .unwrap()
            .push(request_id.clone());
    }
    state
        .seen_cursors
        .lock()
        .unwrap()
        .push(params.get("nextPageKey").cloned());

    if state.fail_data.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error_message": "internal gateway failure" })),
        );
    }

    let mut pages = state.pages.lock().unwrap();
    let page = if pages.is_empty() {
        json!({ "accounts": [], "lastPage": "true" })
    } else {
        pages.remove(0)
    };

    (StatusCode::OK, Json(page))
}

async fn spawn_gateway(state: Arc<GatewayState>) -> SocketAddr {
    let app = Router::new()
        .route("/ttid/:env/token", post(token_handler))
        .route("/ttaccount/:env/accounts", get(accounts_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub should bind");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

fn gateway_client(addr: SocketAddr) -> TTRestClient {
    init_logging();
    let credentials = Credentials::new(
        Environment::Uat,
        "test-api-key",
        "test-api-key:test-secret",
        "MyApp",
        "MyCompany",
    );
    let config = ClientConfig::default().with_gateway_url(format!("http://{addr}"));
    TTRestClient::with_config(credentials, config).expect("client should build")
}

#[tokio::test]
async fn test_token_acquired_lazily_and_cached() {
    let state = Arc::new(GatewayState::default());
    let addr = spawn_gateway(state.clone()).await;
    let client = gateway_client(addr);

    assert!(!client.authenticator().has_token().await);

    client.accounts().accounts(false, None).await.unwrap();
    client.accounts().accounts(false, None).await.unwrap();

    // One token exchange for two data calls.
    assert_eq!(state.token_calls.load(Ordering::SeqCst), 1);
    assert_eq!(state.data_calls.load(Ordering::SeqCst), 2);
    assert!(client.authenticator().has_token().await);

    // Both data calls carried the capitalized bearer token and the API key.
    let authorization = state.seen_authorization.lock().unwrap();
    assert_eq!(
        authorization.as_slice(),
        &["Bearer test-access-token", "Bearer test-access-token"]
    );
    let api_keys = state.seen_api_keys.lock().unwrap();
    assert!(api_keys.iter().all(|key| key == "test-api-key"));
}

#[tokio::test]
async fn test_token_exchange_wire_format() {
    let state = Arc::new(GatewayState::default());
    let addr = spawn_gateway(state.clone()).await;
    let client = gateway_client(addr);

    client.accounts().accounts(false, None).await.unwrap();

    let environments = state.token_environments.lock().unwrap();
    assert_eq!(environments.as_slice(), &["ext_uat_cert"]);

    let grants = state.token_grants.lock().unwrap();
    assert_eq!(grants.len(), 1);
    assert_eq!(grants[0].get("grant_type").unwrap(), "user_app");
    assert_eq!(grants[0].get("app_key").unwrap(), "test-api-key:test-secret");
}

#[tokio::test]
async fn test_every_call_carries_a_fresh_request_id() {
    let state = Arc::new(GatewayState::default());
    let addr = spawn_gateway(state.clone()).await;
    let client = gateway_client(addr);

    client.accounts().accounts(false, None).await.unwrap();
    client.accounts().accounts(false, None).await.unwrap();

    // One token call plus two data calls, each with its own identifier.
    let request_ids = state.seen_request_ids.lock().unwrap();
    assert_eq!(request_ids.len(), 3);

    for request_id in request_ids.iter() {
        let suffix = request_id
            .strip_prefix("MyApp-MyCompany--")
            .expect("request id should start with '{app}-{company}--'");
        assert!(uuid::Uuid::parse_str(suffix).is_ok(), "suffix should be a UUID");
    }

    let unique: std::collections::HashSet<_> = request_ids.iter().collect();
    assert_eq!(unique.len(), request_ids.len());
}

#[tokio::test]
async fn test_token_failure_is_fatal_to_the_calling_request() {
    let state = Arc::new(GatewayState::default());
    state.fail_token.store(true, Ordering::SeqCst);
    let addr = spawn_gateway(state.clone()).await;
    let client = gateway_client(addr);

    let err = client.accounts().accounts(false, None).await.unwrap_err();
    match err {
        Error::TokenAcquisition {
            status,
            description,
            ..
        } => {
            assert_eq!(status, 403);
            assert_eq!(description.as_deref(), Some("invalid application key"));
        }
        other => panic!("expected TokenAcquisition error, got {other:?}"),
    }

    // The data call never went out and nothing was cached.
    assert_eq!(state.data_calls.load(Ordering::SeqCst), 0);
    assert!(!client.authenticator().has_token().await);
}

#[tokio::test]
async fn test_failed_refresh_keeps_the_cached_token() {
    let state = Arc::new(GatewayState::default());
    let addr = spawn_gateway(state.clone()).await;
    let client = gateway_client(addr);

    client.accounts().accounts(false, None).await.unwrap();
    assert!(client.authenticator().has_token().await);

    state.fail_token.store(true, Ordering::SeqCst);
    let err = client.authenticator().refresh().await.unwrap_err();
    assert!(err.is_auth_error());

    // The earlier token survives the failed exchange and keeps working.
    assert!(client.authenticator().has_token().await);
    client.accounts().accounts(false, None).await.unwrap();
    assert_eq!(state.token_calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        state.seen_authorization.lock().unwrap().last().unwrap(),
        "Bearer test-access-token"
    );
}

#[tokio::test]
async fn test_non_200_data_call_is_a_request_error() {
    let state = Arc::new(GatewayState::default());
    state.fail_data.store(true, Ordering::SeqCst);
    let addr = spawn_gateway(state.clone()).await;
    let client = gateway_client(addr);

    let err = client.accounts().accounts(false, None).await.unwrap_err();
    match err {
        Error::Request {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal gateway failure");
        }
        other => panic!("expected Request error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_all_accounts_walks_the_cursor_chain() {
    let state = Arc::new(GatewayState::default());
    *state.pages.lock().unwrap() = vec![
        json!({
            "accounts": [{"accountId": 1}, {"accountId": 2}],
            "lastPage": "false",
            "nextPageKey": "page-2"
        }),
        json!({
            "accounts": [{"accountId": 3}],
            "lastPage": "true"
        }),
    ];
    let addr = spawn_gateway(state.clone()).await;
    let client = gateway_client(addr);

    let response = client.accounts().all_accounts(false).await.unwrap();

    assert_eq!(
        response["accounts"],
        json!([{"accountId": 1}, {"accountId": 2}, {"accountId": 3}])
    );
    assert_eq!(response["lastPage"], "true");

    assert_eq!(state.data_calls.load(Ordering::SeqCst), 2);
    let cursors = state.seen_cursors.lock().unwrap();
    assert_eq!(cursors.as_slice(), &[None, Some("page-2".to_string())]);
}

#[tokio::test]
async fn test_pagination_tolerates_a_missing_cursor() {
    let state = Arc::new(GatewayState::default());
    *state.pages.lock().unwrap() = vec![json!({
        "accounts": [{"accountId": 1}],
        "lastPage": "false"
    })];
    let addr = spawn_gateway(state.clone()).await;
    let client = gateway_client(addr);

    // lastPage says more data exists, but no cursor was issued: the partial
    // result comes back without an error after a single call.
    let response = client.accounts().all_accounts(false).await.unwrap();

    assert_eq!(response["accounts"], json!([{"accountId": 1}]));
    assert_eq!(state.data_calls.load(Ordering::SeqCst), 1);
}
