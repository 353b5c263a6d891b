//! Integration tests for the HTTP store client against a local stub
//! document store.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use bucketlist::store::{DestinationStore, HttpStore};
use bucketlist::{Config, Error, Session};

/// Shared state of the stub store.
#[derive(Clone)]
struct StubState {
    docs: Arc<Mutex<Vec<Value>>>,
    /// Whether the stub applies the ordering query parameters.
    honor_ordering: bool,
}

impl StubState {
    fn new(honor_ordering: bool) -> Self {
        Self {
            docs: Arc::new(Mutex::new(Vec::new())),
            honor_ordering,
        }
    }

    async fn seed(&self, docs: Vec<Value>) {
        *self.docs.lock().await = docs;
    }
}

fn date_created(doc: &Value) -> DateTime<Utc> {
    let raw = doc["dateCreated"].as_str().expect("dateCreated present");
    DateTime::parse_from_rfc3339(raw)
        .expect("valid RFC 3339")
        .with_timezone(&Utc)
}

async fn list_documents(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    let mut docs = state.docs.lock().await.clone();

    let ordered = state.honor_ordering
        && params.get("order_by").map(String::as_str) == Some("date_created")
        && params.get("direction").map(String::as_str) == Some("desc");
    if ordered {
        docs.sort_by_key(|doc| std::cmp::Reverse(date_created(doc)));
    }

    Json(docs)
}

async fn create_document(
    State(state): State<StubState>,
    Json(mut doc): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut docs = state.docs.lock().await;
    let id = format!("doc-{}", docs.len() + 1);
    doc["id"] = json!(id);
    docs.push(doc);
    (StatusCode::CREATED, Json(json!({ "id": id })))
}

async fn spawn_stub(state: StubState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("local addr");

    let app = Router::new()
        .route(
            "/collections/destinations/documents",
            get(list_documents).post(create_document),
        )
        .with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

async fn spawn_failing_stub() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("local addr");

    let app = Router::new().route(
        "/collections/destinations/documents",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "store exploded") })
            .post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "store exploded") }),
    );

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

fn store_for(base_url: &str) -> HttpStore {
    let mut config = Config::default();
    config.store.base_url = base_url.to_string();
    HttpStore::new(&config).expect("build store")
}

fn doc(name: &str, location: &str, description: &str, ts: DateTime<Utc>) -> Value {
    json!({
        "id": format!("seed-{name}"),
        "name": name,
        "location": location,
        "description": description,
        "dateCreated": ts.to_rfc3339(),
    })
}

#[tokio::test]
async fn fetch_all_empty_collection() {
    let base_url = spawn_stub(StubState::new(true)).await;
    let store = store_for(&base_url);

    let destinations = store.fetch_all().await.unwrap();
    assert!(destinations.is_empty());
}

#[tokio::test]
async fn fetch_all_orders_newest_first() {
    let state = StubState::new(true);
    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    state
        .seed(vec![
            doc("Older", "Portugal", "Lisbon trams", t1),
            doc("Newer", "Iceland", "Northern lights", t2),
        ])
        .await;

    let base_url = spawn_stub(state).await;
    let store = store_for(&base_url);

    let destinations = store.fetch_all().await.unwrap();
    let names: Vec<&str> = destinations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Newer", "Older"]);
}

#[tokio::test]
async fn fetch_all_keeps_store_native_order_when_unordered() {
    let state = StubState::new(false);
    let t1 = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap();
    state
        .seed(vec![
            doc("First", "Portugal", "Lisbon trams", t1),
            doc("Second", "Iceland", "Northern lights", t2),
        ])
        .await;

    let base_url = spawn_stub(state).await;
    let store = store_for(&base_url);

    // The client must not re-sort what the store returns.
    let destinations = store.fetch_all().await.unwrap();
    let names: Vec<&str> = destinations.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn create_writes_exactly_the_given_fields() {
    let state = StubState::new(true);
    let base_url = spawn_stub(state.clone()).await;
    let store = store_for(&base_url);

    let ack = store
        .create("Paris", "France", "Eiffel Tower")
        .await
        .unwrap();
    assert_eq!(ack.id.as_deref(), Some("doc-1"));

    let docs = state.docs.lock().await;
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["name"], "Paris");
    assert_eq!(docs[0]["location"], "France");
    assert_eq!(docs[0]["description"], "Eiffel Tower");
    // The client supplies a creation timestamp but no identifier.
    assert!(docs[0]["dateCreated"].is_string());
}

#[tokio::test]
async fn create_then_fetch_roundtrip() {
    let base_url = spawn_stub(StubState::new(true)).await;
    let store = store_for(&base_url);

    store
        .create("Paris", "France", "Eiffel Tower")
        .await
        .unwrap();

    let destinations = store.fetch_all().await.unwrap();
    assert_eq!(destinations.len(), 1);
    assert_eq!(destinations[0].name, "Paris");
    assert_eq!(destinations[0].location, "France");
    assert_eq!(destinations[0].description, "Eiffel Tower");
    assert!(destinations[0].id.is_some());
}

#[tokio::test]
async fn fetch_all_surfaces_store_failure() {
    let base_url = spawn_failing_stub().await;
    let store = store_for(&base_url);

    let err = store.fetch_all().await.unwrap_err();
    match err {
        Error::StoreStatus { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("store exploded"));
        }
        other => panic!("expected StoreStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn create_surfaces_store_failure() {
    let base_url = spawn_failing_stub().await;
    let store = store_for(&base_url);

    let err = store
        .create("Paris", "France", "Eiffel Tower")
        .await
        .unwrap_err();
    assert!(err.is_store());
}

#[tokio::test]
async fn create_with_empty_field_issues_no_write() {
    let state = StubState::new(true);
    let base_url = spawn_stub(state.clone()).await;
    let store = store_for(&base_url);

    let err = store.create("Paris", "", "Eiffel Tower").await.unwrap_err();
    assert!(err.is_validation());
    assert!(state.docs.lock().await.is_empty());
}

#[tokio::test]
async fn session_over_http_store() {
    let base_url = spawn_stub(StubState::new(true)).await;
    let session = Session::new(Box::new(store_for(&base_url)));

    session.add("Paris", "France", "Eiffel Tower").await.unwrap();
    session.add("Kyoto", "Japan", "Temples").await.unwrap();

    let destinations = session.destinations().await;
    assert_eq!(destinations.len(), 2);
    // Newest first.
    assert_eq!(destinations[0].name, "Kyoto");
    assert_eq!(destinations[1].name, "Paris");

    assert_eq!(
        session.share_text().await,
        "Kyoto, Japan, Temples\nParis, France, Eiffel Tower"
    );
}

#[tokio::test]
async fn session_refresh_failure_over_http() {
    let failing = spawn_failing_stub().await;
    let session = Session::new(Box::new(store_for(&failing)));

    assert!(session.refresh().await.unwrap_err().is_store());
    assert!(session.destinations().await.is_empty());
}
