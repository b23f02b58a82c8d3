//! Runs whole seeding passes against an in-process fake backend that behaves
//! like the catalog API: `/health`, `GET|POST /books`, `DELETE /books/:id`.

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
    routing::{delete, get},
    Router,
};
use catalog_core::{RawBook, ValidationError};
use seed_tool::{
    AssumeYes, CatalogClient, Confirm, Credentials, SeedConfig, SeedError, SeedOptions,
    SeedOutcome, SeedReport, Seeder,
};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct BackendState {
    unhealthy: bool,
    existing: Vec<Value>,
    deleted: Vec<String>,
    created: Vec<Value>,
    authorization: Vec<Option<String>>,
    reject_title: Option<String>,
    list_status: Option<StatusCode>,
    reject_delete: bool,
}

type Backend = Arc<Mutex<BackendState>>;

async fn health(State(backend): State<Backend>) -> StatusCode {
    if backend.lock().unwrap().unhealthy {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

async fn list_books(State(backend): State<Backend>) -> (StatusCode, Json<Vec<Value>>) {
    let state = backend.lock().unwrap();
    (
        state.list_status.unwrap_or(StatusCode::OK),
        Json(state.existing.clone()),
    )
}

async fn delete_book(State(backend): State<Backend>, Path(id): Path<String>) -> StatusCode {
    let mut state = backend.lock().unwrap();
    if state.reject_delete {
        return StatusCode::NOT_FOUND;
    }
    state.deleted.push(id);
    StatusCode::NO_CONTENT
}

async fn create_book(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let mut state = backend.lock().unwrap();
    state.authorization.push(
        headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );

    if state.reject_title.as_deref() == body["title"].as_str() {
        return (StatusCode::BAD_REQUEST, "empty publisher".to_string());
    }

    state.created.push(body);
    (StatusCode::CREATED, format!("\"{}\"", state.created.len()))
}

async fn spawn_backend(state: BackendState) -> (String, Backend) {
    let backend: Backend = Arc::new(Mutex::new(state));
    let app = Router::new()
        .route("/health", get(health))
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", delete(delete_book))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), backend)
}

struct Answer(bool);

impl Confirm for Answer {
    fn confirm(&mut self, _question: &str) -> std::io::Result<bool> {
        Ok(self.0)
    }
}

fn seeder(url: &str, credentials: Option<Credentials>, confirm: Box<dyn Confirm + Send>) -> Seeder {
    let mut config = SeedConfig::new(url).unwrap();
    config.credentials = credentials;
    config.timeout_secs = 5;
    Seeder::new(CatalogClient::new(config).unwrap(), confirm)
}

fn books(values: Value) -> Vec<RawBook> {
    serde_json::from_value(values).unwrap()
}

fn catalog() -> Vec<RawBook> {
    books(json!([
        {
            "title": "Les flors del mal",
            "author": "Charles Baudelaire",
            "publisher": "Proa",
            "rate": "8",
            "kind": "poetry",
            "status": "read",
            "language": "ca",
        },
        {
            "title": "Ensayos",
            "author": "Michel de Montaigne",
            "publisher": "Acantilado",
            "status": "tobuy",
            "language": "es",
            "location": "desk",
        },
    ]))
}

#[tokio::test]
async fn seeds_books_in_order() {
    let (url, backend) = spawn_backend(BackendState::default()).await;

    let outcome = seeder(&url, None, Box::new(AssumeYes))
        .run(&catalog(), SeedOptions::default())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SeedOutcome::Completed(SeedReport {
            cleared: 0,
            uploaded: 2,
        })
    );

    let state = backend.lock().unwrap();
    assert_eq!(
        state.created,
        vec![
            json!({
                "title": "Les flors del mal",
                "author": "Charles Baudelaire",
                "publisher": "Proa",
                "rate": 8,
                "kind": 1,
                "status": 0,
                "language": "ca",
            }),
            json!({
                "title": "Ensayos",
                "author": "Michel de Montaigne",
                "publisher": "Acantilado",
                "rate": 0,
                "kind": 0,
                "status": 2,
                "language": "es",
                "location": "desk",
            }),
        ]
    );
    assert!(state.deleted.is_empty());
    assert_eq!(state.authorization, vec![None, None]);
}

#[tokio::test]
async fn reset_clears_existing_books_first() {
    let (url, backend) = spawn_backend(BackendState {
        existing: vec![
            json!({"id": "1f0e", "title": "old"}),
            json!({"id": null, "title": "ghost"}),
            json!({"id": "9a7b", "title": "older"}),
        ],
        ..Default::default()
    })
    .await;

    let outcome = seeder(&url, None, Box::new(AssumeYes))
        .run(&catalog(), SeedOptions { clear_existing: true })
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SeedOutcome::Completed(SeedReport {
            cleared: 2,
            uploaded: 2,
        })
    );
    let state = backend.lock().unwrap();
    assert_eq!(state.deleted, ["1f0e", "9a7b"]);
    assert_eq!(state.created.len(), 2);
}

#[tokio::test]
async fn failed_listing_aborts_reset() {
    let (url, backend) = spawn_backend(BackendState {
        list_status: Some(StatusCode::INTERNAL_SERVER_ERROR),
        ..Default::default()
    })
    .await;

    let err = seeder(&url, None, Box::new(AssumeYes))
        .run(&catalog(), SeedOptions { clear_existing: true })
        .await
        .unwrap_err();

    match &err {
        SeedError::ClearFailed { url: failed, status } => {
            assert_eq!(*status, 500);
            assert!(failed.ends_with("/books"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(backend.lock().unwrap().created.is_empty());
}

#[tokio::test]
async fn failed_delete_aborts_reset() {
    let (url, backend) = spawn_backend(BackendState {
        existing: vec![json!({"id": "1f0e"}), json!({"id": "9a7b"})],
        reject_delete: true,
        ..Default::default()
    })
    .await;

    let err = seeder(&url, None, Box::new(AssumeYes))
        .run(&catalog(), SeedOptions { clear_existing: true })
        .await
        .unwrap_err();

    match &err {
        SeedError::ClearFailed { url: failed, status } => {
            assert_eq!(*status, 404);
            assert!(failed.ends_with("/books/1f0e"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    let state = backend.lock().unwrap();
    assert!(state.deleted.is_empty());
    assert!(state.created.is_empty());
}

#[tokio::test]
async fn unhealthy_backend_aborts() {
    let (url, backend) = spawn_backend(BackendState {
        unhealthy: true,
        ..Default::default()
    })
    .await;

    let err = seeder(&url, None, Box::new(AssumeYes))
        .run(&catalog(), SeedOptions { clear_existing: true })
        .await
        .unwrap_err();

    assert!(matches!(err, SeedError::BackendUnavailable { status: 503 }));
    assert_eq!(err.to_string(), "Got a '503' when talking with the server...");
    let state = backend.lock().unwrap();
    assert!(state.created.is_empty());
    assert!(state.deleted.is_empty());
}

#[tokio::test]
async fn unreachable_backend_is_an_http_error() {
    let err = seeder("http://127.0.0.1:1", None, Box::new(AssumeYes))
        .run(&catalog(), SeedOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, SeedError::Http(_)));
}

#[tokio::test]
async fn invalid_entry_sends_nothing() {
    let (url, backend) = spawn_backend(BackendState {
        existing: vec![json!({"id": "1f0e"})],
        ..Default::default()
    })
    .await;

    let mut entries = catalog();
    entries.extend(books(json!([
        {"title": "Sense idioma", "publisher": "Proa", "status": "read"},
    ])));

    let err = seeder(&url, None, Box::new(AssumeYes))
        .run(&entries, SeedOptions { clear_existing: true })
        .await
        .unwrap_err();

    match err {
        SeedError::Validation(batch) => {
            assert_eq!(batch.index, 2);
            assert_eq!(
                batch.source,
                ValidationError::MissingLanguage {
                    title: "Sense idioma".into(),
                }
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let state = backend.lock().unwrap();
    assert!(state.created.is_empty());
    assert!(state.deleted.is_empty());
}

#[tokio::test]
async fn declined_prompt_changes_nothing() {
    let (url, backend) = spawn_backend(BackendState {
        existing: vec![json!({"id": "1f0e"})],
        ..Default::default()
    })
    .await;

    let outcome = seeder(&url, None, Box::new(Answer(false)))
        .run(&catalog(), SeedOptions { clear_existing: true })
        .await
        .unwrap();

    assert_eq!(outcome, SeedOutcome::Declined);
    let state = backend.lock().unwrap();
    assert!(state.created.is_empty());
    assert!(state.deleted.is_empty());
}

#[tokio::test]
async fn rejected_upload_stops_the_batch() {
    let (url, backend) = spawn_backend(BackendState {
        reject_title: Some("Les flors del mal".to_string()),
        ..Default::default()
    })
    .await;

    let err = seeder(&url, None, Box::new(AssumeYes))
        .run(&catalog(), SeedOptions::default())
        .await
        .unwrap_err();

    match &err {
        SeedError::UploadRejected {
            title,
            status,
            body,
        } => {
            assert_eq!(title, "Les flors del mal");
            assert_eq!(*status, 400);
            assert_eq!(body, "empty publisher");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("Book 'Les flors del mal': got a '400'"));

    let state = backend.lock().unwrap();
    assert!(state.created.is_empty());
    assert_eq!(state.authorization.len(), 1);
}

#[tokio::test]
async fn sends_basic_auth_when_configured() {
    let (url, backend) = spawn_backend(BackendState::default()).await;
    let credentials = Credentials::from_parts(
        Some("reader".to_string()),
        Some("s3cret".to_string()),
    );

    seeder(&url, credentials, Box::new(AssumeYes))
        .run(&catalog(), SeedOptions::default())
        .await
        .unwrap();

    let state = backend.lock().unwrap();
    let expected = Some("Basic cmVhZGVyOnMzY3JldA==".to_string());
    assert_eq!(state.authorization, vec![expected.clone(), expected]);
}

#[tokio::test]
async fn seeds_from_a_yaml_file() {
    let (url, backend) = spawn_backend(BackendState::default()).await;

    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    write!(
        file,
        r#"
- title: Terra baixa
  author: Àngel Guimerà
  publisher: Edicions 62
  rate: 6
  kind: theater
  status: selected
  language: ca
- title: Bodas de sangre
  author: Federico García Lorca
  publisher: Cátedra
  kind: ""
  status: tobepublished
  language: es, en
"#
    )
    .unwrap();

    let outcome = seeder(&url, None, Box::new(AssumeYes))
        .seed_file(file.path(), SeedOptions::default())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SeedOutcome::Completed(SeedReport {
            cleared: 0,
            uploaded: 2,
        })
    );
    let state = backend.lock().unwrap();
    assert_eq!(state.created[0]["kind"], json!(2));
    assert_eq!(state.created[0]["status"], json!(3));
    assert_eq!(state.created[0]["rate"], json!(6));
    assert_eq!(state.created[1]["kind"], json!(0));
    assert_eq!(state.created[1]["status"], json!(4));
    assert_eq!(state.created[1]["language"], json!("es, en"));
}
