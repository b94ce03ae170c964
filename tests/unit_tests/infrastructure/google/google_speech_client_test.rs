use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, oneshot};

use handa::application::ports::{ProviderError, RecognitionProvider};
use handa::domain::{RecognitionConfig, RecognizerPath};
use handa::infrastructure::auth::Credentials;
use handa::infrastructure::recognition::GoogleSpeechClient;

const RECOGNIZER: &str = "/projects/p/locations/global/recognizers/sinhala-recognizer";

#[derive(Clone, Default)]
struct Recorded {
    create_query: Arc<Mutex<Option<String>>>,
    create_body: Arc<Mutex<Option<Value>>>,
    recognize_body: Arc<Mutex<Option<Value>>>,
    authorization: Arc<Mutex<Option<String>>>,
}

async fn start_mock_speech_server(
    fetch_status: u16,
    recognize_response: &'static str,
) -> (String, Recorded, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let recorded = Recorded::default();

    let app = Router::new()
        .route(
            RECOGNIZER,
            get(move |headers: HeaderMap, State(recorded): State<Recorded>| async move {
                *recorded.authorization.lock().await = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                let status = StatusCode::from_u16(fetch_status).unwrap();
                (status, "{}").into_response()
            }),
        )
        .route(
            "/projects/p/locations/global/recognizers",
            post(
                |State(recorded): State<Recorded>,
                 Query(query): Query<std::collections::HashMap<String, String>>,
                 Json(body): Json<Value>| async move {
                    *recorded.create_query.lock().await = query.get("recognizerId").cloned();
                    *recorded.create_body.lock().await = Some(body);
                    Json(json!({"name": "operations/123"}))
                },
            ),
        )
        .route(
            &format!("{}:recognize", RECOGNIZER),
            post(
                move |State(recorded): State<Recorded>, Json(body): Json<Value>| async move {
                    *recorded.recognize_body.lock().await = Some(body);
                    (
                        [(axum::http::header::CONTENT_TYPE, "application/json")],
                        recognize_response,
                    )
                        .into_response()
                },
            ),
        )
        .with_state(recorded.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, recorded, shutdown_tx)
}

fn path() -> RecognizerPath {
    RecognizerPath::new("p", "global", "sinhala-recognizer")
}

fn config() -> RecognitionConfig {
    RecognitionConfig::auto_decoding("si-LK", "short")
}

#[tokio::test]
async fn given_existing_recognizer_when_fetching_then_succeeds_with_bearer_token() {
    let (base_url, recorded, shutdown_tx) = start_mock_speech_server(200, "{}").await;
    let client = GoogleSpeechClient::new(&base_url, Credentials::BearerToken("tok".to_string()));

    let result = client.fetch_recognizer(&path()).await;

    assert!(result.is_ok());
    assert_eq!(
        recorded.authorization.lock().await.as_deref(),
        Some("Bearer tok")
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_recognizer_when_fetching_then_returns_api_error() {
    let (base_url, _recorded, shutdown_tx) = start_mock_speech_server(404, "{}").await;
    let client = GoogleSpeechClient::new(&base_url, Credentials::ApiKey("k".to_string()));

    let result = client.fetch_recognizer(&path()).await;

    assert!(matches!(result, Err(ProviderError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_create_request_when_creating_then_sends_id_and_default_config() {
    let (base_url, recorded, shutdown_tx) = start_mock_speech_server(404, "{}").await;
    let client = GoogleSpeechClient::new(&base_url, Credentials::ApiKey("k".to_string()));

    let result = client
        .create_recognizer(path().parent(), path().recognizer_id(), &config())
        .await;

    assert!(result.is_ok());
    assert_eq!(
        recorded.create_query.lock().await.as_deref(),
        Some("sinhala-recognizer")
    );
    let body = recorded.create_body.lock().await.clone().unwrap();
    assert_eq!(
        body,
        json!({
            "defaultRecognitionConfig": {
                "autoDecodingConfig": {},
                "languageCodes": ["si-LK"],
                "model": "short"
            }
        })
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_audio_when_recognizing_then_sends_base64_content_and_parses_results() {
    let response = r#"{"results":[{"alternatives":[{"transcript":"හෙලෝ"}]},{"alternatives":[{"transcript":"ලෝකය","confidence":0.9}]}]}"#;
    let (base_url, recorded, shutdown_tx) = start_mock_speech_server(200, response).await;
    let client = GoogleSpeechClient::new(&base_url, Credentials::ApiKey("k".to_string()));

    let results = client.recognize(&path(), &config(), b"abc").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].top_transcript(), Some("හෙලෝ"));
    assert_eq!(results[1].top_transcript(), Some("ලෝකය"));
    let body = recorded.recognize_body.lock().await.clone().unwrap();
    assert_eq!(body["content"], json!("YWJj"));
    assert_eq!(body["config"]["languageCodes"], json!(["si-LK"]));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_response_without_results_when_recognizing_then_returns_empty_list() {
    let (base_url, _recorded, shutdown_tx) = start_mock_speech_server(200, "{}").await;
    let client = GoogleSpeechClient::new(&base_url, Credentials::ApiKey("k".to_string()));

    let results = client.recognize(&path(), &config(), b"abc").await.unwrap();

    assert!(results.is_empty());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_recognizing_then_returns_api_error() {
    let client = GoogleSpeechClient::new("http://127.0.0.1:1", Credentials::ApiKey("k".to_string()));

    let result = client.recognize(&path(), &config(), b"abc").await;

    assert!(matches!(result, Err(ProviderError::ApiRequestFailed(_))));
}
