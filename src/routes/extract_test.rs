use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, header};

use super::*;
use crate::backend::types::{BackendError, ExtractionResult};
use crate::routes::tests::send;
use crate::state::test_helpers::{MockBackend, MockCall};

const BOUNDARY: &str = "----langaimage-test-boundary";

/// Build a multipart body. `file` is `(file name, bytes)`.
fn multipart(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n").as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn extract_request(cookie: &str, body: Vec<u8>) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(Method::POST)
        .uri("/extract")
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .header(header::COOKIE, cookie)
        .body(Body::from(body))
        .unwrap()
}

const PNG: &[u8] = b"\x89PNG\r\n\x1a\nfake";

#[tokio::test]
async fn missing_file_never_calls_backend() {
    let backend = Arc::new(MockBackend::new());
    let body = multipart(&[("title", "Menu"), ("translate", "yes")], None);
    let res = send(&backend, extract_request("authToken=tok", body)).await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.body.contains(tr(Language::En, Text::MissingFile)));
    assert!(res.body.contains("value=\"Menu\""));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn missing_title_never_calls_backend() {
    let backend = Arc::new(MockBackend::new());
    let body = multipart(&[("title", "  ")], Some(("scan.png", PNG)));
    let res = send(&backend, extract_request("authToken=tok; lang=pt", body)).await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.body.contains(tr(Language::Pt, Text::MissingTitle)));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn translate_yes_sends_target_language() {
    let backend = Arc::new(MockBackend::new());
    let body = multipart(
        &[("title", "Menu"), ("translate", "yes"), ("targetLanguage", "fr"), ("improveExtraction", "no")],
        Some(("scan.png", PNG)),
    );
    let res = send(&backend, extract_request("authToken=tok", body)).await;
    assert_eq!(res.status, StatusCode::OK);

    let calls = backend.calls();
    let [MockCall::Extract { token, request }] = calls.as_slice() else {
        panic!("expected one extract call, got {calls:?}");
    };
    assert_eq!(token.as_deref(), Some("tok"));
    assert_eq!(request.target_language.as_deref(), Some("fr"));
    assert!(!request.improve_extraction);
    assert_eq!(request.file.file_name, "scan.png");
    assert_eq!(request.file.bytes, PNG);
}

#[tokio::test]
async fn translate_no_omits_target_language() {
    let backend = Arc::new(MockBackend::new());
    let body = multipart(
        &[("title", "Menu"), ("translate", "no"), ("targetLanguage", "fr"), ("summarizeText", "yes")],
        Some(("scan.png", PNG)),
    );
    send(&backend, extract_request("authToken=tok", body)).await;

    let calls = backend.calls();
    let [MockCall::Extract { request, .. }] = calls.as_slice() else {
        panic!("expected one extract call, got {calls:?}");
    };
    assert_eq!(request.target_language, None);
    assert!(request.summarize_text);
}

#[tokio::test]
async fn success_renders_result_sections() {
    let result = ExtractionResult {
        original_extraction: "OCR output".into(),
        improved_extraction: "Cleaner output".into(),
        ..ExtractionResult::default()
    };
    let backend = Arc::new(MockBackend::new().with_extract(Ok(result)));
    let body = multipart(&[("title", "Menu"), ("improveExtraction", "yes")], Some(("scan.png", PNG)));
    let res = send(&backend, extract_request("authToken=tok", body)).await;
    assert!(res.body.contains(tr(Language::En, Text::OriginalExtraction)));
    assert!(res.body.contains("Cleaner output"));
    assert!(!res.body.contains(tr(Language::En, Text::SummarizedText)));
}

#[tokio::test]
async fn backend_failure_shows_localized_error() {
    let backend = Arc::new(MockBackend::new().with_extract(Err(BackendError::Status { status: 500, message: None })));
    let body = multipart(&[("title", "Menu")], Some(("scan.png", PNG)));
    let res = send(&backend, extract_request("authToken=tok; lang=pt", body)).await;
    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    assert!(res.body.contains(tr(Language::Pt, Text::ExtractFailed)));
    assert!(res.body.contains("value=\"Menu\""));
}
