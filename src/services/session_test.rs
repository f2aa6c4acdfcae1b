use super::*;
use crate::backend::types::BackendError;
use crate::state::test_helpers::{MockBackend, MockCall};

fn jar_with(name: &str, value: &str) -> CookieJar {
    CookieJar::new().add(Cookie::new(name.to_string(), value.to_string()))
}

// =============================================================================
// SessionToken
// =============================================================================

#[test]
fn new_rejects_empty_token() {
    assert!(SessionToken::new("").is_none());
    assert_eq!(SessionToken::new("abc").unwrap().as_str(), "abc");
}

#[test]
fn debug_does_not_leak_token() {
    let token = SessionToken::new("super-secret").unwrap();
    assert!(!format!("{token:?}").contains("super-secret"));
}

#[test]
fn read_returns_token_from_cookie() {
    let jar = jar_with(AUTH_COOKIE, "tok");
    assert_eq!(SessionToken::read(&jar), SessionToken::new("tok"));
}

#[test]
fn read_treats_empty_or_missing_cookie_as_absent() {
    assert!(SessionToken::read(&CookieJar::new()).is_none());
    assert!(SessionToken::read(&jar_with(AUTH_COOKIE, "")).is_none());
    assert!(SessionToken::read(&jar_with("other", "tok")).is_none());
}

#[test]
fn store_sets_thirty_day_strict_cookie() {
    let token = SessionToken::new("tok").unwrap();
    let jar = token.store(CookieJar::new(), true);
    let cookie = jar.get(AUTH_COOKIE).unwrap();
    assert_eq!(cookie.value(), "tok");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    assert_eq!(cookie.secure(), Some(true));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.max_age(), Some(Duration::days(30)));
}

#[test]
fn store_without_secure_flag_outside_production() {
    let token = SessionToken::new("tok").unwrap();
    let jar = token.store(CookieJar::new(), false);
    assert_eq!(jar.get(AUTH_COOKIE).unwrap().secure(), Some(false));
}

#[test]
fn clear_expires_cookie() {
    let jar = SessionToken::clear(jar_with(AUTH_COOKIE, "tok"), false);
    let cookie = jar.get(AUTH_COOKIE).unwrap();
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    assert!(SessionToken::read(&jar).is_none());
}

// =============================================================================
// bootstrap
// =============================================================================

#[tokio::test]
async fn bootstrap_without_token_skips_network() {
    let backend = MockBackend::new();
    let session = bootstrap(&backend, None).await;
    assert!(!session.is_authenticated);
    assert!(session.token.is_none());
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn bootstrap_valid_token_authenticates() {
    let backend = MockBackend::new().with_validate(Ok(true));
    let session = bootstrap(&backend, SessionToken::new("tok")).await;
    assert!(session.is_authenticated);
    assert_eq!(session.token, SessionToken::new("tok"));
    assert_eq!(backend.calls(), vec![MockCall::ValidateToken("tok".into())]);
}

#[tokio::test]
async fn bootstrap_invalid_token_marks_rejected() {
    let backend = MockBackend::new().with_validate(Ok(false));
    let session = bootstrap(&backend, SessionToken::new("tok")).await;
    assert!(!session.is_authenticated);
    assert!(session.rejected);
    assert!(session.token.is_none());
}

#[tokio::test]
async fn bootstrap_transport_failure_is_unauthenticated() {
    let backend = MockBackend::new().with_validate(Err(BackendError::Request("connection refused".into())));
    let session = bootstrap(&backend, SessionToken::new("tok")).await;
    assert!(!session.is_authenticated);
    assert!(!session.rejected);
    assert_eq!(session.token, SessionToken::new("tok"));
}

#[tokio::test]
async fn bootstrap_non_2xx_is_unauthenticated() {
    let backend = MockBackend::new().with_validate(Err(BackendError::Status { status: 500, message: None }));
    let session = bootstrap(&backend, SessionToken::new("tok")).await;
    assert!(!session.is_authenticated);
    assert!(!session.rejected);
}

#[tokio::test]
async fn bootstrap_unreadable_reply_keeps_token() {
    let reply = crate::backend::parse_validate_token("{}");
    assert!(matches!(reply, Err(BackendError::Parse(_))));

    let backend = MockBackend::new().with_validate(reply);
    let session = bootstrap(&backend, SessionToken::new("tok")).await;
    assert!(!session.is_authenticated);
    assert!(!session.rejected);
    assert_eq!(session.token, SessionToken::new("tok"));
}
