use axum::{body::to_bytes, http::StatusCode};
use campussync_api::middleware::error_handling::{AppError, map_error};
use campussync_core::errors::CampusError;
use rstest::rstest;
use serde_json::Value;

use crate::test_utils::TestContext;

fn io_error() -> CampusError {
    CampusError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )))
}

#[rstest]
#[case(CampusError::NotFound("User not found".to_string()), StatusCode::NOT_FOUND)]
#[case(CampusError::Validation("Invalid time".to_string()), StatusCode::BAD_REQUEST)]
#[case(CampusError::unauthorized(), StatusCode::UNAUTHORIZED)]
#[case(CampusError::Authorization("Faculty only".to_string()), StatusCode::FORBIDDEN)]
#[case(CampusError::Database(eyre::eyre!("Database error")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(io_error(), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: CampusError, #[case] expected: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), expected);
}

#[test_log::test(tokio::test)]
async fn test_error_body_is_json() {
    let response = map_error(CampusError::Validation("Invalid time".to_string()));

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["error"], "Validation error: Invalid time");
}

#[test]
fn test_eyre_report_becomes_database_error() {
    let error = AppError::from(eyre::eyre!("connection reset"));
    assert!(matches!(error.0, CampusError::Database(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test_log::test(tokio::test)]
async fn test_health_and_version_need_no_session() {
    let server = TestContext::new().into_server();

    let health = server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.json::<Value>()["status"], "ok");

    let version = server.get("/version").await;
    version.assert_status_ok();
    assert_eq!(
        version.json::<Value>()["version"],
        env!("CARGO_PKG_VERSION")
    );
}

#[test_log::test(tokio::test)]
async fn test_session_lookup_failure_is_a_server_error() {
    let mut ctx = TestContext::new();
    ctx.sessions.checkpoint();
    ctx.sessions
        .expect_resolve_session()
        .returning(|_| Err(eyre::eyre!("pool timed out")));

    let server = ctx.into_server();
    let response = crate::test_utils::authorized(server.get("/api/schedule")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}
