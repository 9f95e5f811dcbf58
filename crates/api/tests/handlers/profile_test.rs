use axum::http::StatusCode;
use campussync_core::models::user::{AvailabilityStatus, Role};
use mockall::predicate::eq;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, authorized};

#[tokio::test]
async fn test_faculty_can_set_availability() {
    let mut ctx = TestContext::new();
    let me = ctx.sign_in(Role::Faculty);

    ctx.profiles
        .expect_update_availability()
        .with(eq(me.user_id), eq(AvailabilityStatus::Busy))
        .times(1)
        .returning(|_, _| Ok(()));

    let server = ctx.into_server();
    let response = authorized(
        server
            .put("/api/profile/availability")
            .json(&json!({ "availability": "Busy" })),
    )
    .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_students_can_set_availability() {
    let mut ctx = TestContext::new();
    let me = ctx.sign_in(Role::Student);

    ctx.profiles
        .expect_update_availability()
        .with(eq(me.user_id), eq(AvailabilityStatus::Away))
        .times(1)
        .returning(|_, _| Ok(()));

    let server = ctx.into_server();
    let response = authorized(
        server
            .put("/api/profile/availability")
            .json(&json!({ "availability": "Away" })),
    )
    .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_status_is_trimmed_and_blank_clears() {
    let mut ctx = TestContext::new();
    let me = ctx.sign_in(Role::Hod);

    ctx.profiles
        .expect_update_status()
        .with(eq(me.user_id), eq(Some("In a meeting".to_string())))
        .times(1)
        .returning(|_, _| Ok(()));
    ctx.profiles
        .expect_update_status()
        .with(eq(me.user_id), eq(None::<String>))
        .times(1)
        .returning(|_, _| Ok(()));

    let server = ctx.into_server();

    authorized(
        server
            .put("/api/profile/status")
            .json(&json!({ "status": "  In a meeting  " })),
    )
    .await
    .assert_status(StatusCode::NO_CONTENT);

    authorized(server.put("/api/profile/status").json(&json!({ "status": "   " })))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_long_status_is_rejected() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Student);

    let server = ctx.into_server();
    let response = authorized(
        server
            .put("/api/profile/status")
            .json(&json!({ "status": "x".repeat(101) })),
    )
    .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        response.json::<Value>()["error"]
            .as_str()
            .unwrap()
            .contains("100 characters")
    );
}
