use axum::http::StatusCode;
use campussync_core::models::{
    summary::LectureSummary,
    user::Role,
    week::DayOfWeek,
};
use chrono::{NaiveDate, TimeZone, Utc};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{TestContext, authorized, faculty, lecture};

/// 2026-10-21 is a Wednesday.
const DATE: &str = "2026-10-21";

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 21).unwrap()
}

fn summary(slot_id: Uuid, content: &str) -> LectureSummary {
    let at = Utc.with_ymd_and_hms(2026, 10, 21, 11, 0, 0).unwrap();
    LectureSummary {
        id: Uuid::new_v4(),
        slot_id,
        date: date(),
        content: content.to_string(),
        notes: None,
        author_name: Some("Grace".to_string()),
        created_at: at,
        updated_at: at,
    }
}

#[tokio::test]
async fn test_read_summary_with_slot() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Student);

    let slot = lecture(DayOfWeek::Wednesday, "09:00", "10:00", &faculty("Grace"), None);
    let slot_id = slot.id;
    let saved = summary(slot_id, "Covered B-trees");
    let summary_id = saved.id;

    ctx.summaries
        .expect_get_summary()
        .with(eq(slot_id), eq(date()))
        .returning(move |_, _| Ok(Some(saved.clone())));
    ctx.summaries
        .expect_get_slot()
        .with(eq(slot_id))
        .returning(move |_| Ok(Some(slot.clone())));

    let server = ctx.into_server();
    let response = authorized(server.get(&format!("/api/summaries/{}/{}", slot_id, DATE))).await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["id"], json!(summary_id));
    assert_eq!(body["slotId"], json!(slot_id));
    assert_eq!(body["date"], DATE);
    assert_eq!(body["content"], "Covered B-trees");
    assert_eq!(body["authorName"], "Grace");
    assert_eq!(body["slot"]["facultyName"], "Grace");
    assert_eq!(body["slot"]["startTime"], "09:00");
}

#[tokio::test]
async fn test_missing_summary_is_not_found() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Student);
    ctx.summaries
        .expect_get_summary()
        .returning(|_, _| Ok(None));
    ctx.summaries.expect_get_slot().returning(|_| Ok(None));

    let server = ctx.into_server();
    let response = authorized(server.get(&format!(
        "/api/summaries/{}/{}",
        Uuid::new_v4(),
        DATE
    )))
    .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lecturer_saves_summary() {
    let mut ctx = TestContext::new();
    let me = ctx.sign_in(Role::Faculty);

    let mut grace = faculty("Grace");
    grace.id = me.user_id;
    let slot = lecture(DayOfWeek::Wednesday, "09:00", "10:00", &grace, None);
    let slot_id = slot.id;

    ctx.summaries
        .expect_get_slot()
        .returning(move |_| Ok(Some(slot.clone())));
    ctx.summaries
        .expect_upsert_summary()
        .withf(move |draft| {
            draft.slot_id == slot_id
                && draft.author_id == me.user_id
                && draft.notes.as_deref() == Some("Quiz next week")
        })
        .times(1)
        .returning(|draft| {
            let mut saved = summary(draft.slot_id, &draft.content);
            saved.notes = draft.notes;
            Ok(saved)
        });

    let server = ctx.into_server();
    let response = authorized(
        server
            .put(&format!("/api/summaries/{}/{}", slot_id, DATE))
            .json(&json!({ "content": "Covered B-trees", "notes": "Quiz next week" })),
    )
    .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["content"], "Covered B-trees");
    assert_eq!(body["notes"], "Quiz next week");
}

#[tokio::test]
async fn test_students_cannot_save_summaries() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Student);

    let server = ctx.into_server();
    let response = authorized(
        server
            .put(&format!("/api/summaries/{}/{}", Uuid::new_v4(), DATE))
            .json(&json!({ "content": "Notes" })),
    )
    .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_saving_on_someone_elses_slot_is_forbidden() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Hod);

    let slot = lecture(DayOfWeek::Wednesday, "09:00", "10:00", &faculty("Ada"), None);
    let slot_id = slot.id;
    ctx.summaries
        .expect_get_slot()
        .returning(move |_| Ok(Some(slot.clone())));

    let server = ctx.into_server();
    let response = authorized(
        server
            .put(&format!("/api/summaries/{}/{}", slot_id, DATE))
            .json(&json!({ "content": "Notes" })),
    )
    .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_malformed_date_is_rejected() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Student);

    let server = ctx.into_server();
    let response =
        authorized(server.get(&format!("/api/summaries/{}/21-10-2026", Uuid::new_v4()))).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
