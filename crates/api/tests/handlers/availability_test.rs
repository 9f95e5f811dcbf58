use axum::http::StatusCode;
use campussync_core::models::{user::Role, week::DayOfWeek};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, authorized, faculty, lecture, room};

#[tokio::test]
async fn test_faculty_availability_requires_session() {
    // No availability expectations: the engine must not read anything.
    let server = TestContext::new().into_server();

    let response = server.get("/api/availability/faculty").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Authentication error: Unauthorized" })
    );
}

#[tokio::test]
async fn test_unknown_token_is_unauthorized() {
    let server = TestContext::new().into_server();

    let response = authorized(server.get("/api/availability/rooms")).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_faculty_availability_views() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Student);

    let alice = faculty("Alice");
    let bob = faculty("Bob");
    let slots = vec![
        lecture(DayOfWeek::Tuesday, "10:00", "11:00", &bob, None),
        lecture(DayOfWeek::Monday, "09:00", "10:00", &alice, None),
    ];

    let roster = vec![alice.clone(), bob.clone()];
    ctx.availability
        .expect_list_faculty()
        .times(1)
        .returning(move || Ok(roster.clone()));
    ctx.availability
        .expect_list_time_slots()
        .times(1)
        .returning(move || Ok(slots.clone()));

    let server = ctx.into_server();
    let response = authorized(server.get("/api/availability/faculty")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    let faculty_wise = body["facultyWise"].as_array().unwrap();
    assert_eq!(faculty_wise.len(), 2);
    assert_eq!(faculty_wise[0]["name"], "Alice");
    assert_eq!(faculty_wise[0]["occupiedSlots"][0]["subjectShortName"], "OS");
    assert_eq!(faculty_wise[0]["freeSlots"][0]["id"], "free-Tuesday-10:00");
    assert_eq!(faculty_wise[1]["freeSlots"][0]["id"], "free-Monday-09:00");

    let slot_wise = body["slotWise"].as_array().unwrap();
    assert_eq!(slot_wise.len(), 2);
    assert_eq!(slot_wise[0]["day"], "Monday");
    assert_eq!(slot_wise[0]["busyFaculty"][0]["name"], "Alice");
    assert_eq!(slot_wise[0]["freeFaculty"][0]["name"], "Bob");
    assert_eq!(slot_wise[1]["day"], "Tuesday");
}

#[tokio::test]
async fn test_room_availability_views() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Faculty);

    let alice = faculty("Alice");
    let r101 = room("101");
    let r102 = room("102");
    let slots = vec![
        lecture(DayOfWeek::Monday, "09:00", "10:00", &alice, Some(&r101)),
        // Defines a slot but occupies no room.
        lecture(DayOfWeek::Monday, "11:00", "12:00", &alice, None),
    ];

    let rooms = vec![r101.clone(), r102.clone()];
    ctx.availability
        .expect_list_rooms()
        .returning(move || Ok(rooms.clone()));
    ctx.availability
        .expect_list_time_slots()
        .returning(move || Ok(slots.clone()));

    let server = ctx.into_server();
    let response = authorized(server.get("/api/availability/rooms")).await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    assert_eq!(body["roomWise"][0]["number"], "101");
    assert_eq!(body["roomWise"][0]["occupiedSlots"].as_array().unwrap().len(), 1);
    assert_eq!(body["roomWise"][0]["freeSlots"].as_array().unwrap().len(), 1);
    assert_eq!(body["roomWise"][1]["freeSlots"].as_array().unwrap().len(), 2);

    assert_eq!(body["slotWise"][0]["occupiedRooms"][0]["number"], "101");
    assert_eq!(body["slotWise"][0]["freeRooms"][0]["number"], "102");
    assert_eq!(body["slotWise"][1]["occupiedRooms"], json!([]));
    assert_eq!(body["slotWise"][1]["freeRooms"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_read_failure_is_a_server_error() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Hod);

    ctx.availability
        .expect_list_faculty()
        .returning(|| Ok(vec![]));
    ctx.availability
        .expect_list_time_slots()
        .returning(|| Err(eyre::eyre!("connection refused")));

    let server = ctx.into_server();
    let response = authorized(server.get("/api/availability/faculty")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Database error:")
    );
    assert!(body.get("facultyWise").is_none());
}
