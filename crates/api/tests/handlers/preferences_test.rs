use axum::http::StatusCode;
use campussync_core::models::{
    preferences::{NamedItem, SlotTypePreference},
    user::Role,
};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{TestContext, authorized};

fn named(name: &str) -> NamedItem {
    NamedItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_preferences_view_defaults_to_enabled() {
    let mut ctx = TestContext::new();
    let me = ctx.sign_in(Role::Student);

    let lab = named("Lab");
    let lecture = named("Lecture");
    let b1 = named("B1");
    let b2 = named("B2");

    let types = vec![lab.clone(), lecture.clone()];
    ctx.preferences
        .expect_list_slot_types()
        .returning(move || Ok(types.clone()));
    let lab_id = lab.id;
    ctx.preferences
        .expect_slot_type_preferences()
        .with(eq(me.user_id))
        .returning(move |_| {
            Ok(vec![SlotTypePreference {
                slot_type_id: lab_id,
                enabled: false,
            }])
        });
    let batches = vec![b1.clone(), b2.clone()];
    ctx.preferences
        .expect_list_batches()
        .returning(move || Ok(batches.clone()));
    let selected = b2.id;
    ctx.preferences
        .expect_batch_preferences()
        .returning(move |_| Ok(vec![selected]));

    let server = ctx.into_server();
    let response = authorized(server.get("/api/preferences")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "slotTypes": [
                { "id": lab.id, "name": "Lab", "enabled": false },
                { "id": lecture.id, "name": "Lecture", "enabled": true },
            ],
            "batches": [
                { "id": b1.id, "name": "B1", "selected": false },
                { "id": b2.id, "name": "B2", "selected": true },
            ],
        })
    );
}

#[tokio::test]
async fn test_toggle_slot_type_preference() {
    let mut ctx = TestContext::new();
    let me = ctx.sign_in(Role::Student);
    let slot_type_id = Uuid::new_v4();

    ctx.preferences
        .expect_upsert_slot_type_preference()
        .with(eq(me.user_id), eq(slot_type_id), eq(false))
        .times(1)
        .returning(|_, _, _| Ok(()));

    let server = ctx.into_server();
    let response = authorized(
        server
            .put(&format!("/api/preferences/slot-types/{}", slot_type_id))
            .json(&json!({ "enabled": false })),
    )
    .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_replace_batch_preferences_drops_duplicates() {
    let mut ctx = TestContext::new();
    let me = ctx.sign_in(Role::Student);
    let b1 = Uuid::new_v4();
    let b2 = Uuid::new_v4();

    ctx.preferences
        .expect_replace_batch_preferences()
        .withf(move |user_id, ids| *user_id == me.user_id && ids.to_vec() == vec![b1, b2])
        .times(1)
        .returning(|_, _| Ok(()));

    let server = ctx.into_server();
    let response = authorized(
        server
            .put("/api/preferences/batches")
            .json(&json!({ "batchIds": [b1, b2, b1] })),
    )
    .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_preferences_require_session() {
    let server = TestContext::new().into_server();

    let response = server
        .put("/api/preferences/batches")
        .json(&json!({ "batchIds": [] }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
