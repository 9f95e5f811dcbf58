use axum::http::StatusCode;
use campussync_core::models::{
    group::{GroupInfo, GroupRole},
    user::Role,
};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::{TestContext, authorized};

fn group(code: &str) -> GroupInfo {
    GroupInfo {
        id: Uuid::new_v4(),
        name: "CS Year 2".to_string(),
        code: code.to_string(),
        code_active: true,
        created_by: None,
        default_role: GroupRole::Viewer,
    }
}

#[tokio::test]
async fn test_join_group_by_code() {
    let mut ctx = TestContext::new();
    let me = ctx.sign_in(Role::Student);
    let cs2 = group("CS2A");
    let group_id = cs2.id;

    ctx.groups
        .expect_find_group_by_code()
        .with(eq("CS2A".to_string()))
        .returning(move |_| Ok(Some(cs2.clone())));
    ctx.groups
        .expect_add_member()
        .with(eq(group_id), eq(me.user_id), eq(GroupRole::Viewer))
        .times(1)
        .returning(|_, _, _| Ok(true));

    let server = ctx.into_server();
    let response = authorized(
        server
            .post("/api/groups/join")
            .json(&json!({ "code": " cs2a " })),
    )
    .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "groupId": group_id, "groupName": "CS Year 2", "role": "Viewer" })
    );
}

#[tokio::test]
async fn test_join_with_unknown_code_is_not_found() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Student);
    ctx.groups
        .expect_find_group_by_code()
        .returning(|_| Ok(None));

    let server = ctx.into_server();
    let response = authorized(
        server
            .post("/api/groups/join")
            .json(&json!({ "code": "NOPE" })),
    )
    .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["error"],
        "Resource not found: Invalid group code"
    );
}

#[tokio::test]
async fn test_join_twice_is_rejected() {
    let mut ctx = TestContext::new();
    ctx.sign_in(Role::Faculty);
    let cs2 = group("CS2A");
    ctx.groups
        .expect_find_group_by_code()
        .returning(move |_| Ok(Some(cs2.clone())));
    ctx.groups
        .expect_add_member()
        .returning(|_, _, _| Ok(false));

    let server = ctx.into_server();
    let response = authorized(
        server
            .post("/api/groups/join")
            .json(&json!({ "code": "CS2A" })),
    )
    .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_join_requires_session() {
    let server = TestContext::new().into_server();

    let response = server
        .post("/api/groups/join")
        .json(&json!({ "code": "CS2A" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
