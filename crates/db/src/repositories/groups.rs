use campussync_core::models::group::{GroupInfo, GroupRole};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbGroup;

pub async fn get_group_by_code(pool: &Pool<Postgres>, code: &str) -> Result<Option<GroupInfo>> {
    tracing::debug!("Looking up group by code: {}", code);

    let group = sqlx::query_as::<_, DbGroup>(
        r#"
        SELECT id, name, code, code_active, created_by, default_role
        FROM groups
        WHERE code = $1
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;

    group.map(DbGroup::into_group).transpose()
}

/// Inserts the membership unless it already exists; reports whether a row
/// was added.
pub async fn add_group_member(
    pool: &Pool<Postgres>,
    group_id: Uuid,
    user_id: Uuid,
    role: GroupRole,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO group_members (group_id, user_id, role)
        VALUES ($1, $2, $3)
        ON CONFLICT (group_id, user_id) DO NOTHING
        "#,
    )
    .bind(group_id)
    .bind(user_id)
    .bind(role.as_str())
    .execute(pool)
    .await?;

    let added = result.rows_affected() == 1;
    tracing::debug!(
        "Membership of user {} in group {}: added={}",
        user_id,
        group_id,
        added
    );
    Ok(added)
}
