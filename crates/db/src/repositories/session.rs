use campussync_core::models::user::Principal;
use eyre::Result;
use sqlx::{Pool, Postgres};

use crate::models::DbSession;

/// Looks up an unexpired session token.
pub async fn get_principal_by_token(pool: &Pool<Postgres>, token: &str) -> Result<Option<Principal>> {
    let session = sqlx::query_as::<_, DbSession>(
        r#"
        SELECT s.user_id, u.role
        FROM sessions s
        JOIN users u ON u.id = s.user_id
        WHERE s.token = $1 AND s.expires_at > NOW()
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    session.map(DbSession::into_principal).transpose()
}
