use campussync_core::models::user::UserProfile;
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{DbSummaryDate, DbUser};

pub async fn get_user_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<UserProfile>> {
    tracing::debug!("Getting user by id: {}", id);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, role, availability, status
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match user {
        Some(user) => Ok(Some(user.into_profile()?)),
        None => {
            tracing::debug!("User not found: id={}", id);
            Ok(None)
        }
    }
}

pub async fn get_summary_dates(
    pool: &Pool<Postgres>,
    slot_ids: &[Uuid],
    from: NaiveDate,
    to: NaiveDate,
) -> Result<Vec<(Uuid, NaiveDate)>> {
    let rows = sqlx::query_as::<_, DbSummaryDate>(
        r#"
        SELECT time_slot_id AS slot_id, date
        FROM lecture_summaries
        WHERE time_slot_id = ANY($1) AND date BETWEEN $2 AND $3
        ORDER BY date ASC
        "#,
    )
    .bind(slot_ids)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    tracing::debug!(
        "Found {} lecture summaries for {} slots between {} and {}",
        rows.len(),
        slot_ids.len(),
        from,
        to
    );
    Ok(rows.into_iter().map(|row| (row.slot_id, row.date)).collect())
}
