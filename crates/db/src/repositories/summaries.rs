use campussync_core::models::summary::{LectureSummary, SummaryDraft};
use chrono::NaiveDate;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbLectureSummary;

pub async fn get_summary(
    pool: &Pool<Postgres>,
    slot_id: Uuid,
    date: NaiveDate,
) -> Result<Option<LectureSummary>> {
    let row = sqlx::query_as::<_, DbLectureSummary>(
        r#"
        SELECT ls.id, ls.time_slot_id AS slot_id, ls.date, ls.content, ls.notes,
               u.name AS author_name, ls.created_at, ls.updated_at
        FROM lecture_summaries ls
        LEFT JOIN users u ON u.id = ls.author_id
        WHERE ls.time_slot_id = $1 AND ls.date = $2
        "#,
    )
    .bind(slot_id)
    .bind(date)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(LectureSummary::from))
}

/// Inserts the summary or, when one exists for the slot and date, replaces
/// its content and notes. The author of the first version is kept.
pub async fn upsert_summary(pool: &Pool<Postgres>, draft: &SummaryDraft) -> Result<LectureSummary> {
    tracing::debug!(
        "Upserting lecture summary: slot={}, date={}, author={}",
        draft.slot_id,
        draft.date,
        draft.author_id
    );

    let row = sqlx::query_as::<_, DbLectureSummary>(
        r#"
        WITH saved AS (
            INSERT INTO lecture_summaries (time_slot_id, date, content, notes, author_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (time_slot_id, date) DO UPDATE
            SET content = EXCLUDED.content, notes = EXCLUDED.notes, updated_at = NOW()
            RETURNING id, time_slot_id, date, content, notes, author_id, created_at, updated_at
        )
        SELECT saved.id, saved.time_slot_id AS slot_id, saved.date, saved.content, saved.notes,
               u.name AS author_name, saved.created_at, saved.updated_at
        FROM saved
        LEFT JOIN users u ON u.id = saved.author_id
        "#,
    )
    .bind(draft.slot_id)
    .bind(draft.date)
    .bind(&draft.content)
    .bind(draft.notes.as_deref())
    .bind(draft.author_id)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}
