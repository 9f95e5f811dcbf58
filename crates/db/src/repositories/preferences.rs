use campussync_core::models::preferences::{NamedItem, SlotTypePreference};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{DbNamed, DbSlotTypePreference};

pub async fn get_all_slot_types(pool: &Pool<Postgres>) -> Result<Vec<NamedItem>> {
    let rows = sqlx::query_as::<_, DbNamed>("SELECT id, name FROM slot_types ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(NamedItem::from).collect())
}

pub async fn get_all_batches(pool: &Pool<Postgres>) -> Result<Vec<NamedItem>> {
    let rows = sqlx::query_as::<_, DbNamed>("SELECT id, name FROM batches ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(NamedItem::from).collect())
}

pub async fn get_slot_type_preferences(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<SlotTypePreference>> {
    let rows = sqlx::query_as::<_, DbSlotTypePreference>(
        r#"
        SELECT slot_type_id, enabled
        FROM slot_type_preferences
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(SlotTypePreference::from).collect())
}

pub async fn get_batch_preferences(pool: &Pool<Postgres>, user_id: Uuid) -> Result<Vec<Uuid>> {
    let batch_ids = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT batch_id
        FROM batch_preferences
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(batch_ids)
}

pub async fn upsert_slot_type_preference(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    slot_type_id: Uuid,
    enabled: bool,
) -> Result<()> {
    tracing::debug!(
        "Upserting slot type preference: user={}, slot_type={}, enabled={}",
        user_id,
        slot_type_id,
        enabled
    );

    sqlx::query(
        r#"
        INSERT INTO slot_type_preferences (user_id, slot_type_id, enabled)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, slot_type_id) DO UPDATE SET enabled = EXCLUDED.enabled
        "#,
    )
    .bind(user_id)
    .bind(slot_type_id)
    .bind(enabled)
    .execute(pool)
    .await?;

    Ok(())
}

/// Swaps the stored batch selection for `batch_ids` in one transaction.
pub async fn replace_batch_preferences(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    batch_ids: &[Uuid],
) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM batch_preferences WHERE user_id = $1")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    if !batch_ids.is_empty() {
        sqlx::query(
            r#"
            INSERT INTO batch_preferences (user_id, batch_id)
            SELECT $1, batch_id FROM UNNEST($2::uuid[]) AS batch_id
            "#,
        )
        .bind(user_id)
        .bind(batch_ids)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::debug!(
        "Stored {} batch preferences for user {}",
        batch_ids.len(),
        user_id
    );
    Ok(())
}
