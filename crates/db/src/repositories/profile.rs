use campussync_core::models::user::AvailabilityStatus;
use eyre::{Result, eyre};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn update_availability(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    availability: AvailabilityStatus,
) -> Result<()> {
    let result = sqlx::query("UPDATE users SET availability = $2 WHERE id = $1")
        .bind(user_id)
        .bind(availability.as_str())
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(eyre!("User {} not found", user_id));
    }
    Ok(())
}

pub async fn update_status(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    status: Option<&str>,
) -> Result<()> {
    let result = sqlx::query("UPDATE users SET status = $2 WHERE id = $1")
        .bind(user_id)
        .bind(status)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(eyre!("User {} not found", user_id));
    }
    Ok(())
}
