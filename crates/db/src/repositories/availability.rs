use campussync_core::models::{room::RoomInfo, user::FacultyInfo};
use eyre::Result;
use sqlx::{Pool, Postgres};

use crate::models::{DbRoom, DbUser};

/// Faculty and HOD users, sorted by name.
pub async fn get_all_faculty(pool: &Pool<Postgres>) -> Result<Vec<FacultyInfo>> {
    let users = sqlx::query_as::<_, DbUser>(
        r#"
        SELECT id, name, email, role, availability, status
        FROM users
        WHERE role IN ('Faculty', 'HOD')
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Loaded {} faculty members", users.len());
    users.into_iter().map(DbUser::into_faculty).collect()
}

pub async fn get_all_rooms(pool: &Pool<Postgres>) -> Result<Vec<RoomInfo>> {
    let rooms = sqlx::query_as::<_, DbRoom>(
        r#"
        SELECT id, number
        FROM rooms
        ORDER BY number ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Loaded {} rooms", rooms.len());
    Ok(rooms.into_iter().map(RoomInfo::from).collect())
}
