use campussync_core::models::time_slot::{BREAK_SLOT_TYPE, TimeSlotRecord};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbTimeSlotRow;

/// Time slots joined with everything the views display about them.
pub(crate) const JOINED_SLOTS: &str = r#"
    SELECT ts.id, ts.timetable_id, t.name AS timetable_name,
           ts.day, ts.start_time, ts.end_time,
           st.id AS slot_type_id, st.name AS slot_type_name,
           sub.id AS subject_id, sub.name AS subject_name, sub.short_name AS subject_short_name,
           r.id AS room_id, r.number AS room_number,
           f.id AS faculty_id, f.name AS faculty_name,
           b.id AS batch_id, b.name AS batch_name
    FROM time_slots ts
    JOIN timetables t ON t.id = ts.timetable_id
    JOIN slot_types st ON st.id = ts.slot_type_id
    LEFT JOIN subjects sub ON sub.id = ts.subject_id
    LEFT JOIN rooms r ON r.id = ts.room_id
    LEFT JOIN users f ON f.id = ts.faculty_id
    LEFT JOIN batches b ON b.id = ts.batch_id
"#;

/// Every slot of every timetable except those typed as breaks.
pub async fn get_all_time_slots(pool: &Pool<Postgres>) -> Result<Vec<TimeSlotRecord>> {
    let sql = format!(
        "{} WHERE st.name <> $1 ORDER BY ts.start_time ASC, ts.id ASC",
        JOINED_SLOTS
    );

    let rows = sqlx::query_as::<_, DbTimeSlotRow>(&sql)
        .bind(BREAK_SLOT_TYPE)
        .fetch_all(pool)
        .await?;

    tracing::debug!("Loaded {} time slots across all timetables", rows.len());
    rows.into_iter().map(DbTimeSlotRow::into_record).collect()
}

/// Slots of every timetable assigned to a group the user belongs to. A slot
/// shared by several of the user's groups comes back once per group.
pub async fn get_time_slots_for_member(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<TimeSlotRecord>> {
    let sql = format!(
        r#"{}
        JOIN group_timetables gt ON gt.timetable_id = ts.timetable_id
        JOIN group_members gm ON gm.group_id = gt.group_id
        WHERE gm.user_id = $1
        ORDER BY ts.start_time ASC, ts.id ASC"#,
        JOINED_SLOTS
    );

    let rows = sqlx::query_as::<_, DbTimeSlotRow>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    tracing::debug!("Loaded {} group slots for user {}", rows.len(), user_id);
    rows.into_iter().map(DbTimeSlotRow::into_record).collect()
}

pub async fn get_time_slot_by_id(
    pool: &Pool<Postgres>,
    slot_id: Uuid,
) -> Result<Option<TimeSlotRecord>> {
    let sql = format!("{} WHERE ts.id = $1", JOINED_SLOTS);

    let row = sqlx::query_as::<_, DbTimeSlotRow>(&sql)
        .bind(slot_id)
        .fetch_optional(pool)
        .await?;

    row.map(DbTimeSlotRow::into_record).transpose()
}
