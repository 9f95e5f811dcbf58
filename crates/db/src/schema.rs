use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            role VARCHAR(16) NOT NULL CHECK (role IN ('HOD', 'Faculty', 'Student')),
            availability VARCHAR(16) NOT NULL DEFAULT 'Active'
                CHECK (availability IN ('Active', 'Away', 'Busy')),
            status VARCHAR(100) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "sessions",
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            token VARCHAR(255) PRIMARY KEY,
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            expires_at TIMESTAMP WITH TIME ZONE NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "rooms",
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            number VARCHAR(64) NOT NULL UNIQUE
        );
        "#,
    ),
    (
        "subjects",
        r#"
        CREATE TABLE IF NOT EXISTS subjects (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            short_name VARCHAR(32) NOT NULL
        );
        "#,
    ),
    (
        "batches",
        r#"
        CREATE TABLE IF NOT EXISTS batches (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(64) NOT NULL UNIQUE
        );
        "#,
    ),
    (
        "slot_types",
        r#"
        CREATE TABLE IF NOT EXISTS slot_types (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(64) NOT NULL UNIQUE
        );
        "#,
    ),
    (
        "timetables",
        r#"
        CREATE TABLE IF NOT EXISTS timetables (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    ),
    (
        "time_slots",
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            timetable_id UUID NOT NULL REFERENCES timetables(id) ON DELETE CASCADE,
            day VARCHAR(9) NOT NULL CHECK (day IN (
                'Monday', 'Tuesday', 'Wednesday', 'Thursday', 'Friday', 'Saturday', 'Sunday'
            )),
            start_time VARCHAR(5) NOT NULL,
            end_time VARCHAR(5) NOT NULL,
            slot_type_id UUID NOT NULL REFERENCES slot_types(id),
            subject_id UUID NULL REFERENCES subjects(id) ON DELETE SET NULL,
            room_id UUID NULL REFERENCES rooms(id) ON DELETE SET NULL,
            faculty_id UUID NULL REFERENCES users(id) ON DELETE SET NULL,
            batch_id UUID NULL REFERENCES batches(id) ON DELETE SET NULL,
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    ),
    (
        "groups",
        r#"
        CREATE TABLE IF NOT EXISTS groups (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            code VARCHAR(32) NOT NULL UNIQUE,
            code_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_by UUID NULL REFERENCES users(id) ON DELETE SET NULL,
            default_role VARCHAR(16) NOT NULL DEFAULT 'Viewer'
                CHECK (default_role IN ('Editor', 'Viewer'))
        );
        "#,
    ),
    (
        "group_members",
        r#"
        CREATE TABLE IF NOT EXISTS group_members (
            group_id UUID NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            role VARCHAR(16) NOT NULL DEFAULT 'Viewer'
                CHECK (role IN ('Editor', 'Viewer')),
            joined_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (group_id, user_id)
        );
        "#,
    ),
    (
        "group_timetables",
        r#"
        CREATE TABLE IF NOT EXISTS group_timetables (
            group_id UUID NOT NULL REFERENCES groups(id) ON DELETE CASCADE,
            timetable_id UUID NOT NULL REFERENCES timetables(id) ON DELETE CASCADE,
            PRIMARY KEY (group_id, timetable_id)
        );
        "#,
    ),
    (
        "slot_type_preferences",
        r#"
        CREATE TABLE IF NOT EXISTS slot_type_preferences (
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            slot_type_id UUID NOT NULL REFERENCES slot_types(id) ON DELETE CASCADE,
            enabled BOOLEAN NOT NULL,
            PRIMARY KEY (user_id, slot_type_id)
        );
        "#,
    ),
    (
        "batch_preferences",
        r#"
        CREATE TABLE IF NOT EXISTS batch_preferences (
            user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            batch_id UUID NOT NULL REFERENCES batches(id) ON DELETE CASCADE,
            PRIMARY KEY (user_id, batch_id)
        );
        "#,
    ),
    (
        "lecture_summaries",
        r#"
        CREATE TABLE IF NOT EXISTS lecture_summaries (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            time_slot_id UUID NOT NULL REFERENCES time_slots(id) ON DELETE CASCADE,
            date DATE NOT NULL,
            content TEXT NOT NULL,
            notes TEXT NULL,
            author_id UUID NULL REFERENCES users(id) ON DELETE SET NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            UNIQUE (time_slot_id, date)
        );
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_sessions_user_id ON sessions(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_time_slots_timetable_id ON time_slots(timetable_id)",
    "CREATE INDEX IF NOT EXISTS idx_time_slots_faculty_id ON time_slots(faculty_id)",
    "CREATE INDEX IF NOT EXISTS idx_time_slots_room_id ON time_slots(room_id)",
    "CREATE INDEX IF NOT EXISTS idx_time_slots_day_start ON time_slots(day, start_time)",
    "CREATE INDEX IF NOT EXISTS idx_group_members_user_id ON group_members(user_id)",
    "CREATE INDEX IF NOT EXISTS idx_group_timetables_timetable_id ON group_timetables(timetable_id)",
    "CREATE INDEX IF NOT EXISTS idx_lecture_summaries_date ON lecture_summaries(date)",
];

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    for (table, ddl) in TABLES {
        tracing::debug!("Creating table {}", table);
        sqlx::query(ddl).execute(pool).await?;
    }

    // Prepared statements hold one command each.
    for ddl in INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
