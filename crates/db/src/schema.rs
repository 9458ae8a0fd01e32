use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create time_slots table. The CHECK constraints back up the invariants
    // the core enforces before anything reaches the database.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS time_slots (
            id UUID PRIMARY KEY,
            class_id VARCHAR(255) NOT NULL,
            teacher_id VARCHAR(255) NOT NULL,
            day_of_week SMALLINT NOT NULL,
            subject VARCHAR(255) NOT NULL,
            lecture_type VARCHAR(32) NOT NULL,
            start_minute SMALLINT NOT NULL,
            duration_minutes SMALLINT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_day CHECK (day_of_week BETWEEN 0 AND 5),
            CONSTRAINT valid_duration CHECK (duration_minutes BETWEEN 30 AND 180),
            CONSTRAINT fits_within_day CHECK (start_minute >= 0 AND start_minute + duration_minutes <= 1439)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes (one statement per query; prepared statements do not
    // allow batching)
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_time_slots_class_day ON time_slots(class_id, day_of_week)",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_time_slots_teacher_day ON time_slots(teacher_id, day_of_week)",
    )
    .execute(pool)
    .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_time_slots_day ON time_slots(day_of_week)")
        .execute(pool)
        .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
