use chrono::Utc;
use eyre::Result;
use seenfit_core::models::class::ClassFields;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbClass;

const CLASS_COLUMNS: &str =
    "id, name, type, instructor, description, start_time, duration_minutes, capacity, price_cents, created_at";

pub async fn create_class(pool: &Pool<Postgres>, fields: &ClassFields) -> Result<DbClass> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating class: id={}, name={}, start_time={}",
        id,
        fields.name,
        fields.start_time
    );

    let class = sqlx::query_as::<_, DbClass>(&format!(
        r#"
        INSERT INTO classes (id, name, type, instructor, description, start_time, duration_minutes, capacity, price_cents)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {CLASS_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(&fields.name)
    .bind(&fields.class_type)
    .bind(&fields.instructor)
    .bind(&fields.description)
    .bind(fields.start_time)
    .bind(fields.duration_minutes)
    .bind(fields.capacity)
    .bind(fields.price_cents)
    .fetch_one(pool)
    .await?;

    tracing::debug!("Class created successfully: id={}", id);
    Ok(class)
}

pub async fn get_class_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbClass>> {
    tracing::debug!("Getting class by id: {}", id);

    let class = sqlx::query_as::<_, DbClass>(&format!(
        r#"
        SELECT {CLASS_COLUMNS}
        FROM classes
        WHERE id = $1
        "#,
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(class)
}

/// Upcoming classes only: past sessions simply stop matching the
/// `start_time >= now` filter, there is no expiry flag.
pub async fn list_upcoming_classes(pool: &Pool<Postgres>) -> Result<Vec<DbClass>> {
    let classes = sqlx::query_as::<_, DbClass>(&format!(
        r#"
        SELECT {CLASS_COLUMNS}
        FROM classes
        WHERE start_time >= $1
        ORDER BY start_time ASC
        "#,
    ))
    .bind(Utc::now())
    .fetch_all(pool)
    .await?;

    Ok(classes)
}

/// Full-row update in one statement; concurrent admin edits are
/// last-write-wins. Returns `None` when the class no longer exists.
pub async fn update_class(
    pool: &Pool<Postgres>,
    id: Uuid,
    fields: &ClassFields,
) -> Result<Option<DbClass>> {
    tracing::debug!("Updating class: id={}", id);

    let class = sqlx::query_as::<_, DbClass>(&format!(
        r#"
        UPDATE classes
        SET name = $2, type = $3, instructor = $4, description = $5,
            start_time = $6, duration_minutes = $7, capacity = $8, price_cents = $9
        WHERE id = $1
        RETURNING {CLASS_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(&fields.name)
    .bind(&fields.class_type)
    .bind(&fields.instructor)
    .bind(&fields.description)
    .bind(fields.start_time)
    .bind(fields.duration_minutes)
    .bind(fields.capacity)
    .bind(fields.price_cents)
    .fetch_optional(pool)
    .await?;

    Ok(class)
}

/// Deletes the class; dependent bookings go with it via the schema's
/// `ON DELETE CASCADE`. Returns whether a row was removed.
pub async fn delete_class(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    tracing::debug!("Deleting class: id={}", id);

    let result = sqlx::query("DELETE FROM classes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
