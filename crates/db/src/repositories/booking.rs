use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::{DbBooking, DbBookingWithClass};

const BOOKING_COLUMNS: &str =
    "id, class_id, customer_name, customer_email, customer_phone, status, created_at, cancelled_at";

/// Inserts a confirmed booking. No capacity check: two concurrent
/// reservations against a nearly-full class may both land. See
/// [`create_booking_if_capacity`] for the conditional variant.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    class_id: Uuid,
    customer_name: &str,
    customer_email: &str,
    customer_phone: Option<&str>,
) -> Result<DbBooking> {
    let id = Uuid::new_v4();

    tracing::debug!("Creating booking: id={}, class_id={}", id, class_id);

    let booking = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        INSERT INTO bookings (id, class_id, customer_name, customer_email, customer_phone, status)
        VALUES ($1, $2, $3, $4, $5, 'confirmed')
        RETURNING {BOOKING_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(class_id)
    .bind(customer_name)
    .bind(customer_email)
    .bind(customer_phone)
    .fetch_one(pool)
    .await?;

    Ok(booking)
}

/// Single-statement conditional insert: the booking lands only while the
/// confirmed count is below the class capacity. Returns `None` when the
/// class is full or missing.
pub async fn create_booking_if_capacity(
    pool: &Pool<Postgres>,
    class_id: Uuid,
    customer_name: &str,
    customer_email: &str,
    customer_phone: Option<&str>,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();

    let booking = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        INSERT INTO bookings (id, class_id, customer_name, customer_email, customer_phone, status)
        SELECT $1, c.id, $3, $4, $5, 'confirmed'
        FROM classes c
        WHERE c.id = $2
          AND (SELECT COUNT(*) FROM bookings b
               WHERE b.class_id = c.id AND b.status = 'confirmed') < c.capacity
        RETURNING {BOOKING_COLUMNS}
        "#,
    ))
    .bind(id)
    .bind(class_id)
    .bind(customer_name)
    .bind(customer_email)
    .bind(customer_phone)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

/// Admin bookings list, newest first, joined with class name and start time.
pub async fn list_bookings(
    pool: &Pool<Postgres>,
    class_id: Option<Uuid>,
) -> Result<Vec<DbBookingWithClass>> {
    let bookings = if let Some(class_id) = class_id {
        sqlx::query_as::<_, DbBookingWithClass>(
            r#"
            SELECT b.id, b.class_id, b.customer_name, b.customer_email, b.customer_phone,
                   b.status, b.created_at, b.cancelled_at,
                   c.name AS class_name, c.start_time AS class_start_time
            FROM bookings b
            LEFT JOIN classes c ON c.id = b.class_id
            WHERE b.class_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(class_id)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, DbBookingWithClass>(
            r#"
            SELECT b.id, b.class_id, b.customer_name, b.customer_email, b.customer_phone,
                   b.status, b.created_at, b.cancelled_at,
                   c.name AS class_name, c.start_time AS class_start_time
            FROM bookings b
            LEFT JOIN classes c ON c.id = b.class_id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?
    };

    Ok(bookings)
}

/// Transitions a booking to `cancelled`. The cancellation timestamp is set
/// once and kept on repeat cancels, so the operation is idempotent in effect.
/// Returns `None` when the booking does not exist.
pub async fn cancel_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    tracing::debug!("Cancelling booking: id={}", id);

    let booking = sqlx::query_as::<_, DbBooking>(&format!(
        r#"
        UPDATE bookings
        SET status = 'cancelled', cancelled_at = COALESCE(cancelled_at, NOW())
        WHERE id = $1
        RETURNING {BOOKING_COLUMNS}
        "#,
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}
