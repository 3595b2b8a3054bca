use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Postgres unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupInsert {
    Inserted,
    /// The address is already on the list; treated as success, not an error.
    AlreadySubscribed,
}

pub async fn insert_signup(pool: &Pool<Postgres>, email: &str) -> Result<SignupInsert> {
    let id = Uuid::new_v4();

    let result = sqlx::query("INSERT INTO email_signups (id, email) VALUES ($1, $2)")
        .bind(id)
        .bind(email)
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(SignupInsert::Inserted),
        Err(sqlx::Error::Database(db_err))
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
        {
            tracing::debug!("Signup already on the list: {}", email);
            Ok(SignupInsert::AlreadySubscribed)
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn count_subscribers(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM email_signups")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

pub async fn list_subscriber_emails(pool: &Pool<Postgres>) -> Result<Vec<String>> {
    let emails =
        sqlx::query_scalar::<_, String>("SELECT email FROM email_signups ORDER BY created_at ASC")
            .fetch_all(pool)
            .await?;

    Ok(emails)
}
