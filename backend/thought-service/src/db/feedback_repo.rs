use sqlx::PgPool;
use uuid::Uuid;

/// Append a feedback record. Feedback is write-only; no read path exists.
pub async fn insert_feedback(
    pool: &PgPool,
    message: &str,
    email: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO feedback (id, message, email)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(message)
    .bind(email)
    .execute(pool)
    .await?;

    Ok(())
}
