//! Activity log — the audit trail behind the admin views.
//!
//! Recording is fire-and-forget: a failed insert is logged and swallowed so
//! auditing can never break the user-facing operation it annotates.

use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

/// Inserts one activity row, resolving the user's display name in the same
/// statement. Unknown users insert nothing.
pub async fn record(pool: &PgPool, user_id: Uuid, action: &str, details: &str) {
    let result = sqlx::query(
        r#"
        INSERT INTO activity_logs (id, user_id, user_name, action, details, timestamp)
        SELECT $1, u.id, u.name, $2, $3, now()
        FROM users u
        WHERE u.id = $4
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(action)
    .bind(details)
    .bind(user_id)
    .execute(pool)
    .await;

    if let Err(e) = result {
        warn!("failed to record {action} activity: {e}");
    }
}
