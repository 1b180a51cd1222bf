use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    pub fn identity(&self) -> AccountIdentity {
        AccountIdentity {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// The signed-in account's name and email. Layouts fall back to these when
/// the editable personal details are empty, and the cover-letter prompt
/// carries them as context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountIdentity {
    pub name: String,
    pub email: String,
}

pub async fn find_user(pool: &PgPool, id: Uuid) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>("SELECT id, name, email, created_at FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
