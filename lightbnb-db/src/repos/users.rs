//! User repository
//!
//! - find_by_email / find_by_id: single-row SELECT, `None` when absent
//! - create: INSERT ... RETURNING, duplicate email is a `UniqueViolation`

use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by exact email.
    #[instrument(skip_all)]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        debug!(found = user.is_some(), "user lookup by email");
        Ok(user)
    }

    /// Get a user by id.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Register a user, returning the stored row.
    ///
    /// Email uniqueness is left to the `users.email` constraint; a duplicate
    /// fails with [`crate::DbError::UniqueViolation`].
    #[instrument(skip_all)]
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await?;

        debug!(user_id = created.id, "user created");
        Ok(created)
    }
}
