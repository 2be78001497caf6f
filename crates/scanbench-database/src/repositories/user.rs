//! User repository implementation.
//!
//! Every statement binds user input through `?` placeholders. Each method
//! opens its own connection and closes it before returning.

use sqlx::AnyConnection;
use sqlx::any::AnyQueryResult;

use scanbench_core::error::{AppError, ErrorKind};
use scanbench_core::result::AppResult;
use scanbench_entity::user::{User, UserProfile};

use crate::connection::{DatabaseGateway, close};

/// Repository for user lookup, search, and password updates.
#[derive(Debug, Clone)]
pub struct UserRepository {
    gateway: DatabaseGateway,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(gateway: DatabaseGateway) -> Self {
        Self { gateway }
    }

    /// Find a user by exact username, including the stored password hash.
    pub async fn find_credentials_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let mut conn = self.gateway.connect().await?;

        let result = sqlx::query_as::<_, User>(
            "SELECT id, username, password, email FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&mut conn)
        .await;

        close(conn).await;
        result.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
        })
    }

    /// Find the public profile of a user by primary key.
    pub async fn find_profile_by_id(&self, id: i64) -> AppResult<Option<UserProfile>> {
        let mut conn = self.gateway.connect().await?;

        let result = sqlx::query_as::<_, UserProfile>(
            "SELECT id, username, email FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await;

        close(conn).await;
        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Search users whose username contains `fragment`.
    ///
    /// The fragment is wrapped in `%` wildcards and bound as a parameter;
    /// case sensitivity follows the column collation. An empty fragment
    /// matches every row.
    pub async fn search_profiles(&self, fragment: &str) -> AppResult<Vec<UserProfile>> {
        let pattern = format!("%{fragment}%");
        let mut conn = self.gateway.connect().await?;

        let result = sqlx::query_as::<_, UserProfile>(
            "SELECT id, username, email FROM users WHERE username LIKE ? ORDER BY id",
        )
        .bind(&pattern)
        .fetch_all(&mut conn)
        .await;

        close(conn).await;
        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search users", e))
    }

    /// List every user profile.
    pub async fn list_profiles(&self) -> AppResult<Vec<UserProfile>> {
        let mut conn = self.gateway.connect().await?;

        let result =
            sqlx::query_as::<_, UserProfile>("SELECT id, username, email FROM users ORDER BY id")
                .fetch_all(&mut conn)
                .await;

        close(conn).await;
        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Replace the stored password hash. Returns the number of rows affected,
    /// which is zero for an unknown id.
    pub async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<u64> {
        let mut conn = self.gateway.connect().await?;

        let result = sqlx::query("UPDATE users SET password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&mut conn)
            .await;

        close(conn).await;
        result
            .map(|r: AnyQueryResult| r.rows_affected())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update password", e))
    }

    /// Insert a user with an already-hashed password and return its id.
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        email: Option<&str>,
    ) -> AppResult<i64> {
        let mut conn = self.gateway.connect().await?;

        let id = insert_user(&mut conn, username, password_hash, email).await;
        close(conn).await;
        id
    }
}

/// Run the insert and read back the generated id on the same connection.
///
/// The MySQL driver reports the id with the query result. SQLite through the
/// `Any` driver does not, so the rowid is read with `last_insert_rowid()`.
async fn insert_user(
    conn: &mut AnyConnection,
    username: &str,
    password_hash: &str,
    email: Option<&str>,
) -> AppResult<i64> {
    let result = sqlx::query("INSERT INTO users (username, password, email) VALUES (?, ?, ?)")
        .bind(username)
        .bind(password_hash)
        .bind(email)
        .execute(&mut *conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))?;

    if let Some(id) = result.last_insert_id() {
        return Ok(id);
    }
    if !conn.backend_name().eq_ignore_ascii_case("sqlite") {
        return Err(AppError::database("Database did not report the new user id"));
    }

    sqlx::query_scalar::<_, i64>("SELECT last_insert_rowid()")
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read the new user id", e)
        })
}
