//! Schema bootstrap for the `users` table.
//!
//! The HTTP surface never creates tables; this is run by operators through
//! the CLI and by the test suite.

use sqlx::AnyConnection;
use tracing::info;

use scanbench_core::error::{AppError, ErrorKind};
use scanbench_core::result::AppResult;

use crate::connection::{DatabaseGateway, close};

const MYSQL_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (\
    id BIGINT AUTO_INCREMENT PRIMARY KEY, \
    username VARCHAR(255) NOT NULL, \
    password VARCHAR(255) NOT NULL, \
    email VARCHAR(255) NULL)";

const SQLITE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (\
    id INTEGER PRIMARY KEY AUTOINCREMENT, \
    username TEXT NOT NULL, \
    password TEXT NOT NULL, \
    email TEXT)";

/// Create the `users` table if it does not exist yet.
pub async fn ensure_schema(gateway: &DatabaseGateway) -> AppResult<()> {
    let mut conn = gateway.connect().await?;
    let result = create_users_table(&mut conn).await;
    close(conn).await;
    result?;

    info!("Users table is present");
    Ok(())
}

async fn create_users_table(conn: &mut AnyConnection) -> AppResult<()> {
    let ddl = users_table_ddl(conn.backend_name());

    sqlx::query(ddl).execute(&mut *conn).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to create users table", e)
    })?;

    Ok(())
}

fn users_table_ddl(backend: &str) -> &'static str {
    if backend.eq_ignore_ascii_case("sqlite") {
        SQLITE_USERS_TABLE
    } else {
        MYSQL_USERS_TABLE
    }
}
