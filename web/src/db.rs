use anyhow::Result;
use sqlx::SqlitePool;

pub async fn pool(db: &str) -> Result<SqlitePool> {
    Ok(SqlitePool::connect(&format!("sqlite://{}?mode=rwc", db)).await?)
}
