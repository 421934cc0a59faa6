use crate::Result;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteQueryResult;
use sqlx::{Pool, Sqlite};

/// A single published content item. The schema guarantees a non-empty
/// title, which the location resolver relies on as its final label
/// fallback.
#[derive(Debug, sqlx::FromRow, Deserialize, Serialize)]
pub struct Post {
    #[sqlx(rename = "postid")]
    pub id: i64,
    pub title: String,
    #[sqlx(default)]
    pub body: Option<String>,
    pub created: String,
}

impl Post {
    pub async fn fetch(id: i64, pool: &Pool<Sqlite>) -> Result<Post> {
        Ok(
            sqlx::query_as("SELECT postid, title, body, created FROM gp_posts WHERE postid = ?")
                .bind(id)
                .fetch_one(pool)
                .await?,
        )
    }

    pub async fn fetch_all(pool: &Pool<Sqlite>) -> Result<Vec<Post>> {
        Ok(sqlx::query_as(
            "SELECT postid, title, body, created FROM gp_posts ORDER BY created DESC, postid DESC",
        )
        .fetch_all(pool)
        .await?)
    }

    pub async fn insert(&self, pool: &Pool<Sqlite>) -> Result<SqliteQueryResult> {
        if self.id != -1 {
            return Err(crate::Error::InvalidOperationObjectAlreadyExists(self.id));
        }

        Ok(sqlx::query("INSERT INTO gp_posts (title, body) VALUES (?, ?)")
            .bind(&self.title)
            .bind(&self.body)
            .execute(pool)
            .await?)
    }

    pub fn new(title: String, body: Option<String>) -> Self {
        Self {
            id: -1,
            title,
            body,
            created: Default::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sqlx::Pool;
    use test_log::test;

    #[test(sqlx::test(
        migrations = "../db/migrations/",
        fixtures(path = "../../db/fixtures", scripts("posts"))
    ))]
    async fn fetch_posts(pool: Pool<Sqlite>) {
        let posts = Post::fetch_all(&pool).await.expect("Failed to list posts");
        assert_eq!(posts.len(), 4);

        let post = Post::fetch(1, &pool).await.expect("Failed to fetch post");
        assert_eq!(post.title, "Eiffel Tower");

        let missing = Post::fetch(999, &pool).await;
        assert!(matches!(
            missing,
            Err(crate::Error::DatabaseRowNotFound(_))
        ));
    }

    #[test(sqlx::test(migrations = "../db/migrations/"))]
    async fn insert_post(pool: Pool<Sqlite>) {
        let post = Post::new("Hello".to_string(), Some("First post".to_string()));
        post.insert(&pool).await.expect("Failed to insert post");

        let posts = Post::fetch_all(&pool).await.expect("Failed to list posts");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
        assert!(!posts[0].created.is_empty());

        // an already-persisted post can't be inserted again
        assert!(posts[0].insert(&pool).await.is_err());
    }
}
