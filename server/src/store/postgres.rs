//! Postgres storage backend.
//!
//! Runtime-checked sqlx queries over the schema in `migrations/`. Template
//! elements are stored as a JSONB column; likes are a composite-key table
//! so counting and toggling stay single statements.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::model::{Comment, Session, StoredImage, Template, TemplateElement, User, UserRecord};
use crate::store::{Storage, StoreError};

/// Storage backed by a Postgres pool.
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, size the pool, and run migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migrations fail.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        sqlx::migrate!("src/store/migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

type TemplateRow = (Uuid, String, String, serde_json::Value, OffsetDateTime, Uuid);

fn row_to_template(row: TemplateRow) -> Result<Template, StoreError> {
    let (id, title, description, elements, created_at, user_id) = row;
    let elements: Vec<TemplateElement> = serde_json::from_value(elements)?;
    Ok(Template { id, title, description, elements, created_at, user_id })
}

const TEMPLATE_COLUMNS: &str = "id, title, description, elements, created_at, user_id";

#[async_trait]
impl Storage for PgStorage {
    // --- Users ---

    async fn put_user(&self, record: UserRecord) -> Result<(), StoreError> {
        sqlx::query(
            r"INSERT INTO users (id, email, username, full_name, password_salt, password_hash)
              VALUES ($1, $2, $3, $4, $5, $6)
              ON CONFLICT (id) DO UPDATE SET
                  email = EXCLUDED.email, username = EXCLUDED.username,
                  full_name = EXCLUDED.full_name,
                  password_salt = EXCLUDED.password_salt, password_hash = EXCLUDED.password_hash",
        )
        .bind(record.user.id)
        .bind(&record.user.email)
        .bind(&record.user.username)
        .bind(&record.user.full_name)
        .bind(&record.password_salt)
        .bind(&record.password_hash)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, StoreError> {
        self.user_where("id = $1", UserKey::Id(id)).await
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        self.user_where("email = $1", UserKey::Text(email)).await
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        self.user_where("username = $1", UserKey::Text(username)).await
    }

    // --- Sessions ---

    async fn put_session(&self, session: Session) -> Result<(), StoreError> {
        sqlx::query(
            r"INSERT INTO sessions (token, user_id, expires_at) VALUES ($1, $2, $3)
              ON CONFLICT (token) DO UPDATE SET expires_at = EXCLUDED.expires_at",
        )
        .bind(&session.token)
        .bind(session.user_id)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn session_by_token(&self, token: &str) -> Result<Option<Session>, StoreError> {
        let row = sqlx::query_as::<_, (String, Uuid, OffsetDateTime)>(
            "SELECT token, user_id, expires_at FROM sessions WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(token, user_id, expires_at)| Session { token, user_id, expires_at }))
    }

    async fn delete_session(&self, token: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // --- Templates ---

    async fn put_template(&self, template: Template) -> Result<(), StoreError> {
        let elements = serde_json::to_value(&template.elements)?;
        sqlx::query(
            r"INSERT INTO templates (id, title, description, elements, created_at, user_id)
              VALUES ($1, $2, $3, $4, $5, $6)
              ON CONFLICT (id) DO UPDATE SET
                  title = EXCLUDED.title, description = EXCLUDED.description,
                  elements = EXCLUDED.elements",
        )
        .bind(template.id)
        .bind(&template.title)
        .bind(&template.description)
        .bind(elements)
        .bind(template.created_at)
        .bind(template.user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn template_by_id(&self, id: Uuid) -> Result<Option<Template>, StoreError> {
        let row = sqlx::query_as::<_, TemplateRow>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(row_to_template).transpose()
    }

    async fn delete_template(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_templates(&self, offset: i64, limit: i64) -> Result<(Vec<Template>, i64), StoreError> {
        let rows = sqlx::query_as::<_, TemplateRow>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates
             ORDER BY created_at DESC, id ASC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM templates")
            .fetch_one(&self.pool)
            .await?;

        let templates = rows.into_iter().map(row_to_template).collect::<Result<_, _>>()?;
        Ok((templates, total))
    }

    async fn search_templates(
        &self,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Template>, i64), StoreError> {
        let pattern = format!("%{query}%");
        let rows = sqlx::query_as::<_, TemplateRow>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates
             WHERE title ILIKE $1 OR description ILIKE $1
             ORDER BY created_at DESC, id ASC LIMIT $2 OFFSET $3"
        ))
        .bind(&pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM templates WHERE title ILIKE $1 OR description ILIKE $1",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await?;

        let templates = rows.into_iter().map(row_to_template).collect::<Result<_, _>>()?;
        Ok((templates, total))
    }

    async fn templates_by_owner(&self, user_id: Uuid) -> Result<Vec<Template>, StoreError> {
        let rows = sqlx::query_as::<_, TemplateRow>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates
             WHERE user_id = $1 ORDER BY created_at DESC, id ASC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(row_to_template).collect()
    }

    // --- Likes ---

    async fn insert_like(&self, template_id: Uuid, user_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query(
            "INSERT INTO likes (template_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(template_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_like(&self, template_id: Uuid, user_id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM likes WHERE template_id = $1 AND user_id = $2")
            .bind(template_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn like_count(&self, template_id: Uuid) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE template_id = $1")
            .bind(template_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn has_liked(&self, template_id: Uuid, user_id: Uuid) -> Result<bool, StoreError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE template_id = $1 AND user_id = $2)",
        )
        .bind(template_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    // --- Comments ---

    async fn add_comment(&self, template_id: Uuid, comment: Comment) -> Result<(), StoreError> {
        sqlx::query(
            r"INSERT INTO comments (id, template_id, content, user_id, username, created_at)
              VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(comment.id)
        .bind(template_id)
        .bind(&comment.content)
        .bind(comment.user_id)
        .bind(&comment.username)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn comments_for(&self, template_id: Uuid) -> Result<Vec<Comment>, StoreError> {
        let rows = sqlx::query_as::<_, (Uuid, String, Uuid, String, OffsetDateTime)>(
            r"SELECT id, content, user_id, username, created_at
              FROM comments WHERE template_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(template_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, content, user_id, username, created_at)| Comment {
                id,
                content,
                user_id,
                username,
                created_at,
            })
            .collect())
    }

    // --- Images ---

    async fn put_image(&self, image: StoredImage) -> Result<(), StoreError> {
        sqlx::query(
            r"INSERT INTO images (id, content_type, bytes) VALUES ($1, $2, $3)
              ON CONFLICT (id) DO UPDATE SET content_type = EXCLUDED.content_type, bytes = EXCLUDED.bytes",
        )
        .bind(image.id)
        .bind(&image.content_type)
        .bind(&image.bytes)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn image_by_id(&self, id: Uuid) -> Result<Option<StoredImage>, StoreError> {
        let row = sqlx::query_as::<_, (Uuid, String, Vec<u8>)>(
            "SELECT id, content_type, bytes FROM images WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(id, content_type, bytes)| StoredImage { id, content_type, bytes }))
    }
}

enum UserKey<'a> {
    Id(Uuid),
    Text(&'a str),
}

impl PgStorage {
    async fn user_where(&self, predicate: &str, key: UserKey<'_>) -> Result<Option<UserRecord>, StoreError> {
        let sql = format!(
            "SELECT id, email, username, full_name, password_salt, password_hash
             FROM users WHERE {predicate}"
        );
        let query = sqlx::query_as::<_, (Uuid, String, String, String, String, String)>(&sql);
        let query = match key {
            UserKey::Id(id) => query.bind(id),
            UserKey::Text(text) => query.bind(text),
        };
        let row = query.fetch_optional(&self.pool).await?;
        Ok(row.map(|(id, email, username, full_name, password_salt, password_hash)| UserRecord {
            user: User { id, email, username, full_name },
            password_salt,
            password_hash,
        }))
    }
}
