//! Catalog repository: schema and queries for the parts catalog.
//!
//! Uses SqlitePoolManager and the Part model.
//! External: SQLite via sqlx; the bot calls list_parts, the admin CLI calls add_part.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::Part;
use crate::repository::PartCatalog;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone, Debug)]
pub struct CatalogRepository {
    pool_manager: SqlitePoolManager,
}

impl CatalogRepository {
    /// Opens the store and ensures the schema exists.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let repo = Self::open(database_url).await?;
        repo.ensure_schema().await?;
        Ok(repo)
    }

    /// Opens the store without touching the schema.
    pub async fn open(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        Ok(Self { pool_manager })
    }

    /// Creates the `parts` and `orders` tables if they do not exist.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        info!("Creating catalog tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS parts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                price REAL NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Orders are declared for the shop schema; nothing in the bot reads or writes them.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                part_id INTEGER NOT NULL,
                quantity INTEGER NOT NULL,
                FOREIGN KEY (part_id) REFERENCES parts(id)
            )
            "#,
        )
        .execute(pool)
        .await?;

        info!("Catalog tables ready");
        Ok(())
    }

    /// Inserts a part and returns it with its assigned id.
    pub async fn add_part(&self, name: &str, price: f64) -> Result<Part, StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StorageError::InvalidInput("part name is empty".to_string()));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(StorageError::InvalidInput(format!(
                "price must be a non-negative number, got {}",
                price
            )));
        }

        let result = sqlx::query("INSERT INTO parts (name, price) VALUES (?, ?)")
            .bind(name)
            .bind(price)
            .execute(self.pool_manager.pool())
            .await?;

        let part = Part {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            price,
        };
        info!(part_id = part.id, name = %part.name, price = part.price, "Added part");
        Ok(part)
    }

    /// Returns the underlying pool (admin tooling and tests).
    pub fn pool(&self) -> &sqlx::SqlitePool {
        self.pool_manager.pool()
    }
}

#[async_trait]
impl PartCatalog for CatalogRepository {
    async fn list_parts(&self) -> Result<Vec<Part>, StorageError> {
        let parts = sqlx::query_as::<_, Part>("SELECT id, name, price FROM parts ORDER BY id")
            .fetch_all(self.pool_manager.pool())
            .await?;

        debug!(count = parts.len(), "Loaded parts");
        Ok(parts)
    }
}
