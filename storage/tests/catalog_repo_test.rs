//! Integration tests for [`parts_storage::CatalogRepository`].
//!
//! Covers listing through the PartCatalog trait, persistence across reopen, and read failures.

use parts_storage::{CatalogRepository, Part, PartCatalog, StorageError};
use tempfile::TempDir;

/// **Test: Parts come back in id order with their stored values.**
#[tokio::test]
async fn test_list_parts_returns_rows_in_order() {
    let repo = CatalogRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository");

    repo.add_part("Filter", 10.5).await.unwrap();
    repo.add_part("Brake Pad", 25.0).await.unwrap();

    let parts = repo.list_parts().await.expect("list_parts failed");

    assert_eq!(
        parts,
        vec![
            Part {
                id: 1,
                name: "Filter".to_string(),
                price: 10.5,
            },
            Part {
                id: 2,
                name: "Brake Pad".to_string(),
                price: 25.0,
            },
        ]
    );
}

/// **Test: Empty table lists as an empty vector.**
#[tokio::test]
async fn test_list_parts_empty() {
    let repo = CatalogRepository::new(":memory:")
        .await
        .expect("Failed to create repository");

    assert!(repo.list_parts().await.unwrap().is_empty());
}

/// **Test: A file store keeps its rows when reopened, and reopening does not clobber the schema.**
#[tokio::test]
async fn test_file_store_survives_reopen() {
    let temp_dir = TempDir::new().expect("TempDir::new failed");
    let database_url = format!("sqlite:{}/auto_parts.db", temp_dir.path().display());

    {
        let repo = CatalogRepository::new(&database_url).await.unwrap();
        repo.add_part("Spark Plug", 4.2).await.unwrap();
    }

    let repo = CatalogRepository::new(&database_url).await.unwrap();
    let parts = repo.list_parts().await.unwrap();

    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "Spark Plug");
}

/// **Test: A broken table surfaces as a Database error instead of panicking.**
#[tokio::test]
async fn test_list_parts_reports_database_error() {
    let repo = CatalogRepository::new(":memory:")
        .await
        .expect("Failed to create repository");

    drop_catalog_tables(&repo).await;

    let result = repo.list_parts().await;
    assert!(matches!(result, Err(StorageError::Database(_))));
}

async fn drop_catalog_tables(repo: &CatalogRepository) {
    // orders references parts; drop it first so the foreign key does not object.
    for statement in ["DROP TABLE orders", "DROP TABLE parts"] {
        sqlx::query(statement)
            .execute(repo.pool())
            .await
            .expect("drop failed");
    }
}
