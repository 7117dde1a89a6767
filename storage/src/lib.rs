//! Storage crate: the auto-parts catalog in SQLite.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Part
//! - [`repository`] – PartCatalog trait (read seam used by the bot)
//! - [`catalog_repo`] – CatalogRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod catalog_repo;
mod error;
mod models;
mod repository;
mod sqlite_pool;


pub use catalog_repo::CatalogRepository;
pub use error::StorageError;
pub use models::Part;
pub use repository::PartCatalog;
pub use sqlite_pool::SqlitePoolManager;
