//! Part model.
//!
//! Maps to the `parts` table and is returned by CatalogRepository.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Part {
    pub id: i64,
    pub name: String,
    pub price: f64,
}
