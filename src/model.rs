//! Product row and create payload.

use serde::{Deserialize, Serialize};

/// A stored product. `id` is assigned by the database and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Body of `POST /products`. Extra fields in the request are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
}
