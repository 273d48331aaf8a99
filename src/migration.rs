//! Products table DDL. Safe to run on every start.

use crate::error::AppError;
use sqlx::PgPool;

const CREATE_PRODUCTS: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        price DOUBLE PRECISION NOT NULL,
        description TEXT NOT NULL
    )
"#;

pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(CREATE_PRODUCTS).execute(pool).await?;
    tracing::info!("products table ready");
    Ok(())
}
