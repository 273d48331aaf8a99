//! Products API: REST backend for a single products resource on PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{NewProduct, Product};
pub use response::{ApiData, ApiDatum, SelfLink};
pub use routes::{app, common_routes, product_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, PgProductStore, ProductStore};
