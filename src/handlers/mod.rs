//! HTTP handlers.

pub mod products;
