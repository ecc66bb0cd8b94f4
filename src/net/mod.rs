//! Network boundary: REST helpers and the serde DTOs they exchange.

pub mod api;
pub mod types;
