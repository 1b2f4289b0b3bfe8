//! Haryana ULB directory - organizational structure lookup for urban local bodies
//!
//! This crate serves the department hierarchies of the Urban Local Bodies
//! Department, the Municipal Corporation Gurugram, and the Gurugram
//! Metropolitan Development Authority, along with role, personnel,
//! grievance, and Right to Service lookups.

pub mod cache;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod hierarchy;
pub mod matching;
pub mod routes;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
