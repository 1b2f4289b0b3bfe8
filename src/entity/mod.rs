//! Entity module - SeaORM entity definitions
//!
//! One module per directory table, plus the joined read models the API
//! serves verbatim.

pub mod contact_information;
pub mod department;
pub mod grievance_category;
pub mod personnel;
pub mod role;
pub mod role_detail;
pub mod rts_service;
pub mod ward;
