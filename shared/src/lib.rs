//! Shared types for the admin panel
//!
//! Common types used by both the API client and the console front end:
//! employee models, auth DTOs and the export format.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{
    EmployeeListResponse, ExportFormat, LoginRequest, LoginResponse, StatusResponse,
};
pub use models::{EmployeeCreate, EmployeeRecord, EmployeeUpdate};
