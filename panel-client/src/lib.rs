//! Panel Client - HTTP client for the admin panel API
//!
//! Provides typed network calls to the employee productivity backend.

pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::PanelClient;
pub use session::{Session, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{EmployeeListResponse, ExportFormat, LoginResponse, StatusResponse};
pub use shared::models::{EmployeeCreate, EmployeeRecord, EmployeeUpdate};
