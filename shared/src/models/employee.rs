//! Employee Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee record as returned by the server.
///
/// `id` is assigned by the server and never mutated client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
    pub role: String,
    /// Productivity score, 0-100
    pub productivity: f64,
    /// Rating, 0-5 (optional)
    #[serde(default)]
    pub rating: Option<f64>,
    /// Free-text feedback (optional)
    #[serde(default)]
    pub feedback: Option<String>,
    /// Server-side timestamp of the last mutation
    #[serde(default, alias = "updated_at")]
    pub last_updated: Option<String>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeCreate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "role must not be empty"))]
    pub role: String,
    #[validate(range(min = 0.0, max = 100.0, message = "productivity must be in [0,100]"))]
    pub productivity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be in [0,5]"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Update employee payload (full replace of the mutable fields)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EmployeeUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "role must not be empty"))]
    pub role: String,
    pub feedback: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be in [0,5]"))]
    pub rating: Option<f64>,
}
