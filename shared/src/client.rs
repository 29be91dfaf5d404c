//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.
//! The wire contract is flat JSON; serde aliases absorb the field-name
//! drift of older backends (`access_token`, `msg`).

use serde::{Deserialize, Serialize};

use crate::models::EmployeeRecord;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
}

/// Generic status message returned by mutation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(alias = "msg")]
    pub message: String,
}

// =============================================================================
// Employee API DTOs
// =============================================================================

/// Response body of `GET /employees`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    pub employees: Vec<EmployeeRecord>,
}

/// Report export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    /// File extension for the exported report
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    /// URL path segment of the export endpoint
    pub fn path_segment(&self) -> &'static str {
        self.extension()
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_accepts_access_token_alias() {
        let canonical: LoginResponse = serde_json::from_str(r#"{"token": "T1"}"#).unwrap();
        let legacy: LoginResponse = serde_json::from_str(r#"{"access_token": "T1"}"#).unwrap();
        assert_eq!(canonical.token, "T1");
        assert_eq!(legacy.token, "T1");
    }

    #[test]
    fn status_response_accepts_msg_alias() {
        let legacy: StatusResponse = serde_json::from_str(r#"{"msg": "Employee added"}"#).unwrap();
        assert_eq!(legacy.message, "Employee added");
    }

    #[test]
    fn employee_list_parses() {
        let json = r#"{"employees": [
            {"id": 1, "name": "Bob", "role": "Eng", "productivity": 80, "rating": 4, "feedback": "good"}
        ]}"#;
        let list: EmployeeListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.employees.len(), 1);
        assert_eq!(list.employees[0].name, "Bob");
    }
}
