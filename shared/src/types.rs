//! API request and response types

use crate::models::{default_enrolled, Student};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response carrying the signed token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Identity asserted by the presented token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub username: String,
}

/// Student body accepted by create and update
///
/// `name` and `email` default to empty so a missing field is reported as a
/// validation failure rather than a JSON parse error.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::validate_not_blank", message = "Student name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default = "default_enrolled")]
    pub enrolled: bool,
}

impl StudentPayload {
    /// Build a record with the given id, ignoring any id in the body
    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            course: self.course,
            age: self.age,
            phone_number: self.phone_number,
            enrolled: self.enrolled,
        }
    }
}

impl From<Student> for StudentPayload {
    fn from(student: Student) -> Self {
        Self {
            id: Some(student.id),
            name: student.name,
            email: student.email,
            course: student.course,
            age: student.age,
            phone_number: student.phone_number,
            enrolled: student.enrolled,
        }
    }
}
