//! Data models for the Student Records application

use serde::{Deserialize, Serialize};

/// A student record
///
/// The id is assigned by the client, not generated by storage. JSON field
/// names are camelCase (`phoneNumber`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: Option<String>,
    pub age: Option<i32>,
    pub phone_number: Option<String>,
    #[serde(default = "default_enrolled")]
    pub enrolled: bool,
}

/// New students are enrolled unless the client says otherwise
pub fn default_enrolled() -> bool {
    true
}

impl Student {
    /// Overwrite every mutable field from `other`, keeping this record's id
    pub fn overwrite_from(&mut self, other: Student) {
        self.name = other.name;
        self.email = other.email;
        self.course = other.course;
        self.age = other.age;
        self.phone_number = other.phone_number;
        self.enrolled = other.enrolled;
    }
}
