//! In-memory repositories
//!
//! Used by tests and by `database.backend = "memory"` for local runs.
//! Contents are lost on restart.

use super::{RepositoryError, RepositoryResult, StudentRepository, UserRecord, UserRepository};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use student_records_shared::Student;
use tokio::sync::RwLock;

/// Student store keyed by id
#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<BTreeMap<i64, Student>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Email must be unique across all students other than `id`
fn email_taken(students: &BTreeMap<i64, Student>, student: &Student) -> bool {
    students
        .values()
        .any(|existing| existing.id != student.id && existing.email == student.email)
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Student>> {
        Ok(self.students.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Student>> {
        Ok(self.students.read().await.get(&id).cloned())
    }

    async fn insert(&self, student: &Student) -> RepositoryResult<Student> {
        let mut students = self.students.write().await;
        if students.contains_key(&student.id) {
            return Err(RepositoryError::Duplicate { field: "id" });
        }
        if email_taken(&students, student) {
            return Err(RepositoryError::Duplicate { field: "email" });
        }
        students.insert(student.id, student.clone());
        Ok(student.clone())
    }

    async fn save(&self, student: &Student) -> RepositoryResult<Student> {
        let mut students = self.students.write().await;
        if email_taken(&students, student) {
            return Err(RepositoryError::Duplicate { field: "email" });
        }
        students.insert(student.id, student.clone());
        Ok(student.clone())
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<bool> {
        Ok(self.students.write().await.remove(&id).is_some())
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        Ok(())
    }
}

/// User store keyed by username
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, String>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<UserRecord>> {
        Ok(self
            .users
            .read()
            .await
            .get(username)
            .map(|password_hash| UserRecord {
                username: username.to_string(),
                password_hash: password_hash.clone(),
            }))
    }

    async fn upsert(&self, username: &str, password_hash: &str) -> RepositoryResult<()> {
        self.users
            .write()
            .await
            .insert(username.to_string(), password_hash.to_string());
        Ok(())
    }
}
