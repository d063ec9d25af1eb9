//! Student service: the CRUD facade over `StudentRepository`
//!
//! Updates overwrite every mutable field and write the record back. There is
//! no version check, so concurrent updates to one id are last-writer-wins.

use crate::error::ApiError;
use crate::repositories::StudentRepository;
use student_records_shared::types::StudentPayload;
use student_records_shared::Student;
use tracing::info;
use validator::Validate;

/// Student service for record operations
pub struct StudentService;

impl StudentService {
    /// List all students ordered by id
    pub async fn list(repo: &dyn StudentRepository) -> Result<Vec<Student>, ApiError> {
        Ok(repo.find_all().await?)
    }

    /// Fetch one student
    pub async fn get(repo: &dyn StudentRepository, id: i64) -> Result<Student, ApiError> {
        repo.find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Create a student with a client-assigned id
    ///
    /// An id or email already in use is a conflict; existing records are
    /// never overwritten by create.
    pub async fn create(
        repo: &dyn StudentRepository,
        payload: StudentPayload,
    ) -> Result<Student, ApiError> {
        payload.validate()?;
        let id = payload
            .id
            .ok_or_else(|| ApiError::invalid_field("id", "Student id is required"))?;

        let student = repo.insert(&payload.into_student(id)).await?;
        info!(student_id = student.id, "Student created");

        Ok(student)
    }

    /// Replace every mutable field of an existing student
    ///
    /// Fails with `NotFound` when the id is absent, without creating it.
    pub async fn update(
        repo: &dyn StudentRepository,
        id: i64,
        payload: StudentPayload,
    ) -> Result<Student, ApiError> {
        payload.validate()?;

        let mut student = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        student.overwrite_from(payload.into_student(id));

        let saved = repo.save(&student).await?;
        info!(student_id = id, "Student updated");

        Ok(saved)
    }

    /// Delete a student; deleting an absent id is not an error
    pub async fn delete(repo: &dyn StudentRepository, id: i64) -> Result<(), ApiError> {
        if repo.delete_by_id(id).await? {
            info!(student_id = id, "Student deleted");
        } else {
            tracing::debug!(student_id = id, "Delete of absent student ignored");
        }
        Ok(())
    }
}

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Student {} not found", id))
}
