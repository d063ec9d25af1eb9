//! Student repository for database operations

use super::{RepositoryResult, StudentRepository};
use async_trait::async_trait;
use sqlx::PgPool;
use student_records_shared::Student;

/// Student record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub course: Option<String>,
    pub age: Option<i32>,
    pub phone_number: Option<String>,
    pub enrolled: bool,
}

impl From<StudentRecord> for Student {
    fn from(record: StudentRecord) -> Self {
        Student {
            id: record.id,
            name: record.name,
            email: record.email,
            course: record.course,
            age: record.age,
            phone_number: record.phone_number,
            enrolled: record.enrolled,
        }
    }
}

/// Postgres-backed student repository
#[derive(Clone)]
pub struct PgStudentRepository {
    pool: PgPool,
}

impl PgStudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PgStudentRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Student>> {
        let records = sqlx::query_as::<_, StudentRecord>(
            r#"
            SELECT id, name, email, course, age, phone_number, enrolled
            FROM students
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(Student::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Student>> {
        let record = sqlx::query_as::<_, StudentRecord>(
            r#"
            SELECT id, name, email, course, age, phone_number, enrolled
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Student::from))
    }

    async fn insert(&self, student: &Student) -> RepositoryResult<Student> {
        let record = sqlx::query_as::<_, StudentRecord>(
            r#"
            INSERT INTO students (id, name, email, course, age, phone_number, enrolled)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, course, age, phone_number, enrolled
            "#,
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(&student.email)
        .bind(&student.course)
        .bind(student.age)
        .bind(&student.phone_number)
        .bind(student.enrolled)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    async fn save(&self, student: &Student) -> RepositoryResult<Student> {
        let record = sqlx::query_as::<_, StudentRecord>(
            r#"
            INSERT INTO students (id, name, email, course, age, phone_number, enrolled)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                email = EXCLUDED.email,
                course = EXCLUDED.course,
                age = EXCLUDED.age,
                phone_number = EXCLUDED.phone_number,
                enrolled = EXCLUDED.enrolled
            RETURNING id, name, email, course, age, phone_number, enrolled
            "#,
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(&student.email)
        .bind(&student.course)
        .bind(student.age)
        .bind(&student.phone_number)
        .bind(student.enrolled)
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        crate::db::health_check(&self.pool).await?;
        Ok(())
    }
}
