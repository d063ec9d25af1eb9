//! Student record API routes
//!
//! Every route requires a valid Bearer token.

use crate::auth::require_auth;
use crate::error::ApiResult;
use crate::services::StudentService;
use crate::state::AppState;
use super::extract::{ApiJson, ApiPath};
use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use student_records_shared::types::StudentPayload;
use student_records_shared::Student;

/// Create student routes
pub fn student_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

/// GET /api/students
async fn list_students(State(state): State<AppState>) -> ApiResult<Json<Vec<Student>>> {
    let students = StudentService::list(state.students()).await?;
    Ok(Json(students))
}

/// GET /api/students/:id
async fn get_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Student>> {
    let student = StudentService::get(state.students(), id).await?;
    Ok(Json(student))
}

/// POST /api/students - returns 201 with the stored record
async fn create_student(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<StudentPayload>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let student = StudentService::create(state.students(), payload).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// PUT /api/students/:id - full replacement of mutable fields
async fn update_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<StudentPayload>,
) -> ApiResult<Json<Student>> {
    let student = StudentService::update(state.students(), id, payload).await?;
    Ok(Json(student))
}

/// DELETE /api/students/:id - 204 whether or not the record existed
async fn delete_student(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    StudentService::delete(state.students(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
