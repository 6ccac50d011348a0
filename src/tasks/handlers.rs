use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::token::AuthUser,
    error::ApiError,
    state::AppState,
    tasks::{
        comments::synthesize_comments,
        dto::{CreateTaskRequest, TaskDetails, TaskResponse, UpdateTaskRequest},
        repo::Task,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks))
        .route("/tasks", post(create_task))
        .route("/tasks/:id", get(get_task))
        .route("/tasks/:id", put(update_task_status))
        .route("/tasks/:id", delete(remove_task))
}

#[instrument(skip(state))]
async fn list_tasks(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = Task::list_by_author(&state.db, user_id).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

#[instrument(skip(state))]
async fn get_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TaskDetails>, ApiError> {
    let task = Task::get(&state.db, user_id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".into()))?;
    let comments = synthesize_comments(task.id);
    Ok(Json(TaskDetails::new(task, comments)))
}

#[instrument(skip(state, payload))]
async fn create_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    if payload.value.is_empty() {
        return Err(ApiError::InvalidInput("value must not be empty".into()));
    }
    let task = Task::create(&state.db, user_id, &payload.value).await?;
    info!(task_id = %task.id, "task created");
    Ok(Json(task.into()))
}

#[instrument(skip(state, payload))]
async fn update_task_status(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<StatusCode, ApiError> {
    let updated = Task::set_resolved(&state.db, user_id, id, payload.is_resolved).await?;
    if !updated {
        return Err(ApiError::NotFound("Task not found".into()));
    }
    info!(task_id = %id, is_resolved = payload.is_resolved, "task status updated");
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
async fn remove_task(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = Task::delete(&state.db, user_id, id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Task not found".into()));
    }
    info!(task_id = %id, "task deleted");
    Ok(StatusCode::OK)
}
