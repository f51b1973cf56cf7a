use crate::{
    auth::AuthenticatedUserId,
    error::AppError,
    models::TaskInput,
    store::TaskStore,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

const TASK_NOT_FOUND: &str = "Task not found";

/// Create a task owned by the caller.
#[post("")]
pub async fn create_task(
    tasks: web::Data<TaskStore>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let task = tasks
        .create(
            user.0,
            &task_data.title,
            &task_data.status,
            task_data.completion_date,
        )
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Task created successfully",
        "task": task
    })))
}

/// List the caller's tasks. Only tasks owned by the authenticated user are
/// ever returned; there is no way to widen the scope.
#[get("")]
pub async fn get_tasks(
    tasks: web::Data<TaskStore>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let owned = tasks.list_by_owner(user.0).await?;

    Ok(HttpResponse::Ok().json(json!({
        "tasks": owned
    })))
}

/// Overwrite a task's mutable fields (title, status, completion date).
///
/// The ownership check and the existence check share one 404: a task owned
/// by someone else looks exactly like a task that does not exist.
#[put("/{id}")]
pub async fn update_task(
    tasks: web::Data<TaskStore>,
    task_id: web::Path<Uuid>,
    task_data: web::Json<TaskInput>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;
    let task_uuid = task_id.into_inner();

    tasks
        .find_owned(task_uuid, user.0)
        .await?
        .ok_or_else(|| AppError::NotFound(TASK_NOT_FOUND.into()))?;

    let task = tasks
        .update(
            task_uuid,
            &task_data.title,
            &task_data.status,
            task_data.completion_date,
        )
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task updated successfully",
        "task": task
    })))
}

/// Delete a task. Same single 404 for "absent" and "not yours" as update.
#[delete("/{id}")]
pub async fn delete_task(
    tasks: web::Data<TaskStore>,
    task_id: web::Path<Uuid>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let task_uuid = task_id.into_inner();

    tasks
        .find_owned(task_uuid, user.0)
        .await?
        .ok_or_else(|| AppError::NotFound(TASK_NOT_FOUND.into()))?;

    tasks.delete(task_uuid).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted successfully"
    })))
}
