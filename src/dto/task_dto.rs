//! DTOs de tareas

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::PublicProfile;
use crate::models::task::{TaskPriority, TaskStatus};

/// Request de creación de una tarea
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1, max = 5000))]
    pub description: String,

    pub assigned_to: Uuid,
    pub priority: Option<TaskPriority>,
    pub due_date: NaiveDate,
}

/// Request de actualización de una tarea.
/// Los empleados solo pueden enviar `status`; el resto de campos
/// queda reservado a administradores.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<NaiveDate>,
}

impl UpdateTaskRequest {
    /// Verificar si el request toca algún campo distinto de `status`
    pub fn touches_non_status_fields(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.assigned_to.is_some()
            || self.priority.is_some()
            || self.due_date.is_some()
    }
}

/// Response de una tarea con el perfil del asignado adjunto
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub assigned_to: PublicProfile,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response del listado de tareas
#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResponse>,
}

/// Response de una tarea individual
#[derive(Debug, Serialize)]
pub struct SingleTaskResponse {
    pub task: TaskResponse,
}

/// Response de creación o actualización
#[derive(Debug, Serialize)]
pub struct TaskActionResponse {
    pub message: String,
    pub task: TaskResponse,
}
