//! Controlador de tareas
//!
//! Los empleados solo ven y actualizan (estado) sus propias tareas;
//! los administradores gestionan cualquier tarea y cualquier campo.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::{MessageResponse, PublicProfile};
use crate::dto::task_dto::{
    CreateTaskRequest, SingleTaskResponse, TaskActionResponse, TaskListResponse, TaskResponse,
    UpdateTaskRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::task::TaskPriority;
use crate::repositories::task_repository::{TaskRepository, TaskWithAssigneeRow};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct TaskController {
    repository: TaskRepository,
    users: UserRepository,
}

fn row_to_response(row: TaskWithAssigneeRow) -> TaskResponse {
    TaskResponse {
        id: row.id,
        title: row.title,
        description: row.description,
        assigned_to: PublicProfile {
            id: row.assigned_to,
            name: row.assignee_name,
            email: row.assignee_email,
            department: row.assignee_department,
            position: row.assignee_position,
        },
        priority: row.priority,
        status: row.status,
        due_date: row.due_date,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

impl TaskController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TaskRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Listado con visibilidad por rol
    pub async fn list(&self, actor: &AuthenticatedUser) -> Result<TaskListResponse, AppError> {
        let assignee_filter = if actor.role.is_admin() {
            None
        } else {
            Some(actor.user_id)
        };

        let rows = self.repository.list(assignee_filter).await?;

        Ok(TaskListResponse {
            tasks: rows.into_iter().map(row_to_response).collect(),
        })
    }

    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        request: CreateTaskRequest,
    ) -> Result<TaskActionResponse, AppError> {
        if !actor.role.is_admin() {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador".to_string(),
            ));
        }

        request.validate()?;

        // El asignado debe existir al crear la tarea
        self.users
            .find_by_id(request.assigned_to)
            .await?
            .ok_or_else(|| AppError::NotFound("El usuario asignado no existe".to_string()))?;

        let task = self
            .repository
            .create(
                request.title,
                request.description,
                request.assigned_to,
                request.priority.unwrap_or(TaskPriority::Medium),
                request.due_date,
            )
            .await?;

        let row = self
            .repository
            .find_with_assignee(task.id)
            .await?
            .ok_or_else(|| AppError::Internal("Tarea recién creada no encontrada".to_string()))?;

        Ok(TaskActionResponse {
            message: "Tarea creada exitosamente".to_string(),
            task: row_to_response(row),
        })
    }

    /// Para empleados una tarea ajena se reporta como inexistente
    pub async fn get(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<SingleTaskResponse, AppError> {
        let row = self
            .repository
            .find_with_assignee(id)
            .await?
            .filter(|row| actor.role.is_admin() || row.assigned_to == actor.user_id)
            .ok_or_else(|| AppError::NotFound("Tarea no encontrada".to_string()))?;

        Ok(SingleTaskResponse {
            task: row_to_response(row),
        })
    }

    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        request: UpdateTaskRequest,
    ) -> Result<TaskActionResponse, AppError> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarea no encontrada".to_string()))?;

        let updated = if actor.role.is_admin() {
            self.repository
                .update(
                    id,
                    request.title,
                    request.description,
                    request.assigned_to,
                    request.priority,
                    request.status,
                    request.due_date,
                )
                .await?
        } else {
            if task.assigned_to != actor.user_id {
                return Err(AppError::Forbidden(
                    "Solo puedes actualizar tareas asignadas a ti".to_string(),
                ));
            }

            if request.touches_non_status_fields() {
                return Err(AppError::Forbidden(
                    "Solo puedes actualizar el estado de la tarea".to_string(),
                ));
            }

            let status = request
                .status
                .ok_or_else(|| AppError::BadRequest("Falta el campo status".to_string()))?;

            self.repository
                .update(id, None, None, None, None, Some(status), None)
                .await?
        };

        let row = self
            .repository
            .find_with_assignee(updated.id)
            .await?
            .ok_or_else(|| AppError::Internal("Tarea actualizada no encontrada".to_string()))?;

        Ok(TaskActionResponse {
            message: "Tarea actualizada exitosamente".to_string(),
            task: row_to_response(row),
        })
    }

    pub async fn delete(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<MessageResponse, AppError> {
        if !actor.role.is_admin() {
            return Err(AppError::Forbidden(
                "Se requieren permisos de administrador".to_string(),
            ));
        }

        self.repository.delete(id).await?;

        Ok(MessageResponse {
            message: "Tarea eliminada exitosamente".to_string(),
        })
    }
}
