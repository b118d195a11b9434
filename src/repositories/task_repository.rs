//! Repositorio de tareas

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::task::{Task, TaskPriority, TaskStatus};
use crate::utils::errors::AppError;

/// Tarea con el perfil público del asignado
#[derive(Debug, FromRow)]
pub struct TaskWithAssigneeRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub assigned_to: Uuid,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub assignee_name: String,
    pub assignee_email: String,
    pub assignee_department: String,
    pub assignee_position: String,
}

pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        title: String,
        description: String,
        assigned_to: Uuid,
        priority: TaskPriority,
        due_date: NaiveDate,
    ) -> Result<Task, AppError> {
        let now = Utc::now();

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (id, title, description, assigned_to, priority, status, due_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 'pending', $6, $7, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(description)
        .bind(assigned_to)
        .bind(priority)
        .bind(due_date)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(task)
    }

    pub async fn find_with_assignee(&self, id: Uuid) -> Result<Option<TaskWithAssigneeRow>, AppError> {
        let row = sqlx::query_as::<_, TaskWithAssigneeRow>(
            r#"
            SELECT t.*,
                   u.name AS assignee_name,
                   u.email AS assignee_email,
                   u.department AS assignee_department,
                   u.position AS assignee_position
            FROM tasks t
            JOIN users u ON u.id = t.assigned_to
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Listado con visibilidad por rol: sin filtro para administradores,
    /// restringido al asignado para empleados
    pub async fn list(&self, assigned_to: Option<Uuid>) -> Result<Vec<TaskWithAssigneeRow>, AppError> {
        let rows = sqlx::query_as::<_, TaskWithAssigneeRow>(
            r#"
            SELECT t.*,
                   u.name AS assignee_name,
                   u.email AS assignee_email,
                   u.department AS assignee_department,
                   u.position AS assignee_position
            FROM tasks t
            JOIN users u ON u.id = t.assigned_to
            WHERE ($1::uuid IS NULL OR t.assigned_to = $1)
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(assigned_to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Actualizar campos de una tarea; los ausentes conservan su valor
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        title: Option<String>,
        description: Option<String>,
        assigned_to: Option<Uuid>,
        priority: Option<TaskPriority>,
        status: Option<TaskStatus>,
        due_date: Option<NaiveDate>,
    ) -> Result<Task, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarea no encontrada".to_string()))?;

        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, assigned_to = $4, priority = $5, status = $6, due_date = $7, updated_at = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title.unwrap_or(current.title))
        .bind(description.unwrap_or(current.description))
        .bind(assigned_to.unwrap_or(current.assigned_to))
        .bind(priority.unwrap_or(current.priority))
        .bind(status.unwrap_or(current.status))
        .bind(due_date.unwrap_or(current.due_date))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tarea no encontrada".to_string()));
        }

        Ok(())
    }
}
