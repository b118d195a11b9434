//! Repositorio de solicitudes de ausencia

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::leave_request::{LeaveRequest, LeaveStatus, LeaveType};
use crate::utils::errors::AppError;

/// Solicitud con los perfiles del solicitante y del aprobador
#[derive(Debug, FromRow)]
pub struct LeaveWithProfilesRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    pub reason: String,
    pub status: LeaveStatus,
    pub approved_by: Option<Uuid>,
    pub approval_date: Option<DateTime<Utc>>,
    pub attachment_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    pub user_department: String,
    pub user_position: String,
    pub approver_name: Option<String>,
    pub approver_email: Option<String>,
}

pub struct LeaveRepository {
    pool: PgPool,
}

impl LeaveRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        leave_type: LeaveType,
        reason: String,
        attachment_url: Option<String>,
    ) -> Result<LeaveRequest, AppError> {
        let now = Utc::now();

        let request = sqlx::query_as::<_, LeaveRequest>(
            r#"
            INSERT INTO leave_requests (id, user_id, start_date, end_date, leave_type, reason, status, attachment_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', $7, $8, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(start_date)
        .bind(end_date)
        .bind(leave_type)
        .bind(reason)
        .bind(attachment_url)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<LeaveRequest>, AppError> {
        let request =
            sqlx::query_as::<_, LeaveRequest>("SELECT * FROM leave_requests WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(request)
    }

    pub async fn find_with_profiles(&self, id: Uuid) -> Result<Option<LeaveWithProfilesRow>, AppError> {
        let row = sqlx::query_as::<_, LeaveWithProfilesRow>(
            r#"
            SELECT l.*,
                   u.name AS user_name,
                   u.email AS user_email,
                   u.department AS user_department,
                   u.position AS user_position,
                   a.name AS approver_name,
                   a.email AS approver_email
            FROM leave_requests l
            JOIN users u ON u.id = l.user_id
            LEFT JOIN users a ON a.id = l.approved_by
            WHERE l.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list(
        &self,
        user_id: Option<Uuid>,
        status: Option<LeaveStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<LeaveWithProfilesRow>, AppError> {
        let rows = sqlx::query_as::<_, LeaveWithProfilesRow>(
            r#"
            SELECT l.*,
                   u.name AS user_name,
                   u.email AS user_email,
                   u.department AS user_department,
                   u.position AS user_position,
                   a.name AS approver_name,
                   a.email AS approver_email
            FROM leave_requests l
            JOIN users u ON u.id = l.user_id
            LEFT JOIN users a ON a.id = l.approved_by
            WHERE ($1::uuid IS NULL OR l.user_id = $1)
              AND ($2::leave_status IS NULL OR l.status = $2)
            ORDER BY l.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(user_id)
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn count(
        &self,
        user_id: Option<Uuid>,
        status: Option<LeaveStatus>,
    ) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM leave_requests
            WHERE ($1::uuid IS NULL OR user_id = $1)
              AND ($2::leave_status IS NULL OR status = $2)
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Listado administrativo sin paginación
    pub async fn list_all(
        &self,
        user_id: Option<Uuid>,
        status: Option<LeaveStatus>,
    ) -> Result<Vec<LeaveWithProfilesRow>, AppError> {
        let rows = sqlx::query_as::<_, LeaveWithProfilesRow>(
            r#"
            SELECT l.*,
                   u.name AS user_name,
                   u.email AS user_email,
                   u.department AS user_department,
                   u.position AS user_position,
                   a.name AS approver_name,
                   a.email AS approver_email
            FROM leave_requests l
            JOIN users u ON u.id = l.user_id
            LEFT JOIN users a ON a.id = l.approved_by
            WHERE ($1::uuid IS NULL OR l.user_id = $1)
              AND ($2::leave_status IS NULL OR l.status = $2)
            ORDER BY l.created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Registrar la transición de estado de una solicitud pendiente
    pub async fn update_status(
        &self,
        id: Uuid,
        status: LeaveStatus,
        approved_by: Uuid,
    ) -> Result<LeaveRequest, AppError> {
        let now = Utc::now();

        let request = sqlx::query_as::<_, LeaveRequest>(
            r#"
            UPDATE leave_requests
            SET status = $2, approved_by = $3, approval_date = $4, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(approved_by)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM leave_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Solicitud de ausencia no encontrada".to_string()));
        }

        Ok(())
    }
}
