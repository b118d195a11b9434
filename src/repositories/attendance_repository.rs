//! Repositorio de asistencia
//!
//! La unicidad de (user_id, date) la garantiza la restricción de la tabla;
//! una inserción duplicada se reporta como conflicto.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::attendance::{Attendance, AttendanceStatus};
use crate::utils::errors::{map_unique_violation, AppError};

/// Registro de asistencia con el perfil público del usuario
#[derive(Debug, FromRow)]
pub struct AttendanceWithUserRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: AttendanceStatus,
    pub working_hours: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    pub user_department: String,
    pub user_position: String,
}

pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Attendance>, AppError> {
        let record = sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn find_by_user_and_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<Attendance>, AppError> {
        let record = sqlx::query_as::<_, Attendance>(
            "SELECT * FROM attendance WHERE user_id = $1 AND date = $2",
        )
        .bind(user_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        check_in: Option<DateTime<Utc>>,
        check_out: Option<DateTime<Utc>>,
        status: AttendanceStatus,
        working_hours: Option<f64>,
        notes: Option<String>,
    ) -> Result<Attendance, AppError> {
        let now = Utc::now();

        let record = sqlx::query_as::<_, Attendance>(
            r#"
            INSERT INTO attendance (id, user_id, date, check_in, check_out, status, working_hours, notes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(date)
        .bind(check_in)
        .bind(check_out)
        .bind(status)
        .bind(working_hours)
        .bind(notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, "Ya existe un registro de asistencia para ese usuario y fecha")
        })?;

        Ok(record)
    }

    /// Persistir los campos mutables de un registro existente
    pub async fn update(&self, record: &Attendance) -> Result<Attendance, AppError> {
        let updated = sqlx::query_as::<_, Attendance>(
            r#"
            UPDATE attendance
            SET check_in = $2, check_out = $3, status = $4, working_hours = $5, notes = $6, updated_at = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(record.check_in)
        .bind(record.check_out)
        .bind(record.status)
        .bind(record.working_hours)
        .bind(record.notes.as_deref())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn list(
        &self,
        user_id: Option<Uuid>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        status: Option<AttendanceStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Attendance>, AppError> {
        let records = sqlx::query_as::<_, Attendance>(
            r#"
            SELECT * FROM attendance
            WHERE ($1::uuid IS NULL OR user_id = $1)
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
              AND ($4::attendance_status IS NULL OR status = $4)
            ORDER BY date DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(user_id)
        .bind(start_date)
        .bind(end_date)
        .bind(status)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn count(
        &self,
        user_id: Option<Uuid>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        status: Option<AttendanceStatus>,
    ) -> Result<i64, AppError> {
        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM attendance
            WHERE ($1::uuid IS NULL OR user_id = $1)
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
              AND ($4::attendance_status IS NULL OR status = $4)
            "#,
        )
        .bind(user_id)
        .bind(start_date)
        .bind(end_date)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    pub async fn list_with_users(
        &self,
        user_id: Option<Uuid>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        status: Option<AttendanceStatus>,
    ) -> Result<Vec<AttendanceWithUserRow>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceWithUserRow>(
            r#"
            SELECT a.*,
                   u.name AS user_name,
                   u.email AS user_email,
                   u.department AS user_department,
                   u.position AS user_position
            FROM attendance a
            JOIN users u ON u.id = a.user_id
            WHERE ($1::uuid IS NULL OR a.user_id = $1)
              AND ($2::date IS NULL OR a.date >= $2)
              AND ($3::date IS NULL OR a.date <= $3)
              AND ($4::attendance_status IS NULL OR a.status = $4)
            ORDER BY a.date DESC
            "#,
        )
        .bind(user_id)
        .bind(start_date)
        .bind(end_date)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find_with_user(&self, id: Uuid) -> Result<Option<AttendanceWithUserRow>, AppError> {
        let row = sqlx::query_as::<_, AttendanceWithUserRow>(
            r#"
            SELECT a.*,
                   u.name AS user_name,
                   u.email AS user_email,
                   u.department AS user_department,
                   u.position AS user_position
            FROM attendance a
            JOIN users u ON u.id = a.user_id
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
