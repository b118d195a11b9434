//! Controlador de asistencia
//!
//! Fichaje de entrada/salida por día natural y administración directa
//! de registros, con derivación de horas trabajadas y estado.

use chrono::{Local, Utc};
use sqlx::PgPool;

use crate::dto::attendance_dto::{
    AdminAttendanceListResponse, AdminAttendanceResponse, AdminCreateAttendanceRequest,
    AdminUpdateAttendanceRequest, AttendanceActionResponse, AttendanceListResponse,
    AttendanceQuery, AttendanceResponse, AttendanceWithUserResponse, AdminAttendanceQuery,
};
use crate::dto::common_dto::{Pagination, PublicProfile};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::attendance::{compute_working_hours, derive_status, AttendanceStatus};
use crate::repositories::attendance_repository::{AttendanceRepository, AttendanceWithUserRow};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_pagination, total_pages};

pub struct AttendanceController {
    repository: AttendanceRepository,
    users: UserRepository,
}

fn row_to_response(row: AttendanceWithUserRow) -> AttendanceWithUserResponse {
    AttendanceWithUserResponse {
        id: row.id,
        user: PublicProfile {
            id: row.user_id,
            name: row.user_name,
            email: row.user_email,
            department: row.user_department,
            position: row.user_position,
        },
        date: row.date,
        check_in: row.check_in,
        check_out: row.check_out,
        status: row.status,
        working_hours: row.working_hours,
        notes: row.notes,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

impl AttendanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AttendanceRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// Listado paginado de asistencia. Los usuarios sin rol de supervisión
    /// solo pueden consultar sus propios registros.
    pub async fn list(
        &self,
        actor: &AuthenticatedUser,
        query: AttendanceQuery,
    ) -> Result<AttendanceListResponse, AppError> {
        let target = query.user_id.unwrap_or(actor.user_id);

        if target != actor.user_id && !actor.role.can_manage() {
            return Err(AppError::Forbidden(
                "No puedes consultar la asistencia de otros usuarios".to_string(),
            ));
        }

        let (page, limit) = normalize_pagination(query.page, query.limit);
        let offset = (page - 1) * limit;

        let records = self
            .repository
            .list(Some(target), query.start_date, query.end_date, query.status, limit, offset)
            .await?;
        let total = self
            .repository
            .count(Some(target), query.start_date, query.end_date, query.status)
            .await?;

        Ok(AttendanceListResponse {
            records: records.into_iter().map(AttendanceResponse::from).collect(),
            pagination: Pagination {
                total,
                page,
                limit,
                pages: total_pages(total, limit),
            },
        })
    }

    /// Fichaje de entrada del día en curso
    pub async fn check_in(
        &self,
        actor: &AuthenticatedUser,
        notes: Option<String>,
    ) -> Result<AttendanceActionResponse, AppError> {
        let today = Local::now().date_naive();
        let now = Utc::now();

        let existing = self
            .repository
            .find_by_user_and_date(actor.user_id, today)
            .await?;

        let record = match existing {
            None => {
                // La restricción de unicidad resuelve la carrera entre
                // dos fichajes concurrentes del mismo usuario
                self.repository
                    .create(
                        actor.user_id,
                        today,
                        Some(now),
                        None,
                        AttendanceStatus::Present,
                        None,
                        notes,
                    )
                    .await?
            }
            Some(record) if record.check_in.is_some() => {
                return Err(AppError::Conflict("Ya has registrado tu entrada hoy".to_string()));
            }
            Some(mut record) => {
                record.check_in = Some(now);
                record.status = AttendanceStatus::Present;
                if notes.is_some() {
                    record.notes = notes;
                }
                self.repository.update(&record).await?
            }
        };

        Ok(AttendanceActionResponse {
            message: "Entrada registrada exitosamente".to_string(),
            record: AttendanceResponse::from(record),
        })
    }

    /// Fichaje de salida del día en curso. Requiere una entrada previa
    /// y recalcula horas trabajadas y estado.
    pub async fn check_out(
        &self,
        actor: &AuthenticatedUser,
        notes: Option<String>,
    ) -> Result<AttendanceActionResponse, AppError> {
        let today = Local::now().date_naive();

        let mut record = match self
            .repository
            .find_by_user_and_date(actor.user_id, today)
            .await?
        {
            Some(record) if record.check_in.is_some() => record,
            _ => {
                return Err(AppError::BadRequest(
                    "Debes registrar la entrada antes de la salida".to_string(),
                ));
            }
        };

        if record.check_out.is_some() {
            return Err(AppError::Conflict("Ya has registrado tu salida hoy".to_string()));
        }

        record.check_out = Some(Utc::now());

        // Las notas de salida se concatenan a las existentes
        if let Some(new_notes) = notes {
            record.notes = Some(match record.notes.take() {
                Some(previous) => format!("{}\n{}", previous, new_notes),
                None => new_notes,
            });
        }

        if let (Some(check_in), Some(check_out)) = (record.check_in, record.check_out) {
            record.working_hours = compute_working_hours(check_in, check_out);
            if let Some(hours) = record.working_hours {
                record.status = derive_status(hours);
            }
        }

        let record = self.repository.update(&record).await?;

        Ok(AttendanceActionResponse {
            message: "Salida registrada exitosamente".to_string(),
            record: AttendanceResponse::from(record),
        })
    }

    /// Listado administrativo con el perfil de cada usuario adjunto
    pub async fn admin_list(
        &self,
        query: AdminAttendanceQuery,
    ) -> Result<AdminAttendanceListResponse, AppError> {
        let rows = self
            .repository
            .list_with_users(query.user_id, query.start_date, query.end_date, query.status)
            .await?;

        Ok(AdminAttendanceListResponse {
            attendance_records: rows.into_iter().map(row_to_response).collect(),
        })
    }

    /// Alta directa de un registro, incluidas fechas pasadas.
    /// Falla con conflicto si ya existe un registro para (usuario, fecha).
    pub async fn admin_create(
        &self,
        request: AdminCreateAttendanceRequest,
    ) -> Result<AdminAttendanceResponse, AppError> {
        self.users
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let working_hours = match (request.check_in, request.check_out) {
            (Some(check_in), Some(check_out)) => compute_working_hours(check_in, check_out),
            _ => None,
        };

        let record = self
            .repository
            .create(
                request.user_id,
                request.date,
                request.check_in,
                request.check_out,
                request.status,
                working_hours,
                request.notes,
            )
            .await?;

        let row = self
            .repository
            .find_with_user(record.id)
            .await?
            .ok_or_else(|| AppError::Internal("Registro recién creado no encontrado".to_string()))?;

        Ok(AdminAttendanceResponse {
            attendance: row_to_response(row),
        })
    }

    /// Corrección administrativa de un registro existente
    pub async fn admin_update(
        &self,
        request: AdminUpdateAttendanceRequest,
    ) -> Result<AdminAttendanceResponse, AppError> {
        let mut record = self
            .repository
            .find_by_id(request.attendance_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Registro de asistencia no encontrado".to_string())
            })?;

        if let Some(check_in) = request.check_in {
            record.check_in = Some(check_in);
        }
        if let Some(check_out) = request.check_out {
            record.check_out = Some(check_out);
        }
        if request.notes.is_some() {
            record.notes = request.notes;
        }

        // Con ambos fichajes presentes se recalculan las horas; el estado
        // explícito del administrador tiene prioridad sobre el derivado
        if let (Some(check_in), Some(check_out)) = (record.check_in, record.check_out) {
            record.working_hours = compute_working_hours(check_in, check_out);
        }

        record.status = match request.status {
            Some(status) => status,
            None => match record.working_hours {
                Some(hours) if record.check_in.is_some() && record.check_out.is_some() => {
                    derive_status(hours)
                }
                _ => record.status,
            },
        };

        let record = self.repository.update(&record).await?;

        let row = self
            .repository
            .find_with_user(record.id)
            .await?
            .ok_or_else(|| AppError::Internal("Registro actualizado no encontrado".to_string()))?;

        Ok(AdminAttendanceResponse {
            attendance: row_to_response(row),
        })
    }
}
