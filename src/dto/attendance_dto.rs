//! DTOs de asistencia

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::common_dto::{Pagination, PublicProfile};
use crate::models::attendance::{Attendance, AttendanceStatus};

/// Acción sobre la asistencia del día
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceAction {
    CheckIn,
    CheckOut,
}

/// Request de fichaje de entrada o salida
#[derive(Debug, Deserialize)]
pub struct AttendanceActionRequest {
    pub action: AttendanceAction,
    pub notes: Option<String>,
}

/// Filtros de consulta de asistencia
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceQuery {
    pub user_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Filtros del listado administrativo (sin paginación)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAttendanceQuery {
    pub user_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

/// Request de alta directa de un registro de asistencia
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCreateAttendanceRequest {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Request de corrección de un registro existente
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUpdateAttendanceRequest {
    pub attendance_id: Uuid,
    pub status: Option<AttendanceStatus>,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Response de un registro de asistencia
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
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
}

impl From<Attendance> for AttendanceResponse {
    fn from(record: Attendance) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            date: record.date,
            check_in: record.check_in,
            check_out: record.check_out,
            status: record.status,
            working_hours: record.working_hours,
            notes: record.notes,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Registro de asistencia con el perfil del usuario adjunto
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceWithUserResponse {
    pub id: Uuid,
    pub user: PublicProfile,
    pub date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: AttendanceStatus,
    pub working_hours: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response de una acción de fichaje
#[derive(Debug, Serialize)]
pub struct AttendanceActionResponse {
    pub message: String,
    pub record: AttendanceResponse,
}

/// Response del listado paginado de asistencia
#[derive(Debug, Serialize)]
pub struct AttendanceListResponse {
    pub records: Vec<AttendanceResponse>,
    pub pagination: Pagination,
}

/// Response del listado administrativo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAttendanceListResponse {
    pub attendance_records: Vec<AttendanceWithUserResponse>,
}

/// Response de alta o corrección administrativa
#[derive(Debug, Serialize)]
pub struct AdminAttendanceResponse {
    pub attendance: AttendanceWithUserResponse,
}
