//! DTOs de solicitudes de ausencia

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::{ApproverProfile, Pagination, PublicProfile};
use crate::models::leave_request::{LeaveStatus, LeaveType};

/// Request de creación de una solicitud de ausencia
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[serde(rename = "type")]
    pub leave_type: LeaveType,

    #[validate(length(min = 1, max = 1000))]
    pub reason: String,

    pub attachment_url: Option<String>,
}

/// Filtros de consulta de solicitudes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveQuery {
    pub user_id: Option<Uuid>,
    pub status: Option<LeaveStatus>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Request de aprobación o rechazo
#[derive(Debug, Deserialize)]
pub struct TransitionLeaveRequest {
    pub status: LeaveStatus,
}

/// Response de una solicitud con los perfiles adjuntos
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveResponse {
    pub id: Uuid,
    pub user: PublicProfile,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub reason: String,
    pub status: LeaveStatus,
    pub approved_by: Option<ApproverProfile>,
    pub approval_date: Option<DateTime<Utc>>,
    pub attachment_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response de creación o transición
#[derive(Debug, Serialize)]
pub struct LeaveActionResponse {
    pub message: String,
    pub request: LeaveResponse,
}

/// Response de una solicitud individual
#[derive(Debug, Serialize)]
pub struct SingleLeaveResponse {
    pub request: LeaveResponse,
}

/// Response del listado paginado
#[derive(Debug, Serialize)]
pub struct LeaveListResponse {
    pub requests: Vec<LeaveResponse>,
    pub pagination: Pagination,
}

/// Response del listado administrativo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLeaveListResponse {
    pub leave_requests: Vec<LeaveResponse>,
}
