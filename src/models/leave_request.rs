//! Modelo de solicitudes de ausencia
//!
//! Este módulo contiene el struct LeaveRequest que mapea a la tabla
//! leave_requests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de ausencia solicitada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "leave_type", rename_all = "kebab-case")]
pub enum LeaveType {
    Sick,
    Vacation,
    Personal,
    Other,
}

/// Estado de una solicitud de ausencia.
/// Las transiciones válidas son pending -> approved y pending -> rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "leave_status", rename_all = "kebab-case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// LeaveRequest - mapea a la tabla leave_requests
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LeaveRequest {
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
}
