//! Controlador de solicitudes de ausencia
//!
//! Alta, consulta, aprobación/rechazo y eliminación de solicitudes,
//! con las transiciones restringidas a pending -> approved/rejected.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common_dto::{ApproverProfile, MessageResponse, Pagination, PublicProfile};
use crate::dto::leave_dto::{
    AdminLeaveListResponse, CreateLeaveRequest, LeaveActionResponse, LeaveListResponse,
    LeaveQuery, LeaveResponse, SingleLeaveResponse, TransitionLeaveRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::leave_request::LeaveStatus;
use crate::repositories::leave_repository::{LeaveRepository, LeaveWithProfilesRow};
use crate::utils::errors::AppError;
use crate::utils::validation::{normalize_pagination, total_pages};

pub struct LeaveController {
    repository: LeaveRepository,
}

fn row_to_response(row: LeaveWithProfilesRow) -> LeaveResponse {
    let approved_by = match (row.approved_by, row.approver_name, row.approver_email) {
        (Some(id), Some(name), Some(email)) => Some(ApproverProfile { id, name, email }),
        _ => None,
    };

    LeaveResponse {
        id: row.id,
        user: PublicProfile {
            id: row.user_id,
            name: row.user_name,
            email: row.user_email,
            department: row.user_department,
            position: row.user_position,
        },
        start_date: row.start_date,
        end_date: row.end_date,
        leave_type: row.leave_type,
        reason: row.reason,
        status: row.status,
        approved_by,
        approval_date: row.approval_date,
        attachment_url: row.attachment_url,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

impl LeaveController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LeaveRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        request: CreateLeaveRequest,
    ) -> Result<LeaveActionResponse, AppError> {
        request.validate()?;

        if request.reason.trim().is_empty() {
            return Err(AppError::BadRequest("La razón es requerida".to_string()));
        }

        if request.end_date < request.start_date {
            return Err(AppError::BadRequest(
                "La fecha de fin no puede ser anterior a la fecha de inicio".to_string(),
            ));
        }

        let created = self
            .repository
            .create(
                actor.user_id,
                request.start_date,
                request.end_date,
                request.leave_type,
                request.reason,
                request.attachment_url,
            )
            .await?;

        let row = self
            .repository
            .find_with_profiles(created.id)
            .await?
            .ok_or_else(|| AppError::Internal("Solicitud recién creada no encontrada".to_string()))?;

        Ok(LeaveActionResponse {
            message: "Solicitud de ausencia enviada exitosamente".to_string(),
            request: row_to_response(row),
        })
    }

    /// Listado paginado. Los usuarios sin rol de supervisión solo ven
    /// sus propias solicitudes, se ignore o no el filtro userId.
    pub async fn list(
        &self,
        actor: &AuthenticatedUser,
        query: LeaveQuery,
    ) -> Result<LeaveListResponse, AppError> {
        let user_filter = if actor.role.can_manage() {
            query.user_id
        } else {
            Some(actor.user_id)
        };

        let (page, limit) = normalize_pagination(query.page, query.limit);
        let offset = (page - 1) * limit;

        let rows = self
            .repository
            .list(user_filter, query.status, limit, offset)
            .await?;
        let total = self.repository.count(user_filter, query.status).await?;

        Ok(LeaveListResponse {
            requests: rows.into_iter().map(row_to_response).collect(),
            pagination: Pagination {
                total,
                page,
                limit,
                pages: total_pages(total, limit),
            },
        })
    }

    pub async fn get(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<SingleLeaveResponse, AppError> {
        let row = self
            .repository
            .find_with_profiles(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud de ausencia no encontrada".to_string()))?;

        if !actor.role.can_manage() && row.user_id != actor.user_id {
            return Err(AppError::Forbidden("No puedes ver esta solicitud".to_string()));
        }

        Ok(SingleLeaveResponse {
            request: row_to_response(row),
        })
    }

    /// Aprobar o rechazar una solicitud pendiente
    pub async fn transition(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        request: TransitionLeaveRequest,
    ) -> Result<LeaveActionResponse, AppError> {
        if !actor.role.can_manage() {
            return Err(AppError::Forbidden(
                "No puedes aprobar o rechazar solicitudes".to_string(),
            ));
        }

        if request.status == LeaveStatus::Pending {
            return Err(AppError::BadRequest("Estado inválido".to_string()));
        }

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud de ausencia no encontrada".to_string()))?;

        if current.status != LeaveStatus::Pending {
            return Err(AppError::Conflict(
                "La solicitud ya no está pendiente".to_string(),
            ));
        }

        let updated = self
            .repository
            .update_status(id, request.status, actor.user_id)
            .await?;

        let row = self
            .repository
            .find_with_profiles(updated.id)
            .await?
            .ok_or_else(|| AppError::Internal("Solicitud actualizada no encontrada".to_string()))?;

        let message = match request.status {
            LeaveStatus::Approved => "Solicitud aprobada exitosamente",
            _ => "Solicitud rechazada exitosamente",
        };

        Ok(LeaveActionResponse {
            message: message.to_string(),
            request: row_to_response(row),
        })
    }

    /// Eliminar una solicitud: el dueño mientras esté pendiente,
    /// un administrador en cualquier estado.
    pub async fn delete(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<MessageResponse, AppError> {
        let request = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Solicitud de ausencia no encontrada".to_string()))?;

        let is_owner = request.user_id == actor.user_id;
        let is_admin = actor.role.is_admin();

        if !is_owner && !is_admin {
            return Err(AppError::Forbidden("No puedes eliminar esta solicitud".to_string()));
        }

        if request.status != LeaveStatus::Pending && !is_admin {
            return Err(AppError::Conflict(
                "Solo se pueden eliminar solicitudes pendientes".to_string(),
            ));
        }

        self.repository.delete(id).await?;

        Ok(MessageResponse {
            message: "Solicitud de ausencia eliminada exitosamente".to_string(),
        })
    }

    /// Listado administrativo completo
    pub async fn admin_list(&self, query: LeaveQuery) -> Result<AdminLeaveListResponse, AppError> {
        let rows = self.repository.list_all(query.user_id, query.status).await?;

        Ok(AdminLeaveListResponse {
            leave_requests: rows.into_iter().map(row_to_response).collect(),
        })
    }
}
