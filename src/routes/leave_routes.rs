use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::leave_controller::LeaveController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::leave_dto::{
    AdminLeaveListResponse, CreateLeaveRequest, LeaveActionResponse, LeaveListResponse,
    LeaveQuery, SingleLeaveResponse, TransitionLeaveRequest,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de solicitudes de ausencia
pub fn create_leave_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_leave).get(list_leaves))
        .route(
            "/:id",
            get(get_leave).patch(transition_leave).delete(delete_leave),
        )
}

/// Rutas administrativas de solicitudes
pub fn create_admin_leave_router() -> Router<AppState> {
    Router::new().route("/", get(admin_list_leaves))
}

async fn create_leave(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateLeaveRequest>,
) -> Result<(StatusCode, Json<LeaveActionResponse>), AppError> {
    let controller = LeaveController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_leaves(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<LeaveQuery>,
) -> Result<Json<LeaveListResponse>, AppError> {
    let controller = LeaveController::new(state.pool.clone());
    let response = controller.list(&user, query).await?;
    Ok(Json(response))
}

async fn get_leave(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<SingleLeaveResponse>, AppError> {
    let controller = LeaveController::new(state.pool.clone());
    let response = controller.get(&user, id).await?;
    Ok(Json(response))
}

async fn transition_leave(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<TransitionLeaveRequest>,
) -> Result<Json<LeaveActionResponse>, AppError> {
    let controller = LeaveController::new(state.pool.clone());
    let response = controller.transition(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_leave(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = LeaveController::new(state.pool.clone());
    let response = controller.delete(&user, id).await?;
    Ok(Json(response))
}

async fn admin_list_leaves(
    State(state): State<AppState>,
    Query(query): Query<LeaveQuery>,
) -> Result<Json<AdminLeaveListResponse>, AppError> {
    let controller = LeaveController::new(state.pool.clone());
    let response = controller.admin_list(query).await?;
    Ok(Json(response))
}
