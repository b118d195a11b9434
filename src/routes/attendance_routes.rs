use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::attendance_controller::AttendanceController;
use crate::dto::attendance_dto::{
    AdminAttendanceListResponse, AdminAttendanceQuery, AdminAttendanceResponse,
    AdminCreateAttendanceRequest, AdminUpdateAttendanceRequest, AttendanceAction,
    AttendanceActionRequest, AttendanceActionResponse, AttendanceListResponse, AttendanceQuery,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de asistencia del empleado
pub fn create_attendance_router() -> Router<AppState> {
    Router::new().route("/", post(attendance_action).get(list_attendance))
}

/// Rutas administrativas de asistencia
pub fn create_admin_attendance_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(admin_list_attendance)
            .post(admin_create_attendance)
            .patch(admin_update_attendance),
    )
}

async fn attendance_action(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<AttendanceActionRequest>,
) -> Result<Json<AttendanceActionResponse>, AppError> {
    let controller = AttendanceController::new(state.pool.clone());

    let response = match request.action {
        AttendanceAction::CheckIn => controller.check_in(&user, request.notes).await?,
        AttendanceAction::CheckOut => controller.check_out(&user, request.notes).await?,
    };

    Ok(Json(response))
}

async fn list_attendance(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(query): Query<AttendanceQuery>,
) -> Result<Json<AttendanceListResponse>, AppError> {
    let controller = AttendanceController::new(state.pool.clone());
    let response = controller.list(&user, query).await?;
    Ok(Json(response))
}

async fn admin_list_attendance(
    State(state): State<AppState>,
    Query(query): Query<AdminAttendanceQuery>,
) -> Result<Json<AdminAttendanceListResponse>, AppError> {
    let controller = AttendanceController::new(state.pool.clone());
    let response = controller.admin_list(query).await?;
    Ok(Json(response))
}

async fn admin_create_attendance(
    State(state): State<AppState>,
    Json(request): Json<AdminCreateAttendanceRequest>,
) -> Result<(StatusCode, Json<AdminAttendanceResponse>), AppError> {
    let controller = AttendanceController::new(state.pool.clone());
    let response = controller.admin_create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn admin_update_attendance(
    State(state): State<AppState>,
    Json(request): Json<AdminUpdateAttendanceRequest>,
) -> Result<Json<AdminAttendanceResponse>, AppError> {
    let controller = AttendanceController::new(state.pool.clone());
    let response = controller.admin_update(request).await?;
    Ok(Json(response))
}
