use axum::{
    extract::{Extension, Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::user_controller::UserController;
use crate::dto::common_dto::MessageResponse;
use crate::dto::user_dto::{
    SingleUserResponse, UpdateUserRequest, UpdateUserRoleRequest, UpdatedUserResponse,
    UserListResponse,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas administrativas de usuarios
pub fn create_admin_user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).patch(change_role))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
}

async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn change_role(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<UpdateUserRoleRequest>,
) -> Result<Json<UpdatedUserResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.change_role(&user, request).await?;
    Ok(Json(response))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SingleUserResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(response))
}

async fn update_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UpdatedUserResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.update(&user, id, request).await?;
    Ok(Json(response))
}

async fn delete_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.delete(&user, id).await?;
    Ok(Json(response))
}
