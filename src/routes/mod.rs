//! Rutas de la API
//!
//! Este módulo compone el router principal: rutas públicas de
//! autenticación, rutas protegidas por JWT y el área administrativa.

pub mod attendance_routes;
pub mod auth_routes;
pub mod leave_routes;
pub mod task_routes;
pub mod user_routes;

use axum::{middleware, routing::get, Router};

use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router(state: AppState) -> Router<AppState> {
    // El área administrativa exige rol admin o super-admin, salvo las
    // tareas, donde los empleados conservan acceso a las suyas
    let admin_routes = Router::new()
        .nest("/attendance", attendance_routes::create_admin_attendance_router())
        .nest("/leave", leave_routes::create_admin_leave_router())
        .nest("/users", user_routes::create_admin_user_router())
        .route_layer(middleware::from_fn(admin_only_middleware))
        .nest("/tasks", task_routes::create_task_router());

    let protected_routes = Router::new()
        .route("/auth/me", get(auth_routes::me))
        .nest("/attendance", attendance_routes::create_attendance_router())
        .nest("/leave", leave_routes::create_leave_router())
        .nest("/admin", admin_routes)
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .merge(protected_routes)
}
