//! DTOs de administración de usuarios

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::{User, UserRole};

/// Response de usuario para la API (sin credenciales)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub role: UserRole,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            department: user.department,
            position: user.position,
            role: user.role,
            is_active: user.is_active,
            joined_at: user.joined_at,
        }
    }
}

/// Request para cambiar el rol de un usuario (solo super-admin)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRoleRequest {
    pub user_id: Uuid,
    pub role: UserRole,
}

/// Request para actualizar atributos administrables de un usuario
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub department: Option<String>,
    pub position: Option<String>,
}

/// Response de listado de usuarios
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

/// Response de un usuario individual
#[derive(Debug, Serialize)]
pub struct SingleUserResponse {
    pub user: UserResponse,
}

/// Response de actualización de usuario
#[derive(Debug, Serialize)]
pub struct UpdatedUserResponse {
    pub message: String,
    pub user: UserResponse,
}
