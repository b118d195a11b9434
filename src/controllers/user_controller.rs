//! Controlador de administración de usuarios
//!
//! Los cambios de rol y la eliminación de usuarios quedan reservados
//! al super administrador.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common_dto::MessageResponse;
use crate::dto::user_dto::{
    SingleUserResponse, UpdateUserRequest, UpdateUserRoleRequest, UpdatedUserResponse,
    UserListResponse, UserResponse,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<UserListResponse, AppError> {
        let users = self.repository.list_all().await?;

        Ok(UserListResponse {
            users: users.into_iter().map(UserResponse::from).collect(),
        })
    }

    pub async fn get(&self, id: Uuid) -> Result<SingleUserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(SingleUserResponse {
            user: UserResponse::from(user),
        })
    }

    pub async fn change_role(
        &self,
        actor: &AuthenticatedUser,
        request: UpdateUserRoleRequest,
    ) -> Result<UpdatedUserResponse, AppError> {
        if !actor.role.is_super_admin() {
            return Err(AppError::Forbidden(
                "Solo un super administrador puede cambiar roles".to_string(),
            ));
        }

        let user = self
            .repository
            .update_role(request.user_id, request.role)
            .await?;

        tracing::info!("🔑 Rol de {} cambiado a {}", user.email, user.role.as_str());

        Ok(UpdatedUserResponse {
            message: "Usuario actualizado exitosamente".to_string(),
            user: UserResponse::from(user),
        })
    }

    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UpdatedUserResponse, AppError> {
        // Cualquier cambio de rol exige super administrador
        if request.role.is_some() && !actor.role.is_super_admin() {
            return Err(AppError::Forbidden(
                "Solo un super administrador puede cambiar roles".to_string(),
            ));
        }

        let user = self
            .repository
            .update(id, request.role, request.is_active, request.department, request.position)
            .await?;

        Ok(UpdatedUserResponse {
            message: "Usuario actualizado exitosamente".to_string(),
            user: UserResponse::from(user),
        })
    }

    pub async fn delete(
        &self,
        actor: &AuthenticatedUser,
        id: Uuid,
    ) -> Result<MessageResponse, AppError> {
        if !actor.role.is_super_admin() {
            return Err(AppError::Forbidden(
                "Solo un super administrador puede eliminar usuarios".to_string(),
            ));
        }

        self.repository.delete(id).await?;

        Ok(MessageResponse {
            message: "Usuario eliminado exitosamente".to_string(),
        })
    }
}
