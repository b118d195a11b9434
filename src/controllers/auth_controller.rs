//! Controlador de autenticación y registro

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::dto::user_dto::UserResponse;
use crate::models::user::UserRole;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::generate_token;
use crate::utils::validation::email_has_domain;

pub struct AuthController {
    repository: UserRepository,
    config: EnvironmentConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            config,
        }
    }

    /// Registrar un nuevo empleado. El rol siempre es employee;
    /// los ascensos los gestiona un super administrador.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        request.validate()?;

        if !email_has_domain(&request.email, &self.config.allowed_email_domain) {
            return Err(AppError::BadRequest(format!(
                "Solo se permiten direcciones de correo de {}",
                self.config.allowed_email_domain
            )));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hasheando password: {}", e)))?;

        let user = self
            .repository
            .create(
                request.name,
                request.email,
                password_hash,
                request.department,
                request.position,
                UserRole::Employee,
            )
            .await?;

        tracing::info!("👤 Usuario registrado: {}", user.email);

        Ok(RegisterResponse {
            message: "Usuario registrado exitosamente".to_string(),
            user: UserResponse::from(user),
        })
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let password_ok = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando password: {}", e)))?;

        if !password_ok {
            log::warn!("❌ Login fallido para {}", user.email);
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        if !user.is_active {
            return Err(AppError::Unauthorized("Usuario inactivo".to_string()));
        }

        let token = generate_token(user.id, user.role, &self.config)?;

        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }
}
