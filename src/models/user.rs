//! Modelo de User
//!
//! Este módulo contiene el struct User que mapea a la tabla users
//! y el enum de roles con sus predicados de autorización.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rol de un usuario dentro del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "user_role", rename_all = "kebab-case")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    Manager,
    Employee,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super-admin",
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Employee => "employee",
        }
    }

    /// Administradores del sistema (admin o super-admin)
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SuperAdmin)
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin)
    }

    /// Roles con capacidad de supervisión sobre asistencia y ausencias.
    /// Manager se trata como equivalente a admin para estas operaciones.
    pub fn can_manage(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::SuperAdmin | UserRole::Manager)
    }
}

/// User - mapea a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub department: String,
    pub position: String,
    pub role: UserRole,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_predicates() {
        assert!(UserRole::SuperAdmin.is_admin());
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Manager.is_admin());
        assert!(!UserRole::Employee.is_admin());

        assert!(UserRole::SuperAdmin.is_super_admin());
        assert!(!UserRole::Admin.is_super_admin());

        assert!(UserRole::Manager.can_manage());
        assert!(UserRole::Admin.can_manage());
        assert!(UserRole::SuperAdmin.can_manage());
        assert!(!UserRole::Employee.can_manage());
    }

    #[test]
    fn test_role_serde_names() {
        assert_eq!(serde_json::to_string(&UserRole::SuperAdmin).unwrap(), "\"super-admin\"");
        assert_eq!(serde_json::to_string(&UserRole::Employee).unwrap(), "\"employee\"");

        let role: UserRole = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, UserRole::Manager);
    }
}
