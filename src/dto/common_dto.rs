//! DTOs compartidos entre recursos

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadatos de paginación para listados
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

/// Perfil público de un usuario, adjuntado a tareas y solicitudes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

/// Perfil reducido del aprobador de una solicitud
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproverProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Respuesta simple con un mensaje
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
