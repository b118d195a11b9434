//! Configuración de conexión a PostgreSQL
//!
//! Este módulo maneja el pool de conexiones y las migraciones embebidas.

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Conexión a la base de datos
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear un pool de conexiones a partir de una URL explícita
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Crear un pool usando la variable de entorno DATABASE_URL
    pub async fn new_default() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment variables"))?;

        Self::new(&database_url).await
    }

    /// Obtener el pool subyacente
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar las migraciones embebidas
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
