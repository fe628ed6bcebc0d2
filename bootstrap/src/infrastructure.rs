//! Gerenciamento dos recursos de infraestrutura
//!
//! Centraliza os recursos compartilhados pelos serviços

use adapter_postgres::{PostgresConfig, check_connection, create_pool};
use config::AppConfig;
use errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use telemetry::HealthStatus;
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// Contêiner dos recursos de infraestrutura
///
/// Inicializado uma única vez pelo bootstrap e entregue à aplicação que
/// embute os serviços.
pub struct Infrastructure {
    /// Configuração da aplicação
    config: AppConfig,
    /// Pool de conexões PostgreSQL
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// Cria os recursos de infraestrutura a partir da configuração (com retry)
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let retry_config = RetryConfig::default();

        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections);
        let postgres_pool = with_retry(&retry_config, "Conexão PostgreSQL", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;
        info!(
            "Pool de conexões PostgreSQL criado (max_connections: {})",
            config.database.max_connections
        );

        Ok(Self {
            config,
            postgres_pool,
        })
    }

    /// Configuração da aplicação
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Pool de conexões PostgreSQL
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// Verifica a saúde dos recursos
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new();

        match check_connection(&self.postgres_pool).await {
            Ok(()) => status.add_check("postgres", true, None),
            Err(e) => status.add_check("postgres", false, Some(e.to_string())),
        }

        status
    }
}
