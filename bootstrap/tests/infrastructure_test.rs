//! Teste de integração da infraestrutura
//!
//! Requer um PostgreSQL acessível via DATABASE_URL; sem a variável o teste
//! retorna sem executar.

use loja_bootstrap::Infrastructure;
use config::{AppConfig, DatabaseConfig, TelemetryConfig};
use secrecy::Secret;

#[tokio::test]
async fn test_infrastructure_from_config() {
    dotenvy::dotenv().ok();
    let Ok(url) = std::env::var("DATABASE_URL") else {
        return;
    };

    let config = AppConfig {
        app_name: "catalogo".to_string(),
        app_env: "development".to_string(),
        database: DatabaseConfig {
            url: Secret::new(url),
            max_connections: 2,
        },
        telemetry: TelemetryConfig {
            log_level: "info".to_string(),
        },
    };

    let infra = Infrastructure::from_config(config)
        .await
        .expect("falha ao inicializar a infraestrutura");

    assert_eq!(infra.config().app_name, "catalogo");

    let health = infra.health_check().await;
    assert!(health.healthy);
    assert_eq!(health.checks.len(), 1);
    assert_eq!(health.checks[0].name, "postgres");
}
