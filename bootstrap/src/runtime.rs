//! Runtime dos serviços

use config::AppConfig;
use telemetry::{init_tracing, init_tracing_json};
use tracing::info;

/// Inicializa o runtime do serviço
pub fn init_runtime(config: &AppConfig) {
    // Inicializa o tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime inicializado"
    );
}

/// Aguarda o sinal de encerramento
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Falha ao instalar o handler de Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Falha ao instalar o handler de sinal")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Sinal de encerramento recebido");
}
