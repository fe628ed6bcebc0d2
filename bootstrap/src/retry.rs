//! Módulo utilitário de retry
//!
//! Backoff exponencial para o estabelecimento de recursos de
//! infraestrutura. As camadas de serviço não fazem retry.

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

/// Configuração de retry
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Número máximo de tentativas
    pub max_attempts: u32,
    /// Atraso inicial (ms)
    pub initial_delay_ms: u64,
    /// Atraso máximo (ms)
    pub max_delay_ms: u64,
    /// Multiplicador do backoff
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 1000,
            max_delay_ms: 30000,
            multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    pub fn new(max_attempts: u32, initial_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_attempts,
            initial_delay_ms,
            max_delay_ms,
            multiplier: 2.0,
        }
    }

    /// Calcula o atraso da n-ésima tentativa
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay_ms = (self.initial_delay_ms as f64 * self.multiplier.powi(attempt as i32)) as u64;
        let capped_delay = delay_ms.min(self.max_delay_ms);
        Duration::from_millis(capped_delay)
    }
}

/// Executa uma operação assíncrona com retry
///
/// Retorna Ok(T) no primeiro sucesso; quando todas as tentativas falham,
/// retorna o erro da última.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut last_error: Option<E> = None;

    for attempt in 0..config.max_attempts {
        match operation().await {
            Ok(value) => {
                if attempt > 0 {
                    info!(
                        "{} bem-sucedida na tentativa {}/{}",
                        operation_name,
                        attempt + 1,
                        config.max_attempts
                    );
                }
                return Ok(value);
            }
            Err(e) => {
                let delay = config.delay_for_attempt(attempt);
                warn!(
                    "{} falhou na tentativa {}/{}: {}",
                    operation_name,
                    attempt + 1,
                    config.max_attempts,
                    e
                );
                last_error = Some(e);

                if attempt + 1 < config.max_attempts {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    Err(last_error.expect("with_retry executa ao menos uma tentativa"))
}
