//! loja-errors - tratamento de erros unificado
//!
//! Baseado na especificação RFC 7807 Problem Details

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tipo de erro da aplicação
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("Erro de validação: {0}")]
    Validation(String),

    #[error("Conflito: {0}")]
    Conflict(String),

    #[error("Erro de banco de dados: {0}")]
    Database(String),

    #[error("Erro interno: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Converte para código de status HTTP
    ///
    /// A camada de borda (fora deste repositório) usa este mapeamento para
    /// responder, por exemplo, 404 quando um recurso não é encontrado.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::Database(_) => 500,
            Self::Internal(_) => 500,
        }
    }

    /// Converte para Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title(),
            status: self.status_code(),
            detail: self.to_string(),
            instance: None,
        }
    }

    fn problem_type(&self) -> String {
        match self {
            Self::NotFound(_) => "https://api.loja.app.br/problems/not-found".to_string(),
            Self::Validation(_) => "https://api.loja.app.br/problems/validation".to_string(),
            Self::Conflict(_) => "https://api.loja.app.br/problems/conflict".to_string(),
            Self::Database(_) => "https://api.loja.app.br/problems/database".to_string(),
            Self::Internal(_) => "https://api.loja.app.br/problems/internal".to_string(),
        }
    }

    fn problem_title(&self) -> String {
        match self {
            Self::NotFound(_) => "Recurso não encontrado".to_string(),
            Self::Validation(_) => "Erro de validação".to_string(),
            Self::Conflict(_) => "Conflito".to_string(),
            Self::Database(_) => "Erro de banco de dados".to_string(),
            Self::Internal(_) => "Erro interno do servidor".to_string(),
        }
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Alias do tipo Result
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_preserva_a_mensagem() {
        let err = AppError::not_found("Produto com id: 7 não encontrado");
        assert_eq!(err.to_string(), "Produto com id: 7 não encontrado");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_problem_details() {
        let problem = AppError::validation("preço inválido").to_problem_details();
        assert_eq!(problem.status, 400);
        assert_eq!(problem.title, "Erro de validação");

        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["status"], 400);
        // `instance` ausente não é serializado
        assert!(json.get("instance").is_none());
    }
}
