//! Tipos de erro para o crate viacep

use thiserror::Error;

/// Erros do cliente ViaCEP
#[derive(Debug, Error)]
pub enum ViaCepError {
    /// Erro de requisição HTTP
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro da API ViaCEP (status não-200)
    #[error("ViaCEP API error (status {0})")]
    ApiError(u16),

    /// CEP com formato inválido (esperados 8 dígitos)
    #[error("Invalid CEP: {0}")]
    InvalidCep(String),

    /// CEP não encontrado na base
    #[error("CEP not found: {0}")]
    NotFound(String),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, ViaCepError>;
