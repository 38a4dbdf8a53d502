//! Tipos de erro para o crate fwapi
//!
//! Erros de requisição nunca aparecem aqui: viram `ErrorEnvelope` na camada
//! de normalização. Este enum cobre apenas a construção do cliente.

use thiserror::Error;

/// Erros de configuração do cliente FW
#[derive(Debug, Error)]
pub enum FwApiError {
    /// Erro de configuração (URL base, construção do cliente HTTP)
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Tipo Result padrão para a construção do cliente
pub type Result<T> = std::result::Result<T, FwApiError>;
