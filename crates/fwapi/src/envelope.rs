//! Envelopes normalizados da API FW Sistemas
//!
//! O servidor responde ora já embrulhado (`{success, message, data}`), ora
//! com o payload um nível acima (`{message, data}`), ora sem corpo JSON.
//! Depois da normalização, todo código acima do transporte enxerga apenas
//! os dois tipos deste módulo.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Resultado de toda operação da API: envelope de sucesso ou de erro
pub type ApiResult<T> = std::result::Result<SuccessEnvelope<T>, ErrorEnvelope>;

/// Envelope de sucesso: `{success: true, message?, data?}`
///
/// `data` é ausente apenas no envelope mínimo sintetizado para respostas
/// 2xx sem corpo JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Rotas de endereço devolvem o id criado no topo do envelope, fora de
    /// `data`; pode vir como número ou string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl<T> SuccessEnvelope<T> {
    /// Consome o envelope e devolve o payload, se presente
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Id criado anunciado no topo do envelope, normalizado para inteiro
    pub fn created_id(&self) -> Option<i64> {
        match self.id.as_ref()? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Envelope de erro: `{success: false, error: {code, message, errors?}}`
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("FW API error (code {}): {}", .error.code, .error.message)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: ErrorBody,
}

/// Corpo do erro normalizado
///
/// `errors` carrega mensagens de validação por campo, quando o servidor (ou
/// a validação local) as produz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ErrorEnvelope {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code,
                message: message.into(),
                errors: None,
            },
        }
    }

    pub fn with_field_errors(mut self, errors: HashMap<String, Vec<String>>) -> Self {
        self.error.errors = Some(errors);
        self
    }

    /// Classe do erro, derivada do código
    pub fn kind(&self) -> ErrorKind {
        match self.error.code {
            0 => ErrorKind::Network,
            401 | 403 => ErrorKind::Auth,
            400..=499 => ErrorKind::Client,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Unknown,
        }
    }
}

/// Taxonomia de erros exposta aos chamadores
///
/// `Client` cobre os 4xx de validação, exibidos ao usuário como vieram;
/// `Server` cobre os 5xx, que ganham mensagem genérica na interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Sem conectividade ou timeout (código 0)
    Network,
    /// Credenciais inválidas ou expiradas (401/403)
    Auth,
    /// Erro de requisição (demais 4xx)
    Client,
    /// Erro do servidor (5xx)
    Server,
    /// Qualquer coisa fora das faixas conhecidas
    Unknown,
}

/// Página de resultados carregada em `data` nas listagens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u32,
}

/// Forma do `data` devolvido pelas criações de recurso
///
/// O servidor ora ecoa o recurso completo (ou um objeto `{id, ...}`), ora
/// devolve o id puro. As duas variantes absorvem os formatos observados.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedId {
    Record {
        id: i64,
        #[serde(flatten)]
        extra: serde_json::Map<String, Value>,
    },
    Bare(i64),
}

impl CreatedId {
    /// Id do recurso criado, qualquer que seja a forma da resposta
    pub fn id(&self) -> i64 {
        match self {
            CreatedId::Record { id, .. } => *id,
            CreatedId::Bare(id) => *id,
        }
    }
}
