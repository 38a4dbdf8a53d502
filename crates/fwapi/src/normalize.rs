//! Normalização de respostas da API
//!
//! O servidor responde por mais de uma convenção: ora o corpo já vem
//! embrulhado em `{success, message, data}`, ora o payload vem um nível
//! acima, ora nem há corpo JSON. Tudo chega aqui reduzido a um conjunto
//! fechado de variantes (`RawOutcome`) e a classificação é uma função
//! pura: o efeito de sessão exigido por um 401 sai como comando explícito,
//! aplicado pelo cliente depois.

use crate::envelope::{ErrorBody, ErrorEnvelope};
use serde_json::{json, Value};

/// Mensagem sintetizada para sucessos sem `message` próprio
pub const MSG_SUCCESS: &str = "Operação realizada com sucesso";
/// Mensagem fixa para falhas de rede (código 0)
pub const MSG_CONNECTION: &str = "Erro de conexão com o servidor.";
/// Mensagem fixa para credenciais inválidas ou expiradas (401)
pub const MSG_UNAUTHORIZED: &str = "Não autorizado: Token inválido ou expirado";
/// Mensagem do fallback genérico (código 500)
pub const MSG_UNKNOWN: &str = "Erro desconhecido";

/// Desfecho bruto de uma requisição, validado na borda do transporte
#[derive(Debug, Clone)]
pub enum RawOutcome {
    /// Resposta completa com corpo JSON (qualquer status)
    Json { status: u16, body: Value },
    /// Resposta completa sem corpo JSON aproveitável
    Empty { status: u16 },
    /// Falha de rede: sem resposta (conexão recusada, DNS, timeout)
    Transport { message: String },
}

/// Efeito colateral exigido pela classificação de um erro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// Limpar o token armazenado e redirecionar para o login
    ExpireSession,
}

/// Envelope classificado mais o efeito a aplicar (no máximo um por erro)
#[derive(Debug, Clone)]
pub struct Normalized {
    pub result: std::result::Result<Value, ErrorEnvelope>,
    pub effect: Option<SessionEffect>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Ponto de entrada da normalização: um desfecho, um envelope
pub fn normalize(outcome: RawOutcome) -> Normalized {
    match outcome {
        RawOutcome::Json { status, body } if is_success(status) => Normalized {
            result: Ok(normalize_success(body)),
            effect: None,
        },
        // 2xx sem corpo JSON: envelope mínimo, sem `data`
        RawOutcome::Empty { status } if is_success(status) => Normalized {
            result: Ok(json!({ "success": true, "message": MSG_SUCCESS })),
            effect: None,
        },
        other => {
            let (envelope, effect) = classify_error(other);
            Normalized {
                result: Err(envelope),
                effect,
            }
        }
    }
}

/// Normaliza um corpo de sucesso (status 2xx)
///
/// Corpos já normalizados (`success` presente) passam inalterados; os
/// demais são embrulhados com `message` e `data` sintetizados — `data`
/// recebe o campo `data` do corpo, ou o corpo inteiro na falta dele.
/// Um 201 sem campo `success` é aceito como sucesso pelo status
/// (comportamento do servidor, preservado).
pub fn normalize_success(body: Value) -> Value {
    if body.get("success").is_some() {
        return body;
    }

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or(MSG_SUCCESS)
        .to_string();
    let id = body.get("id").cloned();
    let data = match body.get("data") {
        Some(data) => data.clone(),
        None => body,
    };

    let mut envelope = json!({ "success": true, "message": message, "data": data });
    if let Some(id) = id {
        envelope["id"] = id;
    }
    envelope
}

/// Classifica um desfecho de erro. Total: sempre devolve um envelope.
///
/// Ordem de classificação (a primeira que casar vence):
/// 1. sem resposta alguma → código 0;
/// 2. status 401 → mensagem fixa + expiração da sessão;
/// 3. corpo já traz um objeto `error` → repassado inalterado;
/// 4. demais → sintetizado a partir do status e do `message` do corpo.
pub fn classify_error(outcome: RawOutcome) -> (ErrorEnvelope, Option<SessionEffect>) {
    match outcome {
        RawOutcome::Transport { message } => {
            tracing::warn!("Falha de rede: {}", message);
            (ErrorEnvelope::new(0, MSG_CONNECTION), None)
        }
        RawOutcome::Json { status: 401, .. } | RawOutcome::Empty { status: 401 } => (
            ErrorEnvelope::new(401, MSG_UNAUTHORIZED),
            Some(SessionEffect::ExpireSession),
        ),
        RawOutcome::Json { status, body } => {
            if let Some(error) = body.get("error") {
                // Forma inesperada do objeto `error` cai no fallback genérico
                return match serde_json::from_value::<ErrorBody>(error.clone()) {
                    Ok(error) => (
                        ErrorEnvelope {
                            success: false,
                            error,
                        },
                        None,
                    ),
                    Err(_) => (ErrorEnvelope::new(500, MSG_UNKNOWN), None),
                };
            }

            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Erro HTTP {}", status));
            (ErrorEnvelope::new(status, message), None)
        }
        RawOutcome::Empty { status } => {
            (ErrorEnvelope::new(status, format!("Erro HTTP {}", status)), None)
        }
    }
}
