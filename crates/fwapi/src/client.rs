//! Cliente HTTP da API FW Sistemas
//!
//! Transporte único para todos os serviços do SDK: toda resposta ou falha
//! é reduzida a um `RawOutcome` e normalizada antes de chegar ao chamador.
//! O efeito de sessão de um 401 é aplicado aqui, uma única vez por erro,
//! sem bloquear o retorno do envelope.

use crate::envelope::{ApiResult, ErrorEnvelope, SuccessEnvelope};
use crate::error::{FwApiError, Result};
use crate::normalize::{self, Normalized, RawOutcome, SessionEffect, MSG_UNKNOWN};
use crate::session::{Navigator, NoopNavigator, SessionStore, LOGIN_PATH};
use reqwest::{Client as HttpClient, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Configuração do cliente
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-kbmpgd.fwsistemas.com".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 5,
        }
    }
}

/// Cliente da API de clientes FW Sistemas
///
/// A sessão é injetada: o token é lido do `SessionStore` no momento do
/// envio de cada requisição. Não há retry, cancelamento nem ordenação
/// entre requisições em voo.
#[derive(Clone)]
pub struct FwApiClient {
    http_client: HttpClient,
    base_url: String,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl FwApiClient {
    /// Cria um cliente com navegador nulo (sem view ativa)
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        Self::with_navigator(config, session, Arc::new(NoopNavigator))
    }

    /// Cria um cliente com um navegador para o redirecionamento pós-401
    ///
    /// # Timeouts
    ///
    /// - Total: 30s (padrão)
    /// - Connect: 5s (padrão)
    pub fn with_navigator(
        config: ApiConfig,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .build()
            .map_err(|e| FwApiError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    /// URL base configurada
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executa uma requisição GET normalizada
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.execute(Method::GET, endpoint, None).await
    }

    /// Executa uma requisição POST normalizada
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = encode_body(body)?;
        self.execute(Method::POST, endpoint, Some(body)).await
    }

    /// Executa uma requisição PUT normalizada
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = encode_body(body)?;
        self.execute(Method::PUT, endpoint, Some(body)).await
    }

    /// Executa uma requisição DELETE normalizada
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.execute(Method::DELETE, endpoint, None).await
    }

    /// Caminho único de execução: despacha, normaliza, aplica o efeito de
    /// sessão e tipa o envelope de sucesso
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> ApiResult<T> {
        let outcome = self.dispatch(method, endpoint, body).await;
        let Normalized { result, effect } = normalize::normalize(outcome);

        if let Some(SessionEffect::ExpireSession) = effect {
            self.expire_session();
        }

        let envelope = result?;
        serde_json::from_value::<SuccessEnvelope<T>>(envelope).map_err(|e| {
            tracing::error!("Envelope de sucesso em formato inesperado: {}", e);
            ErrorEnvelope::new(500, MSG_UNKNOWN)
        })
    }

    /// Reduz a requisição a um `RawOutcome`; erros de transporte nunca
    /// escapam daqui
    async fn dispatch(&self, method: Method, endpoint: &str, body: Option<Value>) -> RawOutcome {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Accept", "application/json");

        // Token lido no momento do envio; pode já ter sido limpo por um
        // 401 concorrente de outra requisição em voo
        if let Some(token) = self.session.token() {
            request = request.header("Authorization", format!("Bearer {}", token.trim()));
        }

        // Content-Type apenas nos métodos que enviam corpo
        if let Some(body) = body {
            request = request
                .header("Content-Type", "application/json")
                .json(&body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                return RawOutcome::Transport {
                    message: e.to_string(),
                }
            }
        };

        into_outcome(response).await
    }

    /// Aplica o efeito de um 401: limpa a sessão e dispara o
    /// redirecionamento para o login. Nada aqui falha ou bloqueia.
    fn expire_session(&self) {
        tracing::info!("Sessão expirada; redirecionando para {}", LOGIN_PATH);
        self.session.clear();
        self.navigator.navigate(LOGIN_PATH);
    }
}

fn encode_body<B: Serialize>(body: &B) -> std::result::Result<Value, ErrorEnvelope> {
    serde_json::to_value(body)
        .map_err(|e| ErrorEnvelope::new(500, format!("Erro ao montar requisição: {}", e)))
}

/// Converte a resposta em `Json` ou `Empty` conforme o content type
async fn into_outcome(response: Response) -> RawOutcome {
    let status = response.status().as_u16();
    let is_json = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false);

    if !is_json {
        return RawOutcome::Empty { status };
    }

    match response.json::<Value>().await {
        Ok(body) => RawOutcome::Json { status, body },
        Err(e) => {
            tracing::warn!("Corpo JSON inválido (status {}): {}", status, e);
            RawOutcome::Empty { status }
        }
    }
}
