//! Autenticação e ciclo de vida da sessão
//!
//! O login guarda token + perfil na sessão injetada; o logout limpa e
//! devolve a view para a tela de login. A expiração forçada por 401
//! acontece no cliente HTTP, não aqui.

use std::sync::Arc;

use crate::models::{AuthData, Login, User};
use crate::utils::logging::{log_api_error, log_login_success, log_session_cleared, log_warning};
use fwapi::{ApiResult, FwApiClient, Navigator, SessionStore, LOGIN_PATH};

/// Operações de autenticação e sessão
#[derive(Clone)]
pub struct AuthService {
    api: Arc<FwApiClient>,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthService {
    pub fn new(
        api: Arc<FwApiClient>,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            session,
            navigator,
        }
    }

    /// Autentica e guarda token + perfil na sessão
    pub async fn login(&self, credentials: &Login) -> ApiResult<AuthData> {
        let result = self.api.post("/auth/login", credentials).await;

        match &result {
            Ok(envelope) => {
                if let Some(auth) = &envelope.data {
                    let user = serde_json::to_value(&auth.user).ok();
                    self.session.store_session(auth.token.trim(), user);
                    log_login_success(&auth.user.email);
                } else {
                    log_warning("Resposta de login sem token");
                }
            }
            Err(e) => log_api_error("/auth/login", e.error.code, &e.error.message),
        }

        result
    }

    /// Encerra a sessão e volta para a tela de login
    pub fn logout(&self) {
        self.session.clear();
        log_session_cleared();
        self.navigator.navigate(LOGIN_PATH);
    }

    /// Perfil do usuário autenticado
    pub async fn profile(&self) -> ApiResult<User> {
        let result = self.api.get("/profile").await;
        if let Err(e) = &result {
            log_api_error("/profile", e.error.code, &e.error.message);
        }
        result
    }

    /// Usuário guardado na sessão, se houver
    pub fn current_user(&self) -> Option<User> {
        self.session
            .user()
            .and_then(|value| serde_json::from_value(value).ok())
    }

    /// Há token de sessão dentro da validade?
    pub fn is_authenticated(&self) -> bool {
        self.session.token().is_some()
    }
}
