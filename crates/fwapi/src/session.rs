//! Armazenamento de sessão e navegação
//!
//! O contexto de sessão é injetado explicitamente no cliente, em vez de
//! lido de um estado global: o token é consultado no momento do envio e
//! pode desaparecer no meio de uma sessão quando um 401 de outra requisição
//! em voo limpa o armazenamento. Os chamadores toleram isso.

use serde_json::Value;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Rota de entrada do login, destino do redirecionamento pós-401
pub const LOGIN_PATH: &str = "/auth/login";

/// Validade padrão da sessão (1 dia)
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Armazenamento chave-valor da sessão (token + perfil do usuário)
///
/// Contrato: nenhum método falha nem entra em pânico. Um backend
/// indisponível degrada para `None`/no-op, com log.
pub trait SessionStore: Send + Sync {
    /// Token atual, se presente e dentro da validade
    fn token(&self) -> Option<String>;
    /// Perfil do usuário autenticado, se presente e dentro da validade
    fn user(&self) -> Option<Value>;
    /// Guarda token e perfil, renovando a validade
    fn store_session(&self, token: &str, user: Option<Value>);
    /// Remove token e perfil
    fn clear(&self);
}

/// Navegação da view ativa (redirecionamento fire-and-forget)
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navegador nulo para ambientes sem view ativa
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, _path: &str) {}
}

#[derive(Debug, Default)]
struct SessionCell {
    token: Option<String>,
    user: Option<Value>,
    stored_at: Option<Instant>,
}

impl SessionCell {
    fn is_valid(&self, ttl: Duration) -> bool {
        match (&self.token, self.stored_at) {
            (Some(_), Some(stored_at)) => stored_at.elapsed() < ttl,
            _ => false,
        }
    }
}

/// Sessão em memória com validade fixa
#[derive(Debug)]
pub struct MemorySessionStore {
    ttl: Duration,
    cell: RwLock<SessionCell>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_SESSION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            cell: RwLock::new(SessionCell::default()),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        match self.cell.read() {
            Ok(cell) if cell.is_valid(self.ttl) => cell.token.clone(),
            Ok(_) => None,
            Err(e) => {
                tracing::error!("Sessão indisponível para leitura: {}", e);
                None
            }
        }
    }

    fn user(&self) -> Option<Value> {
        match self.cell.read() {
            Ok(cell) if cell.is_valid(self.ttl) => cell.user.clone(),
            Ok(_) => None,
            Err(e) => {
                tracing::error!("Sessão indisponível para leitura: {}", e);
                None
            }
        }
    }

    fn store_session(&self, token: &str, user: Option<Value>) {
        match self.cell.write() {
            Ok(mut cell) => {
                cell.token = Some(token.trim().to_string());
                cell.user = user;
                cell.stored_at = Some(Instant::now());
            }
            Err(e) => tracing::error!("Sessão indisponível para escrita: {}", e),
        }
    }

    fn clear(&self) {
        match self.cell.write() {
            Ok(mut cell) => {
                cell.token = None;
                cell.user = None;
                cell.stored_at = None;
            }
            Err(e) => tracing::error!("Sessão indisponível para limpeza: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_expiration() {
        let store = MemorySessionStore::with_ttl(Duration::from_secs(1));
        assert!(store.token().is_none());

        store.store_session("test_token", None);
        assert_eq!(store.token().as_deref(), Some("test_token"));

        std::thread::sleep(Duration::from_secs(2));
        assert!(store.token().is_none());
    }

    #[test]
    fn test_store_trims_token_and_keeps_user() {
        let store = MemorySessionStore::new();
        store.store_session("  abc123  ", Some(json!({"id": 1, "name": "Ana"})));

        assert_eq!(store.token().as_deref(), Some("abc123"));
        assert_eq!(store.user().unwrap()["name"], json!("Ana"));
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = MemorySessionStore::new();
        store.store_session("abc123", Some(json!({"id": 1})));
        store.clear();

        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }
}
