//! Tipos de usuário e autenticação

use serde::{Deserialize, Serialize};

/// Usuário do painel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub enable: bool,
}

/// Credenciais de login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Login {
    pub email: String,
    pub password: String,
}

/// Payload devolvido pelo login: token + perfil
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub token: String,
    pub user: User,
}
