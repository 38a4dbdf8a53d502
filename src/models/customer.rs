//! Tipos do recurso de clientes

use serde::{Deserialize, Serialize};

use crate::utils::masking;

/// Cliente cadastrado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    /// Data de nascimento em ISO (YYYY-MM-DD), como o servidor envia
    pub date_birth: String,
    pub cpf: String,
    #[serde(default)]
    pub rg: String,
    pub phone: String,
    pub enable: bool,
    pub user_id: i64,
    /// Algumas rotas já devolvem a data formatada; quando não, formatamos
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_birth_formatted: Option<String>,
}

impl Customer {
    /// Data de nascimento para exibição (DD/MM/YYYY)
    pub fn date_birth_display(&self) -> String {
        self.date_birth_formatted
            .clone()
            .unwrap_or_else(|| masking::format_date_br(&self.date_birth))
    }

    /// CPF para exibição (000.000.000-00)
    pub fn cpf_display(&self) -> String {
        masking::format_cpf(&self.cpf)
    }

    /// Telefone para exibição ((00) 00000-0000)
    pub fn phone_display(&self) -> String {
        masking::format_phone(&self.phone)
    }
}

/// Dados para criação de cliente
///
/// CPF e telefone viajam como dígitos puros, sem máscara.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreateInput {
    pub name: String,
    pub date_birth: String,
    pub cpf: String,
    /// RG é opcional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rg: Option<String>,
    pub phone: String,
}

/// Dados para atualização parcial de cliente
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdateInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
