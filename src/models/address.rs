//! Tipos do recurso de endereços

use serde::{Deserialize, Serialize};

use crate::utils::masking;

/// Endereço de um cliente
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub customer_id: i64,
    /// CEP em dígitos puros, sem máscara
    pub zipcode: String,
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl Address {
    /// CEP para exibição (00000-000)
    pub fn zipcode_display(&self) -> String {
        masking::format_cep(&self.zipcode)
    }
}

/// Dados para criação de endereço
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressCreateInput {
    pub customer_id: i64,
    pub zipcode: String,
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

/// Dados para atualização parcial de endereço
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressUpdateInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
