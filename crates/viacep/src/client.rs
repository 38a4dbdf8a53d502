//! Cliente HTTP para a API ViaCEP

use crate::error::{Result, ViaCepError};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Endereço retornado pela consulta de CEP
///
/// Para CEPs inexistentes a API responde 200 com `{"erro": true}` e sem os
/// demais campos; por isso todos têm default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViaCepAddress {
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub erro: bool,
}

/// Cliente para consultar a API ViaCEP
#[derive(Clone)]
pub struct ViaCepClient {
    http_client: HttpClient,
    base_url: String,
}

impl ViaCepClient {
    /// Cria um cliente apontando para a API pública
    pub fn new() -> Result<Self> {
        Self::with_base_url("https://viacep.com.br")
    }

    /// Cria um cliente com URL base customizada
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| ViaCepError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Consulta um CEP (8 dígitos, aceito com ou sem máscara)
    pub async fn lookup(&self, cep: &str) -> Result<ViaCepAddress> {
        let digits: String = cep.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 8 {
            return Err(ViaCepError::InvalidCep(cep.to_string()));
        }

        let url = format!("{}/ws/{}/json/", self.base_url, digits);

        tracing::debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!("ViaCEP respondeu status {}", status);
            return Err(ViaCepError::ApiError(status.as_u16()));
        }

        let address: ViaCepAddress = response.json().await?;
        if address.erro {
            return Err(ViaCepError::NotFound(digits));
        }

        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = ViaCepClient::new().unwrap();
        assert_eq!(client.base_url, "https://viacep.com.br");
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/01001000/json/");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "cep": "01001-000",
                        "logradouro": "Praça da Sé",
                        "complemento": "lado ímpar",
                        "bairro": "Sé",
                        "localidade": "São Paulo",
                        "uf": "SP"
                    }));
            })
            .await;

        let client = ViaCepClient::with_base_url(server.base_url()).unwrap();
        // A máscara é descartada antes da consulta
        let address = client.lookup("01001-000").await.unwrap();

        assert_eq!(address.logradouro, "Praça da Sé");
        assert_eq!(address.localidade, "São Paulo");
        assert_eq!(address.uf, "SP");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_lookup_unknown_cep() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/ws/99999999/json/");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"erro": true}));
            })
            .await;

        let client = ViaCepClient::with_base_url(server.base_url()).unwrap();
        let result = client.lookup("99999999").await;

        match result {
            Err(ViaCepError::NotFound(cep)) => assert_eq!(cep, "99999999"),
            other => panic!("esperado NotFound, veio {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_lookup_rejects_short_cep() {
        let client = ViaCepClient::new().unwrap();
        let result = client.lookup("1234").await;
        assert!(matches!(result, Err(ViaCepError::InvalidCep(_))));
    }
}
