//! Pré-preenchimento de endereço por CEP (ViaCEP)

use crate::utils::logging::{log_cep_lookup, log_error};
use crate::utils::masking::strip_digits;
use viacep::{ViaCepClient, ViaCepError};

/// Campos de endereço derivados de uma consulta de CEP
#[derive(Debug, Clone, PartialEq)]
pub struct AddressPrefill {
    pub zipcode: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub complement: Option<String>,
}

/// Consulta de CEP para preencher o cadastro de endereços
#[derive(Clone)]
pub struct CepService {
    client: ViaCepClient,
}

impl CepService {
    pub fn new(client: ViaCepClient) -> Self {
        Self { client }
    }

    /// Consulta o CEP e devolve os campos para pré-preencher o formulário
    pub async fn prefill(&self, cep: &str) -> Result<AddressPrefill, ViaCepError> {
        log_cep_lookup(cep);

        let address = match self.client.lookup(cep).await {
            Ok(address) => address,
            Err(e) => {
                log_error(&format!("Erro ao buscar CEP {}: {}", cep, e));
                return Err(e);
            }
        };

        Ok(AddressPrefill {
            zipcode: strip_digits(&address.cep),
            street: address.logradouro,
            neighborhood: address.bairro,
            city: address.localidade,
            state: address.uf,
            complement: if address.complemento.is_empty() {
                None
            } else {
                Some(address.complemento)
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_prefill_maps_viacep_fields() {
        let server = MockServer::start_async().await;
        server
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
        let service = CepService::new(client);
        let prefill = service.prefill("01001-000").await.unwrap();

        assert_eq!(
            prefill,
            AddressPrefill {
                zipcode: "01001000".into(),
                street: "Praça da Sé".into(),
                neighborhood: "Sé".into(),
                city: "São Paulo".into(),
                state: "SP".into(),
                complement: Some("lado ímpar".into()),
            }
        );
    }

    #[tokio::test]
    async fn test_prefill_propagates_not_found() {
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
        let service = CepService::new(client);
        let result = service.prefill("99999999").await;

        assert!(matches!(result, Err(ViaCepError::NotFound(_))));
    }
}
