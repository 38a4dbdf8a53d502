//! Serviço de endereços: CRUD sobre /addresses
//!
//! A listagem tem duas rotas no servidor: a paginada, aninhada em
//! /customers, e a plana por cliente em /addresses/customer/{id}.

use std::sync::Arc;

use serde_json::Value;

use crate::models::{Address, AddressCreateInput, AddressUpdateInput};
use crate::utils::logging::{log_api_error, log_request_started};
use fwapi::{ApiResult, CreatedId, FwApiClient, Paginated};

/// Operações sobre o recurso de endereços
#[derive(Clone)]
pub struct AddressService {
    api: Arc<FwApiClient>,
}

impl AddressService {
    pub fn new(api: Arc<FwApiClient>) -> Self {
        Self { api }
    }

    /// Lista endereços de um cliente, paginados
    pub async fn get_all_by_customer(
        &self,
        customer_id: i64,
        page: u32,
        limit: u32,
    ) -> ApiResult<Paginated<Address>> {
        let endpoint = format!(
            "/customers/{}/addresses?page={}&limit={}",
            customer_id, page, limit
        );
        log_request_started(&endpoint, "GET");

        let result = self.api.get(&endpoint).await;
        if let Err(e) = &result {
            log_api_error(&endpoint, e.error.code, &e.error.message);
        }
        result
    }

    /// Lista todos os endereços de um cliente (sem paginação)
    ///
    /// `data` pode ser uma lista vazia; isso não é erro.
    pub async fn get_addresses_by_customer(&self, customer_id: i64) -> ApiResult<Vec<Address>> {
        let endpoint = format!("/addresses/customer/{}", customer_id);
        log_request_started(&endpoint, "GET");

        let result = self.api.get(&endpoint).await;
        if let Err(e) = &result {
            log_api_error(&endpoint, e.error.code, &e.error.message);
        }
        result
    }

    /// Busca um endereço pelo id
    pub async fn get_by_id(&self, id: i64) -> ApiResult<Address> {
        let endpoint = format!("/addresses/{}", id);
        log_request_started(&endpoint, "GET");

        let result = self.api.get(&endpoint).await;
        if let Err(e) = &result {
            log_api_error(&endpoint, e.error.code, &e.error.message);
        }
        result
    }

    /// Cria um endereço
    pub async fn create(&self, input: &AddressCreateInput) -> ApiResult<CreatedId> {
        log_request_started("/addresses", "POST");

        let result = self.api.post("/addresses", input).await;
        if let Err(e) = &result {
            log_api_error("/addresses", e.error.code, &e.error.message);
        }
        result
    }

    /// Atualiza um endereço
    pub async fn update(&self, id: i64, input: &AddressUpdateInput) -> ApiResult<CreatedId> {
        let endpoint = format!("/addresses/{}", id);
        log_request_started(&endpoint, "PUT");

        let result = self.api.put(&endpoint, input).await;
        if let Err(e) = &result {
            log_api_error(&endpoint, e.error.code, &e.error.message);
        }
        result
    }

    /// Remove um endereço
    pub async fn delete(&self, id: i64) -> ApiResult<Value> {
        let endpoint = format!("/addresses/{}", id);
        log_request_started(&endpoint, "DELETE");

        let result = self.api.delete(&endpoint).await;
        if let Err(e) = &result {
            log_api_error(&endpoint, e.error.code, &e.error.message);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fwapi::{ApiConfig, MemorySessionStore};
    use httpmock::prelude::*;
    use serde_json::json;

    fn service_for(server: &MockServer) -> AddressService {
        let config = ApiConfig {
            base_url: server.base_url(),
            ..ApiConfig::default()
        };
        let session = Arc::new(MemorySessionStore::new());
        let api = Arc::new(FwApiClient::new(config, session).unwrap());
        AddressService::new(api)
    }

    fn address_json(id: i64) -> Value {
        json!({
            "id": id,
            "customer_id": 7,
            "zipcode": "01001000",
            "street": "Praça da Sé",
            "number": "100",
            "neighborhood": "Sé",
            "city": "São Paulo",
            "state": "SP"
        })
    }

    #[tokio::test]
    async fn test_get_addresses_by_customer_accepts_empty_list() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/addresses/customer/7");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({"success": true, "data": []}));
            })
            .await;

        let service = service_for(&server);
        let envelope = service.get_addresses_by_customer(7).await.unwrap();

        assert!(envelope.into_data().unwrap().is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_all_by_customer_uses_nested_route() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/customers/7/addresses")
                    .query_param("page", "1")
                    .query_param("limit", "10");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "success": true,
                        "data": {
                            "items": [address_json(1), address_json(2)],
                            "total": 2,
                            "page": 1,
                            "limit": 10,
                            "pages": 1
                        }
                    }));
            })
            .await;

        let service = service_for(&server);
        let data = service
            .get_all_by_customer(7, 1, 10)
            .await
            .unwrap()
            .into_data()
            .unwrap();

        assert_eq!(data.items.len(), 2);
        assert_eq!(data.items[0].city, "São Paulo");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_returns_new_id() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/addresses");
                then.status(201)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "success": true,
                        "message": "Endereço criado com sucesso",
                        "data": {"id": 55}
                    }));
            })
            .await;

        let service = service_for(&server);
        let input = AddressCreateInput {
            customer_id: 7,
            zipcode: "01001000".into(),
            street: "Praça da Sé".into(),
            number: "100".into(),
            complement: None,
            neighborhood: "Sé".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
        };
        let envelope = service.create(&input).await.unwrap();

        assert_eq!(envelope.message.as_deref(), Some("Endereço criado com sucesso"));
        assert_eq!(envelope.into_data().unwrap().id(), 55);
    }

    #[tokio::test]
    async fn test_update_reads_top_level_id() {
        // Forma real do servidor para endereços: id no topo, fora de `data`
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/addresses/55")
                    .json_body(json!({"number": "200"}));
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({
                        "success": true,
                        "message": "Endereço atualizado com sucesso",
                        "id": "55"
                    }));
            })
            .await;

        let service = service_for(&server);
        let input = AddressUpdateInput {
            number: Some("200".into()),
            ..AddressUpdateInput::default()
        };
        let envelope = service.update(55, &input).await.unwrap();

        assert_eq!(envelope.created_id(), Some(55));
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn test_delete_without_body_still_succeeds() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/addresses/55");
                then.status(204);
            })
            .await;

        let service = service_for(&server);
        let envelope = service.delete(55).await.unwrap();

        assert!(envelope.success);
        assert!(envelope.data.is_none());
    }
}
