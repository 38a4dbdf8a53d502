//! Serviço de clientes: CRUD sobre /customers

use std::sync::Arc;

use serde_json::Value;

use crate::models::{Customer, CustomerCreateInput, CustomerUpdateInput};
use crate::utils::logging::{log_api_error, log_request_started};
use fwapi::{ApiResult, CreatedId, FwApiClient, Paginated};

/// Operações sobre o recurso de clientes
#[derive(Clone)]
pub struct CustomerService {
    api: Arc<FwApiClient>,
}

impl CustomerService {
    pub fn new(api: Arc<FwApiClient>) -> Self {
        Self { api }
    }

    /// Lista clientes paginados
    pub async fn get_all(&self, page: u32, limit: u32) -> ApiResult<Paginated<Customer>> {
        let endpoint = format!("/customers?page={}&limit={}", page, limit);
        log_request_started(&endpoint, "GET");

        let result = self.api.get(&endpoint).await;
        if let Err(e) = &result {
            log_api_error("/customers", e.error.code, &e.error.message);
        }
        result
    }

    /// Busca um cliente pelo id
    pub async fn get_by_id(&self, id: i64) -> ApiResult<Customer> {
        let endpoint = format!("/customers/{}", id);
        log_request_started(&endpoint, "GET");

        let result = self.api.get(&endpoint).await;
        if let Err(e) = &result {
            log_api_error(&endpoint, e.error.code, &e.error.message);
        }
        result
    }

    /// Cria um cliente
    ///
    /// O `data` da resposta varia entre o recurso ecoado, `{id}` e o id
    /// puro; `CreatedId` absorve as três formas. Um 201 sem campo
    /// `success` é aceito como sucesso pelo status.
    pub async fn create(&self, input: &CustomerCreateInput) -> ApiResult<CreatedId> {
        log_request_started("/customers", "POST");

        let result = self.api.post("/customers", input).await;
        if let Err(e) = &result {
            log_api_error("/customers", e.error.code, &e.error.message);
        }
        result
    }

    /// Atualiza um cliente
    pub async fn update(&self, id: i64, input: &CustomerUpdateInput) -> ApiResult<Customer> {
        let endpoint = format!("/customers/{}", id);
        log_request_started(&endpoint, "PUT");

        let result = self.api.put(&endpoint, input).await;
        if let Err(e) = &result {
            log_api_error(&endpoint, e.error.code, &e.error.message);
        }
        result
    }

    /// Remove um cliente
    pub async fn delete(&self, id: i64) -> ApiResult<Value> {
        let endpoint = format!("/customers/{}", id);
        log_request_started(&endpoint, "DELETE");

        let result = self.api.delete(&endpoint).await;
        if let Err(e) = &result {
            log_api_error(&endpoint, e.error.code, &e.error.message);
        }
        result
    }
}
