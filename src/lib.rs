// Biblioteca do SDK FW Clientes
// Expõe módulos para uso em testes e aplicações

pub mod config;
pub mod models;
pub mod services;
pub mod utils;
pub mod validations;

use std::sync::Arc;
use std::time::Duration;

use fwapi::{FwApiClient, MemorySessionStore, Navigator, NoopNavigator, SessionStore};

/// Estado compartilhado do SDK: configuração + serviços prontos
///
/// Todos os serviços compartilham um único cliente HTTP, uma única sessão
/// e um único navegador, para que o efeito de um 401 seja uniforme
/// independentemente de qual serviço disparou a requisição.
#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub auth: services::AuthService,
    pub customers: services::CustomerService,
    pub addresses: services::AddressService,
    pub cep: services::CepService,
}

impl AppState {
    /// Monta os serviços com sessão em memória e navegador nulo
    pub fn new(settings: config::Settings) -> Result<Self, fwapi::FwApiError> {
        let ttl = Duration::from_secs(settings.session.token_ttl_hours * 60 * 60);
        let session = Arc::new(MemorySessionStore::with_ttl(ttl));
        Self::with_parts(settings, session, Arc::new(NoopNavigator))
    }

    /// Monta os serviços com sessão e navegador fornecidos pelo ambiente
    pub fn with_parts(
        settings: config::Settings,
        session: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, fwapi::FwApiError> {
        let api = Arc::new(FwApiClient::with_navigator(
            settings.api.to_client_config(),
            session.clone(),
            navigator.clone(),
        )?);

        let viacep_client = viacep::ViaCepClient::with_base_url(settings.viacep.base_url.as_str())
            .map_err(|e| fwapi::FwApiError::ConfigError(e.to_string()))?;

        Ok(Self {
            auth: services::AuthService::new(api.clone(), session, navigator),
            customers: services::CustomerService::new(api.clone()),
            addresses: services::AddressService::new(api),
            cep: services::CepService::new(viacep_client),
            settings,
        })
    }
}
