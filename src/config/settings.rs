use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::utils::logging::log_config_loaded;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub viacep: ViaCepSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl ApiSettings {
    pub fn to_client_config(&self) -> fwapi::ApiConfig {
        fwapi::ApiConfig {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_seconds,
            connect_timeout_seconds: self.connect_timeout_seconds,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ViaCepSettings {
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionSettings {
    pub token_ttl_hours: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Carregar .env em ambiente de desenvolvimento, se existir
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            .set_default("api.base_url", "https://api-kbmpgd.fwsistemas.com")?
            .set_default("api.timeout_seconds", 30)?
            .set_default("api.connect_timeout_seconds", 5)?
            .set_default("viacep.base_url", "https://viacep.com.br")?
            .set_default("session.token_ttl_hours", 24)?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        // Adicionar variáveis de ambiente específicas
        if let Ok(url) = std::env::var("FW_API_URL") {
            builder = builder.set_override("api.base_url", url)?;
        }

        // Demais overrides via prefixo (ex.: FW_CLIENTES__API__TIMEOUT_SECONDS)
        builder = builder.add_source(Environment::with_prefix("FW_CLIENTES").separator("__"));

        let s = builder.build()?;
        let settings: Settings = s.try_deserialize()?;

        log_config_loaded(&run_mode);

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::new().unwrap();
        assert_eq!(settings.api.base_url, "https://api-kbmpgd.fwsistemas.com");
        assert_eq!(settings.api.timeout_seconds, 30);
        assert_eq!(settings.viacep.base_url, "https://viacep.com.br");
        assert_eq!(settings.session.token_ttl_hours, 24);
    }
}
