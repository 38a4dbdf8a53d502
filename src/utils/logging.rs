use tracing::{debug, error, info, warn};

/// Inicializa o subscriber global de logs (respeita RUST_LOG)
pub fn init() {
    tracing_subscriber::fmt::init();
}

pub fn log_request_started(endpoint: &str, method: &str) {
    debug!("Request: {} {}", method, endpoint);
}

pub fn log_api_error(endpoint: &str, code: u16, error: &str) {
    error!("API error: {} - Código: {} - {}", endpoint, code, error);
}

pub fn log_login_success(email: &str) {
    info!("Login realizado com sucesso: {}", email);
}

pub fn log_session_cleared() {
    info!("Sessão encerrada; retornando ao login");
}

pub fn log_cep_lookup(cep: &str) {
    debug!("Consultando CEP {}", cep);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
