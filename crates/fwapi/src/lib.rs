//! Cliente HTTP da API de clientes FW Sistemas
//!
//! Este crate concentra tudo que fica entre o transporte e os serviços do
//! SDK:
//!
//! - Envelopes normalizados de sucesso e erro (`envelope`)
//! - Normalização e classificação de respostas (`normalize`)
//! - Transporte com token de sessão injetado (`client`)
//! - Armazenamento de sessão e navegação pós-401 (`session`)
//!
//! O contrato central: nenhum chamador acima deste crate enxerga uma forma
//! crua de transporte nem recebe um erro de rede não tratado. Toda operação
//! devolve `Ok(SuccessEnvelope)` ou `Err(ErrorEnvelope)`.
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use fwapi::{ApiConfig, FwApiClient, MemorySessionStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> fwapi::Result<()> {
//!     let session = Arc::new(MemorySessionStore::new());
//!     let client = FwApiClient::new(ApiConfig::default(), session)?;
//!
//!     let envelope: fwapi::ApiResult<serde_json::Value> =
//!         client.get("/profile").await;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod envelope;
pub mod error;
pub mod normalize;
pub mod session;

pub use client::{ApiConfig, FwApiClient};
pub use envelope::{
    ApiResult, CreatedId, ErrorBody, ErrorEnvelope, ErrorKind, Paginated, SuccessEnvelope,
};
pub use error::{FwApiError, Result};
pub use normalize::{Normalized, RawOutcome, SessionEffect};
pub use session::{MemorySessionStore, Navigator, NoopNavigator, SessionStore, LOGIN_PATH};
