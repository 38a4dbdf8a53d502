//! Cliente da API pública ViaCEP
//!
//! Consulta de endereço por CEP, usada para pré-preencher o cadastro de
//! endereços. A API devolve `{"erro": true}` com status 200 para CEPs
//! inexistentes; aqui isso vira um erro de verdade.

pub mod client;
pub mod error;

pub use client::{ViaCepAddress, ViaCepClient};
pub use error::{Result, ViaCepError};
