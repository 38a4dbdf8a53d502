//! Regras de validação dos cadastros de cliente e endereço
//!
//! As mensagens são exibidas campo a campo e o conjunto acumulado pode
//! virar um `ErrorEnvelope` 422 com o mapa `errors`. Os serviços não
//! validam por conta própria; quem chama decide quando validar, e o
//! servidor continua sendo a palavra final.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{AddressCreateInput, CustomerCreateInput};
use fwapi::ErrorEnvelope;

static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static RG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9X.-]+$").unwrap());
static UF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());

/// Erros de validação acumulados por campo
#[derive(Debug, Clone, Default, Error)]
#[error("Dados inválidos")]
pub struct ValidationErrors {
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for ErrorEnvelope {
    fn from(v: ValidationErrors) -> Self {
        ErrorEnvelope::new(422, "Dados inválidos").with_field_errors(v.errors)
    }
}

/// Valida os dados de criação de cliente
pub fn validate_customer(input: &CustomerCreateInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if input.name.trim().chars().count() < 3 {
        errors.push("name", "Nome deve ter pelo menos 3 caracteres");
    }

    if !ISO_DATE.is_match(&input.date_birth)
        || chrono::NaiveDate::parse_from_str(&input.date_birth, "%Y-%m-%d").is_err()
    {
        errors.push("date_birth", "Data inválida (formato: YYYY-MM-DD)");
    }

    if input.cpf.chars().count() != 11 {
        errors.push("cpf", "CPF deve ter 11 dígitos");
    }

    if let Some(rg) = &input.rg {
        if !RG_CHARS.is_match(rg) {
            errors.push("rg", "RG deve conter apenas números, X, pontos ou hífens");
        }
        if rg.chars().count() < 5 {
            errors.push("rg", "RG deve ter pelo menos 5 caracteres");
        }
        if rg.chars().count() > 15 {
            errors.push("rg", "RG deve ter no máximo 15 caracteres");
        }
    }

    let phone_len = input.phone.chars().count();
    if phone_len < 10 {
        errors.push("phone", "Telefone deve ter pelo menos 10 dígitos");
    } else if phone_len > 11 {
        errors.push("phone", "Telefone deve ter no máximo 11 dígitos");
    }

    errors.into_result()
}

/// Valida os dados de criação de endereço
pub fn validate_address(input: &AddressCreateInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let zipcode_digits = input.zipcode.chars().filter(|c| c.is_ascii_digit()).count();
    if zipcode_digits != input.zipcode.chars().count() || zipcode_digits != 8 {
        errors.push("zipcode", "CEP deve ter 8 dígitos");
    }

    if input.street.trim().is_empty() {
        errors.push("street", "Rua é obrigatória");
    }
    if input.number.trim().is_empty() {
        errors.push("number", "Número é obrigatório");
    }
    if input.neighborhood.trim().is_empty() {
        errors.push("neighborhood", "Bairro é obrigatório");
    }
    if input.city.trim().is_empty() {
        errors.push("city", "Cidade é obrigatória");
    }
    if !UF.is_match(&input.state) {
        errors.push("state", "Estado deve ser a sigla UF com 2 letras");
    }

    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_customer() -> CustomerCreateInput {
        CustomerCreateInput {
            name: "Ana Souza".into(),
            date_birth: "1990-01-01".into(),
            cpf: "12345678901".into(),
            rg: Some("12.345.678-X".into()),
            phone: "11999999999".into(),
        }
    }

    fn valid_address() -> AddressCreateInput {
        AddressCreateInput {
            customer_id: 1,
            zipcode: "01001000".into(),
            street: "Praça da Sé".into(),
            number: "100".into(),
            complement: None,
            neighborhood: "Sé".into(),
            city: "São Paulo".into(),
            state: "SP".into(),
        }
    }

    #[test]
    fn test_valid_customer_passes() {
        assert!(validate_customer(&valid_customer()).is_ok());
    }

    #[test]
    fn test_customer_without_rg_passes() {
        let mut input = valid_customer();
        input.rg = None;
        assert!(validate_customer(&input).is_ok());
    }

    #[test]
    fn test_customer_field_messages() {
        let input = CustomerCreateInput {
            name: "Jo".into(),
            date_birth: "31/01/1990".into(),
            cpf: "123".into(),
            rg: Some("1!".into()),
            phone: "119".into(),
        };
        let errors = validate_customer(&input).unwrap_err().errors;

        assert_eq!(errors["name"], vec!["Nome deve ter pelo menos 3 caracteres"]);
        assert_eq!(
            errors["date_birth"],
            vec!["Data inválida (formato: YYYY-MM-DD)"]
        );
        assert_eq!(errors["cpf"], vec!["CPF deve ter 11 dígitos"]);
        assert_eq!(
            errors["rg"],
            vec![
                "RG deve conter apenas números, X, pontos ou hífens",
                "RG deve ter pelo menos 5 caracteres"
            ]
        );
        assert_eq!(errors["phone"], vec!["Telefone deve ter pelo menos 10 dígitos"]);
    }

    #[test]
    fn test_date_must_exist_in_calendar() {
        let mut input = valid_customer();
        input.date_birth = "1990-02-31".into();
        let errors = validate_customer(&input).unwrap_err().errors;
        assert!(errors.contains_key("date_birth"));
    }

    #[test]
    fn test_valid_address_passes() {
        assert!(validate_address(&valid_address()).is_ok());
    }

    #[test]
    fn test_address_field_messages() {
        let input = AddressCreateInput {
            customer_id: 1,
            zipcode: "123".into(),
            street: " ".into(),
            number: "".into(),
            complement: None,
            neighborhood: "".into(),
            city: "".into(),
            state: "sp".into(),
        };
        let errors = validate_address(&input).unwrap_err().errors;

        assert_eq!(errors["zipcode"], vec!["CEP deve ter 8 dígitos"]);
        assert!(errors.contains_key("street"));
        assert!(errors.contains_key("number"));
        assert!(errors.contains_key("neighborhood"));
        assert!(errors.contains_key("city"));
        assert!(errors.contains_key("state"));
    }

    #[test]
    fn test_validation_errors_become_422_envelope() {
        let mut input = valid_customer();
        input.cpf = "123".into();
        let envelope: ErrorEnvelope = validate_customer(&input).unwrap_err().into();

        assert_eq!(envelope.error.code, 422);
        assert_eq!(envelope.error.message, "Dados inválidos");
        let errors = envelope.error.errors.unwrap();
        assert_eq!(errors["cpf"], vec!["CPF deve ter 11 dígitos"]);
    }
}
