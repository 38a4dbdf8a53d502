//! Máscaras de exibição para dados brasileiros (CPF, telefone, data, CEP)
//!
//! As funções são progressivas: aceitam valores parciais durante a
//! digitação e devolvem a melhor máscara possível para o prefixo. O valor
//! que viaja para a API é sempre o de dígitos puros (`strip_digits`).

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Remove tudo que não for dígito
pub fn strip_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formata um CPF no padrão 000.000.000-00, limitado a 11 dígitos
pub fn format_cpf(cpf: &str) -> String {
    let digits = strip_digits(cpf);
    let digits = &digits[..digits.len().min(11)];
    match digits.len() {
        0..=3 => digits.to_string(),
        4..=6 => format!("{}.{}", &digits[..3], &digits[3..]),
        7..=9 => format!("{}.{}.{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "{}.{}.{}-{}",
            &digits[..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        ),
    }
}

/// Formata um telefone no padrão (00) 00000-0000, limitado a 11 dígitos
pub fn format_phone(phone: &str) -> String {
    let digits = strip_digits(phone);
    let digits = &digits[..digits.len().min(11)];
    match digits.len() {
        0..=2 => digits.to_string(),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Converte data ISO (YYYY-MM-DD) para exibição brasileira (DD/MM/YYYY)
///
/// Valores fora do formato ISO voltam como vieram.
pub fn format_date_br(date: &str) -> String {
    if !ISO_DATE.is_match(date) {
        return date.to_string();
    }
    let parts: Vec<&str> = date.split('-').collect();
    format!("{}/{}/{}", parts[2], parts[1], parts[0])
}

/// Converte data brasileira (DD/MM/YYYY) para ISO, validando o calendário
pub fn parse_date_br(date: &str) -> Option<String> {
    let parsed = NaiveDate::parse_from_str(date, "%d/%m/%Y").ok()?;
    Some(parsed.format("%Y-%m-%d").to_string())
}

/// Formata um CEP no padrão 00000-000, limitado a 8 dígitos
pub fn format_cep(cep: &str) -> String {
    let digits = strip_digits(cep);
    let digits = &digits[..digits.len().min(8)];
    if digits.len() <= 5 {
        digits.to_string()
    } else {
        format!("{}-{}", &digits[..5], &digits[5..])
    }
}

/// Mantém apenas os caracteres válidos de um RG (dígitos, X, ponto, hífen)
pub fn sanitize_rg(rg: &str) -> String {
    rg.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == '.' || *c == '-')
        .collect()
}
