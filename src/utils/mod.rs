pub mod logging;
pub mod masking;

pub use masking::{
    format_cep, format_cpf, format_date_br, format_phone, parse_date_br, sanitize_rg,
    strip_digits,
};
