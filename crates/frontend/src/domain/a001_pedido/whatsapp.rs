//! WhatsApp status notification links

use contracts::domain::a001_pedido::Pedido;
use thiserror::Error;

use crate::shared::config::WhatsappConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneError {
    #[error("Este pedido no tiene número de teléfono.")]
    Missing,
    #[error("Número de teléfono inválido.")]
    TooShort { digits: usize },
}

/// Digits only, with the country prefix prepended when it is not already there
pub fn normalize_phone(raw: Option<&str>, config: &WhatsappConfig) -> Result<String, PhoneError> {
    let raw = raw.map(str::trim).filter(|r| !r.is_empty()).ok_or(PhoneError::Missing)?;

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < config.min_digits {
        return Err(PhoneError::TooShort {
            digits: digits.len(),
        });
    }

    if digits.starts_with(&config.country_prefix) {
        Ok(digits)
    } else {
        Ok(format!("{}{}", config.country_prefix, digits))
    }
}

pub fn has_valid_phone(pedido: &Pedido, config: &WhatsappConfig) -> bool {
    normalize_phone(pedido.whatsapp.as_deref(), config).is_ok()
}

/// Customer-facing status message
pub fn status_message(pedido: &Pedido) -> String {
    let cantidad = pedido
        .cantidad
        .map(|c| format!("{} ", c))
        .unwrap_or_default();
    format!(
        "Hola {}, tu pedido de {}{} está en estado: {}. ¡Gracias por confiar en nosotros!",
        pedido.cliente, cantidad, pedido.prenda, pedido.estado
    )
}

/// Deep link that opens a chat with the customer and the status message
pub fn build_status_link(pedido: &Pedido, config: &WhatsappConfig) -> Result<String, PhoneError> {
    let phone = normalize_phone(pedido.whatsapp.as_deref(), config)?;
    Ok(format!(
        "{}?phone={}&text={}",
        config.send_url,
        phone,
        urlencoding::encode(&status_message(pedido))
    ))
}
