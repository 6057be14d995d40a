use super::aggregate::{parse_calendar_date, EstadoPedido, Pedido};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Required fields of the order form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Cliente,
    Prenda,
    FechaEntrega,
    Valor,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DraftField::Cliente => "cliente",
            DraftField::Prenda => "prenda",
            DraftField::FechaEntrega => "fecha de entrega",
            DraftField::Valor => "valor",
        };
        f.write_str(label)
    }
}

/// Validation failures detected before anything is sent to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("El campo {0} es obligatorio")]
    MissingField(DraftField),
    #[error("Cantidad inválida: {0}")]
    InvalidQuantity(String),
    #[error("Valor inválido: {0}")]
    InvalidValue(String),
    #[error("Fecha de entrega inválida: {0}")]
    InvalidDate(String),
}

/// Order form contents exactly as typed.
///
/// Numeric fields stay textual while editing; [`PedidoDraft::to_payload`] is
/// the only place they are coerced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PedidoDraft {
    pub cliente: String,
    pub prenda: String,
    pub cantidad: String,
    pub fecha_entrega: String,
    pub whatsapp: String,
    pub valor: String,
    pub estado: EstadoPedido,
}

/// Body of `POST /pedidos` and `PUT /pedidos/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoPayload {
    pub cliente: String,
    pub prenda: String,
    pub cantidad: Option<u32>,
    pub fecha_entrega: NaiveDate,
    pub whatsapp: Option<String>,
    pub valor: f64,
    pub estado: EstadoPedido,
}

impl PedidoDraft {
    /// Seed an edit form from a persisted order
    pub fn from_pedido(pedido: &Pedido) -> Self {
        Self {
            cliente: pedido.cliente.clone(),
            prenda: pedido.prenda.clone(),
            cantidad: pedido.cantidad.map(|c| c.to_string()).unwrap_or_default(),
            fecha_entrega: pedido
                .fecha_entrega
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            whatsapp: pedido.whatsapp.clone().unwrap_or_default(),
            valor: pedido.valor.map(format_valor).unwrap_or_default(),
            estado: pedido.estado,
        }
    }

    /// Required-field check used before creating an order
    pub fn check_required(&self) -> Result<(), DraftError> {
        let required = [
            (DraftField::Cliente, &self.cliente),
            (DraftField::Prenda, &self.prenda),
            (DraftField::FechaEntrega, &self.fecha_entrega),
            (DraftField::Valor, &self.valor),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Coerce the textual fields into the submitted shape
    pub fn to_payload(&self) -> Result<PedidoPayload, DraftError> {
        let cantidad = match self.cantidad.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(n) if n >= 1 => Some(n),
                _ => return Err(DraftError::InvalidQuantity(raw.to_string())),
            },
        };

        let valor = match self.valor.trim() {
            "" => return Err(DraftError::MissingField(DraftField::Valor)),
            raw => match raw.parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => v,
                _ => return Err(DraftError::InvalidValue(raw.to_string())),
            },
        };

        let fecha_entrega = match self.fecha_entrega.trim() {
            "" => return Err(DraftError::MissingField(DraftField::FechaEntrega)),
            raw => parse_calendar_date(raw)
                .ok_or_else(|| DraftError::InvalidDate(raw.to_string()))?,
        };

        let whatsapp = match self.whatsapp.trim() {
            "" => None,
            raw => Some(raw.to_string()),
        };

        Ok(PedidoPayload {
            cliente: self.cliente.trim().to_string(),
            prenda: self.prenda.trim().to_string(),
            cantidad,
            fecha_entrega,
            whatsapp,
            valor,
            estado: self.estado,
        })
    }
}

// 150000.0 -> "150000", 99.5 -> "99.5"
fn format_valor(valor: f64) -> String {
    if valor.fract() == 0.0 {
        format!("{:.0}", valor)
    } else {
        valor.to_string()
    }
}
