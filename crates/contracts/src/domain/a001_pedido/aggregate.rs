use crate::domain::common::AggregateId;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned order identifier.
///
/// The backend may emit it either as a JSON string or as an integer; both are
/// kept as their textual form because the id is only ever used as a path
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PedidoId(pub String);

impl PedidoId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for PedidoId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => PedidoId(text),
            RawId::Number(number) => PedidoId(number.to_string()),
        })
    }
}

impl AggregateId for PedidoId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty order id".into());
        }
        Ok(PedidoId(trimmed.to_string()))
    }
}

impl fmt::Display for PedidoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EstadoPedido {
    #[default]
    #[serde(rename = "pendiente")]
    Pendiente,
    #[serde(rename = "en proceso")]
    EnProceso,
    #[serde(rename = "entregado")]
    Entregado,
    #[serde(rename = "cancelado")]
    Cancelado,
}

impl EstadoPedido {
    pub const ALL: [EstadoPedido; 4] = [
        EstadoPedido::Pendiente,
        EstadoPedido::EnProceso,
        EstadoPedido::Entregado,
        EstadoPedido::Cancelado,
    ];

    /// Wire value, also used in customer-facing messages
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoPedido::Pendiente => "pendiente",
            EstadoPedido::EnProceso => "en proceso",
            EstadoPedido::Entregado => "entregado",
            EstadoPedido::Cancelado => "cancelado",
        }
    }

    /// Capitalised label for selectors
    pub fn label(&self) -> &'static str {
        match self {
            EstadoPedido::Pendiente => "Pendiente",
            EstadoPedido::EnProceso => "En proceso",
            EstadoPedido::Entregado => "Entregado",
            EstadoPedido::Cancelado => "Cancelado",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|estado| estado.as_str() == value)
    }
}

impl fmt::Display for EstadoPedido {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A garment order as persisted by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    pub id: PedidoId,
    pub cliente: String,
    pub prenda: String,
    #[serde(default)]
    pub cantidad: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_calendar_date")]
    pub fecha_entrega: Option<NaiveDate>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub valor: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_estado")]
    pub estado: EstadoPedido,
}

/// Everything before the first `T` of an ISO date or datetime
pub fn calendar_date_part(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

/// Parse `YYYY-MM-DD`, discarding any time component
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(calendar_date_part(raw.trim()), "%Y-%m-%d").ok()
}

fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => {
            let date = parse_calendar_date(&text);
            if date.is_none() {
                log::warn!("Ignoring unparseable fecha_entrega {:?}", text);
            }
            Ok(date)
        }
    }
}

fn deserialize_estado<'de, D>(deserializer: D) -> Result<EstadoPedido, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<EstadoPedido>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_full_order() {
        let pedido: Pedido = serde_json::from_value(json!({
            "id": 7,
            "cliente": "Ana",
            "prenda": "Camisa",
            "cantidad": 3,
            "fecha_entrega": "2024-05-01T00:00:00",
            "whatsapp": "300 123 4567",
            "valor": 150000.0,
            "estado": "en proceso"
        }))
        .unwrap();

        assert_eq!(pedido.id, PedidoId::new("7"));
        assert_eq!(pedido.cantidad, Some(3));
        assert_eq!(pedido.fecha_entrega, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(pedido.estado, EstadoPedido::EnProceso);
    }

    #[test]
    fn test_missing_optionals_and_status_default() {
        let pedido: Pedido = serde_json::from_value(json!({
            "id": "abc",
            "cliente": "Luis",
            "prenda": "Pantalón",
            "cantidad": null,
            "valor": null,
            "estado": null
        }))
        .unwrap();

        assert_eq!(pedido.cantidad, None);
        assert_eq!(pedido.fecha_entrega, None);
        assert_eq!(pedido.valor, None);
        assert_eq!(pedido.estado, EstadoPedido::Pendiente);
    }

    #[test]
    fn test_malformed_date_decodes_as_absent() {
        let pedido: Pedido = serde_json::from_value(json!({
            "id": 1,
            "cliente": "Ana",
            "prenda": "Camisa",
            "fecha_entrega": "mañana"
        }))
        .unwrap();
        assert_eq!(pedido.fecha_entrega, None);
        assert_eq!(pedido.cliente, "Ana");
    }

    #[test]
    fn test_estado_wire_names() {
        assert_eq!(
            serde_json::to_value(EstadoPedido::EnProceso).unwrap(),
            json!("en proceso")
        );
        assert_eq!(EstadoPedido::parse("cancelado"), Some(EstadoPedido::Cancelado));
        assert_eq!(EstadoPedido::parse("perdido"), None);
        assert_eq!(EstadoPedido::Entregado.label(), "Entregado");
    }

    #[test]
    fn test_calendar_date_part() {
        assert_eq!(calendar_date_part("2024-05-01T10:30:00Z"), "2024-05-01");
        assert_eq!(calendar_date_part("2024-05-01"), "2024-05-01");
        assert_eq!(parse_calendar_date(" 2024-12-31 "), NaiveDate::from_ymd_opt(2024, 12, 31));
    }
}
