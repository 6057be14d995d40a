use super::aggregate::Pedido;
use serde::Deserialize;

/// Body of `GET /pedidos`.
///
/// The backend answers either with an envelope carrying the total page count
/// or with a bare array of orders.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PedidoListResponse {
    Paged {
        pedidos: Vec<Pedido>,
        #[serde(default, rename = "totalPaginas")]
        total_paginas: Option<u32>,
    },
    Bare(Vec<Pedido>),
}

/// One server page of orders
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PedidoPage {
    pub pedidos: Vec<Pedido>,
    pub total_pages: u32,
}

impl From<PedidoListResponse> for PedidoPage {
    fn from(response: PedidoListResponse) -> Self {
        match response {
            PedidoListResponse::Paged {
                pedidos,
                total_paginas,
            } => PedidoPage {
                pedidos,
                total_pages: total_paginas.filter(|n| *n > 0).unwrap_or(1),
            },
            PedidoListResponse::Bare(pedidos) => PedidoPage {
                pedidos,
                total_pages: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> PedidoPage {
        serde_json::from_value::<PedidoListResponse>(value)
            .unwrap()
            .into()
    }

    #[test]
    fn test_enveloped_response() {
        let page = decode(json!({
            "pedidos": [{ "id": 1, "cliente": "Ana", "prenda": "Camisa" }],
            "totalPaginas": 3
        }));
        assert_eq!(page.pedidos.len(), 1);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_bare_array_is_single_page() {
        let page = decode(json!([
            { "id": 1, "cliente": "Ana", "prenda": "Camisa" },
            { "id": 2, "cliente": "Luis", "prenda": "Falda" }
        ]));
        assert_eq!(page.pedidos.len(), 2);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_bad_date_in_one_row_keeps_the_page() {
        let page = decode(json!({
            "pedidos": [
                { "id": 1, "cliente": "Ana", "prenda": "Camisa", "fecha_entrega": "2024-05-01" },
                { "id": 2, "cliente": "Luis", "prenda": "Falda", "fecha_entrega": "01/05/2024" }
            ],
            "totalPaginas": 2
        }));
        assert_eq!(page.pedidos.len(), 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(
            page.pedidos[0].fecha_entrega,
            chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
        );
        assert_eq!(page.pedidos[1].fecha_entrega, None);
    }

    #[test]
    fn test_missing_or_zero_total_defaults_to_one() {
        assert_eq!(decode(json!({ "pedidos": [] })).total_pages, 1);
        assert_eq!(decode(json!({ "pedidos": [], "totalPaginas": 0 })).total_pages, 1);
    }
}
