//! Garment orders ("pedidos")

pub mod aggregate;
pub mod draft;
pub mod dto;

pub use aggregate::{calendar_date_part, parse_calendar_date, EstadoPedido, Pedido, PedidoId};
pub use draft::{DraftError, DraftField, PedidoDraft, PedidoPayload};
pub use dto::{PedidoListResponse, PedidoPage};
