//! In-memory backend double for controller tests

use async_trait::async_trait;
use contracts::domain::a001_pedido::{EstadoPedido, Pedido, PedidoId, PedidoPage, PedidoPayload};
use contracts::shared::paging::offset_for;
use std::sync::Mutex;

use super::api::PedidosClient;
use crate::shared::error::ApiError;

pub const VALID_PASSWORD: &str = "secreto";

#[derive(Default)]
struct FakeState {
    pedidos: Vec<Pedido>,
    next_id: u64,
    failure: Option<ApiError>,
    list_calls: Vec<(u32, u32)>,
    calls: usize,
}

#[derive(Default)]
pub struct FakePedidosClient {
    state: Mutex<FakeState>,
}

pub fn sample_pedido(n: u64) -> Pedido {
    Pedido {
        id: PedidoId::new(n.to_string()),
        cliente: format!("Cliente {}", n),
        prenda: format!("Prenda {}", n),
        cantidad: Some(1),
        fecha_entrega: None,
        whatsapp: None,
        valor: Some(1000.0 * n as f64),
        estado: EstadoPedido::Pendiente,
    }
}

impl FakePedidosClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend holding orders with ids `1..=count`
    pub fn with_orders(count: u64) -> Self {
        let client = Self::new();
        {
            let mut state = client.state.lock().unwrap();
            state.pedidos = (1..=count).map(sample_pedido).collect();
            state.next_id = count + 1;
        }
        client
    }

    /// Every following call fails with `error` until cleared with `None`
    pub fn set_failure(&self, error: Option<ApiError>) {
        self.state.lock().unwrap().failure = error;
    }

    /// `(page, offset)` of every list request, in order
    pub fn list_calls(&self) -> Vec<(u32, u32)> {
        self.state.lock().unwrap().list_calls.clone()
    }

    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    fn start_call(&self) -> Result<std::sync::MutexGuard<'_, FakeState>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        match state.failure.clone() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

fn to_pedido(id: PedidoId, payload: &PedidoPayload) -> Pedido {
    Pedido {
        id,
        cliente: payload.cliente.clone(),
        prenda: payload.prenda.clone(),
        cantidad: payload.cantidad,
        fecha_entrega: Some(payload.fecha_entrega),
        whatsapp: payload.whatsapp.clone(),
        valor: Some(payload.valor),
        estado: payload.estado,
    }
}

#[async_trait(?Send)]
impl PedidosClient for FakePedidosClient {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        self.start_call()?;
        if password == VALID_PASSWORD {
            Ok(format!("token-{}", username))
        } else {
            Err(ApiError::Auth)
        }
    }

    async fn list_pedidos(&self, page: u32, page_size: u32) -> Result<PedidoPage, ApiError> {
        let offset = offset_for(page, page_size);
        {
            let mut state = self.state.lock().unwrap();
            state.list_calls.push((page, offset));
        }
        let state = self.start_call()?;
        let total = state.pedidos.len() as u32;
        let total_pages = ((total + page_size - 1) / page_size).max(1);
        let pedidos = state
            .pedidos
            .iter()
            .skip(offset as usize)
            .take(page_size as usize)
            .cloned()
            .collect();
        Ok(PedidoPage {
            pedidos,
            total_pages,
        })
    }

    async fn get_pedido(&self, id: &PedidoId) -> Result<Pedido, ApiError> {
        let state = self.start_call()?;
        state
            .pedidos
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn create_pedido(&self, payload: &PedidoPayload) -> Result<Pedido, ApiError> {
        let mut state = self.start_call()?;
        let id = PedidoId::new(state.next_id.to_string());
        state.next_id += 1;
        let pedido = to_pedido(id, payload);
        state.pedidos.push(pedido.clone());
        Ok(pedido)
    }

    async fn update_pedido(
        &self,
        id: &PedidoId,
        payload: &PedidoPayload,
    ) -> Result<Pedido, ApiError> {
        let mut state = self.start_call()?;
        let slot = state
            .pedidos
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(ApiError::NotFound)?;
        *slot = to_pedido(id.clone(), payload);
        Ok(slot.clone())
    }
}
