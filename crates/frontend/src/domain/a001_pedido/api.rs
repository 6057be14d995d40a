//! API layer for orders

use async_trait::async_trait;
use contracts::domain::a001_pedido::{
    Pedido, PedidoId, PedidoListResponse, PedidoPage, PedidoPayload,
};
use contracts::shared::paging::offset_for;
use gloo_net::http::{Request, RequestBuilder};
use std::sync::Arc;

use crate::shared::api_utils::{read_json, ErrorExtraction};
use crate::shared::error::ApiError;
use crate::system::auth::api as auth_api;
use crate::system::auth::storage::SessionStore;

/// Typed access to the orders backend.
///
/// Every call except `login` carries the stored bearer token.
#[async_trait(?Send)]
pub trait PedidosClient: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    async fn list_pedidos(&self, page: u32, page_size: u32) -> Result<PedidoPage, ApiError>;

    async fn get_pedido(&self, id: &PedidoId) -> Result<Pedido, ApiError>;

    async fn create_pedido(&self, payload: &PedidoPayload) -> Result<Pedido, ApiError>;

    async fn update_pedido(&self, id: &PedidoId, payload: &PedidoPayload)
        -> Result<Pedido, ApiError>;
}

/// Error body handling per endpoint; only creation reports a `message`
pub fn extraction_for_create() -> ErrorExtraction {
    ErrorExtraction::NestedMessage
}

/// Path of one order; the id is percent-encoded as a single segment
pub fn pedido_path(id: &PedidoId) -> String {
    format!("/pedidos/{}", urlencoding::encode(id.value()))
}

/// `GET /pedidos` query for a 1-based page
pub fn list_path(page: u32, page_size: u32) -> String {
    format!(
        "/pedidos?skip={}&limit={}",
        offset_for(page, page_size),
        page_size
    )
}

/// gloo-net implementation reading the token from the session store per call
pub struct HttpPedidosClient {
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl HttpPedidosClient {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.read() {
            Some(session) => builder.header("Authorization", &session.bearer()),
            None => builder,
        }
    }
}

#[async_trait(?Send)]
impl PedidosClient for HttpPedidosClient {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        auth_api::login(&self.base_url, username, password).await
    }

    async fn list_pedidos(&self, page: u32, page_size: u32) -> Result<PedidoPage, ApiError> {
        let response = self
            .authorized(Request::get(&self.url(&list_path(page, page_size))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let data: PedidoListResponse = read_json(response, ErrorExtraction::StatusOnly).await?;
        Ok(data.into())
    }

    async fn get_pedido(&self, id: &PedidoId) -> Result<Pedido, ApiError> {
        let response = self
            .authorized(Request::get(&self.url(&pedido_path(id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, ErrorExtraction::StatusOnly).await
    }

    async fn create_pedido(&self, payload: &PedidoPayload) -> Result<Pedido, ApiError> {
        let response = self
            .authorized(Request::post(&self.url("/pedidos")))
            .json(payload)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, extraction_for_create()).await
    }

    async fn update_pedido(
        &self,
        id: &PedidoId,
        payload: &PedidoPayload,
    ) -> Result<Pedido, ApiError> {
        let response = self
            .authorized(Request::put(&self.url(&pedido_path(id))))
            .json(payload)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, ErrorExtraction::StatusOnly).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_path_offsets_by_page() {
        assert_eq!(list_path(1, 10), "/pedidos?skip=0&limit=10");
        assert_eq!(list_path(2, 10), "/pedidos?skip=10&limit=10");
        assert_eq!(list_path(5, 10), "/pedidos?skip=40&limit=10");
    }

    #[test]
    fn test_order_path_encodes_id() {
        assert_eq!(pedido_path(&PedidoId::new("17")), "/pedidos/17");
        assert_eq!(pedido_path(&PedidoId::new("a b/1")), "/pedidos/a%20b%2F1");
    }

    #[test]
    fn test_only_create_reads_nested_message() {
        assert_eq!(extraction_for_create(), ErrorExtraction::NestedMessage);
    }
}
