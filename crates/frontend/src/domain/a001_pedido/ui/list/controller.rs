use contracts::domain::a001_pedido::PedidoPage;
use contracts::shared::paging::offset_for;
use std::sync::Arc;

use crate::domain::a001_pedido::api::PedidosClient;
use crate::shared::error::ApiError;
use crate::system::auth::context::AppServices;
use crate::system::auth::guard::can_enter;
use crate::system::auth::storage::SessionStore;

/// Fetches order pages on behalf of the list view
pub struct PedidoListController {
    client: Arc<dyn PedidosClient>,
    session: Arc<dyn SessionStore>,
    page_size: u32,
}

impl PedidoListController {
    pub fn new(services: &AppServices) -> Self {
        Self::from_parts(
            services.client.clone(),
            services.session.clone(),
            services.config.pedidos.page_size,
        )
    }

    pub fn from_parts(
        client: Arc<dyn PedidosClient>,
        session: Arc<dyn SessionStore>,
        page_size: u32,
    ) -> Self {
        Self {
            client,
            session,
            page_size,
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Request one page. A 401 drops the stored session before returning.
    pub async fn fetch(&self, page: u32) -> Result<PedidoPage, ApiError> {
        if !can_enter(self.session.as_ref()) {
            return Err(ApiError::SessionExpired);
        }

        log::debug!(
            "Loading pedidos page {} (offset {})",
            page,
            offset_for(page, self.page_size)
        );
        let result = self.client.list_pedidos(page, self.page_size).await;
        match &result {
            Ok(data) => log::info!(
                "Loaded {} pedidos (page {} of {})",
                data.pedidos.len(),
                page,
                data.total_pages
            ),
            Err(ApiError::SessionExpired) => {
                log::warn!("Session expired while listing pedidos");
                self.session.clear();
            }
            Err(err) => log::error!("Failed to load pedidos: {}", err),
        }
        result
    }
}
