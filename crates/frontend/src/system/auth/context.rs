use leptos::prelude::*;
use std::sync::Arc;

use super::storage::SessionStore;
use crate::domain::a001_pedido::api::PedidosClient;
use crate::shared::config::Config;

/// Collaborators injected into every view through context
#[derive(Clone)]
pub struct AppServices {
    pub session: Arc<dyn SessionStore>,
    pub client: Arc<dyn PedidosClient>,
    pub config: Arc<Config>,
}

impl AppServices {
    pub fn new(
        session: Arc<dyn SessionStore>,
        client: Arc<dyn PedidosClient>,
        config: Config,
    ) -> Self {
        Self {
            session,
            client,
            config: Arc::new(config),
        }
    }

    /// Name of the signed-in user, if any
    pub fn username(&self) -> Option<String> {
        self.session.read().map(|s| s.username)
    }

    /// Forget the credentials (logout or expired token)
    pub fn end_session(&self) {
        self.session.clear();
    }
}

/// Hook to access the injected services
pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices not provided in component tree")
}
