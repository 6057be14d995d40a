use crate::domain::a001_pedido::api::HttpPedidosClient;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::api_base;
use crate::shared::config::load_config;
use crate::shared::notifications::{NotificationService, Toaster};
use crate::system::auth::context::AppServices;
use crate::system::auth::storage::{LocalStorageSessionStore, SessionStore};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let base_url = api_base(&config.api);
    log::info!("Orders backend at {}", base_url);

    // One session store shared by the client and the views
    let session: Arc<dyn SessionStore> = Arc::new(LocalStorageSessionStore);
    let client = Arc::new(HttpPedidosClient::new(base_url, session.clone()));

    provide_context(NotificationService::new(config.notifications.auto_close_ms));
    provide_context(AppServices::new(session, client, config));

    view! {
        <Toaster />
        <AppRoutes />
    }
}
