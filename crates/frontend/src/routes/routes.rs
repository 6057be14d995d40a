use crate::domain::a001_pedido::ui::details::{EditarPedidoPage, NuevoPedidoPage};
use crate::domain::a001_pedido::ui::list::PedidoList;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

// Literal paths must stay in sync with `super::paths`

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="header__title">"Página no encontrada"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LoginPage />
                    <Route
                        path=path!("/lista-pedidos")
                        view=|| view! { <RequireAuth><PedidoList /></RequireAuth> }
                    />
                    <Route
                        path=path!("/nuevo-pedido")
                        view=|| view! { <RequireAuth><NuevoPedidoPage /></RequireAuth> }
                    />
                    <Route
                        path=path!("/editar-pedido/:id")
                        view=|| view! { <RequireAuth><EditarPedidoPage /></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
