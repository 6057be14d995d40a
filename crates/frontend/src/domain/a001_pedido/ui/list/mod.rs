pub mod controller;
pub mod state;

use contracts::domain::a001_pedido::{Pedido, PedidoId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use std::sync::Arc;

use self::controller::PedidoListController;
use self::state::{create_state, ListEvent};
use crate::domain::a001_pedido::whatsapp::{build_status_link, has_valid_phone};
use crate::routes::paths;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_delivery_date;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::number_format::{format_cantidad, format_valor};
use crate::system::auth::context::use_services;

#[component]
#[allow(non_snake_case)]
pub fn PedidoList() -> impl IntoView {
    let services = use_services();
    let notifications = use_notifications();
    let controller = Arc::new(PedidoListController::new(&services));
    let state = create_state(controller.page_size());
    let goto = RwSignal::new(None::<String>);
    let username = services.username().unwrap_or_default();

    let load = move |page: u32| {
        let controller = controller.clone();
        spawn_local(async move {
            let result = controller.fetch(page).await;
            match state.try_update(|s| s.commit(page, result)) {
                Some(ListEvent::SessionExpired) => {
                    notifications.warning("Tu sesión ha expirado. Inicia sesión nuevamente.");
                    goto.set(Some(paths::LOGIN.to_string()));
                }
                Some(ListEvent::Emptied(err)) => {
                    notifications.error(format!("Error al obtener los pedidos: {}", err));
                }
                Some(ListEvent::Stale) => log::debug!("Dropped stale response for page {}", page),
                _ => {}
            }
        });
    };

    let on_previous = Callback::new({
        let load = load.clone();
        move |_| {
            if let Some(page) = state.try_update(|s| s.go_previous()).flatten() {
                load(page);
            }
        }
    });

    let on_next = Callback::new({
        let load = load.clone();
        move |_| {
            if let Some(page) = state.try_update(|s| s.go_next()).flatten() {
                load(page);
            }
        }
    });

    let on_edit = Callback::new(move |id: PedidoId| goto.set(Some(paths::editar(&id))));

    let logout = {
        let services = services.clone();
        move |_| {
            log::info!("User logged out");
            services.end_session();
            goto.set(Some(paths::LOGIN.to_string()));
        }
    };

    if let Some(page) = state.try_update(|s| s.begin_load()) {
        load(page);
    }

    view! {
        <div class="page">
            {move || goto.get().map(|path| view! { <Redirect path=path /> })}

            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Lista de pedidos"</h1>
                    <span class="header__user">{format!("Usuario: {}", username)}</span>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| goto.set(Some(paths::NUEVO.to_string()))
                    >
                        {icon("plus")}
                        "Agregar pedido"
                    </button>
                    <button class="button button--secondary" on:click=logout>
                        {icon("logout")}
                        "Cerrar sesión"
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <input
                    type="search"
                    class="form__input"
                    placeholder="Buscar por cliente o prenda"
                    prop:value=move || state.with(|s| s.query.clone())
                    on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                />
            </div>

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Cliente"</th>
                            <th>"Prenda"</th>
                            <th>"Cantidad"</th>
                            <th>"Fecha de entrega"</th>
                            <th>"Valor"</th>
                            <th>"Estado"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = state.with(|s| s.filtered());
                            if rows.is_empty() {
                                let text = if state.with(|s| s.loading) {
                                    "Cargando pedidos..."
                                } else {
                                    "No hay resultados."
                                };
                                view! {
                                    <tr>
                                        <td colspan="7" class="table__empty">{text}</td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                rows.into_iter()
                                    .map(|pedido| view! { <PedidoRow pedido=pedido on_edit=on_edit /> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.with(|s| s.window.page()))
                total_pages=Signal::derive(move || state.with(|s| s.window.total_pages()))
                has_previous=Signal::derive(move || state.with(|s| s.window.has_previous()))
                has_next=Signal::derive(move || state.with(|s| s.window.has_next()))
                on_previous=on_previous
                on_next=on_next
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn PedidoRow(pedido: Pedido, on_edit: Callback<PedidoId>) -> impl IntoView {
    let services = use_services();
    let notifications = use_notifications();
    let whatsapp = services.config.whatsapp.clone();
    let phone_ok = has_valid_phone(&pedido, &whatsapp);
    let id = pedido.id.clone();
    let estado_class = format!("badge badge--{}", pedido.estado.as_str().replace(' ', "-"));

    let send_status = {
        let pedido = pedido.clone();
        move |_| match build_status_link(&pedido, &whatsapp) {
            Ok(url) => open_in_new_tab(&url),
            Err(err) => {
                log::warn!("WhatsApp link rejected for pedido {}: {}", pedido.id, err);
                notifications.warning(err.to_string());
            }
        }
    };

    view! {
        <tr>
            <td>{pedido.cliente}</td>
            <td>{pedido.prenda}</td>
            <td>{format_cantidad(pedido.cantidad)}</td>
            <td>{format_delivery_date(pedido.fecha_entrega)}</td>
            <td class="table__cell--number">{format_valor(pedido.valor)}</td>
            <td>
                <span class=estado_class>{pedido.estado.label()}</span>
            </td>
            <td class="table__actions">
                <button
                    class="button button--ghost"
                    title="Editar"
                    on:click=move |_| on_edit.run(id.clone())
                >
                    {icon("edit")}
                </button>
                <button
                    class="button button--success"
                    title="Notificar por WhatsApp"
                    disabled=!phone_ok
                    on:click=send_status
                >
                    {icon("whatsapp")}
                </button>
            </td>
        </tr>
    }
}

fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
    {
        log::error!("Could not open WhatsApp link: {:?}", err);
    }
}
