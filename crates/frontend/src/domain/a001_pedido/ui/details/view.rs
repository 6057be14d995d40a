use super::model::FormMode;
use super::view_model::PedidoFormViewModel;
use contracts::domain::a001_pedido::{EstadoPedido, PedidoDraft, PedidoId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use crate::routes::paths;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_services;

/// Create page ("Nuevo pedido")
#[component]
#[allow(non_snake_case)]
pub fn NuevoPedidoPage() -> impl IntoView {
    let vm = PedidoFormViewModel::new(FormMode::Create, &use_services(), use_notifications());
    view! { <PedidoForm vm=vm /> }
}

/// Edit page ("Editar pedido") for the `:id` route parameter
#[component]
#[allow(non_snake_case)]
pub fn EditarPedidoPage() -> impl IntoView {
    let params = use_params_map();
    let raw_id = params.with_untracked(|p| p.get("id")).unwrap_or_default();

    match PedidoId::from_string(&raw_id) {
        Ok(id) => {
            let vm = PedidoFormViewModel::new(
                FormMode::Edit(id),
                &use_services(),
                use_notifications(),
            );
            vm.load_if_needed();
            view! { <PedidoForm vm=vm /> }.into_any()
        }
        Err(e) => {
            log::warn!("Invalid order id in route: {}", e);
            view! { <Redirect path=paths::LISTA /> }.into_any()
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn PedidoForm(vm: PedidoFormViewModel) -> impl IntoView {
    let form = vm.form;
    let loading = vm.loading;
    let saving = vm.saving;
    let goto = vm.goto;
    let is_edit = vm.is_edit_mode();
    let title = if is_edit { "Editar pedido" } else { "Nuevo pedido" };

    let on_submit = {
        let vm = vm.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.save_command();
        }
    };
    let on_cancel = {
        let vm = vm.clone();
        move |_| vm.cancel_command()
    };

    view! {
        <div class="page page--narrow">
            {move || goto.get().map(|path| view! { <Redirect path=path /> })}

            <div class="header">
                <h1 class="header__title">{title}</h1>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="form__loading">"Cargando pedido..."</div> }
            >
                <form class="form" on:submit=on_submit.clone()>
                    <FormField
                        label="Cliente"
                        required=true
                        form=form
                        read=|f| f.cliente.clone()
                        write=|f, v| f.cliente = v
                    />
                    <FormField
                        label="Prenda"
                        required=true
                        form=form
                        read=|f| f.prenda.clone()
                        write=|f, v| f.prenda = v
                    />
                    <FormField
                        label="Cantidad"
                        input_type="number"
                        min="1"
                        form=form
                        read=|f| f.cantidad.clone()
                        write=|f, v| f.cantidad = v
                    />
                    <FormField
                        label="Fecha de entrega"
                        input_type="date"
                        required=true
                        form=form
                        read=|f| f.fecha_entrega.clone()
                        write=|f, v| f.fecha_entrega = v
                    />
                    <FormField
                        label="WhatsApp"
                        input_type="tel"
                        form=form
                        read=|f| f.whatsapp.clone()
                        write=|f, v| f.whatsapp = v
                    />
                    <FormField
                        label="Valor"
                        input_type="number"
                        min="0"
                        required=true
                        form=form
                        read=|f| f.valor.clone()
                        write=|f, v| f.valor = v
                    />

                    {is_edit.then(|| view! { <EstadoSelect form=form /> })}

                    <div class="form__actions">
                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || saving.get()
                        >
                            {icon("save")}
                            {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                        </button>
                        <button type="button" class="button button--secondary" on:click=on_cancel.clone()>
                            "Cancelar"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

/// Text input bound to one raw draft field
#[component]
#[allow(non_snake_case)]
fn FormField(
    label: &'static str,
    form: RwSignal<PedidoDraft>,
    read: fn(&PedidoDraft) -> String,
    write: fn(&mut PedidoDraft, String),
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] min: Option<&'static str>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then_some(" *")}
            </label>
            <input
                class="form__input"
                type=input_type
                min=min
                required=required
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn EstadoSelect(form: RwSignal<PedidoDraft>) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">"Estado"</label>
            <select
                class="form__select"
                prop:value=move || form.with(|f| f.estado.as_str())
                on:change=move |ev| {
                    if let Some(estado) = EstadoPedido::parse(&event_target_value(&ev)) {
                        form.update(|f| f.estado = estado);
                    }
                }
            >
                {EstadoPedido::ALL
                    .into_iter()
                    .map(|estado| {
                        view! {
                            <option
                                value=estado.as_str()
                                selected=move || form.with(|f| f.estado == estado)
                            >
                                {estado.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
