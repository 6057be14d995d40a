use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - previous / "Página X de Y" / next
///
/// The buttons are disabled at the bounds; callbacks are never invoked there.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages reported by the server
    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)]
    has_previous: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    on_previous: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_previous.get_untracked() {
                        on_previous.run(());
                    }
                }
                disabled=move || !has_previous.get()
                title="Página anterior"
            >
                {icon("chevron-left")}
                "Anterior"
            </button>
            <span class="pagination-info">
                {move || format!("Página {} de {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_next.get_untracked() {
                        on_next.run(());
                    }
                }
                disabled=move || !has_next.get()
                title="Página siguiente"
            >
                "Siguiente"
                {icon("chevron-right")}
            </button>
        </div>
    }
}
