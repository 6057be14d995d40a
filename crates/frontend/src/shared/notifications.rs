use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Warning => "toast toast--warning",
            NotificationKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Transient toasts shown in the top-right corner.
///
/// Each toast closes itself after `auto_close_ms`; clicking it closes it early.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
    auto_close_ms: u32,
}

impl NotificationService {
    pub fn new(auto_close_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            auto_close_ms,
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NotificationKind::Success, text.into());
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(NotificationKind::Warning, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NotificationKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }

    fn push(&self, kind: NotificationKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Notification { id, kind, text }));

        let svc = *self;
        let delay = self.auto_close_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            svc.dismiss(id);
        });
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the active toasts
#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toaster">
            <For
                each=move || notifications.items()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class={n.kind.class()} role="status" on:click=move |_| notifications.dismiss(id)>
                            <span class="toast__text">{n.text}</span>
                            <span class="toast__close">{icon("x")}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
