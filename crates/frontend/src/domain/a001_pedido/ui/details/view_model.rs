use super::model::{FormMode, LoadOutcome, PedidoFormController, SubmitOutcome};
use contracts::domain::a001_pedido::PedidoDraft;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use crate::routes::paths;
use crate::shared::notifications::NotificationService;
use crate::system::auth::context::AppServices;

const SESSION_EXPIRED: &str = "Tu sesión ha expirado. Inicia sesión nuevamente.";

/// ViewModel for the order form (create and edit)
#[derive(Clone)]
pub struct PedidoFormViewModel {
    pub form: RwSignal<PedidoDraft>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    /// Route to leave for once set
    pub goto: RwSignal<Option<String>>,
    controller: Arc<PedidoFormController>,
    notifications: NotificationService,
}

impl PedidoFormViewModel {
    pub fn new(mode: FormMode, services: &AppServices, notifications: NotificationService) -> Self {
        let loading = matches!(mode, FormMode::Edit(_));
        Self {
            form: RwSignal::new(PedidoDraft::default()),
            loading: RwSignal::new(loading),
            saving: RwSignal::new(false),
            goto: RwSignal::new(None),
            controller: Arc::new(PedidoFormController::new(mode, services)),
            notifications,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.controller.is_edit_mode()
    }

    /// Load the stored order when editing
    pub fn load_if_needed(&self) {
        if !self.is_edit_mode() {
            return;
        }

        let this = self.clone();
        spawn_local(async move {
            match this.controller.load().await {
                LoadOutcome::Loaded(draft) => this.form.set(draft),
                LoadOutcome::Failed(message) => this.notifications.error(message),
                LoadOutcome::SessionExpired => this.leave_expired(),
            }
            this.loading.set(false);
        });
    }

    /// Submit the current draft; the draft is left untouched on failure
    pub fn save_command(&self) {
        if self.saving.get_untracked() {
            return;
        }

        let this = self.clone();
        let draft = self.form.get_untracked();
        this.saving.set(true);
        spawn_local(async move {
            let outcome = this.controller.submit(&draft).await;
            match &outcome {
                SubmitOutcome::Saved { message, .. } => this.notifications.success(*message),
                SubmitOutcome::Invalid(err) => this.notifications.warning(err.to_string()),
                SubmitOutcome::Failed(message) => this.notifications.error(message.clone()),
                SubmitOutcome::SessionExpired => this.notifications.warning(SESSION_EXPIRED),
            }

            let next = this.controller.next_step(&outcome);
            if let Some(draft) = next.draft {
                this.form.set(draft);
            }
            if let Some(route) = next.route {
                this.goto.set(Some(route.to_string()));
            }
            this.saving.set(false);
        });
    }

    pub fn cancel_command(&self) {
        self.goto.set(Some(paths::LISTA.to_string()));
    }

    fn leave_expired(&self) {
        self.notifications.warning(SESSION_EXPIRED);
        self.goto.set(Some(paths::LOGIN.to_string()));
    }
}
