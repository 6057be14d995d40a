use contracts::domain::a001_pedido::{DraftError, Pedido, PedidoDraft, PedidoId};
use std::sync::Arc;

use crate::domain::a001_pedido::api::PedidosClient;
use crate::routes::paths;
use crate::shared::error::ApiError;
use crate::system::auth::context::AppServices;
use crate::system::auth::storage::SessionStore;

pub const CREATED_MESSAGE: &str = "Pedido creado con éxito";
pub const UPDATED_MESSAGE: &str = "Pedido actualizado correctamente.";
const CREATE_FAILED: &str = "Error al crear el pedido.";
const UPDATE_FAILED: &str = "Error al actualizar el pedido.";
const LOAD_FAILED: &str = "Error al cargar el pedido.";
const NOT_FOUND: &str = "El pedido no existe.";

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit(PedidoId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(PedidoDraft),
    Failed(String),
    SessionExpired,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved { pedido: Pedido, message: &'static str },
    /// Nothing was sent; the draft needs fixing first
    Invalid(DraftError),
    /// Backend refused or could not be reached; the draft is kept for retry
    Failed(String),
    SessionExpired,
}

/// Form changes that follow a submit
#[derive(Debug, Clone, PartialEq)]
pub struct NextStep {
    /// Replacement draft; `None` keeps what the user typed
    pub draft: Option<PedidoDraft>,
    /// Route to navigate to, if any
    pub route: Option<&'static str>,
}

/// Load and submit logic shared by the create and edit forms
pub struct PedidoFormController {
    mode: FormMode,
    client: Arc<dyn PedidosClient>,
    session: Arc<dyn SessionStore>,
}

impl PedidoFormController {
    pub fn new(mode: FormMode, services: &AppServices) -> Self {
        Self::from_parts(mode, services.client.clone(), services.session.clone())
    }

    pub fn from_parts(
        mode: FormMode,
        client: Arc<dyn PedidosClient>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            mode,
            client,
            session,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Initial draft: empty for a new order, the stored order when editing
    pub async fn load(&self) -> LoadOutcome {
        let id = match &self.mode {
            FormMode::Create => return LoadOutcome::Loaded(PedidoDraft::default()),
            FormMode::Edit(id) => id,
        };

        match self.client.get_pedido(id).await {
            Ok(pedido) => {
                log::debug!("Loaded pedido {}", id);
                LoadOutcome::Loaded(PedidoDraft::from_pedido(&pedido))
            }
            Err(ApiError::SessionExpired) => {
                self.clear_expired_session();
                LoadOutcome::SessionExpired
            }
            Err(ApiError::NotFound) => {
                log::warn!("Pedido {} not found", id);
                LoadOutcome::Failed(NOT_FOUND.to_string())
            }
            Err(err) => {
                log::error!("Failed to load pedido {}: {}", id, err);
                LoadOutcome::Failed(LOAD_FAILED.to_string())
            }
        }
    }

    /// Validate, coerce and send the draft
    pub async fn submit(&self, draft: &PedidoDraft) -> SubmitOutcome {
        if let FormMode::Create = self.mode {
            if let Err(err) = draft.check_required() {
                return SubmitOutcome::Invalid(err);
            }
        }

        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(err) => return SubmitOutcome::Invalid(err),
        };

        let result = match &self.mode {
            FormMode::Create => self.client.create_pedido(&payload).await,
            FormMode::Edit(id) => self.client.update_pedido(id, &payload).await,
        };

        match result {
            Ok(pedido) => {
                log::info!("Saved pedido {}", pedido.id);
                let message = match self.mode {
                    FormMode::Create => CREATED_MESSAGE,
                    FormMode::Edit(_) => UPDATED_MESSAGE,
                };
                SubmitOutcome::Saved { pedido, message }
            }
            Err(ApiError::SessionExpired) => {
                self.clear_expired_session();
                SubmitOutcome::SessionExpired
            }
            Err(err) => {
                log::error!("Failed to save pedido: {}", err);
                SubmitOutcome::Failed(self.failure_message(&err))
            }
        }
    }

    /// Draft reset and navigation for a submit outcome
    pub fn next_step(&self, outcome: &SubmitOutcome) -> NextStep {
        match outcome {
            SubmitOutcome::Saved { .. } => NextStep {
                draft: match self.mode {
                    FormMode::Create => Some(PedidoDraft::default()),
                    FormMode::Edit(_) => None,
                },
                route: Some(paths::LISTA),
            },
            SubmitOutcome::SessionExpired => NextStep {
                draft: None,
                route: Some(paths::LOGIN),
            },
            SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_) => NextStep {
                draft: None,
                route: None,
            },
        }
    }

    fn failure_message(&self, err: &ApiError) -> String {
        match self.mode {
            FormMode::Create => err.server_message().unwrap_or(CREATE_FAILED).to_string(),
            FormMode::Edit(_) => UPDATE_FAILED.to_string(),
        }
    }

    fn clear_expired_session(&self) {
        log::warn!("Session expired, clearing credentials");
        self.session.clear();
    }
}
