//! Order form UI module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: load/submit controller over the orders client
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos components (create and edit pages)

pub mod model;
mod view;
mod view_model;

pub use model::{FormMode, LoadOutcome, PedidoFormController, SubmitOutcome};
pub use view::{EditarPedidoPage, NuevoPedidoPage};
pub use view_model::PedidoFormViewModel;
