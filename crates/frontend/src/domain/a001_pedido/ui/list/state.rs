use contracts::domain::a001_pedido::{Pedido, PedidoPage};
use contracts::shared::paging::PageWindow;
use leptos::prelude::*;

use crate::shared::error::ApiError;
use crate::shared::list_utils::{contains_ignore_case, filter_list, Searchable};

impl Searchable for Pedido {
    fn matches_filter(&self, query_lower: &str) -> bool {
        contains_ignore_case(&self.cliente, query_lower)
            || contains_ignore_case(&self.prenda, query_lower)
    }
}

/// What happened when a list response was folded into the state
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    Loaded,
    /// Response for a page that is no longer selected; dropped
    Stale,
    /// Request failed; the table is now empty
    Emptied(ApiError),
    SessionExpired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PedidoListState {
    pub window: PageWindow,
    pub pedidos: Vec<Pedido>,
    // Search fields
    pub query: String,
    pub loading: bool,
}

impl PedidoListState {
    pub fn new(page_size: u32) -> Self {
        Self {
            window: PageWindow::new(page_size),
            pedidos: Vec::new(),
            query: String::new(),
            loading: false,
        }
    }

    /// Orders of the current page matching the search box
    pub fn filtered(&self) -> Vec<Pedido> {
        filter_list(&self.pedidos, &self.query)
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// Mark the current page as loading and return it
    pub fn begin_load(&mut self) -> u32 {
        self.loading = true;
        self.window.page()
    }

    /// Select the next page; `None` means nothing should be requested
    pub fn go_next(&mut self) -> Option<u32> {
        let page = self.window.advance()?;
        self.loading = true;
        Some(page)
    }

    /// Select the previous page; `None` means nothing should be requested
    pub fn go_previous(&mut self) -> Option<u32> {
        let page = self.window.retreat()?;
        self.loading = true;
        Some(page)
    }

    /// Fold the response for `requested_page` into the state.
    ///
    /// Session expiry wins over staleness. Any other result only lands when
    /// `requested_page` is still the selected page.
    pub fn commit(
        &mut self,
        requested_page: u32,
        result: Result<PedidoPage, ApiError>,
    ) -> ListEvent {
        if result.as_ref().err().is_some_and(ApiError::is_session_expired) {
            self.pedidos.clear();
            self.loading = false;
            return ListEvent::SessionExpired;
        }

        if requested_page != self.window.page() {
            return ListEvent::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.pedidos = page.pedidos;
                self.window.set_total_pages(page.total_pages);
                ListEvent::Loaded
            }
            Err(err) => {
                self.pedidos.clear();
                ListEvent::Emptied(err)
            }
        }
    }
}

/// Create state signal
pub fn create_state(page_size: u32) -> RwSignal<PedidoListState> {
    RwSignal::new(PedidoListState::new(page_size))
}
