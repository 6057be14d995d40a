use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::NavigateOptions;

use super::context::use_services;
use super::storage::SessionStore;
use crate::routes::paths;

/// Whether a protected view may render: a stored token is required
pub fn can_enter(session: &dyn SessionStore) -> bool {
    session
        .read()
        .map(|s| !s.token.is_empty())
        .unwrap_or(false)
}

/// Component that requires authentication.
///
/// Without a session it redirects to the login route and never builds its
/// children, so the guarded view issues no requests.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let services = use_services();

    move || {
        if can_enter(services.session.as_ref()) {
            children().into_any()
        } else {
            log::debug!("No session, redirecting to login");
            view! {
                <Redirect
                    path=paths::LOGIN
                    options=NavigateOptions { replace: true, ..Default::default() }
                />
            }
            .into_any()
        }
    }
}
