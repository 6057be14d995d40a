use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::NavigateOptions;

use crate::routes::paths;
use crate::shared::error::ApiError;
use crate::shared::notifications::use_notifications;
use crate::system::auth::context::use_services;
use crate::system::auth::guard::can_enter;

/// Credentials to send (username trimmed), or `None` when either one is blank
pub fn credentials(username: &str, password: &str) -> Option<(String, String)> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return None;
    }
    Some((username.to_string(), password.to_string()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let services = use_services();
    let notifications = use_notifications();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let logged_in = RwSignal::new(can_enter(services.session.as_ref()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let Some((username_val, password_val)) =
            credentials(&username.get_untracked(), &password.get_untracked())
        else {
            notifications.warning("Ingresa usuario y contraseña.");
            return;
        };

        set_is_loading.set(true);
        set_error_message.set(None);

        let services = services.clone();
        spawn_local(async move {
            match services.client.login(&username_val, &password_val).await {
                Ok(token) => {
                    log::info!("User {} logged in", username_val);
                    services.session.save(&Session::new(token, username_val));
                    logged_in.set(true);
                }
                Err(ApiError::Auth) => {
                    log::warn!("Login rejected for {}", username_val);
                    set_error_message.set(Some(ApiError::Auth.to_string()));
                }
                Err(e) => {
                    log::error!("Login failed: {}", e);
                    set_error_message.set(Some(format!("No se pudo iniciar sesión: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        {move || {
            logged_in
                .get()
                .then(|| {
                    view! {
                        <Redirect
                            path=paths::LISTA
                            options=NavigateOptions { replace: true, ..Default::default() }
                        />
                    }
                })
        }}
        <div class="login-container">
            <div class="login-box">
                <h1>"Pedidos"</h1>
                <h2>"Iniciar sesión"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Usuario"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_are_required() {
        assert_eq!(
            credentials("  ana ", " clave"),
            Some(("ana".to_string(), " clave".to_string()))
        );
        assert_eq!(credentials("   ", "clave"), None);
        assert_eq!(credentials("ana", ""), None);
    }
}
