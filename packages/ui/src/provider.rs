//! Auth service client context for the UI.

use api::{ApiConfig, HttpRegistrar};
use dioxus::prelude::*;

/// Get the registrar provided by the nearest [`ApiProvider`].
///
/// Without a provider the registrar is built from the environment, so a bare
/// [`RegistrationForm`](crate::RegistrationForm) still works.
pub fn use_registrar() -> HttpRegistrar {
    use_hook(|| try_consume_context::<HttpRegistrar>().unwrap_or_else(HttpRegistrar::from_env))
}

/// Provider component that shares one auth service client with its children.
/// Pass `config` to override the `AUTH_API_URL` environment lookup.
#[component]
pub fn ApiProvider(config: Option<ApiConfig>, children: Element) -> Element {
    use_context_provider(move || match config {
        Some(config) => HttpRegistrar::new(config),
        None => HttpRegistrar::from_env(),
    });

    rsx! {
        {children}
    }
}
