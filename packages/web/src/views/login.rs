//! Login page view, the landing route after a successful registration.

use dioxus::prelude::*;

use crate::Route;

/// Login page component. Signing in is handled by the auth service.
#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "page",

            h2 { "Login" }

            p {
                "Need an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
