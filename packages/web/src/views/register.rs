//! Registration page view.

use dioxus::prelude::*;
use ui::RegistrationForm;

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        div {
            class: "page",
            RegistrationForm {}
        }
    }
}
