//! Registration form component.

use dioxus::prelude::*;

use super::{submit, Field, FormState};
use crate::provider::use_registrar;

/// Register form: username, password and email, posted to the auth service.
///
/// On success the router navigates to [`LOGIN_ROUTE`](super::LOGIN_ROUTE). On
/// failure a single generic message is shown above the form. The submit button
/// stays enabled while a request is in flight and repeated submits are not
/// deduplicated.
#[component]
pub fn RegistrationForm() -> Element {
    let registrar = use_registrar();
    let mut fields = use_signal(FormState::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let registrar = registrar.clone();
        let snapshot = fields.peek().clone();
        // Tied to this component's scope: dropped if the form unmounts mid-request.
        spawn(async move {
            let outcome = submit(&registrar, &snapshot).await;
            let route = fields.write().apply(&outcome);
            if let Some(route) = route {
                navigator().push(route);
            }
        });
    };

    let state = fields();

    rsx! {
        div {
            class: "registration",

            h2 { "Register" }

            FormError { message: state.error.clone() }

            form {
                onsubmit: handle_submit,

                div {
                    label { r#for: "username", "Username:" }
                    input {
                        id: "username",
                        r#type: "text",
                        required: true,
                        value: state.username.clone(),
                        oninput: move |evt: FormEvent| fields.write().update(Field::Username, evt.value()),
                    }
                }

                div {
                    label { r#for: "password", "Password:" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: state.password.clone(),
                        oninput: move |evt: FormEvent| fields.write().update(Field::Password, evt.value()),
                    }
                }

                div {
                    label { r#for: "email", "Email:" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: state.email.clone(),
                        oninput: move |evt: FormEvent| fields.write().update(Field::Email, evt.value()),
                    }
                }

                button { r#type: "submit", "Register" }
            }
        }
    }
}

/// Red error paragraph; renders nothing for an empty message.
#[component]
pub fn FormError(message: String) -> Element {
    if message.is_empty() {
        return rsx! {};
    }

    rsx! {
        p {
            class: "form-error",
            style: "color: red;",
            "{message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_error(message: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            FormError,
            FormErrorProps {
                message: message.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_error_paragraph_shows_message() {
        let html = render_error("Registration failed, please try again.");
        assert!(html.contains("<p"));
        assert!(html.contains("Registration failed, please try again."));
    }

    #[test]
    fn test_no_paragraph_without_error() {
        let html = render_error("");
        assert!(!html.contains("<p"));
    }

    #[test]
    fn test_initial_form_markup() {
        let mut dom = VirtualDom::new(RegistrationForm);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("<h2>Register</h2>"));
        assert!(html.contains("Username:"));
        assert!(html.contains("Password:"));
        assert!(html.contains("Email:"));
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains(">Register</button>"));
        assert!(!html.contains("<p"));
    }
}
