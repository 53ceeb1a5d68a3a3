//! # Registration form state and submit flow
//!
//! The component in [`form`] is thin: it keeps a [`FormState`] in a signal,
//! forwards keystrokes to [`FormState::update`] and hands submissions to
//! [`submit`]. Everything observable about a submission lives here so it can be
//! driven without a renderer.
//!
//! ## Submit flow
//!
//! 1. [`FormState::missing_field`] stands in for the browser's `required`
//!    check. An empty field yields [`SubmitOutcome::Blocked`] and no request.
//! 2. Otherwise exactly one [`Registrar::register`] call is made with
//!    [`FormState::to_request`] (role fixed to `"user"`).
//! 3. [`FormState::apply`] folds the outcome back into the state: success
//!    returns [`LOGIN_ROUTE`] to navigate to, failure sets the fixed error message.
//!
//! The error message is never cleared by editing a field; it is only
//! overwritten by the next failed submission.

mod form;

pub use form::{FormError, RegistrationForm};

use api::{RegistrationRequest, Registrar, SubmissionError};

/// Route the user is sent to after a successful registration.
pub const LOGIN_ROUTE: &str = "/login";

/// One of the three form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    Email,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Username, Field::Password, Field::Email];
}

/// Values currently typed into the form, plus the error to display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub email: String,
    /// Empty when no error is shown.
    pub error: String,
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A required field was empty; nothing was sent.
    Blocked(Field),
    Registered,
    Failed(SubmissionError),
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::Email => &self.email,
        }
    }

    /// Replace the value of one field.
    pub fn update(&mut self, field: Field, value: String) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
            Field::Email => self.email = value,
        }
    }

    /// First required field that is still empty.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest::new(&self.username, &self.password, &self.email)
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Record the outcome of a submission. Returns the route to navigate to, if any.
    pub fn apply(&mut self, outcome: &SubmitOutcome) -> Option<&'static str> {
        match outcome {
            SubmitOutcome::Registered => Some(LOGIN_ROUTE),
            SubmitOutcome::Failed(e) => {
                self.error = e.user_message().to_string();
                None
            }
            SubmitOutcome::Blocked(_) => None,
        }
    }
}

/// Send the form to the auth service, unless a required field is empty.
pub async fn submit<R: Registrar>(registrar: &R, state: &FormState) -> SubmitOutcome {
    if let Some(field) = state.missing_field() {
        tracing::debug!(?field, "Registration blocked by empty field");
        return SubmitOutcome::Blocked(field);
    }

    match registrar.register(&state.to_request()).await {
        Ok(()) => SubmitOutcome::Registered,
        Err(e) => SubmitOutcome::Failed(e),
    }
}
