//! This crate contains all shared UI for the workspace.

mod provider;
pub use provider::{use_registrar, ApiProvider};

pub mod registration;
pub use registration::{FormError, FormState, RegistrationForm, LOGIN_ROUTE};
