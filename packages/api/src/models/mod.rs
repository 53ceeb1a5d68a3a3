pub mod registration;

pub use registration::{RegistrationRequest, DEFAULT_ROLE};
