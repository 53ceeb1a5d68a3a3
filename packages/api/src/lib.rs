//! # API crate — client side of the authentication service
//!
//! Everything the frontends need to talk to the external authentication service
//! lives here, kept free of any UI types so it can be exercised on its own.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | The [`Registrar`] seam and its reqwest-backed [`HttpRegistrar`] |
//! | [`config`] | [`ApiConfig`]: base URL of the auth service, read from `AUTH_API_URL` |
//! | [`error`] | [`SubmissionError`]: why a registration attempt failed |
//! | [`models`] | Wire payloads ([`RegistrationRequest`]) |
//!
//! ## Wire contract
//!
//! A registration is a single `POST {base_url}/v1/auth/register` with a JSON body
//! `{"username", "password", "email", "role": "user"}`. Any 2xx status counts as
//! success and the response body is ignored; every other outcome is a
//! [`SubmissionError`].

pub mod auth;
pub mod config;
pub mod error;
pub mod models;

pub use auth::{HttpRegistrar, Registrar};
pub use config::ApiConfig;
pub use error::{SubmissionError, REGISTRATION_FAILED_MESSAGE};
pub use models::{RegistrationRequest, DEFAULT_ROLE};
