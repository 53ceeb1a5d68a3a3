//! Authentication service calls.

mod register;

pub use register::{HttpRegistrar, Registrar};
