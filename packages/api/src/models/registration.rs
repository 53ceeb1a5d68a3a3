//! # Registration payload
//!
//! [`RegistrationRequest`] is the JSON body posted to the auth service. The
//! `role` field is not user data: [`RegistrationRequest::new`] always fills it
//! with [`DEFAULT_ROLE`] and there is no setter, so nothing typed into the form
//! can change it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role attached to every self-service registration.
pub const DEFAULT_ROLE: &str = "user";

/// Body of `POST /v1/auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    role: String,
}

impl RegistrationRequest {
    /// Build a request for the given credentials with the default role.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            role: DEFAULT_ROLE.to_string(),
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

// Keep passwords out of logs.
impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .field("email", &self.email)
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_is_always_user() {
        let req = RegistrationRequest::new("bob", "pw", "bob@example.com");
        assert_eq!(req.role(), "user");
    }

    #[test]
    fn test_serialized_body_matches_wire_format() {
        let req = RegistrationRequest::new("alice", "secret123", "alice@example.com");
        let body = serde_json::to_string(&req).unwrap();
        assert_eq!(
            body,
            r#"{"username":"alice","password":"secret123","email":"alice@example.com","role":"user"}"#
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let req = RegistrationRequest::new("alice", "secret123", "alice@example.com");
        let printed = format!("{:?}", req);
        assert!(printed.contains("alice@example.com"));
        assert!(!printed.contains("secret123"));
    }
}
