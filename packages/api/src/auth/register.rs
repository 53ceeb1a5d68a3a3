//! # Registration call — `POST /v1/auth/register`
//!
//! [`Registrar`] is the seam between the form and the network: the UI only
//! needs "send this request, tell me whether it worked". [`HttpRegistrar`] is
//! the production implementation on top of `reqwest`, which compiles to
//! `fetch` on wasm and to hyper on native targets.
//!
//! One call is one request. There is no retry and the response body of a
//! successful registration is discarded.

use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::SubmissionError;
use crate::models::RegistrationRequest;

/// Something that can register a new account.
pub trait Registrar {
    fn register(
        &self,
        request: &RegistrationRequest,
    ) -> impl std::future::Future<Output = Result<(), SubmissionError>>;
}

/// [`Registrar`] that posts JSON to the configured auth service.
#[derive(Debug, Clone, Default)]
pub struct HttpRegistrar {
    client: Client,
    config: ApiConfig,
}

impl HttpRegistrar {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl Registrar for HttpRegistrar {
    async fn register(&self, request: &RegistrationRequest) -> Result<(), SubmissionError> {
        let url = self.config.register_url()?;
        tracing::debug!(%url, username = %request.username, "Submitting registration");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Registration request failed: {}", e);
                SubmissionError::Transport(e)
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(username = %request.username, "Registration accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), %body, "Registration rejected");
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
