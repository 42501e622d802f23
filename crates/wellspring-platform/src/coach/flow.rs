//! HTTP client for the hosted coach flow.
//!
//! Posts the schema-typed request record to the flow endpoint and decodes
//! the schema-typed response. Uses browser `fetch()` via gloo-net for
//! WASM compatibility. One attempt per call; retry is the caller's choice.

use async_trait::async_trait;
use gloo_net::http::Request;

use wellspring_core::ports::{CoachPort, CoachRequest, CoachResponse};
use wellspring_types::config::CoachConfig;
use wellspring_types::{AppError, Result};

pub struct FlowCoach {
    config: CoachConfig,
}

impl FlowCoach {
    pub fn new(config: CoachConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!("{}/coach", self.config.api_base.trim_end_matches('/'))
    }
}

#[async_trait(?Send)]
impl CoachPort for FlowCoach {
    async fn converse(&self, req: CoachRequest) -> Result<CoachResponse> {
        let mut builder =
            Request::post(&self.endpoint()).header("Content-Type", "application/json");
        if !self.config.api_key.is_empty() {
            builder = builder.header(
                "Authorization",
                &format!("Bearer {}", self.config.api_key),
            );
        }

        let response = builder
            .json(&req)
            .map_err(|e| AppError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AppError::Remote(format!("HTTP {}: {}", status, text)));
        }

        response
            .json::<CoachResponse>()
            .await
            .map_err(|e| AppError::Remote(e.to_string()))
    }
}
