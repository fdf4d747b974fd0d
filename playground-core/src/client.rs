use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    config::RunnerConfig,
    error::Error,
    types::{RunRequest, RunResult},
};

/// Transport seam between the orchestrator and the execution service.
/// Test doubles implement this to simulate the service.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    async fn execute(&self, request: &RunRequest) -> Result<RunResult, Error>;
}

/// HTTP client for the execution service
pub struct HttpExecutionClient {
    client: Client,
    config: RunnerConfig,
}

impl HttpExecutionClient {
    pub fn new(config: RunnerConfig) -> Result<Self, Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::Http)?;

        Ok(Self { client, config })
    }

    /// Liveness probe against the service root
    pub async fn health(&self) -> Result<(), Error> {
        let response = self.client.get(&self.config.base_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Rejected {
                status_code: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl ExecutionBackend for HttpExecutionClient {
    async fn execute(&self, request: &RunRequest) -> Result<RunResult, Error> {
        debug!(
            run_id = %request.id,
            language = %request.language,
            "dispatching run request"
        );

        let response = self
            .client
            .post(format!("{}/run", self.config.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Rejected {
                status_code: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::MalformedResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguageId;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpExecutionClient {
        HttpExecutionClient::new(RunnerConfig::new(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn posts_language_and_code_as_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/run"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({
                "language": "python",
                "code": "print(1 + 1)"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "output": "2\n" })))
            .expect(1)
            .mount(&server)
            .await;

        let request = RunRequest::new(LanguageId::Python, "print(1 + 1)".to_string());
        let result = client_for(&server).execute(&request).await.unwrap();

        assert_eq!(result.output, "2\n");
    }

    #[tokio::test]
    async fn non_success_status_is_rejected_with_code() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/run"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let request = RunRequest::new(LanguageId::Go, "package main".to_string());
        let result = client_for(&server).execute(&request).await;

        assert!(matches!(
            result,
            Err(Error::Rejected { status_code: 500 })
        ));
    }

    #[tokio::test]
    async fn rejection_wins_over_body_shape() {
        let server = MockServer::start().await;

        // A 400 with a perfectly valid success body is still a rejection
        Mock::given(method("POST"))
            .and(path("/run"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "output": "ignored" })),
            )
            .mount(&server)
            .await;

        let request = RunRequest::new(LanguageId::Cpp, "int main() {}".to_string());
        let result = client_for(&server).execute(&request).await;

        assert!(matches!(
            result,
            Err(Error::Rejected { status_code: 400 })
        ));
    }

    #[tokio::test]
    async fn unparseable_body_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/run"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let request = RunRequest::new(LanguageId::Node, "console.log(1)".to_string());
        let result = client_for(&server).execute(&request).await;

        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Nothing listens on this port
        let config = RunnerConfig::new("http://127.0.0.1:9");
        let client = HttpExecutionClient::new(config).unwrap();

        let request = RunRequest::new(LanguageId::Python, "print(1)".to_string());
        let result = client.execute(&request).await;

        match result {
            Err(Error::Http(e)) => assert!(!e.to_string().is_empty()),
            other => panic!("Expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn health_reflects_service_root() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("Code Runner API is running!"),
            )
            .mount(&server)
            .await;

        assert!(client_for(&server).health().await.is_ok());
    }
}
