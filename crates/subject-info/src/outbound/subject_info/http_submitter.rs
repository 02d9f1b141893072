//! Reqwest-backed subject info submitter.
//!
//! This adapter owns transport details only: JSON serialisation of the
//! payload, timeout handling, and HTTP error mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::domain::SubjectSelection;
use crate::domain::ports::{SubjectInfoSubmitError, SubjectInfoSubmitter};

const DEFAULT_USER_AGENT: &str = "subject-info/0.1";

/// Outbound identity sent with every submission.
pub struct SubjectInfoHttpIdentity {
    /// HTTP user-agent sent to the backend.
    pub user_agent: String,
    /// Optional bearer token for authenticated backends.
    pub bearer_token: Option<String>,
}

impl Default for SubjectInfoHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            bearer_token: None,
        }
    }
}

/// Submitter that POSTs the selection as JSON to one endpoint.
pub struct HttpSubjectInfoSubmitter {
    client: Client,
    endpoint: Url,
    user_agent: String,
    bearer_token: Option<String>,
}

impl HttpSubjectInfoSubmitter {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use subject_info::outbound::subject_info::HttpSubjectInfoSubmitter;
    /// use url::Url;
    ///
    /// let endpoint = Url::parse("https://registry.example/api/subject-info").expect("valid URL");
    /// let submitter = HttpSubjectInfoSubmitter::new(endpoint, Duration::from_secs(10))
    ///     .expect("client builds");
    /// assert_eq!(submitter.endpoint().path(), "/api/subject-info");
    /// ```
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_identity(endpoint, timeout, SubjectInfoHttpIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_identity(
        endpoint: Url,
        timeout: Duration,
        identity: SubjectInfoHttpIdentity,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            user_agent: identity.user_agent,
            bearer_token: identity.bearer_token,
        })
    }

    /// Endpoint receiving submissions.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubjectInfoSubmitter for HttpSubjectInfoSubmitter {
    async fn submit(&self, selection: &SubjectSelection) -> Result<(), SubjectInfoSubmitError> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(selection);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(status = status.as_u16(), endpoint = %self.endpoint, "subject info accepted");
            return Ok(());
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(map_status_error(status, body.as_ref()))
    }
}

fn map_transport_error(error: reqwest::Error) -> SubjectInfoSubmitError {
    if error.is_timeout() {
        SubjectInfoSubmitError::timeout(error.to_string())
    } else {
        SubjectInfoSubmitError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SubjectInfoSubmitError {
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        body_preview
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            SubjectInfoSubmitError::timeout(message)
        }
        _ if status.is_client_error() => SubjectInfoSubmitError::rejected(status.as_u16(), message),
        _ => SubjectInfoSubmitError::server(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Covers status mapping helpers and the request sent to a local listener.

    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn accepted_selection() -> SubjectSelection {
        crate::domain::SubjectSelectionValidator::standard()
            .expect("catalog")
            .validate("BA", "History", "Hindi")
            .expect("valid selection")
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= length
    }

    /// Accept one connection, answer `200 OK` and return the raw request.
    async fn capture_one_request(listener: TcpListener) -> String {
        let (mut stream, _) = listener.accept().await.expect("accept connection");
        let mut raw = Vec::new();
        let mut chunk = [0_u8; 1024];
        while !request_complete(&raw) {
            let read = stream.read(&mut chunk).await.expect("read request");
            if read == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..read]);
        }
        stream
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 0\r\nconnection: close\r\n\r\n")
            .await
            .expect("write response");
        String::from_utf8(raw).expect("request is UTF-8")
    }

    #[rstest]
    #[case::request_timeout(StatusCode::REQUEST_TIMEOUT, "Timeout")]
    #[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, "Timeout")]
    #[case::bad_request(StatusCode::BAD_REQUEST, "Rejected")]
    #[case::unprocessable(StatusCode::UNPROCESSABLE_ENTITY, "Rejected")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, "Server")]
    #[case::bad_gateway(StatusCode::BAD_GATEWAY, "Server")]
    fn maps_http_statuses_to_expected_domain_errors(
        #[case] status: StatusCode,
        #[case] expected: &str,
    ) {
        let error = map_status_error(status, b"{\"error\":\"unavailable\"}");
        match expected {
            "Timeout" => assert!(
                matches!(error, SubjectInfoSubmitError::Timeout { .. }),
                "timeout statuses should map to Timeout",
            ),
            "Rejected" => assert!(
                matches!(error, SubjectInfoSubmitError::Rejected { .. }),
                "client statuses should map to Rejected",
            ),
            "Server" => assert!(
                matches!(error, SubjectInfoSubmitError::Server { .. }),
                "other statuses should map to Server",
            ),
            _ => panic!("unsupported test expectation: {expected}"),
        }
    }

    #[test]
    fn rejected_errors_carry_status_and_body() {
        let error = map_status_error(StatusCode::UNPROCESSABLE_ENTITY, b"  minor  not\n offered ");
        assert_eq!(
            error,
            SubjectInfoSubmitError::rejected(422_u16, "minor not offered")
        );
    }

    #[test]
    fn empty_bodies_fall_back_to_status_text() {
        let error = map_status_error(StatusCode::SERVICE_UNAVAILABLE, b"");
        assert_eq!(error, SubjectInfoSubmitError::server(503_u16, "status 503"));
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(200);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn builds_with_default_identity() {
        let endpoint = Url::parse("http://localhost:9/api/subject-info").expect("valid url");
        let submitter =
            HttpSubjectInfoSubmitter::new(endpoint.clone(), Duration::from_secs(1))
                .expect("client builds");
        assert_eq!(submitter.endpoint(), &endpoint);
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_transport_or_timeout() {
        let endpoint = Url::parse("http://127.0.0.1:9/api/subject-info").expect("valid url");
        let submitter = HttpSubjectInfoSubmitter::new(endpoint, Duration::from_millis(500))
            .expect("client builds");
        let selection = accepted_selection();

        let error = submitter.submit(&selection).await.expect_err("port 9 is closed");

        assert!(
            matches!(
                error,
                SubjectInfoSubmitError::Transport { .. } | SubjectInfoSubmitError::Timeout { .. }
            ),
            "connection failures should map to Transport or Timeout: {error:?}"
        );
    }

    #[rstest]
    #[case::anonymous(None)]
    #[case::authenticated(Some("s3cret-token"))]
    #[tokio::test]
    async fn posts_selection_json_to_endpoint(#[case] token: Option<&str>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let address = listener.local_addr().expect("listener address");
        let server = tokio::spawn(capture_one_request(listener));
        let endpoint =
            Url::parse(&format!("http://{address}/api/subject-info")).expect("valid url");
        let identity = SubjectInfoHttpIdentity {
            bearer_token: token.map(str::to_owned),
            ..SubjectInfoHttpIdentity::default()
        };
        let submitter =
            HttpSubjectInfoSubmitter::with_identity(endpoint, Duration::from_secs(5), identity)
                .expect("client builds");

        submitter
            .submit(&accepted_selection())
            .await
            .expect("200 is accepted");
        let request = server.await.expect("server task");

        let (head, body) = request.split_once("\r\n\r\n").expect("headers end");
        assert!(
            head.starts_with("POST /api/subject-info HTTP/1.1\r\n"),
            "unexpected request line: {head}"
        );
        let headers = head.to_ascii_lowercase();
        assert!(headers.contains("\r\nuser-agent: subject-info/0.1"));
        assert!(headers.contains("\r\ncontent-type: application/json"));
        match token {
            Some(token) => assert!(
                headers.contains(&format!("\r\nauthorization: bearer {}", token.to_ascii_lowercase())),
                "missing bearer header: {head}"
            ),
            None => assert!(!headers.contains("\r\nauthorization:")),
        }
        let payload: Value = serde_json::from_str(body).expect("JSON body");
        assert_eq!(
            payload,
            json!({"course": "BA", "majorSubject": "History", "minorSubject": "Hindi"})
        );
    }
}
