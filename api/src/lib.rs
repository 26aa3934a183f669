//! Contact mail transport.
//!
//! The mail script expects the JSON payload as a raw request body labelled
//! `text/plain`, so the request is built by hand instead of through
//! `RequestBuilder::json`.

use std::fmt;

use reqwest::header::{HeaderValue, CONTENT_TYPE as CONTENT_TYPE_HEADER};
use reqwest::{Client, Method, Request, Url};
use serde::{Deserialize, Serialize};

/// Content type sent with the JSON body.
pub const CONTENT_TYPE: &str = "text/plain";

/// What the visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactData {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug)]
pub enum MailError {
    InvalidEndpoint(String),
    Encode(serde_json::Error),
    Transport(reqwest::Error),
    Rejected(u16),
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::InvalidEndpoint(msg) => write!(f, "invalid mail endpoint: {msg}"),
            MailError::Encode(err) => write!(f, "could not encode contact data: {err}"),
            MailError::Transport(err) => write!(f, "mail request failed: {err}"),
            MailError::Rejected(status) => write!(f, "mail endpoint answered {status}"),
        }
    }
}

impl std::error::Error for MailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MailError::Encode(err) => Some(err),
            MailError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MailError {
    fn from(err: serde_json::Error) -> Self {
        MailError::Encode(err)
    }
}

impl From<reqwest::Error> for MailError {
    fn from(err: reqwest::Error) -> Self {
        MailError::Transport(err)
    }
}

/// Posts [`ContactData`] to one fixed endpoint.
#[derive(Debug, Clone)]
pub struct Mailer {
    http: Client,
    endpoint: Url,
}

impl Mailer {
    /// `endpoint` must be an absolute URL.
    pub fn new(endpoint: &str) -> Result<Self, MailError> {
        let endpoint = Url::parse(endpoint)
            .map_err(|err| MailError::InvalidEndpoint(format!("{endpoint}: {err}")))?;

        #[cfg(not(target_arch = "wasm32"))]
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        #[cfg(target_arch = "wasm32")]
        let http = Client::builder().build()?;

        Ok(Self { http, endpoint })
    }

    /// The POST that [`Mailer::send`] would issue.
    pub fn build_request(&self, data: &ContactData) -> Result<Request, MailError> {
        let body = serde_json::to_string(data)?;
        let mut request = Request::new(Method::POST, self.endpoint.clone());
        request
            .headers_mut()
            .insert(CONTENT_TYPE_HEADER, HeaderValue::from_static(CONTENT_TYPE));
        *request.body_mut() = Some(body.into());
        Ok(request)
    }

    /// Send one message. Resolves to the response body on a 2xx answer.
    pub async fn send(&self, data: &ContactData) -> Result<String, MailError> {
        let request = self.build_request(data)?;
        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MailError::Rejected(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactData {
        ContactData {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn relative_endpoints_are_rejected() {
        let err = Mailer::new("/sendMail.php").unwrap_err();
        assert!(matches!(err, MailError::InvalidEndpoint(_)));
        assert!(err.to_string().starts_with("invalid mail endpoint"));
    }

    #[test]
    fn request_posts_json_labelled_as_plain_text() {
        let mailer = Mailer::new("https://mirko-rinke.de/sendMail.php").unwrap();
        let request = mailer.build_request(&sample()).unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url().as_str(), "https://mirko-rinke.de/sendMail.php");
        assert_eq!(
            request
                .headers()
                .get(CONTENT_TYPE_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("text/plain")
        );

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        let decoded: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(
            decoded,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello"
            })
        );
    }
}
