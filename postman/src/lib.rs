mod sender;

use std::fmt::{Display, Formatter, Result as FmtResult};

use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};

pub use crate::sender::HttpTransport;

/// A binary attachment uploaded alongside a message payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl File {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into(), content_type: None, data: data.into() }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());

        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// An already-encoded JSON document.
    Json(Vec<u8>),
    /// `payload_json` followed by one `files[n]` part per file, in order.
    Multipart { payload_json: Vec<u8>, files: Vec<File> },
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Path relative to the API base, without a leading slash.
    pub route: String,
    pub body: Option<RequestBody>,
}

impl Request {
    pub fn new(method: Method, route: impl Into<String>) -> Self {
        Self { method, route: route.into(), body: None }
    }

    pub fn body(mut self, body: Option<RequestBody>) -> Self {
        self.body = body;

        self
    }
}

#[derive(Debug)]
pub enum Error {
    Http(reqwest::Error),
    Status { status: StatusCode, body: String },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::Http(e) => write!(f, "request failed: {}", e),
            Error::Status { status, body } => {
                write!(f, "request returned status {}: {}", status.as_u16(), body)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(e) => Some(e),
            Error::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e)
    }
}

/// Delivers a prepared request and hands back the raw body of a successful response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Vec<u8>, Error>;
}
