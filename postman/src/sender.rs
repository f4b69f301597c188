use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    multipart::{Form, Part},
};

use crate::{Error, File, Request, RequestBody, Transport};

#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    api_base: String,
}

impl HttpTransport {
    pub fn new(api_base: &str, user_agent: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self::with_client(http, api_base))
    }

    pub fn with_client(http: reqwest::Client, api_base: &str) -> Self {
        Self { http, api_base: api_base.trim_end_matches('/').to_string() }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn url(&self, route: &str) -> String {
        format!("{}/{}", self.api_base, route.trim_start_matches('/'))
    }
}

fn multipart_form(payload_json: Vec<u8>, files: Vec<File>) -> Result<Form, Error> {
    let payload = Part::bytes(payload_json).mime_str("application/json")?;
    let mut form = Form::new().part("payload_json", payload);

    for (index, file) in files.into_iter().enumerate() {
        let mut part = Part::bytes(file.data).file_name(file.name);

        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }

        form = form.part(format!("files[{}]", index), part);
    }

    Ok(form)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Vec<u8>, Error> {
        let Request { method, route, body } = request;

        debug!("{} {}", method, route);

        let mut builder = self.http.request(method.clone(), self.url(&route));

        builder = match body {
            Some(RequestBody::Json(json)) => builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(json),
            Some(RequestBody::Multipart { payload_json, files }) => {
                builder.multipart(multipart_form(payload_json, files)?)
            }
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            let body = response.text().await.unwrap_or_default();

            warn!("{} {} returned {}: {}", method, route, status, body);

            Err(Error::Status { status, body })
        }
    }
}
