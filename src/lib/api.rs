//! HTTP client for the loan API with consistent credential handling and error
//! extraction. Feature clients add typed endpoint methods on top of
//! [`ApiClient::request`] and [`ApiClient::request_multipart`] so routes never
//! build requests by hand. In the browser every request is sent with
//! `credentials: include`; natively the client keeps a cookie jar so the
//! session cookie issued by login is replayed.

use super::{config::AppConfig, errors::AppError, errors::GENERIC_FAILURE};
use reqwest::{Method, RequestBuilder, Response, multipart::Form};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{Instrument, debug, error, info_span};
use url::Url;

/// `{message}` body returned by action endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Options for a JSON request. Defaults to a bodiless GET.
#[derive(Clone, Debug)]
pub struct RequestOptions {
    method: Method,
    headers: Vec<(String, String)>,
    body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    /// Encodes `body` as the JSON payload.
    ///
    /// # Errors
    /// Returns `AppError::Serialization` if the body cannot be encoded.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        let payload = serde_json::to_string(body)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        self.body = Some(payload);
        Ok(self)
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// Request client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for the configured API base URL.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL is not an absolute URL or the
    /// HTTP client cannot be initialized.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let base_url = config.api_base_url.trim();
        Url::parse(base_url).map_err(|err| {
            AppError::Config(format!("Invalid API base URL `{base_url}`: {err}"))
        })?;

        Ok(Self {
            http: http_client()?,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a JSON request and decodes the JSON response.
    ///
    /// # Errors
    /// Returns `AppError::Http` with the server-provided message for non-2xx
    /// responses, `AppError::Network` when the transport fails, and
    /// `AppError::Parse` when a successful body is not the expected JSON.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, AppError> {
        let url = build_url_with_base(&self.base_url, path);
        let mut builder = self
            .http
            .request(options.method.clone(), &url)
            .header("Content-Type", "application/json");

        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(payload) = options.body {
            builder = builder.body(payload);
        }

        self.send(builder, &options.method, path).await
    }

    /// Issues a multipart request, `POST` unless another method is given. The
    /// transport sets the content type so the boundary matches the encoded body.
    ///
    /// # Errors
    /// Same contract as [`ApiClient::request`].
    pub async fn request_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
        method: Option<Method>,
    ) -> Result<T, AppError> {
        let method = method.unwrap_or(Method::POST);
        let url = build_url_with_base(&self.base_url, path);
        let builder = self.http.request(method.clone(), &url).multipart(form);

        self.send(builder, &method, path).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: &Method,
        path: &str,
    ) -> Result<T, AppError> {
        let builder = with_credentials(builder);
        let span = info_span!("api.request", http.method = %method, path = %path);

        let result = async {
            let response = builder.send().await.map_err(map_request_error)?;
            handle_json_response(response).await
        }
        .instrument(span)
        .await;

        match &result {
            Ok(_) => debug!(%method, path, "API request succeeded"),
            Err(err) => error!(%method, path, error = %err, "API request failed"),
        }

        result
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn http_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .map_err(|err| AppError::Config(format!("Failed to initialize HTTP client: {err}")))
}

#[cfg(target_arch = "wasm32")]
fn http_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .build()
        .map_err(|err| AppError::Config(format!("Failed to initialize HTTP client: {err}")))
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `AppError::Network`, keeping the transport's message.
fn map_request_error(err: reqwest::Error) -> AppError {
    AppError::Network(err.to_string())
}

/// Parses JSON responses and surfaces HTTP errors with the server message.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    let body = response.text().await.map_err(map_request_error)?;

    if status.is_success() {
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(AppError::Http {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Picks the `error` field, then `detail`, then the generic fallback.
fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return GENERIC_FAILURE.to_string();
    };

    ["error", "detail"]
        .iter()
        .filter_map(|key| value.get(key).and_then(message_text))
        .next()
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// Text for a message field. Numbers and booleans are printed, lists of
/// messages are joined; objects, `null` and blank text yield nothing.
fn message_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(message_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}
