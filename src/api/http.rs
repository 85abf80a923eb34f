//! HTTP plumbing for the extension API.
//!
//! All traffic is JSON over the host's REST API. The actual fetch calls
//! only exist on wasm32; on other targets the senders are stubs so the
//! pure logic above them can be unit tested natively.

use serde_json::Value;

/// The extension-namespaced API root, e.g.
/// `/api/extensions/rbchecklist.extension.Checklist/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoot(String);

impl ApiRoot {
    pub fn new(path: impl Into<String>) -> Self {
        let mut path: String = path.into();
        if !path.ends_with('/') {
            path.push('/');
        }
        Self(path)
    }

    /// Append a root-relative resource path.
    pub fn join(&self, suffix: &str) -> String {
        format!("{}{}", self.0, suffix)
    }
}

/// Errors surfaced by API calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed.
    Network(String),
    /// The server answered with a non-success status.
    Server { status: u16, message: String },
    /// The response body did not match the resource contract.
    Malformed(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Server { status, message } => {
                write!(f, "server error {}: {}", status, message)
            }
            ApiError::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Send a JSON request and return the decoded body.
///
/// A `204 No Content` answer (item deletion) decodes to `Value::Null`.
#[cfg(target_arch = "wasm32")]
pub async fn request_json(
    method: Method,
    url: &str,
    body: Option<&Value>,
) -> Result<Value, ApiError> {
    use gloo_net::http::Request;

    let builder = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Put => Request::put(url),
        Method::Delete => Request::delete(url),
    };

    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Server {
            status: response.status(),
            message: response.status_text(),
        });
    }

    if response.status() == 204 {
        return Ok(Value::Null);
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Non-WASM stub.
#[cfg(not(target_arch = "wasm32"))]
pub async fn request_json(
    _method: Method,
    _url: &str,
    _body: Option<&Value>,
) -> Result<Value, ApiError> {
    Err(ApiError::Network(
        "API calls not supported outside WASM".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_root_gains_trailing_slash() {
        let root = ApiRoot::new("/api/extensions/checklist");
        assert_eq!(root.join("checklists/"), "/api/extensions/checklist/checklists/");
    }

    #[test]
    fn api_root_keeps_existing_slash() {
        let root = ApiRoot::new("/api/extensions/checklist/");
        assert_eq!(root.join("checklists/"), "/api/extensions/checklist/checklists/");
    }
}
