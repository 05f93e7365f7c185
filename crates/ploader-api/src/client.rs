//! HTTP client for the Product Loader backend.
//!
//! Wraps `reqwest` with multipart encoding for the analyze/upload calls and
//! typed response deserialization. Non-2xx responses surface as
//! [`ApiError::Status`] so callers can show the status code.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use ploader_core::{AnalyzeResponse, CapturedImage, ClientStatus, UploadResponse};

use crate::error::ApiError;
use crate::request::{AnalyzeRequest, UploadRequest};

pub const ANALYZE_PATH: &str = "api/analyze";
pub const UPLOAD_PATH: &str = "api/upload";
pub const CLIENT_STATUS_PATH: &str = "api/clienti/status";

/// Client for the Product Loader backend.
///
/// All paths are resolved relative to `base_url`, so a backend mounted under a
/// prefix (`https://host/loader/`) works as well as one at the root.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// `timeout` of `None` means requests may run indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed, or [`ApiError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("product-loader/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        // Normalise: ensure exactly one trailing slash so that joining a
        // relative path appends to the prefix instead of replacing its last
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends the product description and image for AI analysis.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Status`] on a non-2xx status.
    /// - [`ApiError::Deserialize`] if the body is not an `AnalyzeResponse`.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ApiError> {
        let url = self.endpoint(ANALYZE_PATH)?;
        let form = analyze_form(request)?;

        info!(
            client = %request.client,
            marketplace = request.marketplace.country,
            image = %request.image.file_name,
            "Sending analyze request"
        );
        let response = self.client.post(url.clone()).multipart(form).send().await?;
        let parsed: AnalyzeResponse = Self::parse_json(&url, response).await?;
        debug!(alerts = parsed.alerts.len(), "Analyze response received");
        Ok(parsed)
    }

    /// Uploads the edited product to the marketplace.
    ///
    /// A `success: false` body is returned as-is; judging it is up to the caller.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Status`] on a non-2xx status.
    /// - [`ApiError::Deserialize`] if the body is not an `UploadResponse`.
    pub async fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError> {
        let url = self.endpoint(UPLOAD_PATH)?;
        let form = upload_form(request)?;

        info!(
            client = %request.client,
            marketplace = request.marketplace.country,
            category = %request.category,
            "Sending upload request"
        );
        let response = self.client.post(url.clone()).multipart(form).send().await?;
        let parsed: UploadResponse = Self::parse_json(&url, response).await?;
        if !parsed.success {
            warn!("Backend reported an unsuccessful upload");
        }
        Ok(parsed)
    }

    /// Fetches the authorization status of every client.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Status`] on a non-2xx status.
    /// - [`ApiError::Deserialize`] if the body is not a list of statuses.
    pub async fn client_statuses(&self) -> Result<Vec<ClientStatus>, ApiError> {
        let url = self.endpoint(CLIENT_STATUS_PATH)?;
        debug!("Fetching client statuses from {url}");
        let response = self.client.get(url.clone()).send().await?;
        Self::parse_json(&url, response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Asserts a 2xx status and parses the body as JSON.
    async fn parse_json<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            warn!("{url} answered with status {status}");
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }
}

/// Multipart body of an analyze call: `prompt`, `marketplace` (JSON),
/// `client`, `image` (file).
fn analyze_form(request: &AnalyzeRequest) -> Result<Form, ApiError> {
    let marketplace = serde_json::to_string(&request.marketplace).map_err(|e| ApiError::Encode {
        field: "marketplace",
        source: e,
    })?;

    Ok(Form::new()
        .text("prompt", request.prompt.clone())
        .text("marketplace", marketplace)
        .text("client", request.client.clone())
        .part("image", image_part(&request.image)?))
}

/// Multipart body of an upload call: `product` (JSON with resolved
/// `category`), `client`, `marketplace` (JSON), `image` (file).
fn upload_form(request: &UploadRequest) -> Result<Form, ApiError> {
    let product =
        serde_json::to_string(&request.product_payload()).map_err(|e| ApiError::Encode {
            field: "product",
            source: e,
        })?;
    let marketplace = serde_json::to_string(&request.marketplace).map_err(|e| ApiError::Encode {
        field: "marketplace",
        source: e,
    })?;

    Ok(Form::new()
        .text("product", product)
        .text("client", request.client.clone())
        .text("marketplace", marketplace)
        .part("image", image_part(&request.image)?))
}

fn image_part(image: &CapturedImage) -> Result<Part, ApiError> {
    Part::bytes(image.bytes.to_vec())
        .file_name(image.file_name.clone())
        .mime_str(&image.mime)
        .map_err(|e| ApiError::InvalidPart {
            field: "image",
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, None).expect("client construction should not fail")
    }

    #[test]
    fn endpoint_joins_relative_to_root() {
        let client = test_client("http://localhost:8080");
        assert_eq!(
            client.endpoint(ANALYZE_PATH).unwrap().as_str(),
            "http://localhost:8080/api/analyze"
        );
    }

    #[test]
    fn endpoint_keeps_path_prefix() {
        let client = test_client("https://example.com/loader/");
        assert_eq!(
            client.endpoint(CLIENT_STATUS_PATH).unwrap().as_str(),
            "https://example.com/loader/api/clienti/status"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiClient::new("not a url", None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn image_part_rejects_malformed_mime() {
        let image = CapturedImage::new("a.png", "not a mime", vec![0]);
        let err = image_part(&image).unwrap_err();
        assert!(matches!(err, ApiError::InvalidPart { field: "image", .. }));
    }
}
