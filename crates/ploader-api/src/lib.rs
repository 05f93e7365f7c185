//! ploader-api - HTTP client for the Product Loader backend
//!
//! Typed wrappers around the three backend calls:
//! - `POST /api/analyze` (multipart) - AI analysis of a product description + image
//! - `POST /api/upload` (multipart) - final marketplace upload
//! - `GET /api/clienti/status` - per-client authorization status

pub mod client;
pub mod error;
pub mod request;

pub use client::{ApiClient, ANALYZE_PATH, CLIENT_STATUS_PATH, UPLOAD_PATH};
pub use error::ApiError;
pub use request::{AnalyzeRequest, UploadProduct, UploadRequest};
