//! # ploader-core - Core Domain Types
//!
//! Foundation crate for Product Loader. Provides the marketplace/product domain
//! types, the static reference data, image capture encoding, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, base64).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Marketplace`] - Target storefront (country, domain, language, flag)
//! - [`ProductData`] - Product record suggested by the analysis backend
//! - [`ProductEdit`] - Typed single-field edit applied to a [`ProductData`]
//! - [`Alert`], [`AnalyzeResponse`], [`UploadResponse`], [`ClientStatus`] - Wire payloads
//! - [`CLIENTS`], [`MARKETPLACES`] - Static reference data
//!
//! ### Image Capture (`image`)
//! - [`CapturedImage`] - Raw bytes plus data-URL preview of an accepted image
//! - [`declared_mime_type()`] - Extension-based MIME declaration
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use ploader_core::prelude::*;
//! ```

pub mod error;
pub mod image;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result};
pub use image::{declared_mime_type, is_image_mime, CapturedImage};
pub use types::{
    client_statuses_all_disconnected, find_marketplace, listing_url, Alert, AnalyzeResponse,
    ClientStatus, Marketplace, ProductData, ProductEdit, UploadResponse, CLIENTS, MARKETPLACES,
    TITLE_MAX_CHARS,
};
