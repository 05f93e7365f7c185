//! Request payloads for the multipart backend calls

use ploader_core::{CapturedImage, Marketplace, ProductData};
use serde::Serialize;

/// Inputs of an analyze call, as collected by the home form.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub prompt: String,
    pub marketplace: Marketplace,
    pub client: String,
    pub image: CapturedImage,
}

/// Inputs of an upload call, as edited in the preview step.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub product: ProductData,
    /// Category resolved from the user/AI choice, sent as `category`.
    pub category: String,
    pub client: String,
    pub marketplace: Marketplace,
    pub image: CapturedImage,
}

/// JSON body of the multipart `product` field: every product field plus the
/// resolved `category`.
#[derive(Debug, Serialize)]
pub struct UploadProduct<'a> {
    #[serde(flatten)]
    pub product: &'a ProductData,
    pub category: &'a str,
}

impl UploadRequest {
    pub fn product_payload(&self) -> UploadProduct<'_> {
        UploadProduct {
            product: &self.product,
            category: &self.category,
        }
    }
}
