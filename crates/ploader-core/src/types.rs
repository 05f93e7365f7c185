//! Domain types for product analysis and marketplace upload
//!
//! Wire payloads exchanged with the backend plus the static reference data
//! (supported clients and marketplaces) baked into the client.

use serde::{Deserialize, Serialize};

/// Maximum title length accepted while typing in the preview step.
pub const TITLE_MAX_CHARS: usize = 250;

/// Clients whose catalogues can be loaded.
pub const CLIENTS: [&str; 12] = [
    "A.T.S. GRAFICA",
    "Calzificiopiemonte",
    "ELEVA PET",
    "EURO INOX ITALY",
    "LA ITALCHIMICA VERNICI SRL",
    "Lume Import S.r.l.",
    "Neri Industria Alimentare",
    "Neri Sottoli",
    "PURANOVA",
    "Tuà sensation",
    "Verdesativa Cosmesi Bio & Vegan",
    "VINO COM",
];

/// Supported storefronts, in selection order.
pub const MARKETPLACES: [Marketplace; 4] = [
    Marketplace {
        country: "Italia",
        domain: "amazon.it",
        language: "Italiano",
        flag: "🇮🇹",
    },
    Marketplace {
        country: "Spagna",
        domain: "amazon.es",
        language: "Español",
        flag: "🇪🇸",
    },
    Marketplace {
        country: "Germania",
        domain: "amazon.de",
        language: "Deutsch",
        flag: "🇩🇪",
    },
    Marketplace {
        country: "Francia",
        domain: "amazon.fr",
        language: "Français",
        flag: "🇫🇷",
    },
];

/// A target storefront.
///
/// Serialized as `{"country", "domain", "language", "flag"}` in the multipart
/// `marketplace` field of both backend calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Marketplace {
    pub country: &'static str,
    pub domain: &'static str,
    pub language: &'static str,
    pub flag: &'static str,
}

/// Look up a marketplace by its country name.
pub fn find_marketplace(country: &str) -> Option<Marketplace> {
    MARKETPLACES.iter().copied().find(|m| m.country == country)
}

/// Public listing URL for an uploaded item.
pub fn listing_url(marketplace: &Marketplace, item_id: &str) -> String {
    format!("https://{}/dp/{}", marketplace.domain, item_id)
}

/// Product record suggested by the analysis backend and edited by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductData {
    pub title: String,
    pub brand: String,
    pub ean: String,
    pub price: f64,
    pub category_user: String,
    pub category_suggested: String,
    pub description: String,
    pub bullet_points: Vec<String>,
}

/// A single typed edit to a [`ProductData`] field.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductEdit {
    Title(String),
    Brand(String),
    Ean(String),
    Price(f64),
    CategorySuggested(String),
    Description(String),
    BulletPoint { index: usize, text: String },
}

impl ProductData {
    /// Apply one edit. Out-of-range bullet indices are ignored.
    pub fn apply(&mut self, edit: ProductEdit) {
        match edit {
            ProductEdit::Title(text) => self.title = text,
            ProductEdit::Brand(text) => self.brand = text,
            ProductEdit::Ean(text) => self.ean = text,
            ProductEdit::Price(price) => self.price = price,
            ProductEdit::CategorySuggested(text) => self.category_suggested = text,
            ProductEdit::Description(text) => self.description = text,
            ProductEdit::BulletPoint { index, text } => {
                if let Some(slot) = self.bullet_points.get_mut(index) {
                    *slot = text;
                }
            }
        }
    }

    /// Whether the user must choose between their category and the AI one.
    pub fn has_conflicting_categories(&self) -> bool {
        !self.category_user.is_empty()
            && !self.category_suggested.is_empty()
            && self.category_user != self.category_suggested
    }

    /// Title length in characters (not bytes).
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }

    pub fn title_too_long(&self) -> bool {
        self.title_len() > TITLE_MAX_CHARS
    }
}

/// Advisory message returned alongside the analyzed product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type", default)]
    pub kind: String,
    pub message: String,
}

/// Body of a successful `/api/analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub alerts: Vec<Alert>,
    pub product: ProductData,
}

/// Body of a `/api/upload` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(rename = "asin", alias = "marketplace_item_id", default)]
    pub marketplace_item_id: String,
}

impl UploadResponse {
    /// The listing id, when the backend reports a usable success.
    pub fn accepted_item_id(&self) -> Option<&str> {
        (self.success && !self.marketplace_item_id.is_empty())
            .then_some(self.marketplace_item_id.as_str())
    }
}

/// Authorization state of one client, as computed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStatus {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "collegato")]
    pub connected: bool,
}

/// Fallback shown when the status endpoint cannot be reached.
pub fn client_statuses_all_disconnected() -> Vec<ClientStatus> {
    CLIENTS
        .iter()
        .map(|name| ClientStatus {
            name: (*name).to_string(),
            connected: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> ProductData {
        ProductData {
            title: "Wireless Mouse".to_string(),
            brand: "Acme".to_string(),
            ean: "1234567890123".to_string(),
            price: 19.99,
            category_user: "Electronics".to_string(),
            category_suggested: "Electronics".to_string(),
            description: "...".to_string(),
            bullet_points: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }

    #[test]
    fn test_listing_url_for_every_marketplace() {
        for m in MARKETPLACES.iter() {
            assert_eq!(
                listing_url(m, "B0TEST1234"),
                format!("https://{}/dp/B0TEST1234", m.domain)
            );
        }
        assert_eq!(
            listing_url(&MARKETPLACES[0], "X1"),
            "https://amazon.it/dp/X1"
        );
    }

    #[test]
    fn test_static_reference_data() {
        assert_eq!(CLIENTS.len(), 12);
        assert_eq!(CLIENTS[0], "A.T.S. GRAFICA");
        let domains: Vec<_> = MARKETPLACES.iter().map(|m| m.domain).collect();
        assert_eq!(domains, ["amazon.it", "amazon.es", "amazon.de", "amazon.fr"]);
    }

    #[test]
    fn test_find_marketplace() {
        assert_eq!(find_marketplace("Germania").unwrap().domain, "amazon.de");
        assert!(find_marketplace("Portogallo").is_none());
    }

    #[test]
    fn test_marketplace_serializes_all_fields() {
        let json = serde_json::to_value(MARKETPLACES[1]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "country": "Spagna",
                "domain": "amazon.es",
                "language": "Español",
                "flag": "🇪🇸"
            })
        );
    }

    #[test]
    fn test_bullet_edit_replaces_only_that_entry() {
        let mut product = sample_product();
        let before = product.bullet_points.clone();

        product.apply(ProductEdit::BulletPoint {
            index: 1,
            text: "changed".to_string(),
        });

        assert_eq!(product.bullet_points[0], before[0]);
        assert_eq!(product.bullet_points[1], "changed");
        assert_eq!(product.bullet_points[2], before[2]);
    }

    #[test]
    fn test_bullet_edit_out_of_range_is_ignored() {
        let mut product = sample_product();
        let before = product.clone();
        product.apply(ProductEdit::BulletPoint {
            index: 9,
            text: "x".to_string(),
        });
        assert_eq!(product, before);
    }

    #[test]
    fn test_scalar_edits() {
        let mut product = sample_product();
        product.apply(ProductEdit::Title("New".to_string()));
        product.apply(ProductEdit::Price(5.5));
        product.apply(ProductEdit::CategorySuggested("Office".to_string()));
        assert_eq!(product.title, "New");
        assert_eq!(product.price, 5.5);
        assert_eq!(product.category_suggested, "Office");
        assert_eq!(product.category_user, "Electronics");
    }

    #[test]
    fn test_conflicting_categories() {
        let mut product = sample_product();
        assert!(!product.has_conflicting_categories());

        product.category_suggested = "Office".to_string();
        assert!(product.has_conflicting_categories());

        product.category_user = String::new();
        assert!(!product.has_conflicting_categories());
    }

    #[test]
    fn test_title_length_counts_chars() {
        let mut product = sample_product();
        product.title = "è".repeat(TITLE_MAX_CHARS);
        assert!(!product.title_too_long());
        product.title.push('x');
        assert!(product.title_too_long());
    }

    #[test]
    fn test_analyze_response_parses_backend_shape() {
        let body = r#"{
            "alerts": [{"type": "warning", "message": "EAN non valido"}],
            "product": {
                "title": "Wireless Mouse", "brand": "Acme", "ean": "1234567890123",
                "price": 19.99, "category_user": "Electronics",
                "category_suggested": "Electronics", "description": "...",
                "bullet_points": ["a", "b"]
            }
        }"#;
        let parsed: AnalyzeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.alerts[0].kind, "warning");
        assert_eq!(parsed.product.title, "Wireless Mouse");
        assert_eq!(parsed.product.bullet_points, vec!["a", "b"]);
    }

    #[test]
    fn test_analyze_response_tolerates_missing_fields() {
        let parsed: AnalyzeResponse =
            serde_json::from_str(r#"{"product": {"title": "Only title"}}"#).unwrap();
        assert!(parsed.alerts.is_empty());
        assert_eq!(parsed.product.price, 0.0);
        assert!(parsed.product.bullet_points.is_empty());
    }

    #[test]
    fn test_upload_response_wire_names() {
        let ok: UploadResponse =
            serde_json::from_str(r#"{"success": true, "asin": "B0ABC"}"#).unwrap();
        assert_eq!(ok.accepted_item_id(), Some("B0ABC"));

        let failed: UploadResponse =
            serde_json::from_str(r#"{"success": false, "asin": ""}"#).unwrap();
        assert_eq!(failed.accepted_item_id(), None);

        let empty_id: UploadResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(empty_id.accepted_item_id(), None);
    }

    #[test]
    fn test_client_status_wire_names() {
        let parsed: Vec<ClientStatus> =
            serde_json::from_str(r#"[{"nome": "PURANOVA", "collegato": true}]"#).unwrap();
        assert_eq!(parsed[0].name, "PURANOVA");
        assert!(parsed[0].connected);
    }

    #[test]
    fn test_fallback_statuses_cover_every_client() {
        let statuses = client_statuses_all_disconnected();
        assert_eq!(statuses.len(), CLIENTS.len());
        assert!(statuses.iter().all(|s| !s.connected));
        assert_eq!(statuses[11].name, "VINO COM");
    }
}
