//! Application state (Model in TEA pattern)
//!
//! The visible view is a pure function of [`Page`]: every variant carries
//! exactly what that view renders, so a preview or success screen cannot
//! exist without its bundle.

use ploader_core::{
    find_marketplace, listing_url, Alert, AnalyzeResponse, CapturedImage, ClientStatus,
    Marketplace, ProductData, CLIENTS, MARKETPLACES,
};

use crate::config::Settings;
use crate::select::{SelectOption, SelectState};

/// Identifies one asynchronous request issued by a view.
///
/// Completions are applied only when they carry the id the current view is
/// waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Current page of the wizard
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home(HomeState),
    Preview(Box<PreviewState>),
    Settings(SettingsState),
    Success(SuccessData),
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home(_) => "home",
            Page::Preview(_) => "preview",
            Page::Settings(_) => "settings",
            Page::Success(_) => "success",
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Home(HomeState::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Home
// ─────────────────────────────────────────────────────────────────────────────

/// Focusable elements of the home form, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HomeFocus {
    #[default]
    Client,
    Marketplace,
    Prompt,
    Image,
    Submit,
}

impl HomeFocus {
    const ORDER: [HomeFocus; 5] = [
        HomeFocus::Client,
        HomeFocus::Marketplace,
        HomeFocus::Prompt,
        HomeFocus::Image,
        HomeFocus::Submit,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether this element consumes typed characters.
    pub fn is_text(self) -> bool {
        matches!(self, HomeFocus::Prompt | HomeFocus::Image)
    }
}

/// Analyze step form
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub client: SelectState<String>,
    /// Keyed by marketplace country
    pub marketplace: SelectState<&'static str>,
    pub prompt: String,
    /// Path typed (or pasted) into the image field
    pub image_path: String,
    pub image: Option<CapturedImage>,
    /// Image read in progress
    pub image_request: Option<RequestId>,
    /// Analyze call in flight
    pub pending: Option<PendingAnalyze>,
    pub error: Option<String>,
    pub focus: HomeFocus,
}

impl Default for HomeState {
    fn default() -> Self {
        let clients = CLIENTS
            .iter()
            .map(|name| SelectOption::new(name.to_string(), *name))
            .collect();
        let marketplaces = MARKETPLACES
            .iter()
            .map(|m| {
                SelectOption::new(m.country, m.country)
                    .with_sublabel(m.domain)
                    .with_flag(m.flag)
            })
            .collect();

        Self {
            client: SelectState::new(clients, CLIENTS[0].to_string()),
            marketplace: SelectState::new(marketplaces, MARKETPLACES[0].country),
            prompt: String::new(),
            image_path: String::new(),
            image: None,
            image_request: None,
            pending: None,
            error: None,
            focus: HomeFocus::default(),
        }
    }
}

impl HomeState {
    /// Submit requires a non-blank description and a captured image.
    pub fn can_submit(&self) -> bool {
        !self.prompt.trim().is_empty() && self.image.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Marketplace of the in-flight analysis, else the current selection.
    pub fn analyzing_marketplace(&self) -> Marketplace {
        match &self.pending {
            Some(pending) => pending.marketplace,
            None => self.selected_marketplace(),
        }
    }

    pub fn selected_client(&self) -> &str {
        self.client.value()
    }

    pub fn selected_marketplace(&self) -> Marketplace {
        find_marketplace(self.marketplace.value()).unwrap_or(MARKETPLACES[0])
    }

    /// Whether focus is on a select whose option list is open.
    pub fn focused_select_open(&self) -> bool {
        match self.focus {
            HomeFocus::Client => self.client.is_open(),
            HomeFocus::Marketplace => self.marketplace.is_open(),
            _ => false,
        }
    }

    pub fn close_selects(&mut self) {
        self.client.close();
        self.marketplace.close();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Preview
// ─────────────────────────────────────────────────────────────────────────────

/// Which category label the upload will carry when both sides disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryChoice {
    /// The AI suggestion (`category_suggested`)
    #[default]
    Suggested,
    /// The user's original category (`category_user`)
    User,
}

impl CategoryChoice {
    pub fn toggled(self) -> Self {
        match self {
            CategoryChoice::Suggested => CategoryChoice::User,
            CategoryChoice::User => CategoryChoice::Suggested,
        }
    }
}

/// How the category is presented, decided once when the preview opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    /// Both categories present and different: binary choice
    Choice { selected: CategoryChoice },
    /// A single editable field backed by `category_suggested`
    Single,
}

/// Editable scalar fields of the preview form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewField {
    Title,
    Brand,
    Ean,
    Price,
    Category,
    Description,
}

impl PreviewField {
    pub const ALL: [PreviewField; 6] = [
        PreviewField::Title,
        PreviewField::Brand,
        PreviewField::Ean,
        PreviewField::Price,
        PreviewField::Category,
        PreviewField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PreviewField::Title => "Titolo prodotto",
            PreviewField::Brand => "Marca",
            PreviewField::Ean => "EAN",
            PreviewField::Price => "Prezzo (€)",
            PreviewField::Category => "Categoria",
            PreviewField::Description => "Descrizione",
        }
    }
}

/// Focusable elements of the preview form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewFocus {
    Alert(usize),
    Field(PreviewField),
    Bullet(usize),
    Submit,
}

/// Snapshot of what was sent with an in-flight analysis.
///
/// The preview is built from this, so form edits made while waiting do not
/// leak into the bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAnalyze {
    pub request_id: RequestId,
    pub client: String,
    pub marketplace: Marketplace,
    pub image: CapturedImage,
}

/// Preview/edit step: the analyze bundle plus the working copies.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewState {
    /// Response as received, never modified
    pub original: AnalyzeResponse,
    pub alerts: Vec<Alert>,
    pub product: ProductData,
    pub client: String,
    pub marketplace: Marketplace,
    pub image: CapturedImage,
    /// Price as typed; `product.price` holds its parsed value
    pub price_input: String,
    pub category: CategoryField,
    pub focus: PreviewFocus,
    /// Upload call in flight
    pub pending: Option<RequestId>,
    pub error: Option<String>,
}

impl PreviewState {
    pub fn new(
        response: AnalyzeResponse,
        client: String,
        marketplace: Marketplace,
        image: CapturedImage,
    ) -> Self {
        let mut product = response.product.clone();
        let category = if product.has_conflicting_categories() {
            CategoryField::Choice {
                selected: CategoryChoice::default(),
            }
        } else {
            if product.category_suggested.is_empty() {
                product.category_suggested = product.category_user.clone();
            }
            CategoryField::Single
        };
        let focus = if response.alerts.is_empty() {
            PreviewFocus::Field(PreviewField::Title)
        } else {
            PreviewFocus::Alert(0)
        };

        Self {
            alerts: response.alerts.clone(),
            price_input: format_price_input(product.price),
            product,
            original: response,
            client,
            marketplace,
            image,
            category,
            focus,
            pending: None,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Category sent with the upload.
    pub fn resolved_category(&self) -> &str {
        match self.category {
            CategoryField::Choice {
                selected: CategoryChoice::User,
            } => &self.product.category_user,
            CategoryField::Choice {
                selected: CategoryChoice::Suggested,
            }
            | CategoryField::Single => &self.product.category_suggested,
        }
    }

    /// Tab order: alerts, scalar fields, bullets, submit button.
    pub fn focus_order(&self) -> Vec<PreviewFocus> {
        let mut order: Vec<PreviewFocus> = (0..self.alerts.len()).map(PreviewFocus::Alert).collect();
        order.extend(PreviewField::ALL.iter().copied().map(PreviewFocus::Field));
        order.extend((0..self.product.bullet_points.len()).map(PreviewFocus::Bullet));
        order.push(PreviewFocus::Submit);
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }

    /// Text currently held by the focused editable element.
    pub fn focused_text(&self) -> Option<&str> {
        match self.focus {
            PreviewFocus::Field(PreviewField::Title) => Some(&self.product.title),
            PreviewFocus::Field(PreviewField::Brand) => Some(&self.product.brand),
            PreviewFocus::Field(PreviewField::Ean) => Some(&self.product.ean),
            PreviewFocus::Field(PreviewField::Price) => Some(&self.price_input),
            PreviewFocus::Field(PreviewField::Category) => match self.category {
                CategoryField::Single => Some(&self.product.category_suggested),
                CategoryField::Choice { .. } => None,
            },
            PreviewFocus::Field(PreviewField::Description) => Some(&self.product.description),
            PreviewFocus::Bullet(i) => self.product.bullet_points.get(i).map(String::as_str),
            PreviewFocus::Alert(_) | PreviewFocus::Submit => None,
        }
    }
}

/// Initial text of the price input for a parsed price.
pub fn format_price_input(price: f64) -> String {
    if price == 0.0 {
        String::new()
    } else {
        price.to_string()
    }
}

/// Numeric value of a typed price: the parsed text, or 0.
pub fn parse_price_input(text: &str) -> f64 {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}

// ─────────────────────────────────────────────────────────────────────────────
// Success
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SuccessData {
    pub marketplace_item_id: String,
    pub client: String,
    pub marketplace: Marketplace,
    pub title: String,
    pub price: f64,
}

impl SuccessData {
    pub fn listing_url(&self) -> String {
        listing_url(&self.marketplace, &self.marketplace_item_id)
    }

    pub fn price_label(&self) -> String {
        format!("€{:.2}", self.price)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// View left behind while the settings page is shown.
#[derive(Debug, Clone, PartialEq)]
pub enum Parked {
    Home(HomeState),
    Preview(Box<PreviewState>),
    Success(SuccessData),
}

/// Client authorization status page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsState {
    /// `None` while loading
    pub statuses: Option<Vec<ClientStatus>>,
    pub warning: Option<String>,
    pub pending: Option<RequestId>,
    pub parked: Option<Parked>,
}

impl SettingsState {
    pub fn is_loading(&self) -> bool {
        self.statuses.is_none()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub page: Page,
    pub settings: Settings,
    /// Animation frame counter, advanced on ticks while something is loading
    pub spinner_frame: usize,
    next_request_id: u64,
    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            page: Page::default(),
            settings,
            spinner_frame: 0,
            next_request_id: 1,
            should_quit: false,
        }
    }

    /// Allocate a fresh request id.
    pub fn next_request_id(&mut self) -> RequestId {
        let id = RequestId(self.next_request_id);
        self.next_request_id += 1;
        id
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether any view is waiting on a backend call.
    pub fn is_loading(&self) -> bool {
        match &self.page {
            Page::Home(home) => home.is_loading(),
            Page::Preview(preview) => preview.is_loading(),
            Page::Settings(settings) => settings.is_loading(),
            Page::Success(_) => false,
        }
    }

    /// Whether a text field currently has keyboard focus.
    pub fn text_field_focused(&self) -> bool {
        match &self.page {
            Page::Home(home) => home.focus.is_text(),
            Page::Preview(preview) => preview.focused_text().is_some(),
            Page::Settings(_) | Page::Success(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ploader_core::MARKETPLACES;

    fn response(user: &str, suggested: &str, alerts: usize) -> AnalyzeResponse {
        AnalyzeResponse {
            alerts: (0..alerts)
                .map(|i| Alert {
                    kind: "warning".to_string(),
                    message: format!("alert {i}"),
                })
                .collect(),
            product: ProductData {
                title: "Mouse".to_string(),
                price: 19.99,
                category_user: user.to_string(),
                category_suggested: suggested.to_string(),
                bullet_points: vec!["a".to_string(), "b".to_string()],
                ..ProductData::default()
            },
        }
    }

    fn preview(user: &str, suggested: &str, alerts: usize) -> PreviewState {
        PreviewState::new(
            response(user, suggested, alerts),
            "PURANOVA".to_string(),
            MARKETPLACES[0],
            CapturedImage::new("a.png", "image/png", vec![1]),
        )
    }

    #[test]
    fn test_home_defaults_to_first_client_and_marketplace() {
        let home = HomeState::default();
        assert_eq!(home.selected_client(), "A.T.S. GRAFICA");
        assert_eq!(home.selected_marketplace().domain, "amazon.it");
        assert_eq!(home.client.options().len(), 12);
        assert_eq!(home.marketplace.options().len(), 4);
    }

    #[test]
    fn test_home_can_submit_requires_prompt_and_image() {
        let mut home = HomeState::default();
        assert!(!home.can_submit());

        home.prompt = "   \n ".to_string();
        home.image = Some(CapturedImage::new("a.png", "image/png", vec![1]));
        assert!(!home.can_submit());

        home.prompt = "mouse".to_string();
        assert!(home.can_submit());

        home.image = None;
        assert!(!home.can_submit());
    }

    #[test]
    fn test_home_focus_cycles() {
        assert_eq!(HomeFocus::Client.prev(), HomeFocus::Submit);
        assert_eq!(HomeFocus::Submit.next(), HomeFocus::Client);
        assert_eq!(HomeFocus::Prompt.next(), HomeFocus::Image);
    }

    #[test]
    fn test_category_choice_when_categories_differ() {
        let p = preview("Electronics", "Computer Accessories", 0);
        assert_eq!(
            p.category,
            CategoryField::Choice {
                selected: CategoryChoice::Suggested
            }
        );
        assert_eq!(p.resolved_category(), "Computer Accessories");
    }

    #[test]
    fn test_user_category_choice_resolves_to_user() {
        let mut p = preview("Electronics", "Computer Accessories", 0);
        p.category = CategoryField::Choice {
            selected: CategoryChoice::User,
        };
        assert_eq!(p.resolved_category(), "Electronics");
    }

    #[test]
    fn test_single_category_falls_back_to_user() {
        let p = preview("Electronics", "", 0);
        assert_eq!(p.category, CategoryField::Single);
        assert_eq!(p.resolved_category(), "Electronics");
        assert_eq!(p.original.product.category_suggested, "");
    }

    #[test]
    fn test_equal_categories_are_single() {
        let p = preview("Electronics", "Electronics", 0);
        assert_eq!(p.category, CategoryField::Single);
        assert_eq!(p.resolved_category(), "Electronics");
    }

    #[test]
    fn test_preview_focus_order() {
        let p = preview("", "", 2);
        let order = p.focus_order();
        assert_eq!(order.first(), Some(&PreviewFocus::Alert(0)));
        assert_eq!(order[2], PreviewFocus::Field(PreviewField::Title));
        assert_eq!(order.last(), Some(&PreviewFocus::Submit));
        // 2 alerts + 6 fields + 2 bullets + submit
        assert_eq!(order.len(), 11);
        assert_eq!(p.focus, PreviewFocus::Alert(0));
    }

    #[test]
    fn test_preview_focus_wraps() {
        let mut p = preview("", "", 0);
        assert_eq!(p.focus, PreviewFocus::Field(PreviewField::Title));
        p.focus_prev();
        assert_eq!(p.focus, PreviewFocus::Submit);
        p.focus_next();
        assert_eq!(p.focus, PreviewFocus::Field(PreviewField::Title));
    }

    #[test]
    fn test_price_input_parsing() {
        assert_eq!(parse_price_input("19.99"), 19.99);
        assert_eq!(parse_price_input("4,50"), 4.5);
        assert_eq!(parse_price_input(""), 0.0);
        assert_eq!(parse_price_input("abc"), 0.0);
        assert_eq!(parse_price_input("inf"), 0.0);
        assert_eq!(format_price_input(0.0), "");
        assert_eq!(format_price_input(19.99), "19.99");
    }

    #[test]
    fn test_success_listing_url_and_price() {
        let success = SuccessData {
            marketplace_item_id: "B0TEST1234".to_string(),
            client: "PURANOVA".to_string(),
            marketplace: MARKETPLACES[3],
            title: "Mouse".to_string(),
            price: 19.5,
        };
        assert_eq!(success.listing_url(), "https://amazon.fr/dp/B0TEST1234");
        assert_eq!(success.price_label(), "€19.50");
    }

    #[test]
    fn test_request_ids_are_unique() {
        let mut state = AppState::new();
        let a = state.next_request_id();
        let b = state.next_request_id();
        assert_ne!(a, b);
    }
}
