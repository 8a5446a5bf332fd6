//! Application state definitions

use super::forms::OrderForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing page
    #[default]
    Home,
    /// Order form
    Order,
}

impl View {
    /// All routable views in nav bar order
    pub const ALL: [View; 2] = [View::Home, View::Order];

    /// Resolve a route path to a view
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.path() == path)
    }

    /// Route path for this view
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Order => "/order",
        }
    }

    /// Nav link text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Order => "Order",
        }
    }

    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Order)
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Reset whenever the order view is left
    pub order_form: OrderForm,
}

impl AppState {
    /// Create state positioned at the given view
    pub fn with_view(view: View) -> Self {
        Self {
            current_view: view,
            ..Default::default()
        }
    }

    /// Whether a nav link should be highlighted
    pub fn is_active_link(&self, view: View) -> bool {
        self.current_view == view
    }
}
