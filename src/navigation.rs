use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use strum::{AsRefStr, VariantArray};

/// In-page sections. The anchors are public identifiers, bookmarks point at them.
#[derive(AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Home,
    Listen,
    Work,
    About,
    Contact,
}

impl Section {
    /// Sections linked from the navigation bar and the mobile panel
    pub const NAV: [Section; 4] = [Section::Listen, Section::Work, Section::About, Section::Contact];

    pub fn id(&self) -> &str {
        self.as_ref()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Listen => "Listen",
            Section::Work => "Work",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

/// A link inside the mobile panel
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub href: String,
    pub label: &'static str,
}

/// Open/closed state of the mobile navigation panel for one page view.
///
/// The state travels in the page URL (`/?menu=open`), so every render starts
/// from what the visitor's last click asked for and nothing outlives the view.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub const OPEN_VALUE: &'static str = "open";

    pub fn open() -> Self {
        Self { is_open: true }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }

    pub fn closed(mut self) -> Self {
        self.close();
        self
    }

    /// URL of the page view in this state
    pub fn href(&self) -> &'static str {
        if self.is_open { "/?menu=open" } else { "/" }
    }

    /// Target of the menu button
    pub fn toggle_href(&self) -> &'static str {
        self.toggled().href()
    }

    /// Target of a link inside the panel: the section with the panel dismissed
    pub fn close_href(&self, section: &Section) -> String {
        format!("{}#{}", self.closed().href(), section.id())
    }

    /// View to load in the current tab when a panel button opens another one
    pub fn dismiss_href(&self) -> &'static str {
        self.closed().href()
    }

    /// Section links of the mobile panel, each one dismissing it
    pub fn panel_links(&self) -> Vec<NavLink> {
        Section::NAV
            .iter()
            .map(|section| NavLink {
                href: self.close_href(section),
                label: section.label(),
            })
            .collect()
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_open { "Close menu" } else { "Open menu" }
    }
}

#[derive(Deserialize, Default)]
struct MenuQuery {
    menu: Option<String>,
}

impl From<MenuQuery> for MenuState {
    fn from(query: MenuQuery) -> Self {
        Self {
            is_open: query.menu.as_deref() == Some(MenuState::OPEN_VALUE),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for MenuState {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<MenuQuery>::try_from_uri(&parts.uri)
            .map(|Query(q)| q)
            .unwrap_or_default();

        Ok(query.into())
    }
}
