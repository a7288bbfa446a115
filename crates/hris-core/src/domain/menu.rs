//! Display-ready menu types

use serde::{Deserialize, Serialize};

use super::icon::Icon;
use hris_shared::constants::DASHBOARD_ROUTE;

/// Default color token for sidebar entries.
pub const DEFAULT_MENU_COLOR: &str = "text-primary";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    /// Leaf entry carrying a navigable URL
    File,
    /// Expandable container, never navigable
    Folder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub kind: MenuKind,
    pub icon: Icon,
    pub color: String,
    pub url: Option<String>,
    pub shortcut: Option<String>,
    pub expanded: bool,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn file(name: impl Into<String>, icon: Icon, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MenuKind::File,
            icon,
            color: DEFAULT_MENU_COLOR.to_string(),
            url: Some(url.into()),
            shortcut: None,
            expanded: false,
            children: Vec::new(),
        }
    }

    pub fn is_folder(&self) -> bool {
        self.kind == MenuKind::Folder
    }
}

/// Static menu shown when the session is anonymous or navigation failed to load.
pub fn fallback_menu() -> Vec<MenuItem> {
    vec![MenuItem::file("Dashboard", Icon::LayoutDashboard, DASHBOARD_ROUTE)]
}
