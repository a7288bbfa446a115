//! Icon identifiers
//!
//! The backend sends icon names as free-form strings. The core only resolves
//! them to an opaque [`Icon`]; the presentation layer decides how to draw it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Calendar,
    CalendarHeart,
    CalendarMinus,
    ChartBarStacked,
    ChartColumn,
    ChartColumnDecreasing,
    ChartColumnIncreasing,
    ChartPie,
    CircleUser,
    ClipboardList,
    Clock,
    File,
    FileText,
    FileX,
    LayoutDashboard,
    List,
    Package,
    Plus,
    Receipt,
    Settings,
    Shield,
    ShoppingCart,
    SquareUser,
    UserCheck,
    UserCog,
    UserPlus,
    Users,
    Building2,
    Briefcase,
    Menu,
    ShieldCheck,
    // Shortcut-only icons
    ArrowLeft,
    EyeOff,
    Fullscreen,
    HelpCircle,
    Link,
    Search,
}

/// Names the backend may send in a navigation item's `icon` field.
const NAVIGATION_ICONS: &[(&str, Icon)] = &[
    ("LayoutDashboard", Icon::LayoutDashboard),
    ("UserCog", Icon::UserCog),
    ("Settings", Icon::Settings),
    ("ShoppingCart", Icon::ShoppingCart),
    ("ChartColumn", Icon::ChartColumn),
    ("Users", Icon::Users),
    ("ChartPie", Icon::ChartPie),
    ("CircleUser", Icon::CircleUser),
    ("CalendarHeart", Icon::CalendarHeart),
    ("Shield", Icon::Shield),
    ("List", Icon::List),
    ("Plus", Icon::Plus),
    ("UserPlus", Icon::UserPlus),
    ("Package", Icon::Package),
    ("Calendar", Icon::Calendar),
    ("ClipboardList", Icon::ClipboardList),
    ("FileText", Icon::FileText),
    ("Receipt", Icon::Receipt),
    ("File", Icon::File),
    ("FileX", Icon::FileX),
    ("UserCheck", Icon::UserCheck),
    ("SquareUser", Icon::SquareUser),
    ("CalendarMinus", Icon::CalendarMinus),
    ("Clock", Icon::Clock),
    ("ChartColumnIncreasing", Icon::ChartColumnIncreasing),
    ("ChartColumnDecreasing", Icon::ChartColumnDecreasing),
    ("ChartBarStacked", Icon::ChartBarStacked),
    ("Building2", Icon::Building2),
    ("Briefcase", Icon::Briefcase),
    ("Menu", Icon::Menu),
    ("ShieldCheck", Icon::ShieldCheck),
];

impl Icon {
    pub const DEFAULT: Icon = Icon::File;

    /// Look up a navigation icon name; `None` for names outside the vocabulary.
    pub fn from_navigation_name(name: &str) -> Option<Icon> {
        NAVIGATION_ICONS
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, icon)| *icon)
    }

    /// Resolve an optional icon name, falling back to [`Icon::DEFAULT`].
    pub fn resolve(name: Option<&str>) -> Icon {
        name.and_then(Icon::from_navigation_name)
            .unwrap_or(Icon::DEFAULT)
    }

    pub fn navigation_vocabulary() -> impl Iterator<Item = &'static str> {
        NAVIGATION_ICONS.iter().map(|(name, _)| *name)
    }
}

impl Default for Icon {
    fn default() -> Self {
        Icon::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_name_resolves() {
        assert_eq!(Icon::resolve(Some("Users")), Icon::Users);
        assert_eq!(Icon::resolve(Some("Building2")), Icon::Building2);
    }

    #[test]
    fn test_unknown_or_missing_falls_back_to_file() {
        assert_eq!(Icon::resolve(Some("NoSuchIcon")), Icon::File);
        assert_eq!(Icon::resolve(None), Icon::File);
        assert_eq!(Icon::resolve(Some("")), Icon::File);
    }

    #[test]
    fn test_shortcut_icons_not_in_navigation_vocabulary() {
        assert_eq!(Icon::from_navigation_name("Search"), None);
        assert_eq!(Icon::navigation_vocabulary().count(), 31);
    }
}
