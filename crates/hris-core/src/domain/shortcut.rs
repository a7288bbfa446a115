// ============================================================================
// HRIS Core - Shortcut Entities
// File: crates/hris-core/src/domain/shortcut.rs
// Description: Keyboard shortcut tree nodes, key events and dispatch outcomes
// ============================================================================

use std::fmt;
use std::sync::Arc;

use super::icon::Icon;

pub const ESCAPE_KEY: &str = "Escape";
pub const BACKSPACE_KEY: &str = "Backspace";

/// Callback fired when a leaf shortcut is activated.
pub type ShortcutHandler = Arc<dyn Fn(&KeyPress) + Send + Sync>;

/// A shortcut node is either a leaf action or a branch into a submenu.
#[derive(Clone)]
pub enum ShortcutKind {
    Leaf(Option<ShortcutHandler>),
    Branch(Vec<Shortcut>),
}

#[derive(Clone)]
pub struct Shortcut {
    pub key: String,
    pub action: String,
    pub icon: Icon,
    pub kind: ShortcutKind,
}

impl Shortcut {
    pub fn leaf<F>(key: impl Into<String>, action: impl Into<String>, icon: Icon, handler: F) -> Self
    where
        F: Fn(&KeyPress) + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            action: action.into(),
            icon,
            kind: ShortcutKind::Leaf(Some(Arc::new(handler))),
        }
    }

    /// Leaf without a handler; activating it only resets the dispatcher.
    pub fn action(key: impl Into<String>, action: impl Into<String>, icon: Icon) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            icon,
            kind: ShortcutKind::Leaf(None),
        }
    }

    pub fn branch(
        key: impl Into<String>,
        action: impl Into<String>,
        icon: Icon,
        children: Vec<Shortcut>,
    ) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            icon,
            kind: ShortcutKind::Branch(children),
        }
    }

    /// Children of a branch; empty for leaves.
    pub fn children(&self) -> &[Shortcut] {
        match &self.kind {
            ShortcutKind::Branch(children) => children,
            ShortcutKind::Leaf(_) => &[],
        }
    }

    /// Any branch, even one without children, opens a submenu when activated.
    pub fn is_branch(&self) -> bool {
        matches!(self.kind, ShortcutKind::Branch(_))
    }
}

impl fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Shortcut");
        out.field("key", &self.key)
            .field("action", &self.action)
            .field("icon", &self.icon);
        match &self.kind {
            ShortcutKind::Leaf(handler) => out.field("handler", &handler.is_some()),
            ShortcutKind::Branch(children) => out.field("children", children),
        };
        out.finish()
    }
}

/// Display-only view of an active shortcut, safe to hand to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutHint {
    pub key: String,
    pub action: String,
    pub icon: Icon,
    pub has_children: bool,
}

impl From<&Shortcut> for ShortcutHint {
    fn from(shortcut: &Shortcut) -> Self {
        Self {
            key: shortcut.key.clone(),
            action: shortcut.action.clone(),
            icon: shortcut.icon,
            has_children: shortcut.is_branch(),
        }
    }
}

/// Element that had focus when the key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyTarget {
    #[default]
    Document,
    Input,
    TextArea,
    Select,
    ContentEditable,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub target: KeyTarget,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: KeyTarget::Document,
        }
    }

    pub fn in_target(key: impl Into<String>, target: KeyTarget) -> Self {
        Self {
            key: key.into(),
            target,
        }
    }

    /// True while the user is typing into a form control.
    pub fn is_text_entry(&self) -> bool {
        matches!(
            self.target,
            KeyTarget::Input | KeyTarget::TextArea | KeyTarget::Select | KeyTarget::ContentEditable
        )
    }
}

/// What the dispatcher did with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Focus was in a text field
    Ignored,
    /// No shortcut bound at the current level
    Unhandled,
    /// Escape cleared the stack
    Reset,
    /// Backspace left one submenu
    Popped { depth: usize },
    Entered { action: String },
    Fired { action: String },
}

impl KeyOutcome {
    /// Whether the host should suppress the key's default behavior.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored | KeyOutcome::Unhandled)
    }
}

/// Side effects requested by the built-in admin shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Goto(String),
    ToggleFullscreen,
    ToggleZenMode,
    FocusSearch,
    GoBack,
    OpenExternal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_entry_targets() {
        assert!(KeyPress::in_target("g", KeyTarget::Input).is_text_entry());
        assert!(KeyPress::in_target("g", KeyTarget::ContentEditable).is_text_entry());
        assert!(!KeyPress::in_target("g", KeyTarget::Other).is_text_entry());
        assert!(!KeyPress::new("g").is_text_entry());
    }

    #[test]
    fn test_only_handled_outcomes_prevent_default() {
        assert!(!KeyOutcome::Unhandled.prevents_default());
        assert!(!KeyOutcome::Ignored.prevents_default());
        assert!(KeyOutcome::Reset.prevents_default());
        assert!(KeyOutcome::Popped { depth: 0 }.prevents_default());
    }

    #[test]
    fn test_empty_branch_is_still_a_branch() {
        let shortcut = Shortcut::branch("g", "Go To", Icon::Link, Vec::new());
        assert!(shortcut.is_branch());
        assert!(ShortcutHint::from(&shortcut).has_children);
        assert!(!Shortcut::action("x", "X", Icon::File).is_branch());
        assert!(ShortcutHint::from(&Shortcut::action("x", "X", Icon::File)).key == "x");
    }
}
