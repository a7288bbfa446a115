//! Plain-text rendering of menus and shortcut hints

use hris_core::domain::{KeyOutcome, MenuItem, ShortcutHint};

pub fn render_menu(items: &[MenuItem]) -> String {
    let mut out = String::new();
    for item in items {
        push_item(&mut out, item, 0);
    }
    out
}

fn push_item(out: &mut String, item: &MenuItem, depth: usize) {
    let indent = "  ".repeat(depth);
    match &item.url {
        Some(url) if !item.is_folder() => {
            out.push_str(&format!("{}- {} ({:?}) {}\n", indent, item.name, item.icon, url));
        }
        _ => {
            out.push_str(&format!("{}+ {} ({:?})\n", indent, item.name, item.icon));
        }
    }
    for child in &item.children {
        push_item(out, child, depth + 1);
    }
}

pub fn render_hints(hints: &[ShortcutHint]) -> String {
    hints
        .iter()
        .map(|h| {
            let marker = if h.has_children { " >" } else { "" };
            format!("[{}] {}{}", h.key, h.action, marker)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn render_outcome(outcome: &KeyOutcome) -> String {
    match outcome {
        KeyOutcome::Ignored => "ignored (text field)".to_string(),
        KeyOutcome::Unhandled => "no shortcut".to_string(),
        KeyOutcome::Reset => "reset".to_string(),
        KeyOutcome::Popped { depth } => format!("back to level {}", depth),
        KeyOutcome::Entered { action } => format!("entered {}", action),
        KeyOutcome::Fired { action } => format!("ran {}", action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hris_core::domain::{Icon, MenuKind, DEFAULT_MENU_COLOR};

    #[test]
    fn test_render_nested_menu() {
        let folder = MenuItem {
            name: "Admin".into(),
            kind: MenuKind::Folder,
            icon: Icon::Settings,
            color: DEFAULT_MENU_COLOR.into(),
            url: None,
            shortcut: None,
            expanded: false,
            children: vec![MenuItem::file("Users", Icon::Users, "/users")],
        };

        assert_eq!(
            render_menu(&[folder]),
            "+ Admin (Settings)\n  - Users (Users) /users\n"
        );
    }

    #[test]
    fn test_render_hints_marks_submenus() {
        let hints = vec![
            ShortcutHint {
                key: "g".into(),
                action: "Go to".into(),
                icon: Icon::Link,
                has_children: true,
            },
            ShortcutHint {
                key: "/".into(),
                action: "Search".into(),
                icon: Icon::Search,
                has_children: false,
            },
        ];
        assert_eq!(render_hints(&hints), "[g] Go to >  [/] Search");
    }
}
