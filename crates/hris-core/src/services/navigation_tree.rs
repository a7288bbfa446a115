// ============================================================================
// HRIS Core - Navigation Tree Processing
// File: crates/hris-core/src/services/navigation_tree.rs
// ============================================================================
//! Pure functions turning the user's navigation tree into a sidebar menu and
//! answering permission lookups against it.

use crate::domain::{Icon, MenuItem, MenuKind, PermissionKind, UserNavigationItem, DEFAULT_MENU_COLOR};

/// Drop every node that is not readable and has no readable descendant.
///
/// Children are filtered first, so a non-readable node survives as a container
/// when at least one descendant does. Sibling order is preserved.
pub fn filter_visible_items(items: &[UserNavigationItem]) -> Vec<UserNavigationItem> {
    items.iter().filter_map(filter_node).collect()
}

fn filter_node(item: &UserNavigationItem) -> Option<UserNavigationItem> {
    let children = filter_visible_items(&item.children);
    if item.can_read || !children.is_empty() {
        Some(UserNavigationItem {
            children,
            ..item.clone()
        })
    } else {
        None
    }
}

/// Map one (already filtered) node and its subtree into a menu entry.
pub fn map_to_menu_item(item: &UserNavigationItem) -> MenuItem {
    let has_children = item.has_children();
    let kind = if has_children {
        MenuKind::Folder
    } else {
        MenuKind::File
    };

    MenuItem {
        name: item.name.clone(),
        kind,
        icon: Icon::resolve(item.icon.as_deref()),
        color: DEFAULT_MENU_COLOR.to_string(),
        url: (kind == MenuKind::File).then(|| item.path.clone()),
        shortcut: None,
        expanded: has_children,
        children: item.children.iter().map(map_to_menu_item).collect(),
    }
}

/// Filter then map.
pub fn build_menu(items: &[UserNavigationItem]) -> Vec<MenuItem> {
    filter_visible_items(items)
        .iter()
        .map(map_to_menu_item)
        .collect()
}

/// Depth-first permission lookup over the raw, unfiltered tree.
///
/// An exact path match answers with that node's flag. Otherwise a descendant
/// match only counts when it grants the permission.
pub fn has_permission(path: &str, items: &[UserNavigationItem], kind: PermissionKind) -> bool {
    for item in items {
        if item.path == path {
            return item.permission(kind);
        }
        if item.has_children() && has_permission(path, &item.children, kind) {
            return true;
        }
    }
    false
}

pub fn can_create(path: &str, items: &[UserNavigationItem]) -> bool {
    has_permission(path, items, PermissionKind::Create)
}

pub fn can_read(path: &str, items: &[UserNavigationItem]) -> bool {
    has_permission(path, items, PermissionKind::Read)
}

pub fn can_update(path: &str, items: &[UserNavigationItem]) -> bool {
    has_permission(path, items, PermissionKind::Update)
}

pub fn can_delete(path: &str, items: &[UserNavigationItem]) -> bool {
    has_permission(path, items, PermissionKind::Delete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NavigationPermissions;

    fn readable(name: &str, path: &str) -> UserNavigationItem {
        UserNavigationItem::new(name, path).with_permissions(NavigationPermissions::read_only())
    }

    fn hidden(name: &str, path: &str) -> UserNavigationItem {
        UserNavigationItem::new(name, path)
    }

    fn assert_no_unreadable_leaf(items: &[UserNavigationItem]) {
        for item in items {
            assert!(item.can_read || item.has_children(), "{} leaked", item.name);
            assert_no_unreadable_leaf(&item.children);
        }
    }

    fn sample_tree() -> Vec<UserNavigationItem> {
        vec![
            readable("Dashboard", "/admin/dashboard").with_icon("LayoutDashboard"),
            hidden("Admin", "/admin").with_children(vec![
                readable("Users", "/users").with_icon("Users"),
                hidden("Secrets", "/secrets"),
                hidden("Deep", "/deep").with_children(vec![hidden("Deeper", "/deeper")]),
            ]),
            hidden("Reports", "/reports"),
            readable("Settings", "/settings").with_icon("NoSuchIcon"),
        ]
    }

    #[test]
    fn test_filter_drops_unreadable_subtrees() {
        let filtered = filter_visible_items(&sample_tree());
        let names: Vec<_> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Dashboard", "Admin", "Settings"]);

        let admin = &filtered[1];
        assert_eq!(admin.children.len(), 1);
        assert_eq!(admin.children[0].name, "Users");
        assert_no_unreadable_leaf(&filtered);
    }

    #[test]
    fn test_filter_preserves_sibling_order() {
        let items = vec![
            readable("c", "/c"),
            hidden("x", "/x"),
            readable("a", "/a"),
            readable("b", "/b"),
        ];
        let names: Vec<_> = filter_visible_items(&items)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let tree = sample_tree();
        let before = tree.clone();
        let _ = filter_visible_items(&tree);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_folder_has_no_url_and_starts_expanded() {
        let tree = vec![hidden("Admin", "/admin").with_children(vec![readable("Users", "/users")])];
        let menu = build_menu(&tree);

        assert_eq!(menu.len(), 1);
        let admin = &menu[0];
        assert_eq!(admin.kind, MenuKind::Folder);
        assert_eq!(admin.url, None);
        assert!(admin.expanded);

        let users = &admin.children[0];
        assert_eq!(users.kind, MenuKind::File);
        assert_eq!(users.url.as_deref(), Some("/users"));
        assert!(!users.expanded);
        assert_eq!(users.color, DEFAULT_MENU_COLOR);
    }

    #[test]
    fn test_readable_node_with_only_hidden_children_becomes_file() {
        let tree = vec![readable("Leave", "/leave").with_children(vec![hidden("Types", "/leave/types")])];
        let menu = build_menu(&tree);
        assert_eq!(menu[0].kind, MenuKind::File);
        assert_eq!(menu[0].url.as_deref(), Some("/leave"));
    }

    #[test]
    fn test_icons_resolved_with_fallback() {
        let menu = build_menu(&sample_tree());
        assert_eq!(menu[0].icon, Icon::LayoutDashboard);
        assert_eq!(menu[1].icon, Icon::File);
        assert_eq!(menu[1].children[0].icon, Icon::Users);
        assert_eq!(menu[2].icon, Icon::File);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let tree = sample_tree();
        assert_eq!(build_menu(&tree), build_menu(&tree));
    }

    #[test]
    fn test_exact_match_returns_its_flag() {
        let tree = vec![UserNavigationItem::new("Users", "/users").with_permissions(
            NavigationPermissions {
                can_create: true,
                can_read: true,
                can_update: false,
                can_delete: false,
            },
        )];
        assert!(can_create("/users", &tree));
        assert!(!can_update("/users", &tree));
        assert!(!can_read("/missing", &tree));
    }

    #[test]
    fn test_permission_lookup_sees_nodes_hidden_from_menu() {
        let tree = vec![hidden("Admin", "/admin").with_children(vec![
            UserNavigationItem::new("Audit", "/admin/audit").with_permissions(NavigationPermissions {
                can_delete: true,
                ..NavigationPermissions::no_access()
            }),
        ])];

        assert!(build_menu(&tree).is_empty());
        assert!(can_delete("/admin/audit", &tree));
    }

    #[test]
    fn test_denied_descendant_does_not_stop_search() {
        let tree = vec![
            hidden("A", "/a").with_children(vec![hidden("Dup", "/dup")]),
            hidden("B", "/b").with_children(vec![readable("Dup", "/dup")]),
        ];
        assert!(can_read("/dup", &tree));
    }

    #[test]
    fn test_top_level_exact_match_wins_over_later_siblings() {
        let tree = vec![hidden("Dup", "/dup"), readable("Dup", "/dup")];
        assert!(!can_read("/dup", &tree));
    }
}
