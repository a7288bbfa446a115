// ============================================================================
// HRIS Core - Navigation Entities
// File: crates/hris-core/src/domain/navigation.rs
// Description: Raw and user-scoped navigation tree nodes
// ============================================================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Navigation item as stored on the backend (admin view, flat with parent links).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: Uuid,
    pub name: String,
    pub path: String,
    pub icon: Option<String>,
    pub parent_id: Option<Uuid>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Navigation node scoped to the current user, carrying CRUD permission flags.
///
/// Children arrive inline and in display order. The backend omits `children`
/// for leaves, so it defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNavigationItem {
    pub id: Uuid,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub can_create: bool,
    #[serde(default)]
    pub can_read: bool,
    #[serde(default)]
    pub can_update: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default)]
    pub children: Vec<UserNavigationItem>,
}

impl UserNavigationItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            path: path.into(),
            icon: None,
            parent_id: None,
            display_order: 0,
            can_create: false,
            can_read: false,
            can_update: false,
            can_delete: false,
            children: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_permissions(mut self, permissions: NavigationPermissions) -> Self {
        self.can_create = permissions.can_create;
        self.can_read = permissions.can_read;
        self.can_update = permissions.can_update;
        self.can_delete = permissions.can_delete;
        self
    }

    /// Attach children, pointing their parent reference at this node.
    pub fn with_children(mut self, children: Vec<UserNavigationItem>) -> Self {
        let id = self.id;
        self.children = children
            .into_iter()
            .map(|mut child| {
                child.parent_id = Some(id);
                child
            })
            .collect();
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn permission(&self, kind: PermissionKind) -> bool {
        match kind {
            PermissionKind::Create => self.can_create,
            PermissionKind::Read => self.can_read,
            PermissionKind::Update => self.can_update,
            PermissionKind::Delete => self.can_delete,
        }
    }
}

/// Which CRUD flag a permission lookup asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    Create,
    Read,
    Update,
    Delete,
}

impl PermissionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionKind::Create => "create",
            PermissionKind::Read => "read",
            PermissionKind::Update => "update",
            PermissionKind::Delete => "delete",
        }
    }
}

impl std::str::FromStr for PermissionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().trim_start_matches("can_") {
            "create" => Ok(PermissionKind::Create),
            "read" => Ok(PermissionKind::Read),
            "update" => Ok(PermissionKind::Update),
            "delete" => Ok(PermissionKind::Delete),
            other => Err(format!("unknown permission kind: {}", other)),
        }
    }
}

/// CRUD flag bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationPermissions {
    pub can_create: bool,
    pub can_read: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

impl NavigationPermissions {
    pub fn full_access() -> Self {
        Self {
            can_create: true,
            can_read: true,
            can_update: true,
            can_delete: true,
        }
    }

    pub fn read_only() -> Self {
        Self {
            can_read: true,
            ..Self::default()
        }
    }

    pub fn no_access() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNavigationItem {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateNavigationItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
