// ============================================================================
// HRIS Core - Navigation Loader
// File: crates/hris-core/src/services/navigation_loader.rs
// ============================================================================
//! Fetches the user's navigation tree, keeps it in the navigation stores and
//! derives the sidebar menu.

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::domain::{MenuItem, PermissionKind, UserNavigationItem};
use crate::ports::NavigationSource;
use crate::services::navigation_tree;
use crate::store::Store;

/// Observable navigation state shared with the rest of the application.
#[derive(Debug, Clone, Default)]
pub struct NavigationStores {
    /// Raw, unfiltered tree from the last successful fetch
    pub items: Store<Vec<UserNavigationItem>>,
    pub loading: Store<bool>,
    pub error: Store<Option<String>>,
}

impl NavigationStores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_permission(&self, path: &str, kind: PermissionKind) -> bool {
        self.items
            .with(|items| navigation_tree::has_permission(path, items, kind))
    }

    /// Forget the stored tree, e.g. on logout.
    pub fn reset(&self) {
        self.items.set(Vec::new());
        self.error.set(None);
    }
}

/// Clears the loading flag on every exit path.
struct LoadingGuard<'a>(&'a Store<bool>);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a Store<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

pub struct NavigationLoader<S: NavigationSource> {
    source: Arc<S>,
    stores: NavigationStores,
}

impl<S: NavigationSource> NavigationLoader<S> {
    pub fn new(source: Arc<S>, stores: NavigationStores) -> Self {
        Self { source, stores }
    }

    pub fn stores(&self) -> &NavigationStores {
        &self.stores
    }

    /// Load and render the sidebar menu.
    ///
    /// Never fails: a fetch error is recorded in the error store and yields an
    /// empty menu. Overlapping calls are not ordered; the last one to finish
    /// wins.
    pub async fn load_user_navigation(&self) -> Vec<MenuItem> {
        let _loading = LoadingGuard::start(&self.stores.loading);
        self.stores.error.set(None);

        match self.source.user_navigation().await {
            Ok(items) => {
                debug!("Fetched {} navigation roots", items.len());
                self.stores.items.set(items);
                let menu = self.stores.items.with(|items| navigation_tree::build_menu(items));
                info!("Navigation loaded: {} menu entries", menu.len());
                menu
            }
            Err(e) => {
                error!("Failed to load navigation: {}", e);
                self.stores.error.set(Some(e.to_string()));
                Vec::new()
            }
        }
    }
}
