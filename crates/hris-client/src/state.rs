//! Composition root wiring the HTTP adapter, token storage and core services

use std::sync::{Arc, Weak};
use tracing::info;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::services::{
    AttendanceService, AuthService, EmployeeService, InternService, LeaveService, NavigationService,
    OrgUnitService, PermissionService, PersonService, UserService,
};
use crate::storage::FileTokenStorage;
use hris_core::domain::{fallback_menu, MenuItem};
use hris_core::ports::{Redirector, TokenStorage};
use hris_core::services::{
    admin_shortcuts, CommandSink, NavigationLoader, NavigationStores, SessionStore, ShortcutDispatcher,
};
use hris_shared::ClientConfig;

pub struct ClientState {
    pub config: ClientConfig,
    pub api: Arc<ApiClient>,
    pub session: Arc<SessionStore<AuthService>>,
    pub navigation: NavigationLoader<NavigationService>,
    pub shortcuts: Arc<ShortcutDispatcher>,
}

impl ClientState {
    /// Build everything from configuration, persisting tokens to the configured file.
    pub fn from_config(
        config: ClientConfig,
        redirector: Arc<dyn Redirector>,
        commands: CommandSink,
    ) -> Result<Self, ClientError> {
        let storage: Arc<dyn TokenStorage> = Arc::new(FileTokenStorage::open(&config.storage.path)?);
        Self::with_storage(config, storage, redirector, commands)
    }

    pub fn with_storage(
        config: ClientConfig,
        storage: Arc<dyn TokenStorage>,
        redirector: Arc<dyn Redirector>,
        commands: CommandSink,
    ) -> Result<Self, ClientError> {
        let api = Arc::new(ApiClient::new(&config.api, storage.clone(), redirector.clone())?);

        let session = Arc::new(SessionStore::new(
            Arc::new(AuthService::new(api.clone())),
            storage,
            redirector,
        ));
        let navigation = NavigationLoader::new(
            Arc::new(NavigationService::new(api.clone())),
            NavigationStores::new(),
        );

        // The session owns the API client through its gateway; hold it weakly.
        let weak_session: Weak<SessionStore<AuthService>> = Arc::downgrade(&session);
        let nav_stores = navigation.stores().clone();
        api.on_forced_logout(move || {
            if let Some(session) = weak_session.upgrade() {
                session.reset_to_anonymous();
            }
            nav_stores.reset();
        });

        let shortcuts = Arc::new(ShortcutDispatcher::with_shortcuts(admin_shortcuts(commands)));

        info!("Client state ready for {}", api.base_url());
        Ok(Self {
            config,
            api,
            session,
            navigation,
            shortcuts,
        })
    }

    /// Fetch the user's navigation and build the menu, falling back to the
    /// dashboard entry when nothing is visible.
    pub async fn load_menu(&self) -> Vec<MenuItem> {
        let menu = self.navigation.load_user_navigation().await;
        if menu.is_empty() {
            fallback_menu()
        } else {
            menu
        }
    }

    /// Clear the session and everything derived from it.
    pub fn logout(&self) {
        self.navigation.stores().reset();
        self.shortcuts.reset();
        self.session.logout();
    }

    pub fn employees(&self) -> EmployeeService {
        EmployeeService::new(self.api.clone())
    }

    pub fn interns(&self) -> InternService {
        InternService::new(self.api.clone())
    }

    pub fn leave(&self) -> LeaveService {
        LeaveService::new(self.api.clone())
    }

    pub fn attendance(&self) -> AttendanceService {
        AttendanceService::new(self.api.clone())
    }

    pub fn departments(&self) -> OrgUnitService {
        OrgUnitService::departments(self.api.clone())
    }

    pub fn positions(&self) -> OrgUnitService {
        OrgUnitService::positions(self.api.clone())
    }

    pub fn persons(&self) -> PersonService {
        PersonService::new(self.api.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.api.clone())
    }

    pub fn permissions(&self) -> PermissionService {
        PermissionService::new(self.api.clone())
    }

    pub fn navigation_admin(&self) -> NavigationService {
        NavigationService::new(self.api.clone())
    }
}
