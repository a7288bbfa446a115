//! Capability traits (ports) implemented by the client and host layers

pub mod auth_gateway;
pub mod face_provider;
pub mod key_source;
pub mod navigation_source;
pub mod redirector;
pub mod token_storage;

pub use auth_gateway::AuthGateway;
pub use face_provider::FaceDescriptorProvider;
pub use key_source::{KeyListener, KeySource, ManualKeySource};
pub use navigation_source::NavigationSource;
pub use redirector::{NoopRedirector, Redirector};
pub use token_storage::{
    clear_session_tokens, store_session_tokens, MemoryTokenStorage, NoopTokenStorage, TokenStorage,
};

#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
#[cfg(test)]
pub use face_provider::MockFaceDescriptorProvider;
#[cfg(test)]
pub use navigation_source::MockNavigationSource;
#[cfg(test)]
pub use redirector::MockRedirector;
