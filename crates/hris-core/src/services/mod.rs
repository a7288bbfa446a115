//! Client-side services

pub mod face_matcher;
pub mod navigation_loader;
pub mod navigation_tree;
pub mod session_store;
pub mod shortcut_dispatcher;
pub mod shortcuts;

pub use face_matcher::{FaceMatcher, FaceRecognizer};
pub use navigation_loader::{NavigationLoader, NavigationStores};
pub use session_store::SessionStore;
pub use shortcut_dispatcher::ShortcutDispatcher;
pub use shortcuts::{admin_shortcuts, CommandSink};
