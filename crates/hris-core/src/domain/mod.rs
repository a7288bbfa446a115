pub mod face;
pub mod icon;
pub mod menu;
pub mod navigation;
pub mod shortcut;
pub mod user;

pub use face::*;
pub use icon::*;
pub use menu::*;
pub use navigation::*;
pub use shortcut::*;
pub use user::*;
