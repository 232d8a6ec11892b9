pub mod about;
pub mod home;
pub mod modal;
pub mod projects;
pub mod system;
pub mod timeline;
pub mod widgets;

pub use system::ui_system;
