mod app_state;
mod config;
mod modal;
mod reveal;
mod transition;
mod types;

pub use app_state::AppState;
pub use config::{AppConfig, ThemeMode};
pub use modal::{ModalContent, ModalViewer};
pub use reveal::RevealLedger;
pub use transition::PageFlip;
pub use types::{ModalPhase, PagePose, Tab, TransitionPhase};
