use bevy::prelude::*;
use bevy_egui::egui;
use std::collections::HashMap;

use crate::content::SiteContent;
use super::config::AppConfig;
use super::modal::ModalViewer;
use super::reveal::RevealLedger;
use super::transition::PageFlip;

/// The one state object for the whole session. Owned by bevy as a
/// resource; the coordinators inside are the only writers of tab,
/// phase and modal state.
#[derive(Resource, Default)]
pub struct AppState {
    pub content: SiteContent,
    pub config: AppConfig,

    // Core coordinators
    pub flip: PageFlip,
    pub modal: ModalViewer,

    // Decorative interaction state
    pub reveal: RevealLedger,
    /// Horizontal offset of the career timeline strip, driven by the
    /// vertical wheel remap
    pub timeline_offset: f32,
    /// Raised by the flip at the content swap; consumed by the scroll
    /// area on the next paint
    pub scroll_to_top: bool,

    // Loaded textures (thumbnail name -> handle)
    pub texture_cache: HashMap<String, egui::TextureHandle>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            content: SiteContent::default(),
            config: AppConfig::load(),
            flip: PageFlip::new(),
            modal: ModalViewer::new(),
            reveal: RevealLedger::new(),
            timeline_offset: 0.0,
            scroll_to_top: false,
            texture_cache: HashMap::new(),
        }
    }
}
