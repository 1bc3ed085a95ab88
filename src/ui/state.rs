//! UI flags and text that are not part of the battle state

use crate::battle::resolution::GalleryEntry;
use crate::core::types::Slot;

/// Which sprite a slot currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteFace {
    #[default]
    Front,
    Back,
}

/// Game UI state
#[derive(Debug, Clone)]
pub struct GameUI {
    pub result: String,
    pub winner_head: String,
    pub winner_type: String,
    pub gallery: Vec<GalleryEntry>,
    pub gallery_visible: bool,
    /// Whether the battle control accepts input
    pub battle_enabled: bool,
    pub battle_label: String,
    pub faces: [SpriteFace; 2],
}

impl GameUI {
    pub fn new(battle_label: impl Into<String>) -> Self {
        Self {
            result: String::new(),
            winner_head: String::new(),
            winner_type: String::new(),
            gallery: Vec::new(),
            gallery_visible: false,
            battle_enabled: false,
            battle_label: battle_label.into(),
            faces: [SpriteFace::Front; 2],
        }
    }

    /// Wipe everything a previous battle wrote
    pub fn clear_result(&mut self) {
        self.result.clear();
        self.winner_head.clear();
        self.winner_type.clear();
        self.gallery.clear();
        self.gallery_visible = false;
    }

    pub fn face(&self, slot: Slot) -> SpriteFace {
        self.faces[slot.index()]
    }

    pub fn set_face(&mut self, slot: Slot, face: SpriteFace) {
        self.faces[slot.index()] = face;
    }

    pub fn reset_faces(&mut self) {
        self.faces = [SpriteFace::Front; 2];
    }
}
