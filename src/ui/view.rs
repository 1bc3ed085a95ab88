//! Projection of battle state and UI flags into displayable text
//!
//! No decisions are made here. Missing creatures render as placeholders.

use crate::battle::resolution::GalleryEntry;
use crate::battle::state::BattleState;
use crate::core::types::{Creature, Slot};
use crate::ui::state::{GameUI, SpriteFace};

pub const PLACEHOLDER: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub name: String,
    pub hp: String,
    pub attack: String,
    pub sprite: String,
    pub alt: String,
}

impl SlotView {
    fn project(creature: Option<&Creature>, face: SpriteFace) -> Self {
        match creature {
            Some(c) => Self {
                name: c.name.clone(),
                hp: c.hp.to_string(),
                attack: c.attack.to_string(),
                sprite: match face {
                    SpriteFace::Front => c.front_sprite.clone(),
                    SpriteFace::Back => c.back_sprite.clone(),
                },
                alt: c.name.clone(),
            },
            None => Self {
                name: PLACEHOLDER.into(),
                hp: PLACEHOLDER.into(),
                attack: PLACEHOLDER.into(),
                sprite: String::new(),
                alt: String::new(),
            },
        }
    }
}

/// Everything a surface needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub slots: [SlotView; 2],
    pub result: String,
    pub winner_head: String,
    pub winner_type: String,
    pub gallery: Vec<GalleryEntry>,
    pub gallery_visible: bool,
    pub battle_enabled: bool,
    pub battle_label: String,
}

impl View {
    pub fn project(state: &BattleState, ui: &GameUI) -> Self {
        let name = |slot: Slot| {
            state
                .creature(slot)
                .map(|c| c.name.as_str())
                .unwrap_or(PLACEHOLDER)
        };

        Self {
            title: format!("{} vs {}", name(Slot::First), name(Slot::Second)),
            slots: Slot::ALL.map(|slot| SlotView::project(state.creature(slot), ui.face(slot))),
            result: ui.result.clone(),
            winner_head: ui.winner_head.clone(),
            winner_type: ui.winner_type.clone(),
            gallery: ui.gallery.clone(),
            gallery_visible: ui.gallery_visible,
            battle_enabled: ui.battle_enabled,
            battle_label: ui.battle_label.clone(),
        }
    }

    pub fn slot(&self, slot: Slot) -> &SlotView {
        &self.slots[slot.index()]
    }
}
