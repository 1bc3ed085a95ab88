//! UI module - projection of the game onto a presentation surface

pub mod recording;
pub mod state;
pub mod terminal;
pub mod view;

pub use recording::RecordingSurface;
pub use state::{GameUI, SpriteFace};
pub use terminal::TerminalSurface;
pub use view::{SlotView, View, PLACEHOLDER};

use crate::core::error::Result;

/// Something that can draw a [`View`]
pub trait Surface {
    fn present(&mut self, view: &View) -> Result<()>;
}
