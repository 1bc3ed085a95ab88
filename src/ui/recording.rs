//! Surface that keeps every frame, for tests and headless runs

use crate::core::error::Result;
use crate::ui::{Surface, View};

#[derive(Debug, Default)]
pub struct RecordingSurface {
    frames: Vec<View>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[View] {
        &self.frames
    }

    pub fn last(&self) -> Option<&View> {
        self.frames.last()
    }

    /// Labels the battle control went through, consecutive duplicates removed
    pub fn battle_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.frames.iter().map(|f| f.battle_label.as_str()).collect();
        labels.dedup();
        labels
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, view: &View) -> Result<()> {
        self.frames.push(view.clone());
        Ok(())
    }
}
