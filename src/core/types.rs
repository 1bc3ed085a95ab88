//! Core types shared by the gateway, the flows and the renderer

/// A creature reduced to the fields the game reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    /// Empty when the source has no artwork
    pub front_sprite: String,
    pub back_sprite: String,
    pub hp: u32,
    pub attack: u32,
    /// `"unknown"` when the source lists no type
    pub type_name: String,
}

/// One entry of a by-type lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMember {
    pub name: String,
    /// Resource URL equivalent to a by-id lookup
    pub url: String,
}

/// Which of the two display slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    /// 1-based number used in the terminal commands
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Slot::First),
            2 => Some(Slot::Second),
            _ => None,
        }
    }
}
