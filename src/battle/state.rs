//! Battle state: either no creatures or a full pair, never one

use crate::core::types::{Creature, Slot};

/// Two creatures facing each other
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub first: Creature,
    pub second: Creature,
}

impl Matchup {
    pub fn new(first: Creature, second: Creature) -> Self {
        Self { first, second }
    }

    pub fn get(&self, slot: Slot) -> &Creature {
        match slot {
            Slot::First => &self.first,
            Slot::Second => &self.second,
        }
    }
}

/// Currently selected pair
///
/// Only ever replaced wholesale, so both slots are populated together or
/// both are empty.
#[derive(Debug, Clone, Default)]
pub struct BattleState {
    matchup: Option<Matchup>,
}

impl BattleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, matchup: Matchup) {
        self.matchup = Some(matchup);
    }

    pub fn matchup(&self) -> Option<&Matchup> {
        self.matchup.as_ref()
    }

    pub fn creature(&self, slot: Slot) -> Option<&Creature> {
        self.matchup.as_ref().map(|m| m.get(slot))
    }

    pub fn is_ready(&self) -> bool {
        self.matchup.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creature(id: u32, name: &str) -> Creature {
        Creature {
            id,
            name: name.into(),
            front_sprite: String::new(),
            back_sprite: String::new(),
            hp: 10,
            attack: 10,
            type_name: "normal".into(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let state = BattleState::new();
        assert!(!state.is_ready());
        assert!(state.creature(Slot::First).is_none());
        assert!(state.creature(Slot::Second).is_none());
    }

    #[test]
    fn test_replace_fills_both_slots() {
        let mut state = BattleState::new();
        state.replace(Matchup::new(creature(1, "bulbasaur"), creature(4, "charmander")));

        assert_eq!(state.creature(Slot::First).unwrap().name, "bulbasaur");
        assert_eq!(state.creature(Slot::Second).unwrap().name, "charmander");
    }
}
