//! Pokeclash - random creature battles backed by PokeAPI

pub mod api;
pub mod battle;
pub mod core;
pub mod ui;
