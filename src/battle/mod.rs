//! Battle system - two random creatures, one attack stat, one winner
//!
//! Flow:
//! - Selection: pick two distinct ids, fetch both, replace the pair
//! - Resolution: compare attack, announce, then show same-type creatures

pub mod game;
pub mod resolution;
pub mod selection;
pub mod state;

// Re-exports for convenient access
pub use game::{BattleGame, FETCH_ERROR_MESSAGE, FIGHT_LABELS};
pub use resolution::{decide, fetch_gallery, pick_gallery, GalleryEntry, Outcome};
pub use selection::{fetch_pair, pick_distinct_ids, random_id};
pub use state::{BattleState, Matchup};
