//! Fetch gateway: HTTP lookups plus record mapping

pub mod client;
pub mod mapper;
pub mod mock;

pub use client::{CreatureSource, PokeApiClient};
pub use mapper::{map_creature, map_type_members, RawCreature, RawTypeListing};
pub use mock::MockSource;
