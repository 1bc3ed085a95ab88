//! Pick two distinct random identifiers and fetch both creatures

use crate::api::client::CreatureSource;
use crate::battle::state::Matchup;
use crate::core::error::{GameError, Result};
use rand::Rng;

/// Uniform identifier in `1..=max_id`
pub fn random_id<R: Rng + ?Sized>(rng: &mut R, max_id: u32) -> u32 {
    rng.gen_range(1..=max_id)
}

/// Two identifiers with `first != second`
///
/// The second is re-rolled until it differs; expected attempts stay O(1)
/// for any `max_id >= 2`.
pub fn pick_distinct_ids<R: Rng + ?Sized>(rng: &mut R, max_id: u32) -> Result<(u32, u32)> {
    if max_id < 2 {
        return Err(GameError::InvalidConfig(format!(
            "need at least 2 identifiers to pick from, got {}",
            max_id
        )));
    }

    let first = random_id(rng, max_id);
    let mut second = random_id(rng, max_id);
    while second == first {
        second = random_id(rng, max_id);
    }
    Ok((first, second))
}

/// Fetch both creatures concurrently; fails if either lookup fails
pub async fn fetch_pair<S: CreatureSource + ?Sized>(
    source: &S,
    (first_id, second_id): (u32, u32),
) -> Result<Matchup> {
    let first_key = first_id.to_string();
    let second_key = second_id.to_string();

    let (first, second) = tokio::try_join!(
        source.fetch_by_id(&first_key),
        source.fetch_by_id(&second_key)
    )?;

    Ok(Matchup::new(first, second))
}
