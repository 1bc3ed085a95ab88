//! Winner determination and the same-type gallery
//!
//! Attack alone decides the fight. Gallery lookups are best-effort: a
//! failed detail fetch drops that entry and nothing else.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::api::client::CreatureSource;
use crate::battle::state::Matchup;
use crate::core::types::{Creature, TypeMember};

/// Result of comparing the two attack stats
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Equal attack; nothing else happens
    Tie {
        first: String,
        second: String,
        attack: u32,
    },
    /// Strictly greater attack
    Winner(Creature),
}

impl Outcome {
    /// Result line shown to the player
    pub fn message(&self) -> String {
        match self {
            Outcome::Tie {
                first,
                second,
                attack,
            } => format!("It's a tie! ({first} {attack} = {second} {attack})"),
            Outcome::Winner(winner) => format!("The Winner is: {}!", winner.name),
        }
    }

    pub fn winner(&self) -> Option<&Creature> {
        match self {
            Outcome::Winner(winner) => Some(winner),
            Outcome::Tie { .. } => None,
        }
    }
}

pub fn decide(matchup: &Matchup) -> Outcome {
    let (first, second) = (&matchup.first, &matchup.second);
    if first.attack == second.attack {
        return Outcome::Tie {
            first: first.name.clone(),
            second: second.name.clone(),
            attack: first.attack,
        };
    }

    let winner = if first.attack > second.attack {
        first
    } else {
        second
    };
    Outcome::Winner(winner.clone())
}

/// A same-type creature shown in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub name: String,
    pub sprite: String,
}

impl From<&Creature> for GalleryEntry {
    fn from(creature: &Creature) -> Self {
        Self {
            name: creature.name.clone(),
            sprite: creature.front_sprite.clone(),
        }
    }
}

/// Drop nameless entries and the winner itself, shuffle, keep `limit`
pub fn pick_gallery<R: Rng + ?Sized>(
    members: Vec<TypeMember>,
    winner_name: &str,
    rng: &mut R,
    limit: usize,
) -> Vec<TypeMember> {
    let mut candidates: Vec<TypeMember> = members
        .into_iter()
        .filter(|m| !m.name.is_empty() && m.name != winner_name)
        .collect();

    // Fisher-Yates
    candidates.shuffle(rng);
    candidates.truncate(limit);
    candidates
}

/// Fetch every pick in parallel, keeping only the ones that succeed
///
/// Output order follows `picks`.
pub async fn fetch_gallery<S>(source: Arc<S>, picks: Vec<TypeMember>) -> Vec<GalleryEntry>
where
    S: CreatureSource + ?Sized + 'static,
{
    let mut tasks = JoinSet::new();
    for (index, member) in picks.into_iter().enumerate() {
        let source = Arc::clone(&source);
        tasks.spawn(async move {
            let result = source.fetch_by_url(&member.url).await;
            (index, member, result)
        });
    }

    let mut fetched = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, _, Ok(creature))) => fetched.push((index, GalleryEntry::from(&creature))),
            Ok((_, member, Err(e))) => {
                debug!(name = %member.name, error = %e, "dropping gallery entry");
            }
            Err(e) => warn!(error = %e, "gallery task failed"),
        }
    }

    fetched.sort_by_key(|(index, _)| *index);
    fetched.into_iter().map(|(_, entry)| entry).collect()
}
