//! Battle controller: owns the state and drives both flows
//!
//! Every flow takes `&mut self`, so a second flow cannot start while one is
//! still awaiting the network.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::api::client::CreatureSource;
use crate::battle::resolution::{decide, fetch_gallery, pick_gallery, Outcome};
use crate::battle::selection::{fetch_pair, pick_distinct_ids};
use crate::battle::state::BattleState;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::types::{Creature, Slot};
use crate::ui::state::{GameUI, SpriteFace};
use crate::ui::view::View;
use crate::ui::Surface;

/// Shown when either by-id lookup fails
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching creatures";

/// Labels the battle control cycles through before the result appears
pub const FIGHT_LABELS: [&str; 4] = ["calculating...", "fighting.", "fighting..", "fighting..."];

pub struct BattleGame<S: CreatureSource + ?Sized + 'static, V: Surface> {
    config: GameConfig,
    source: Arc<S>,
    surface: V,
    rng: ChaCha8Rng,
    state: BattleState,
    ui: GameUI,
}

impl<S: CreatureSource + ?Sized + 'static, V: Surface> BattleGame<S, V> {
    pub fn new(config: GameConfig, source: Arc<S>, surface: V) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let ui = GameUI::new(config.battle_label.clone());

        Ok(Self {
            config,
            source,
            surface,
            rng,
            state: BattleState::new(),
            ui,
        })
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn ui(&self) -> &GameUI {
        &self.ui
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn view(&self) -> View {
        View::project(&self.state, &self.ui)
    }

    pub fn render(&mut self) -> Result<()> {
        let view = self.view();
        self.surface.present(&view)
    }

    /// Selection flow
    ///
    /// Returns whether a new pair was loaded. A failed lookup leaves the
    /// previous pair in place and shows an error instead; only surface
    /// errors are returned as `Err`.
    pub async fn choose_new_pair(&mut self) -> Result<bool> {
        self.ui.clear_result();
        self.ui.battle_enabled = false;
        self.render()?;

        let ids = pick_distinct_ids(&mut self.rng, self.config.max_id)?;
        debug!(first = ids.0, second = ids.1, "picked identifiers");

        let loaded = match fetch_pair(self.source.as_ref(), ids).await {
            Ok(matchup) => {
                info!(first = %matchup.first.name, second = %matchup.second.name, "new matchup");
                self.state.replace(matchup);
                self.ui.reset_faces();
                self.ui.battle_enabled = self.state.is_ready();
                true
            }
            Err(e) => {
                warn!(error = %e, "selection failed");
                self.ui.result = FETCH_ERROR_MESSAGE.into();
                false
            }
        };

        self.render()?;
        Ok(loaded)
    }

    /// Resolution flow, including the cosmetic label sequence
    ///
    /// No-op unless a pair is loaded and the battle control is enabled.
    pub async fn battle(&mut self) -> Result<Option<Outcome>> {
        if !self.state.is_ready() || !self.ui.battle_enabled {
            debug!("battle ignored, control disabled");
            return Ok(None);
        }

        self.ui.battle_enabled = false;
        for label in FIGHT_LABELS {
            self.ui.battle_label = label.into();
            self.render()?;
            tokio::time::sleep(self.config.animation_step).await;
        }

        self.ui.battle_label = self.config.battle_label.clone();
        self.ui.battle_enabled = true;
        self.render()?;

        self.announce_winner().await
    }

    /// Compare attack, show the result, then fill the gallery on a win
    pub async fn announce_winner(&mut self) -> Result<Option<Outcome>> {
        let Some(matchup) = self.state.matchup() else {
            return Ok(None);
        };

        let outcome = decide(matchup);
        info!(result = %outcome.message(), "battle resolved");

        self.ui.result = outcome.message();
        if let Some(winner) = outcome.winner() {
            self.ui.winner_head = format!("{}!", winner.name);
            self.ui.winner_type = format!("Type: {}", winner.type_name);
        }
        self.render()?;

        if let Some(winner) = outcome.winner() {
            self.load_same_type(winner).await?;
        }
        Ok(Some(outcome))
    }

    /// Best-effort gallery of creatures sharing the winner's type
    ///
    /// Returns how many entries made it into the gallery.
    pub async fn load_same_type(&mut self, winner: &Creature) -> Result<usize> {
        let members = match self.source.fetch_by_type(&winner.type_name).await {
            Ok(members) => members,
            Err(e) => {
                debug!(type_name = %winner.type_name, error = %e, "type lookup failed");
                Vec::new()
            }
        };

        let picks = pick_gallery(members, &winner.name, &mut self.rng, self.config.gallery_size);
        let entries = fetch_gallery(Arc::clone(&self.source), picks).await;
        let count = entries.len();

        self.ui.gallery = entries;
        self.ui.gallery_visible = count > 0;
        self.render()?;
        Ok(count)
    }

    /// Pointer entered (`true`) or left (`false`) a slot's sprite
    ///
    /// Entering shows the back sprite if there is one; leaving shows the
    /// front sprite if there is one. Otherwise the sprite stays as is.
    pub fn hover(&mut self, slot: Slot, entered: bool) -> Result<()> {
        let Some(creature) = self.state.creature(slot) else {
            return Ok(());
        };

        if entered && !creature.back_sprite.is_empty() {
            self.ui.set_face(slot, SpriteFace::Back);
        } else if !entered && !creature.front_sprite.is_empty() {
            self.ui.set_face(slot, SpriteFace::Front);
        }
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockSource;
    use crate::ui::recording::RecordingSurface;

    fn creature(id: u32, name: &str, back: &str) -> Creature {
        Creature {
            id,
            name: name.into(),
            front_sprite: format!("front/{name}.png"),
            back_sprite: back.into(),
            hp: 40,
            attack: 40,
            type_name: "normal".into(),
        }
    }

    fn game_with_pair() -> BattleGame<MockSource, RecordingSurface> {
        let config = GameConfig {
            max_id: 2,
            ..GameConfig::instant(1)
        };
        let source = MockSource::new()
            .with_creature(creature(1, "rattata", "back/rattata.png"))
            .with_creature(creature(2, "pidgey", ""));
        BattleGame::new(config, Arc::new(source), RecordingSurface::new()).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            max_id: 1,
            ..GameConfig::instant(1)
        };
        let result = BattleGame::new(config, Arc::new(MockSource::new()), RecordingSurface::new());
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_hover_swaps_only_when_sprite_exists() {
        let mut game = game_with_pair();
        assert!(game.choose_new_pair().await.unwrap());

        let rattata_slot = if game.state().creature(Slot::First).unwrap().name == "rattata" {
            Slot::First
        } else {
            Slot::Second
        };
        let pidgey_slot = if rattata_slot == Slot::First {
            Slot::Second
        } else {
            Slot::First
        };

        game.hover(rattata_slot, true).unwrap();
        assert_eq!(game.view().slot(rattata_slot).sprite, "back/rattata.png");
        game.hover(rattata_slot, false).unwrap();
        assert_eq!(game.view().slot(rattata_slot).sprite, "front/rattata.png");

        game.hover(pidgey_slot, true).unwrap();
        assert_eq!(game.view().slot(pidgey_slot).sprite, "front/pidgey.png");
    }

    #[tokio::test]
    async fn test_hover_without_pair_is_noop() {
        let mut game = game_with_pair();
        game.hover(Slot::First, true).unwrap();
        assert!(game.surface().frames().is_empty());
    }

    #[tokio::test]
    async fn test_battle_before_selection_is_noop() {
        let mut game = game_with_pair();
        assert_eq!(game.battle().await.unwrap(), None);
        assert!(game.surface().frames().is_empty());
    }
}
