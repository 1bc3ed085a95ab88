//! Pokeclash - Entry Point
//!
//! Sets up logging and a single-threaded async runtime, loads a first pair,
//! then reads one command per line until `quit`.

use pokeclash::api::PokeApiClient;
use pokeclash::battle::BattleGame;
use pokeclash::core::{GameConfig, Result, Slot};
use pokeclash::ui::TerminalSurface;

use std::io;
use std::sync::Arc;

fn main() -> Result<()> {
    // Logs go to stderr so they stay out of the drawn screen
    tracing_subscriber::fmt()
        .with_env_filter("pokeclash=info")
        .with_writer(io::stderr)
        .init();

    tracing::info!("Pokeclash starting...");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let config = GameConfig::default();
    let source = Arc::new(PokeApiClient::new(config.clone()));
    let mut game = BattleGame::new(config, source, TerminalSurface::stdout())?;

    rt.block_on(game.choose_new_pair())?;

    loop {
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "" => game.render()?,
            "q" | "quit" => break,
            "n" | "new" => {
                rt.block_on(game.choose_new_pair())?;
            }
            "b" | "battle" => {
                rt.block_on(game.battle())?;
            }
            cmd => match parse_hover(cmd) {
                Some((slot, entered)) => game.hover(slot, entered)?,
                None => game.render()?,
            },
        }
    }

    Ok(())
}

/// `h1`/`h2` enter a sprite, `l1`/`l2` leave it
fn parse_hover(cmd: &str) -> Option<(Slot, bool)> {
    let mut chars = cmd.chars();
    let entered = match chars.next()? {
        'h' => true,
        'l' => false,
        _ => return None,
    };
    let digit = chars.as_str().parse::<u8>().ok()?;
    Slot::from_number(digit).map(|slot| (slot, entered))
}
