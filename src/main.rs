//! Lifetide Demo Driver
//!
//! Plays one seeded life from birth to death, narrating the feed, then
//! replays the identical transition sequence and verifies the final
//! snapshot fingerprints match.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lifetide::{LifeState, Screen, VERSION};

/// Upper bound on simulated years; the mortality curve ends every life
/// well before this.
const MAX_YEARS: u32 = 150;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Lifetide Engine v{}", VERSION);

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "Alex".to_string());
    let seed = args.next().unwrap_or_else(|| "alpha".to_string());

    demo_life(&name, &seed);
    Ok(())
}

/// Play one life to its end, deterministically: queue a study and a gym
/// session every year and always take the first choice of every event.
fn play_life(name: &str, seed: &str) -> LifeState {
    let mut state = LifeState::start(name, seed);
    for _ in 0..MAX_YEARS {
        if state.screen != Screen::Playing {
            break;
        }
        while state.current_event.is_some() {
            state = state.resolve_choice(0);
        }
        if state.screen != Screen::Playing {
            break;
        }
        state = state.queue_action("study").queue_action("gym").age_up();
    }
    state
}

/// Demo function to run and verify one life.
fn demo_life(name: &str, seed: &str) {
    info!("=== Starting Demo Life ===");
    info!("Name: {name}");
    info!("Seed: {seed}");

    let state = play_life(name, seed);

    info!("=== Feed ===");
    for entry in &state.feed {
        info!("[Age {:>3}] {}", entry.year, entry.text);
    }

    info!("=== Final Snapshot ===");
    info!(
        "Died at {} — {}",
        state.age,
        state.cause_of_death.as_deref().unwrap_or("still alive")
    );
    info!(
        "Stats: health {}, happiness {}, smarts {}, looks {}, karma {}",
        state.stats.health,
        state.stats.happiness,
        state.stats.smarts,
        state.stats.looks,
        state.stats.karma
    );
    info!("Cash: {}", state.cash);
    info!("Feed entries: {}", state.feed.len());

    let fingerprint = state.fingerprint();
    info!("Final Fingerprint: {}", hex::encode(fingerprint));

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let replay = play_life(name, seed);
    let replay_fingerprint = replay.fingerprint();
    info!("Replay Fingerprint: {}", hex::encode(replay_fingerprint));

    if fingerprint == replay_fingerprint {
        info!("DETERMINISM VERIFIED: Fingerprints match!");
    } else {
        info!("DETERMINISM FAILURE: Fingerprints differ!");
    }
}
