//! The Yearly Simulation Step
//!
//! The heart of the engine. One call to [`advance`] is one year of life,
//! executed as a fixed sequence of phases with the RNG cursor threaded
//! linearly through all of them. The phase order and the exact number of
//! draws each phase consumes are part of the save-compatibility contract:
//! reordering or skipping a draw changes every sequence after it.

use crate::core::rng::LifeRng;
use crate::game::catalog::{action_by_id, eligible_events, EventDef};
use crate::game::feed::FeedEntry;
use crate::game::state::{LifeState, Screen, CAUSE_HEALTH, CAUSE_OLD_AGE};
use crate::game::stats::{apply_effects, clamp_stat, Stats};

/// Advance a life by one year.
///
/// Refuses to run while an event is current or pending — the year cannot
/// turn in the middle of a decision. Phases, in order:
///
/// 1. Resolve queued actions (reward bundle then cost bundle each, one
///    consequence feed entry each, one spawn roll each — a successful
///    roll picks a bonus event from the pool eligible *after* that
///    action's effects).
/// 2. Apply yearly stat drift.
/// 3. Pick 1-2 age-based events from the drifted pool, no duplicates.
/// 4. Merge: action-spawned events surface before age-based ones.
/// 5. Apply passive income.
/// 6. Append the year marker to the feed.
/// 7. Check death (health 0 is drawless; 65+ rolls mortality and the
///    draw is consumed whether it kills or not).
/// 8. Surface the new events and reset the per-year action queue.
pub(crate) fn advance(state: LifeState) -> LifeState {
    if state.screen != Screen::Playing {
        return state;
    }
    if state.current_event.is_some() || !state.pending_events.is_empty() {
        return state;
    }

    let mut state = state;
    state.age += 1;
    let age = state.age;

    // 1. Queued actions, in queue order.
    let queued = std::mem::take(&mut state.pending_actions);
    let mut spawned: Vec<&'static EventDef> = Vec::new();
    for action_id in &queued {
        let Some(action) = action_by_id(action_id) else {
            continue;
        };
        let (stats, cash) = apply_effects(state.stats, state.cash, &action.positive);
        let (stats, cash) = apply_effects(stats, cash, &action.negative);
        state.stats = stats;
        state.cash = cash;
        state.feed.push(FeedEntry::consequence(
            age,
            action.label,
            &action.positive.summary(),
            &action.negative.summary(),
        ));

        let roll = state.rng.next_f64();
        if roll < action.event_chance {
            let pool = eligible_events(age, &state.stats);
            if !pool.is_empty() {
                let weights: Vec<f64> = pool.iter().map(|e| e.weight).collect();
                if let Some(index) = state.rng.weighted_index(&weights) {
                    spawned.push(pool[index]);
                }
            }
        }
    }

    // 2. Yearly drift.
    drift(&mut state.stats, age, &mut state.rng);

    // 3. Age-based events against the drifted stats.
    let picked = pick_events(&mut state.rng, age, &state.stats);

    // 4. Action-spawned events surface first.
    let mut incoming = spawned;
    incoming.extend(picked);

    // 5. Passive income.
    state.cash += passive_income(age);

    // 6. Year marker.
    state.feed.push(FeedEntry::year_marker(age));

    // 7. Death check.
    if let Some(cause) = check_death(&state.stats, age, &mut state.rng) {
        return state.die(cause);
    }

    // 8. Survived: surface events, reset the per-year queue.
    let mut ids = incoming.into_iter().map(|e| e.id.to_string());
    state.current_event = ids.next();
    state.pending_events = ids.collect();
    state.action_usage.clear();
    state
}

/// Yearly stat drift. Health decays past 40 and again past 60 (both in
/// the same year for elders), the soft stats wander by up to 2, and looks
/// fade past 50. Seven draws at most, four at least, always in this
/// order.
fn drift(stats: &mut Stats, age: u32, rng: &mut LifeRng) {
    if age > 40 {
        stats.health = clamp_stat(stats.health - rng.rand_int(1, 3));
    }
    if age > 60 {
        stats.health = clamp_stat(stats.health - rng.rand_int(1, 4));
    }
    stats.happiness = clamp_stat(stats.happiness + rng.rand_int(-2, 2));
    stats.smarts = clamp_stat(stats.smarts + rng.rand_int(-2, 2));
    stats.looks = clamp_stat(stats.looks + rng.rand_int(-2, 2));
    stats.karma = clamp_stat(stats.karma + rng.rand_int(-2, 2));
    if age > 50 {
        stats.looks = clamp_stat(stats.looks - rng.rand_int(0, 2));
    }
}

/// Pick 1-2 distinct events from the eligible pool.
///
/// An empty pool consumes no draws at all. Otherwise one draw decides the
/// count and each pick removes the chosen event from the pool, so a year
/// can never present the same age-based event twice.
fn pick_events(rng: &mut LifeRng, age: u32, stats: &Stats) -> Vec<&'static EventDef> {
    let mut pool = eligible_events(age, stats);
    if pool.is_empty() {
        return Vec::new();
    }
    let count = rng.rand_int(1, 2);
    let mut picked = Vec::new();
    for _ in 0..count {
        if pool.is_empty() {
            break;
        }
        let weights: Vec<f64> = pool.iter().map(|e| e.weight).collect();
        let Some(index) = rng.weighted_index(&weights) else {
            break;
        };
        picked.push(pool.remove(index));
    }
    picked
}

/// Passive yearly income by age band.
fn passive_income(age: u32) -> i64 {
    if (18..65).contains(&age) {
        20
    } else if age >= 65 {
        10
    } else {
        0
    }
}

/// Decide whether the year ends the life.
///
/// Health at 0 kills without touching the RNG. From 65 on, one draw is
/// taken against a mortality chance of `(age - 60) * 0.02` — and the
/// draw is taken even when the character survives, so the sequence after
/// a survived roll is identical across replays.
fn check_death(stats: &Stats, age: u32, rng: &mut LifeRng) -> Option<&'static str> {
    if stats.health <= 0 {
        return Some(CAUSE_HEALTH);
    }
    if age >= 65 {
        let roll = rng.next_f64();
        let chance = f64::from(age - 60) * 0.02;
        if roll < chance {
            return Some(CAUSE_OLD_AGE);
        }
    }
    None
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::feed::FeedKind;

    fn playing(age: u32, stats: Stats, rng_state: u32) -> LifeState {
        LifeState {
            screen: Screen::Playing,
            name: "Test".to_string(),
            age,
            stats,
            rng: LifeRng::from_state(rng_state),
            ..LifeState::default()
        }
    }

    fn flat(value: i32) -> Stats {
        Stats {
            health: value,
            happiness: value,
            smarts: value,
            looks: value,
            karma: value,
        }
    }

    #[test]
    fn test_first_year_pinned() {
        // Seed "alpha": start consumes 5 draws (cursor 92909923). Year 1
        // has an empty event pool, so the first age-up consumes exactly
        // the 4 soft-stat drift draws and nothing else — no event-count
        // draw, no mortality draw.
        let state = LifeState::start("Alex", "alpha").age_up();

        assert_eq!(state.age, 1);
        assert_eq!(state.rng.state(), 92909927);
        assert_eq!(state.stats.health, 79);
        assert_eq!(state.stats.happiness, 64);
        assert_eq!(state.stats.smarts, 48);
        assert_eq!(state.stats.looks, 50);
        assert_eq!(state.stats.karma, 67);
        assert_eq!(state.cash, 0);
        assert!(state.current_event.is_none());
        assert!(state.pending_events.is_empty());
        assert_eq!(state.feed.last().unwrap().text, "Year 1 begins.");
        assert_eq!(state.feed.last().unwrap().kind, FeedKind::Action);
    }

    #[test]
    fn test_refuses_to_run_mid_decision() {
        let mut state = playing(20, flat(50), 0);
        state.current_event = Some("any_stranger".to_string());
        let before = state.clone();
        assert_eq!(before, state.age_up());

        let mut state = playing(20, flat(50), 0);
        state.pending_events = vec!["any_stranger".to_string()];
        let before = state.clone();
        assert_eq!(before, state.age_up());
    }

    #[test]
    fn test_action_resolution_applies_both_bundles_in_order() {
        // "overtime": +60 cash, then -3 health / -4 happiness.
        let state = playing(25, flat(50), 0).queue_action("overtime");
        let state = state.age_up();

        // Drift moves soft stats by at most 2; health only moved by the
        // action cost (age 26 has no health drift).
        assert_eq!(state.stats.health, 47);
        // +60 action, +20 income
        assert_eq!(state.cash, 80);
        assert!(state.pending_actions.is_empty());
        assert!(state.action_usage.is_empty());

        let consequence = state
            .feed
            .iter()
            .find(|e| e.kind == FeedKind::Consequence)
            .unwrap();
        assert_eq!(
            consequence.text,
            "Work Overtime: cash +60 | health -3, happiness -4"
        );
    }

    #[test]
    fn test_unknown_queued_action_is_skipped() {
        let mut state = playing(25, flat(50), 0);
        state.pending_actions = vec!["gone_from_catalog".to_string()];
        let state = state.age_up();

        assert_eq!(state.age, 26);
        assert!(!state.feed.iter().any(|e| e.kind == FeedKind::Consequence));
    }

    #[test]
    fn test_action_spawned_event_surfaces_before_age_based() {
        // Pinned: cursor 7 at age 17 with "night_out" queued. The spawn
        // roll succeeds and picks adult_college; the age-based phase then
        // picks adult_volunteer and adult_college. Merge order puts the
        // spawned event in the current slot.
        let state = playing(17, flat(50), 7).queue_action("night_out");
        let state = state.age_up();

        assert_eq!(state.age, 18);
        assert_eq!(state.current_event.as_deref(), Some("adult_college"));
        assert_eq!(
            state.pending_events,
            vec!["adult_volunteer", "adult_college"]
        );
        assert_eq!(state.rng.state(), 16);
        assert_eq!(state.cash, 5); // -15 night out, +20 income
        assert_eq!(state.stats.health, 48);
        assert_eq!(state.stats.happiness, 56);
    }

    #[test]
    fn test_no_duplicate_age_based_events() {
        // Whatever the seed, one year never presents the same age-based
        // event twice.
        for seed in 0..300u32 {
            let state = playing(12, flat(50), seed).age_up();
            let mut ids: Vec<&str> = state
                .current_event
                .iter()
                .map(String::as_str)
                .chain(state.pending_events.iter().map(String::as_str))
                .collect();
            ids.sort_unstable();
            let len = ids.len();
            ids.dedup();
            assert_eq!(len, ids.len(), "duplicate events at seed {seed}");
        }
    }

    #[test]
    fn test_event_count_is_one_or_two() {
        for seed in 0..300u32 {
            let state = playing(12, flat(50), seed).age_up();
            let count =
                usize::from(state.current_event.is_some()) + state.pending_events.len();
            assert!((1..=2).contains(&count), "bad count {count} at seed {seed}");
        }
    }

    #[test]
    fn test_passive_income_bands() {
        assert_eq!(passive_income(17), 0);
        assert_eq!(passive_income(18), 20);
        assert_eq!(passive_income(64), 20);
        assert_eq!(passive_income(65), 10);
        assert_eq!(passive_income(90), 10);
    }

    #[test]
    fn test_health_death_consumes_no_draw() {
        let mut rng = LifeRng::from_state(42);
        let dead = Stats {
            health: 0,
            ..flat(50)
        };
        assert_eq!(check_death(&dead, 70, &mut rng), Some(CAUSE_HEALTH));
        assert_eq!(rng.state(), 42);
    }

    #[test]
    fn test_mortality_draw_happens_even_on_survival() {
        // Roll from cursor 0 is ~0.266, above the 10% chance at 65: the
        // character survives but the draw is still consumed.
        let mut rng = LifeRng::from_state(0);
        assert_eq!(check_death(&flat(50), 65, &mut rng), None);
        assert_eq!(rng.state(), 1);

        // Below 65 there is no draw at all.
        let mut rng = LifeRng::from_state(0);
        assert_eq!(check_death(&flat(50), 64, &mut rng), None);
        assert_eq!(rng.state(), 0);
    }

    #[test]
    fn test_old_age_death_pinned() {
        // Cursor 9, age 65 -> 66: after 7 drift draws and 3 event draws
        // the mortality roll is ~0.059, under the 0.12 chance at 66.
        let mut start = playing(65, flat(50), 9);
        start.stats.health = 80;
        let state = start.age_up();

        assert_eq!(state.screen, Screen::Death);
        assert_eq!(state.cause_of_death.as_deref(), Some(CAUSE_OLD_AGE));
        assert_eq!(state.rng.state(), 20);
        assert_eq!(state.cash, 10); // income still lands in the final year
        assert!(state.current_event.is_none());
        assert!(state.pending_events.is_empty());
        let last = state.feed.last().unwrap();
        assert_eq!(last.kind, FeedKind::Death);
        assert_eq!(last.text, "Passed away peacefully of old age.");
    }

    #[test]
    fn test_old_age_survival_still_advances_cursor() {
        // Cursor 0, same shape: the mortality roll is ~0.199, above 0.12,
        // and the cursor still lands past the consumed draw.
        let mut start = playing(65, flat(50), 0);
        start.stats.health = 80;
        let state = start.age_up();

        assert_eq!(state.screen, Screen::Playing);
        assert_eq!(state.age, 66);
        assert_eq!(state.rng.state(), 10);
        assert_eq!(state.current_event.as_deref(), Some("elder_legacy"));
        assert!(state.pending_events.is_empty());
        assert!(state.cause_of_death.is_none());
    }

    #[test]
    fn test_drift_only_touches_expected_stats_when_young() {
        for seed in 0..100u32 {
            let before = flat(50);
            let mut stats = before;
            let mut rng = LifeRng::from_state(seed);
            drift(&mut stats, 30, &mut rng);
            assert_eq!(stats.health, before.health);
            assert!((stats.happiness - before.happiness).abs() <= 2);
            assert!((stats.smarts - before.smarts).abs() <= 2);
            assert!((stats.looks - before.looks).abs() <= 2);
            assert!((stats.karma - before.karma).abs() <= 2);
            assert_eq!(rng.state(), seed + 4);
        }
    }

    #[test]
    fn test_drift_decays_elders_twice() {
        for seed in 0..100u32 {
            let before = flat(50);
            let mut stats = before;
            let mut rng = LifeRng::from_state(seed);
            drift(&mut stats, 70, &mut rng);
            // Two health decay draws: 1..=3 plus 1..=4.
            let lost = before.health - stats.health;
            assert!((2..=7).contains(&lost), "health lost {lost}");
            // Looks drift plus elder fade.
            assert!((stats.looks - before.looks) <= 2);
            assert!((before.looks - stats.looks) <= 4);
            assert_eq!(rng.state(), seed + 7);
        }
    }

    #[test]
    fn test_stats_never_leave_bounds() {
        // A battered 80-year-old with everything at the floor or ceiling.
        let mut state = playing(
            80,
            Stats {
                health: 100,
                happiness: 0,
                smarts: 100,
                looks: 0,
                karma: 100,
            },
            123,
        );
        for _ in 0..30 {
            if state.screen != Screen::Playing {
                break;
            }
            state = state.queue_action("meditate").age_up();
            for value in [
                state.stats.health,
                state.stats.happiness,
                state.stats.smarts,
                state.stats.looks,
                state.stats.karma,
            ] {
                assert!((0..=100).contains(&value));
            }
            state.current_event = None;
            state.pending_events.clear();
        }
    }
}
