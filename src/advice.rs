//! Advisor Prompt Builder
//!
//! Serializes a life snapshot into a natural-language briefing for an
//! external assistant. Pure formatting over a read-only snapshot and the
//! action catalog — no network, no engine dependency back in. To wire a
//! real assistant, wrap this in an async caller that ships the prompt to
//! an API and returns the reply.

use std::fmt::Write as _;

use crate::game::catalog::{action_by_id, ACTIONS};
use crate::game::state::LifeState;

/// How many recent feed entries the briefing quotes.
const RECENT_FEED_ENTRIES: usize = 5;

/// Build the advisor briefing for the current snapshot.
pub fn build_advice_prompt(state: &LifeState) -> String {
    let age_group = match state.age {
        0..=12 => "child",
        13..=17 => "teenager",
        18..=64 => "adult",
        _ => "elder",
    };

    let mut recent = String::new();
    let skip = state.feed.len().saturating_sub(RECENT_FEED_ENTRIES);
    for entry in state.feed.iter().skip(skip) {
        let _ = writeln!(recent, "  - [Age {}] {}", entry.year, entry.text);
    }
    if recent.is_empty() {
        recent.push_str("  (no events yet)\n");
    }

    let mut queued = String::new();
    for id in &state.pending_actions {
        match action_by_id(id) {
            Some(action) => {
                let _ = writeln!(queued, "  - {}", action.label);
            }
            None => {
                let _ = writeln!(queued, "  - {id}");
            }
        }
    }
    if queued.is_empty() {
        queued.push_str("  (none)\n");
    }

    let stats = &state.stats;
    let stat_lines = format!(
        "  Health:    {}/100{}\n  Happiness: {}/100{}\n  Smarts:    {}/100\n  Looks:     {}/100\n  Karma:     {}/100\n  Cash:      ${}{}\n",
        stats.health,
        if stats.health < 30 { " [CRITICAL]" } else { "" },
        stats.happiness,
        if stats.happiness < 20 { " [LOW]" } else { "" },
        stats.smarts,
        stats.looks,
        stats.karma,
        state.cash,
        if state.cash < 0 { " [IN DEBT]" } else { "" },
    );

    let mut available = String::new();
    for action in ACTIONS {
        let _ = writeln!(
            available,
            "  - {} (max {}/year)",
            action.label, action.max_uses_per_year
        );
    }

    format!(
        "You are a life advisor in a simulation game. The player needs advice on their next decisions.\n\n\
        PLAYER PROFILE:\n  Name: {}\n  Age: {} ({})\n\n\
        CURRENT STATS:\n{}\n\
        RECENT LIFE EVENTS:\n{}\n\
        QUEUED DECISIONS FOR THIS YEAR:\n{}\n\
        AVAILABLE ACTIONS:\n{}\n\
        Based on the player's current situation, provide concise advice on:\n\
        1. Which stats need the most attention?\n\
        2. What actions should they prioritize this year?\n\
        3. Any risks or opportunities to watch for at their current age?\n\n\
        Keep your response brief and actionable (3-5 bullet points).",
        state.name, state.age, age_group, stat_lines, recent, queued, available
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::feed::FeedEntry;

    #[test]
    fn test_prompt_contains_profile_and_actions() {
        let state = LifeState::start("Alex", "alpha");
        let prompt = build_advice_prompt(&state);

        assert!(prompt.contains("Name: Alex"));
        assert!(prompt.contains("Age: 0 (child)"));
        assert!(prompt.contains("Doctor Checkup (max 1/year)"));
        assert!(prompt.contains("was born into the world!"));
        assert!(prompt.contains("(none)"));
    }

    #[test]
    fn test_threshold_warnings() {
        let mut state = LifeState::start("Alex", "alpha");
        state.stats.health = 10;
        state.stats.happiness = 5;
        state.cash = -40;

        let prompt = build_advice_prompt(&state);
        assert!(prompt.contains("Health:    10/100 [CRITICAL]"));
        assert!(prompt.contains("Happiness: 5/100 [LOW]"));
        assert!(prompt.contains("$-40 [IN DEBT]"));
    }

    #[test]
    fn test_no_warnings_when_healthy() {
        let state = LifeState::start("Alex", "alpha");
        let prompt = build_advice_prompt(&state);
        assert!(!prompt.contains("[CRITICAL]"));
        assert!(!prompt.contains("[LOW]"));
        assert!(!prompt.contains("[IN DEBT]"));
    }

    #[test]
    fn test_quotes_last_five_feed_entries() {
        let mut state = LifeState::start("Alex", "alpha");
        for year in 1..=8 {
            state.feed.push(FeedEntry::year_marker(year));
        }

        let prompt = build_advice_prompt(&state);
        assert!(!prompt.contains("Year 3 begins."));
        assert!(prompt.contains("Year 4 begins."));
        assert!(prompt.contains("Year 8 begins."));
    }

    #[test]
    fn test_queued_actions_by_label_with_id_fallback() {
        let mut state = LifeState::start("Alex", "alpha").queue_action("gym");
        state.pending_actions.push("gone_from_catalog".to_string());

        let prompt = build_advice_prompt(&state);
        assert!(prompt.contains("  - Hit the Gym"));
        assert!(prompt.contains("  - gone_from_catalog"));
    }

    #[test]
    fn test_age_groups() {
        let mut state = LifeState::start("Alex", "alpha");
        state.age = 15;
        assert!(build_advice_prompt(&state).contains("(teenager)"));
        state.age = 40;
        assert!(build_advice_prompt(&state).contains("(adult)"));
        state.age = 70;
        assert!(build_advice_prompt(&state).contains("(elder)"));
    }
}
