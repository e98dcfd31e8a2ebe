//! Yearly Action Catalog
//!
//! Actions the player may queue before ageing up. Each carries a reward
//! bundle and a cost bundle (split for display, applied back to back), a
//! chance to spawn a bonus event, and a yearly usage cap.

use super::ActionDef;
use crate::game::stats::EffectBundle;

const NONE: EffectBundle = EffectBundle::NONE;

/// The complete yearly action catalog.
pub static ACTIONS: &[ActionDef] = &[
    ActionDef {
        id: "study",
        label: "Hit the Books",
        positive: NONE.with_smarts(6),
        negative: NONE.with_happiness(-2),
        event_chance: 0.15,
        max_uses_per_year: 2,
    },
    ActionDef {
        id: "gym",
        label: "Hit the Gym",
        positive: NONE.with_health(5).with_looks(2),
        negative: NONE.with_cash(-10),
        event_chance: 0.10,
        max_uses_per_year: 3,
    },
    ActionDef {
        id: "night_out",
        label: "Night Out",
        positive: NONE.with_happiness(8),
        negative: NONE.with_cash(-15).with_health(-2),
        event_chance: 0.25,
        max_uses_per_year: 2,
    },
    ActionDef {
        id: "overtime",
        label: "Work Overtime",
        positive: NONE.with_cash(60),
        negative: NONE.with_health(-3).with_happiness(-4),
        event_chance: 0.10,
        max_uses_per_year: 2,
    },
    ActionDef {
        id: "meditate",
        label: "Meditate",
        positive: NONE.with_happiness(4).with_health(1),
        negative: NONE,
        event_chance: 0.05,
        max_uses_per_year: 4,
    },
    ActionDef {
        id: "volunteer",
        label: "Volunteer Locally",
        positive: NONE.with_karma(8).with_happiness(3),
        negative: NONE.with_cash(-5),
        event_chance: 0.20,
        max_uses_per_year: 2,
    },
    ActionDef {
        id: "salon",
        label: "Salon Visit",
        positive: NONE.with_looks(6),
        negative: NONE.with_cash(-25),
        event_chance: 0.10,
        max_uses_per_year: 2,
    },
    ActionDef {
        id: "checkup",
        label: "Doctor Checkup",
        positive: NONE.with_health(6),
        negative: NONE.with_cash(-40).with_happiness(-1),
        event_chance: 0.05,
        max_uses_per_year: 1,
    },
];
