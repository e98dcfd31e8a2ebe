//! Life Event Catalog
//!
//! Age-banded catalog of everything that can happen to a character.
//! Order matters: the eligibility filter preserves catalog order, and the
//! weighted pick walks it front to back, so reordering entries changes
//! every seeded run.

use super::{ChoiceDef, EventConditions, EventDef, PartialStats};
use crate::game::stats::EffectBundle;

const NONE: EffectBundle = EffectBundle::NONE;

/// The complete life event catalog.
pub static EVENTS: &[EventDef] = &[
    // ──────────── CHILDHOOD (0-12) ────────────
    EventDef {
        id: "child_pet",
        title: "Stray Puppy",
        description: "A scruffy puppy follows you home from school. Your parents look unsure.",
        min_age: 4,
        max_age: 12,
        weight: 3.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Beg to keep it",
                effects: NONE.with_happiness(10).with_karma(5),
                follow_up: None,
            },
            ChoiceDef {
                label: "Let it go",
                effects: NONE.with_karma(8).with_happiness(-3),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "child_bully",
        title: "Playground Trouble",
        description: "An older kid shoves you during recess and demands your lunch money.",
        min_age: 5,
        max_age: 12,
        weight: 3.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Stand your ground",
                effects: NONE.with_karma(5).with_health(-5).with_happiness(5),
                follow_up: None,
            },
            ChoiceDef {
                label: "Hand it over",
                effects: NONE.with_happiness(-8).with_cash(-2),
                follow_up: None,
            },
            ChoiceDef {
                label: "Tell a teacher",
                effects: NONE.with_smarts(3).with_karma(3),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "child_talent",
        title: "Hidden Talent",
        description: "Your teacher notices you have a knack for music and suggests lessons.",
        min_age: 6,
        max_age: 12,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Take lessons",
                effects: NONE.with_smarts(8).with_happiness(5).with_cash(-10),
                follow_up: None,
            },
            ChoiceDef {
                label: "Not interested",
                effects: NONE.with_happiness(-2),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "child_library",
        title: "Library Discovery",
        description: "You stumble across a fascinating book about space exploration.",
        min_age: 5,
        max_age: 12,
        weight: 3.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Read it cover to cover",
                effects: NONE.with_smarts(10).with_happiness(4),
                follow_up: None,
            },
            ChoiceDef {
                label: "Look at the pictures",
                effects: NONE.with_happiness(3).with_smarts(2),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "child_fall",
        title: "Tree Climbing",
        description: "You find the tallest tree in the park. The top branch looks amazing.",
        min_age: 4,
        max_age: 11,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Climb to the top!",
                effects: NONE.with_health(-8).with_happiness(12).with_looks(-2),
                follow_up: None,
            },
            ChoiceDef {
                label: "Stay on the ground",
                effects: NONE.with_happiness(-3),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "child_friend",
        title: "New Kid in Class",
        description: "A new student joins your class and sits alone at lunch.",
        min_age: 5,
        max_age: 12,
        weight: 3.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Invite them over",
                effects: NONE.with_happiness(8).with_karma(6),
                follow_up: None,
            },
            ChoiceDef {
                label: "Mind your business",
                effects: NONE.with_karma(-3),
                follow_up: None,
            },
        ],
    },
    // ──────────── TEEN (13-17) ────────────
    EventDef {
        id: "teen_party",
        title: "House Party",
        description: "Your classmate is throwing a party while their parents are away.",
        min_age: 13,
        max_age: 17,
        weight: 3.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Go and have fun",
                effects: NONE.with_happiness(12).with_health(-5).with_karma(-3),
                follow_up: None,
            },
            ChoiceDef {
                label: "Stay home and study",
                effects: NONE.with_smarts(8).with_happiness(-3),
                follow_up: None,
            },
            ChoiceDef {
                label: "Go but leave early",
                effects: NONE.with_happiness(4).with_smarts(2),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "teen_exam",
        title: "Big Exam",
        description: "A crucial exam is tomorrow. You barely studied but a friend offers you a cheat sheet.",
        min_age: 14,
        max_age: 17,
        weight: 3.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Use the cheat sheet",
                effects: NONE.with_smarts(-5).with_karma(-10).with_happiness(3),
                follow_up: None,
            },
            ChoiceDef {
                label: "Study all night",
                effects: NONE.with_smarts(10).with_health(-3).with_happiness(-2),
                follow_up: None,
            },
            ChoiceDef {
                label: "Wing it",
                effects: NONE.with_smarts(-3).with_happiness(-5),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "teen_crush",
        title: "First Crush",
        description: "Someone in your class has caught your eye. Your heart races every time they walk by.",
        min_age: 13,
        max_age: 17,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Ask them out",
                effects: NONE.with_happiness(15).with_looks(3),
                follow_up: None,
            },
            ChoiceDef {
                label: "Admire from afar",
                effects: NONE.with_happiness(-4),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "teen_job",
        title: "Part-time Job Offer",
        description: "The local café is hiring after school and weekends.",
        min_age: 14,
        max_age: 17,
        weight: 3.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Take the job",
                effects: NONE.with_cash(50).with_happiness(-3).with_smarts(2),
                follow_up: None,
            },
            ChoiceDef {
                label: "Focus on school",
                effects: NONE.with_smarts(5),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "teen_sport",
        title: "Sports Try-outs",
        description: "The varsity team is holding open try-outs. The coach looks tough.",
        min_age: 13,
        max_age: 17,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Try out",
                effects: NONE.with_health(8).with_looks(4).with_happiness(5),
                follow_up: None,
            },
            ChoiceDef {
                label: "Not your thing",
                effects: NONE.with_happiness(-2),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "teen_rebel",
        title: "Rebellious Phase",
        description: "You feel restless. A group of older kids invites you to tag along for some \"fun.\"",
        min_age: 14,
        max_age: 17,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Join them",
                effects: NONE.with_happiness(8).with_karma(-12).with_health(-5),
                follow_up: None,
            },
            ChoiceDef {
                label: "Decline politely",
                effects: NONE.with_karma(5).with_happiness(-2),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "teen_scholarship",
        title: "Scholarship Offer",
        description: "Your grades caught the eye of a scholarship committee. An interview is offered.",
        min_age: 15,
        max_age: 17,
        weight: 2.0,
        conditions: EventConditions {
            min: PartialStats {
                health: None,
                happiness: None,
                smarts: Some(70),
                looks: None,
                karma: None,
            },
            max: PartialStats::NONE,
        },
        choices: &[
            ChoiceDef {
                label: "Take the interview",
                effects: NONE.with_smarts(5).with_cash(120).with_happiness(4),
                follow_up: None,
            },
            ChoiceDef {
                label: "Let it pass",
                effects: NONE.with_happiness(-2),
                follow_up: None,
            },
        ],
    },
    // ──────────── ADULT (18-59) ────────────
    EventDef {
        id: "adult_college",
        title: "College Decision",
        description: "You received a college acceptance letter. Tuition is steep though.",
        min_age: 18,
        max_age: 22,
        weight: 4.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Enroll (take loans)",
                effects: NONE.with_smarts(15).with_cash(-200).with_happiness(5),
                follow_up: None,
            },
            ChoiceDef {
                label: "Skip college, start working",
                effects: NONE.with_cash(100).with_smarts(-3),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "adult_promotion",
        title: "Promotion Opportunity",
        description: "Your boss hints a promotion is available, but it means longer hours.",
        min_age: 22,
        max_age: 55,
        weight: 3.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Go for it",
                effects: NONE.with_cash(150).with_health(-5).with_happiness(-3),
                follow_up: None,
            },
            ChoiceDef {
                label: "Maintain work-life balance",
                effects: NONE.with_happiness(8).with_health(3),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "adult_lottery",
        title: "Found a Lottery Ticket",
        description: "You find a discarded lottery ticket on the ground. It has today's date on it.",
        min_age: 18,
        max_age: 70,
        weight: 1.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Check the numbers",
                effects: NONE.with_cash(500).with_happiness(15),
                follow_up: None,
            },
            ChoiceDef {
                label: "Toss it",
                effects: NONE,
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "adult_invest",
        title: "Investment Tip",
        description: "A coworker whispers about a \"sure thing\" investment opportunity.",
        min_age: 22,
        max_age: 59,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Invest heavily",
                effects: NONE.with_cash(-100).with_smarts(3),
                follow_up: None,
            },
            ChoiceDef {
                label: "Play it safe",
                effects: NONE.with_karma(3).with_happiness(2),
                follow_up: None,
            },
            ChoiceDef {
                label: "Report to management",
                effects: NONE.with_karma(8).with_happiness(-2),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "adult_health_scare",
        title: "Health Scare",
        description: "A routine checkup reveals something concerning. The doctor wants more tests.",
        min_age: 30,
        max_age: 59,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Get tested immediately",
                effects: NONE.with_health(5).with_cash(-80).with_happiness(-5),
                follow_up: None,
            },
            ChoiceDef {
                label: "Ignore it for now",
                effects: NONE.with_health(-15).with_happiness(3),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "adult_volunteer",
        title: "Volunteer Opportunity",
        description: "A local shelter is desperately seeking weekend volunteers.",
        min_age: 18,
        max_age: 59,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Sign up",
                effects: NONE.with_karma(12).with_happiness(8).with_health(2),
                follow_up: None,
            },
            ChoiceDef {
                label: "Too busy right now",
                effects: NONE.with_karma(-3),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "adult_interview",
        title: "Dream Job Interview",
        description: "A recruiter calls about an opening at the company you always hoped to join.",
        min_age: 22,
        max_age: 50,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Give it everything",
                effects: NONE.with_smarts(2).with_happiness(2),
                follow_up: Some("adult_new_role"),
            },
            ChoiceDef {
                label: "Not the right time",
                effects: NONE.with_happiness(-2),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "adult_new_role",
        title: "The New Role",
        description: "The offer letter lands in your inbox. The salary is good, the hours are long.",
        min_age: 22,
        max_age: 50,
        weight: 1.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Sign immediately",
                effects: NONE.with_cash(180).with_health(-3).with_happiness(6),
                follow_up: None,
            },
            ChoiceDef {
                label: "Negotiate harder",
                effects: NONE.with_cash(250).with_happiness(3).with_karma(-2),
                follow_up: None,
            },
            ChoiceDef {
                label: "Turn it down",
                effects: NONE.with_happiness(-4).with_karma(2),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "adult_burnout",
        title: "Running on Empty",
        description: "Deadlines blur together and the alarm clock feels crueler every morning.",
        min_age: 25,
        max_age: 55,
        weight: 2.0,
        conditions: EventConditions {
            min: PartialStats::NONE,
            max: PartialStats {
                health: None,
                happiness: Some(30),
                smarts: None,
                looks: None,
                karma: None,
            },
        },
        choices: &[
            ChoiceDef {
                label: "Take a sabbatical",
                effects: NONE.with_happiness(12).with_cash(-100).with_health(4),
                follow_up: None,
            },
            ChoiceDef {
                label: "Push through",
                effects: NONE.with_happiness(-5).with_health(-6).with_cash(80),
                follow_up: None,
            },
        ],
    },
    // ──────────── ELDER (60+) ────────────
    EventDef {
        id: "elder_legacy",
        title: "Writing Memoirs",
        description: "A publisher approaches you about writing your life story.",
        min_age: 60,
        max_age: 100,
        weight: 3.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Write the book",
                effects: NONE.with_happiness(15).with_smarts(5).with_cash(200),
                follow_up: None,
            },
            ChoiceDef {
                label: "Some things are private",
                effects: NONE.with_karma(5).with_happiness(3),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "elder_grandchild",
        title: "A New Generation",
        description: "A young family member looks up to you and wants to hear your stories.",
        min_age: 60,
        max_age: 100,
        weight: 3.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Share your wisdom",
                effects: NONE.with_happiness(12).with_karma(8),
                follow_up: None,
            },
            ChoiceDef {
                label: "Give them money instead",
                effects: NONE.with_cash(-50).with_happiness(5).with_karma(3),
                follow_up: None,
            },
        ],
    },
    // ──────────── ANY AGE ────────────
    EventDef {
        id: "any_travel",
        title: "Travel Opportunity",
        description: "You have a chance to travel somewhere new and exciting.",
        min_age: 18,
        max_age: 75,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Book the trip!",
                effects: NONE.with_happiness(15).with_cash(-120).with_looks(2),
                follow_up: None,
            },
            ChoiceDef {
                label: "Save the money",
                effects: NONE.with_cash(30).with_happiness(-3),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "any_charity",
        title: "Charity Drive",
        description: "A local charity is raising funds for a good cause.",
        min_age: 10,
        max_age: 80,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Donate generously",
                effects: NONE.with_cash(-60).with_karma(15).with_happiness(8),
                follow_up: None,
            },
            ChoiceDef {
                label: "Donate a little",
                effects: NONE.with_cash(-10).with_karma(5).with_happiness(3),
                follow_up: None,
            },
            ChoiceDef {
                label: "Walk past",
                effects: NONE.with_karma(-5),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "any_accident",
        title: "Minor Accident",
        description: "You slip on a wet floor and take a nasty fall.",
        min_age: 5,
        max_age: 90,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Go to the hospital",
                effects: NONE.with_health(5).with_cash(-40).with_happiness(-3),
                follow_up: None,
            },
            ChoiceDef {
                label: "Walk it off",
                effects: NONE.with_health(-10).with_happiness(-2),
                follow_up: None,
            },
        ],
    },
    EventDef {
        id: "any_stranger",
        title: "Stranger's Kindness",
        description: "A stranger notices you looking down and offers some encouraging words.",
        min_age: 8,
        max_age: 90,
        weight: 2.0,
        conditions: EventConditions::NONE,
        choices: &[
            ChoiceDef {
                label: "Thank them warmly",
                effects: NONE.with_happiness(8).with_karma(5),
                follow_up: None,
            },
            ChoiceDef {
                label: "Nod and move on",
                effects: NONE.with_happiness(2),
                follow_up: None,
            },
        ],
    },
];
