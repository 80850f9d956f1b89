//! Demo household loaded at startup when the config asks for it.
//!
//! Ids are freshly generated on every call, so two seeded backends never
//! share identifiers.

use chrono::{TimeZone, Utc};

use shared::{ActorMode, Child, Chore, ChoreFrequency, Reward};

use crate::storage::HouseholdState;

fn child(name: &str, xp: u32) -> Child {
    Child {
        id: Child::generate_id(),
        name: name.to_string(),
        xp,
    }
}

fn chore(title: &str, description: Option<&str>, xp: u32, child: &Child, frequency: ChoreFrequency, is_completed: bool) -> Chore {
    Chore {
        id: Chore::generate_id(),
        title: title.to_string(),
        description: description.map(str::to_string),
        xp,
        child_id: child.id.clone(),
        is_completed,
        frequency,
        frequency_days: None,
    }
}

fn reward(name: &str, icon: &str, cost: u32) -> Reward {
    Reward {
        id: Reward::generate_id(),
        name: name.to_string(),
        icon: Some(icon.to_string()),
        cost,
        claimed_by: None,
        claimed_on: None,
    }
}

/// Three children with a few chores and rewards, one reward already claimed
pub fn demo_household() -> HouseholdState {
    let emma = child("Emma", 120);
    let noah = child("Noah", 85);
    let olivia = child("Olivia", 200);

    let chores = vec![
        chore("Make bed", Some("Straighten sheets and arrange pillows"), 10, &emma, ChoreFrequency::Daily, false),
        chore("Take out trash", Some("Empty all trash cans and take to curb"), 15, &noah, ChoreFrequency::Weekly, true),
        chore("Feed pet", None, 5, &olivia, ChoreFrequency::Daily, false),
        chore("Clean room", Some("Vacuum, dust, and organize"), 25, &emma, ChoreFrequency::Weekly, false),
    ];

    let mut movie_night = reward("Movie night", "🎬", 100);
    movie_night.claimed_by = Some(olivia.id.clone());
    movie_night.claimed_on = Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).single();

    let rewards = vec![
        reward("Extra screen time", "📱", 50),
        reward("Special treat", "🍦", 30),
        movie_night,
    ];

    HouseholdState {
        children: vec![emma, noah, olivia],
        chores,
        rewards,
        actor: ActorMode::Parent,
    }
}
