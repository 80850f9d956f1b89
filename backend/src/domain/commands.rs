//! Domain-level command and query types
//! These structs are the inputs and outputs of the domain services. UI
//! collaborators build commands, call a service, and get owned records back
//! in the result types.

pub mod child {
    use shared::{Child, Chore};

    /// Input for adding a child. New children start at 0 XP.
    #[derive(Debug, Clone)]
    pub struct CreateChildCommand {
        pub name: String,
    }

    /// Partial update; XP is not editable here, only through chores and rewards.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateChildCommand {
        pub child_id: String,
        pub name: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct GetChildCommand {
        pub child_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteChildCommand {
        pub child_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct CreateChildResult {
        pub child: Child,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateChildResult {
        pub child: Child,
    }

    #[derive(Debug, Clone)]
    pub struct GetChildResult {
        pub child: Option<Child>,
    }

    #[derive(Debug, Clone)]
    pub struct ListChildrenResult {
        pub children: Vec<Child>,
    }

    /// Result of a cascading delete.
    #[derive(Debug, Clone)]
    pub struct DeleteChildResult {
        pub child: Child,
        pub removed_chores: Vec<Chore>,
        /// True when the deleted child was active and the mode fell back to parent
        pub actor_reset: bool,
        pub success_message: String,
    }
}

pub mod chore {
    use shared::{Child, Chore, ChoreFrequency};

    /// Input for adding a chore. New chores start incomplete.
    #[derive(Debug, Clone)]
    pub struct CreateChoreCommand {
        pub title: String,
        pub description: Option<String>,
        pub xp: u32,
        pub child_id: String,
        pub frequency: ChoreFrequency,
        pub frequency_days: Option<u32>,
    }

    /// Partial update. A blank `description` clears it. Switching the
    /// frequency away from weekly drops `frequency_days`.
    /// Completion is changed only through `SetChoreCompletionCommand`.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateChoreCommand {
        pub chore_id: String,
        pub title: Option<String>,
        pub description: Option<String>,
        pub xp: Option<u32>,
        pub child_id: Option<String>,
        pub frequency: Option<ChoreFrequency>,
        /// `Some(None)` clears the day count, `None` leaves it alone
        pub frequency_days: Option<Option<u32>>,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteChoreCommand {
        pub chore_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct SetChoreCompletionCommand {
        pub chore_id: String,
        pub completed: bool,
    }

    /// Filters for listing chores; `None` means no filter.
    #[derive(Debug, Clone, Default)]
    pub struct ListChoresQuery {
        pub child_id: Option<String>,
        pub completed: Option<bool>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateChoreResult {
        pub chore: Chore,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateChoreResult {
        pub chore: Chore,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteChoreResult {
        pub chore: Chore,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct ListChoresResult {
        pub chores: Vec<Chore>,
    }

    /// Chore and owning child as they stand after the toggle.
    #[derive(Debug, Clone)]
    pub struct SetChoreCompletionResult {
        pub chore: Chore,
        pub child: Child,
        /// Signed change applied to the child's XP (0 when nothing changed)
        pub xp_delta: i64,
        /// False when the chore was already in the requested state
        pub changed: bool,
    }
}

pub mod reward {
    use shared::{Child, Reward};

    #[derive(Debug, Clone)]
    pub struct CreateRewardCommand {
        pub name: String,
        pub icon: Option<String>,
        pub cost: u32,
    }

    /// Partial update. A blank `icon` clears it. Claim fields cannot be edited.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateRewardCommand {
        pub reward_id: String,
        pub name: Option<String>,
        pub icon: Option<String>,
        pub cost: Option<u32>,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteRewardCommand {
        pub reward_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct ClaimRewardCommand {
        pub reward_id: String,
        pub child_id: String,
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub enum RewardFilter {
        #[default]
        All,
        Available,
        Claimed,
    }

    #[derive(Debug, Clone, Default)]
    pub struct ListRewardsQuery {
        pub status: RewardFilter,
        pub claimed_by: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateRewardResult {
        pub reward: Reward,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateRewardResult {
        pub reward: Reward,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteRewardResult {
        pub reward: Reward,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct ListRewardsResult {
        pub rewards: Vec<Reward>,
    }

    /// Claimed reward and the child after the debit.
    #[derive(Debug, Clone)]
    pub struct ClaimRewardResult {
        pub reward: Reward,
        pub child: Child,
    }
}

pub mod actor {
    use shared::ActiveActor;

    #[derive(Debug, Clone)]
    pub struct SwitchToChildCommand {
        pub child_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct GetActiveActorResult {
        pub active_actor: ActiveActor,
    }

    #[derive(Debug, Clone)]
    pub struct SwitchActorResult {
        pub active_actor: ActiveActor,
    }
}
