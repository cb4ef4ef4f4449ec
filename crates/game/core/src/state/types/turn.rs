use super::EntityId;

/// Scheduler bookkeeping for the ATB timeline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// The entity currently taking its turn. `None` only before the first
    /// scheduling pass or when nobody can act.
    pub active_entity_id: Option<EntityId>,

    /// Number of ATB ticks elapsed since the game started.
    pub clock: u64,

    /// Number of turns granted so far.
    pub turn_count: u32,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
