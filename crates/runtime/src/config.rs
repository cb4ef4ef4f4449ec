use std::time::Duration;

use skirmish_core::GameConfig;

/// Runtime tunables. Only `game_config` reaches the rules; the rest drive
/// lobby timers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Board used for every game started by this runtime.
    pub game_config: GameConfig,
    /// How long a creator has to confirm a joined opponent before the join
    /// is declined automatically.
    pub join_confirmation_timeout: Duration,
    /// Delay between a decline and the removal of the game rows.
    pub removal_delay: Duration,
}

impl RuntimeConfig {
    pub const DEFAULT_JOIN_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_REMOVAL_DELAY: Duration = Duration::from_secs(5);

    pub fn with_game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            join_confirmation_timeout: Self::DEFAULT_JOIN_CONFIRMATION_TIMEOUT,
            removal_delay: Self::DEFAULT_REMOVAL_DELAY,
        }
    }
}
