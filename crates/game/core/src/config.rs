use crate::state::Position;

/// Game configuration constants and tunable parameters.
///
/// A copy is captured into every [`GameState`](crate::GameState) at creation,
/// so replays never depend on ambient configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub map_width: u32,
    pub map_height: u32,
    /// Impassable cells stamped onto the map at creation.
    pub obstacles: Vec<Position>,
    /// Chebyshev distance around a general in which it may summon.
    pub summon_range: u32,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Gauge value at which an entity becomes ready to act.
    pub const ATB_THRESHOLD: u32 = 100;
    /// Number of upcoming turns shown by the timeline preview.
    pub const TIMELINE_PREVIEW_TURNS: usize = 10;
    /// Distance between a general's starting column and its map edge.
    pub const GENERAL_EDGE_OFFSET: i32 = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAP_SIZE: u32 = 11;
    pub const DEFAULT_SUMMON_RANGE: u32 = 1;

    pub fn new() -> Self {
        Self {
            map_width: Self::DEFAULT_MAP_SIZE,
            map_height: Self::DEFAULT_MAP_SIZE,
            obstacles: Vec::new(),
            summon_range: Self::DEFAULT_SUMMON_RANGE,
        }
    }

    pub fn with_map_size(mut self, width: u32, height: u32) -> Self {
        self.map_width = width;
        self.map_height = height;
        self
    }

    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Position>) -> Self {
        self.obstacles = obstacles.into_iter().collect();
        self
    }

    pub fn with_summon_range(mut self, summon_range: u32) -> Self {
        self.summon_range = summon_range;
        self
    }

    /// Starting cells of both generals: mirrored along the middle row.
    pub fn general_positions(&self) -> [Position; 2] {
        let y = (self.map_height / 2) as i32;
        let right = self.map_width as i32 - 1 - Self::GENERAL_EDGE_OFFSET;
        [
            Position::new(Self::GENERAL_EDGE_OFFSET, y),
            Position::new(right, y),
        ]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
