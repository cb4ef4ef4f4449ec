use super::{EntityId, Position};
use crate::config::GameConfig;

/// Canonical terrain classes for static map cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Floor,
    Wall,
    Water,
}

impl TerrainKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

/// Fixed-size grid of static terrain. Dimensions never change after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameMap {
    width: u32,
    height: u32,
    /// Row-major terrain, `width * height` entries.
    terrain: Vec<TerrainKind>,
}

impl GameMap {
    /// Creates an all-floor grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            terrain: vec![TerrainKind::Floor; (width as usize) * (height as usize)],
        }
    }

    /// Creates the grid described by the configuration, obstacles included.
    pub fn from_config(config: &GameConfig) -> Self {
        config
            .obstacles
            .iter()
            .fold(Self::new(config.map_width, config.map_height), |map, &cell| {
                map.with_terrain(cell, TerrainKind::Wall)
            })
    }

    /// Stamps terrain on a cell; out-of-bounds cells are ignored.
    pub fn with_terrain(mut self, position: Position, terrain: TerrainKind) -> Self {
        if let Some(index) = self.index_of(position) {
            self.terrain[index] = terrain;
        }
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.index_of(position).map(|index| self.terrain[index])
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.terrain(position)
            .map(TerrainKind::is_walkable)
            .unwrap_or(false)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, TerrainKind)> + '_ {
        self.terrain.iter().enumerate().map(|(index, &terrain)| {
            let x = (index % self.width as usize) as i32;
            let y = (index / self.width as usize) as i32;
            (Position::new(x, y), terrain)
        })
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }
}

/// Cell information merged from static terrain and living occupants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellView {
    pub position: Position,
    pub terrain: TerrainKind,
    pub occupant: Option<EntityId>,
}

impl CellView {
    pub fn is_walkable(&self) -> bool {
        self.terrain.is_walkable()
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Walkable and free of living entities.
    pub fn is_empty(&self) -> bool {
        self.is_walkable() && !self.is_occupied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_obstacles_become_walls() {
        let config = GameConfig::new()
            .with_map_size(5, 4)
            .with_obstacles([Position::new(1, 1), Position::new(9, 9)]);
        let map = GameMap::from_config(&config);

        assert_eq!(map.terrain(Position::new(1, 1)), Some(TerrainKind::Wall));
        assert!(!map.is_walkable(Position::new(1, 1)));
        assert!(map.is_walkable(Position::new(4, 3)));
        assert_eq!(map.cells().count(), 20);
    }

    #[test]
    fn out_of_bounds_cells_are_not_walkable() {
        let map = GameMap::new(3, 3);
        assert!(!map.contains(Position::new(-1, 0)));
        assert!(!map.contains(Position::new(3, 0)));
        assert_eq!(map.terrain(Position::new(0, 3)), None);
        assert!(!map.is_walkable(Position::new(0, 3)));
    }

    #[test]
    fn cells_are_row_major() {
        let map = GameMap::new(2, 2);
        let cells: Vec<Position> = map.cells().map(|(position, _)| position).collect();
        assert_eq!(
            cells,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }
}
