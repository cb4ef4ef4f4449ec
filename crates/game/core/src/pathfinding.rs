//! Grid pathfinding for movement.
//!
//! Breadth-first search over the 4-neighbour grid. Neighbours are always
//! expanded in [`Position::NEIGHBOR_OFFSETS`] order, so identical boards
//! always yield identical paths.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::state::{EntityId, GameMap, GameState, Position};

/// Search context for one moving entity on the current board.
///
/// Living entities other than the mover block their cells; so do
/// non-walkable terrain and out-of-bounds cells.
pub struct PathFinder<'a> {
    map: &'a GameMap,
    origin: Position,
    blocked: HashSet<Position>,
}

impl<'a> PathFinder<'a> {
    /// Returns `None` when `entity_id` does not exist.
    pub fn new(state: &'a GameState, entity_id: EntityId) -> Option<Self> {
        let origin = state.entity(entity_id)?.position;
        let blocked = state
            .entities()
            .living()
            .filter(|entity| entity.id != entity_id)
            .map(|entity| entity.position)
            .collect();

        Some(Self {
            map: state.map(),
            origin,
            blocked,
        })
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    fn is_passable(&self, position: Position) -> bool {
        self.map.is_walkable(position) && !self.blocked.contains(&position)
    }

    /// Shortest path to `target`, origin excluded and `target` last.
    ///
    /// Empty when the target is the origin itself, is blocked, or cannot be
    /// reached. The path length is the movement cost.
    pub fn find_path(&self, target: Position) -> Vec<Position> {
        if target == self.origin || !self.is_passable(target) {
            return Vec::new();
        }

        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut frontier = VecDeque::from([self.origin]);

        while let Some(current) = frontier.pop_front() {
            for next in current.neighbors() {
                if next == self.origin || came_from.contains_key(&next) || !self.is_passable(next)
                {
                    continue;
                }
                came_from.insert(next, current);
                if next == target {
                    return reconstruct_path(&came_from, self.origin, target);
                }
                frontier.push_back(next);
            }
        }

        Vec::new()
    }

    /// Every cell reachable within `max_steps`, with its distance, in
    /// breadth-first order. The origin is not included.
    pub fn reachable_cells(&self, max_steps: u32) -> Vec<(Position, u32)> {
        let mut distances: HashMap<Position, u32> = HashMap::from([(self.origin, 0)]);
        let mut frontier = VecDeque::from([self.origin]);
        let mut reached = Vec::new();

        while let Some(current) = frontier.pop_front() {
            let distance = distances[&current];
            if distance == max_steps {
                continue;
            }
            for next in current.neighbors() {
                if distances.contains_key(&next) || !self.is_passable(next) {
                    continue;
                }
                distances.insert(next, distance + 1);
                reached.push((next, distance + 1));
                frontier.push_back(next);
            }
        }

        reached
    }
}

fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    origin: Position,
    target: Position,
) -> Vec<Position> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(&previous) = came_from.get(&current) {
        if previous == origin {
            break;
        }
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
