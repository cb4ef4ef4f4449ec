//! Capability checks that gate every action.
//!
//! Checks are pure functions of [`GameState`]. Each `check_*` returns the
//! reason for a refusal; the matching `can_*` collapses it to a boolean for
//! previews and UI highlighting.

pub mod entity;
pub mod player;
pub mod skill;

pub use entity::{can_cast, can_move_to, check_active, check_cast, check_move, movable_cells};
pub use player::{
    can_act, can_end_turn, can_summon_at, check_summon, check_turn, summonable_cells,
};
pub use skill::{can_target, check_range, check_target, is_in_cast_range, targetable_cells};

use bitflags::bitflags;

use crate::env::TargetType;
use crate::state::{Entity, GameState, Position};

bitflags! {
    /// Classification of a cell as seen from a caster.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        const IN_BOUNDS = 1 << 0;
        const WALKABLE  = 1 << 1;
        /// A living entity stands on the cell.
        const OCCUPIED  = 1 << 2;
        /// The caster itself stands on the cell.
        const CASTER    = 1 << 3;
        /// Another living entity of the caster's owner.
        const ALLY      = 1 << 4;
        const ENEMY     = 1 << 5;
    }
}

impl CellFlags {
    /// Whether a cell with these flags satisfies `target_type`.
    pub fn accepts(self, target_type: TargetType) -> bool {
        match target_type {
            TargetType::SelfTarget => self.contains(Self::CASTER),
            TargetType::Ground => self.contains(Self::WALKABLE),
            TargetType::Ally => self.contains(Self::ALLY),
            TargetType::Enemy => self.contains(Self::ENEMY),
            TargetType::Empty => {
                self.contains(Self::WALKABLE) && !self.contains(Self::OCCUPIED)
            }
        }
    }
}

/// Classifies `position` relative to `caster`.
pub fn classify_cell(state: &GameState, caster: &Entity, position: Position) -> CellFlags {
    let Some(view) = state.cell_view(position) else {
        return CellFlags::empty();
    };

    let mut flags = CellFlags::IN_BOUNDS;
    flags.set(CellFlags::WALKABLE, view.is_walkable());

    if let Some(occupant) = view.occupant.and_then(|id| state.entity(id)) {
        flags |= CellFlags::OCCUPIED;
        if occupant.id == caster.id {
            flags |= CellFlags::CASTER;
        } else if occupant.owner == caster.owner {
            flags |= CellFlags::ALLY;
        } else {
            flags |= CellFlags::ENEMY;
        }
    }

    flags
}
