//! Board fixtures shared by unit tests.

use crate::config::GameConfig;
use crate::engine::turns;
use crate::env::{Blueprint, CatalogOracle, SkillData, SkillEffect, TargetType, TargetZone};
use crate::state::{
    CharacterId, Entity, EntityId, EntityKind, FactionId, GameState, GeneralState, PlayerId,
    PlayerSlot, Position,
};

pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";

pub fn melee_attack() -> SkillData {
    SkillData::new(
        "melee_attack",
        "Melee attack",
        TargetZone::Radius,
        TargetType::Enemy,
        SkillEffect::Damage { base_power: 1 },
    )
    .with_cost(2)
    .with_range(1, 1)
}

pub fn ranged_attack() -> SkillData {
    SkillData::new(
        "ranged_attack",
        "Ranged attack",
        TargetZone::Line,
        TargetType::Enemy,
        SkillEffect::Damage { base_power: 1 },
    )
    .with_cost(2)
    .with_range(2, 5)
}

pub fn mend() -> SkillData {
    SkillData::new(
        "mend",
        "Mend",
        TargetZone::Radius,
        TargetType::Ally,
        SkillEffect::Heal { amount: 3 },
    )
    .with_cost(1)
    .with_range(1, 2)
}

pub fn general_blueprint(initiative: u32) -> Blueprint {
    Blueprint::builder("commander", "test", "Commander")
        .initiative(initiative)
        .hp(10)
        .ap(3)
        .attack(2)
        .defense(1)
        .summon_budget(2)
        .skill(melee_attack())
        .build()
}

pub fn grunt() -> Blueprint {
    Blueprint::builder("grunt", "test", "Grunt")
        .cost(2)
        .initiative(5)
        .hp(6)
        .ap(3)
        .attack(2)
        .defense(1)
        .skill(melee_attack())
        .build()
}

/// Builder for hand-placed boards. Players are always `alice` then `bob`;
/// entities get ids in insertion order.
pub struct TestBoard {
    config: GameConfig,
    seeds: [u64; 2],
    summons: Vec<Blueprint>,
    entities: Vec<(PlayerId, Blueprint, Position, bool)>,
}

impl TestBoard {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            seeds: [0, 0],
            summons: vec![grunt()],
            entities: Vec::new(),
        }
    }

    pub fn map_size(mut self, width: u32, height: u32) -> Self {
        self.config = self.config.with_map_size(width, height);
        self
    }

    pub fn obstacles(mut self, cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        let cells: Vec<Position> = cells.into_iter().map(|(x, y)| Position::new(x, y)).collect();
        self.config = self.config.with_obstacles(cells);
        self
    }

    pub fn summon_range(mut self, range: u32) -> Self {
        self.config = self.config.with_summon_range(range);
        self
    }

    pub fn seeds(mut self, alice: u64, bob: u64) -> Self {
        self.seeds = [alice, bob];
        self
    }

    pub fn general(self, owner: &str, initiative: u32, at: (i32, i32)) -> Self {
        self.general_with(owner, general_blueprint(initiative), at)
    }

    pub fn soldier(self, owner: &str, initiative: u32, at: (i32, i32)) -> Self {
        let mut blueprint = grunt();
        blueprint.initiative = initiative;
        self.soldier_with(owner, blueprint, at)
    }

    pub fn general_with(mut self, owner: &str, blueprint: Blueprint, at: (i32, i32)) -> Self {
        self.entities
            .push((owner.into(), blueprint, Position::new(at.0, at.1), true));
        self
    }

    pub fn soldier_with(mut self, owner: &str, blueprint: Blueprint, at: (i32, i32)) -> Self {
        self.entities
            .push((owner.into(), blueprint, Position::new(at.0, at.1), false));
        self
    }

    /// Places every entity and runs the first scheduling pass.
    pub fn build(self) -> GameState {
        let players = [
            PlayerSlot {
                id: ALICE.into(),
                atb_seed: self.seeds[0],
            },
            PlayerSlot {
                id: BOB.into(),
                atb_seed: self.seeds[1],
            },
        ];
        let mut state = GameState::new(players, self.config);

        for (owner, blueprint, position, is_general) in self.entities {
            let kind = if is_general {
                EntityKind::General(GeneralState::new(
                    blueprint.summon_budget,
                    self.summons.iter().cloned(),
                ))
            } else {
                EntityKind::Soldier
            };
            let id = EntityId(state.next_entity_id);
            state
                .entities
                .push(Entity::new(id, owner, position, blueprint, kind));
            state.next_entity_id += 1;
        }

        let _ = turns::tick_until_active_entity(&mut state);
        state
    }
}

/// Sets an entity's HP to zero without going through an event.
pub fn kill(state: &mut GameState, id: EntityId) {
    if let Some(entity) = state.entities.get_mut(id) {
        entity.hp = 0;
    }
}

/// Hands the turn to `id` with full AP, bypassing the scheduler.
pub fn activate(state: &mut GameState, id: EntityId) {
    if let Some(entity) = state.entities.get_mut(id) {
        entity.ap = entity.max_ap();
    }
    state.turn.active_entity_id = Some(id);
}

pub fn set_ap(state: &mut GameState, id: EntityId, ap: u32) {
    if let Some(entity) = state.entities.get_mut(id) {
        entity.ap = ap;
    }
}

pub fn set_hp(state: &mut GameState, id: EntityId, hp: u32) {
    if let Some(entity) = state.entities.get_mut(id) {
        entity.hp = hp;
    }
}

/// Catalog with one general per faction, both able to summon grunts.
pub struct TestCatalog;

impl CatalogOracle for TestCatalog {
    fn general(&self, id: &CharacterId) -> Option<Blueprint> {
        match id.as_str() {
            "swift" => Some(general_blueprint(7)),
            "steady" => Some(general_blueprint(5)),
            _ => None,
        }
    }

    fn summons(&self, _faction: &FactionId) -> Vec<Blueprint> {
        vec![grunt()]
    }
}
